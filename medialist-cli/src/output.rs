use owo_colors::OwoColorize;
use std::fmt::Display;
use unicode_width::UnicodeWidthStr;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let heading = format!(" {} ", text);
    let line = "=".repeat(50);

    println!("\n{}", line.bright_blue());
    println!("{}", heading.bold());
    println!("{}\n", line.bright_blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}

/// Print an error to stderr
pub fn print_error(message: &str) {
    eprintln!("{} {}", "error:".bright_red().bold(), message);
}

/// Print the item count line under a listing
pub fn print_count(label: &str, count: usize) {
    println!("\n{}: {}", label.bright_cyan(), count);
}

/// Pads `text` with spaces to `width` terminal columns.
pub fn pad_to_width(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut padded = String::with_capacity(text.len() + width.saturating_sub(used));
    padded.push_str(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(used)));
    padded
}

/// Print two-column rows with the first column aligned to its widest cell
pub fn print_rows(rows: &[(String, String)]) {
    let width = rows
        .iter()
        .map(|(left, _)| UnicodeWidthStr::width(left.as_str()))
        .max()
        .unwrap_or(0);
    for (left, right) in rows {
        if right.is_empty() {
            println!("{}", left);
        } else {
            println!("{}  {}", pad_to_width(left, width), right.dimmed());
        }
    }
}
