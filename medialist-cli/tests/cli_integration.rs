use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn medialist_cmd() -> Command {
    let mut cmd = Command::cargo_bin("medialist").expect("Failed to find medialist binary");
    // Keep the developer's own library out of the tests
    cmd.env_remove("MEDIALIST_MOVIE_FOLDERS")
        .env_remove("MEDIALIST_TV_FOLDERS")
        .env_remove("MEDIALIST_PARSE_POLICY");
    cmd
}

fn touch(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)?;
    Ok(())
}

#[test]
fn test_show_command_report() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let show = dir.path().join("Firefly");
    touch(&show.join("Season 1").join("Firefly - S01E01 - Serenity.mkv"))?;
    touch(&show.join("Season 1").join("Firefly - S01E03 - Bushwhacked.MKV"))?;
    touch(&show.join("Season 2").join("Firefly - S02E01 - Pretend.avi"))?;

    medialist_cmd()
        .arg("show")
        .arg(&show)
        .assert()
        .success()
        .stdout(contains("S02E01"))
        .stdout(contains("S01E02"))
        .stdout(contains(".avi, .mkv"));

    Ok(())
}

#[test]
fn test_show_command_json() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let show = dir.path().join("Empty Show");
    fs::create_dir_all(&show)?;

    medialist_cmd()
        .args(["show", "--json"])
        .arg(&show)
        .assert()
        .success()
        .stdout(contains("\"newest_episode\": \"Not available.\""))
        .stdout(contains("\"missing_episodes\": \"None\""));

    Ok(())
}

#[test]
fn test_show_command_bad_episode_name() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let show = dir.path().join("Broken");
    touch(&show.join("Season 1").join("Broken - SxxE01 - Oops.mkv"))?;

    // Reports that parse names fail; the extension report still prints
    medialist_cmd()
        .arg("show")
        .arg(&show)
        .assert()
        .failure()
        .stdout(contains(".mkv"))
        .stderr(contains("Invalid episode filename"));

    // The same show is fine when bad names are skipped
    medialist_cmd()
        .args(["show", "--skip-bad-names"])
        .arg(&show)
        .assert()
        .success()
        .stdout(contains("Not available."));

    Ok(())
}

#[test]
fn test_show_command_non_existent_input() {
    let non_existent = PathBuf::from("surely/this/does/not/exist/show");

    medialist_cmd()
        .arg("show")
        .arg(&non_existent)
        .assert()
        .failure()
        .stderr(contains("Path not found"));
}

#[test]
fn test_shows_command_search_and_details() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    touch(&dir.path().join("The Wire").join("Season 1").join("The Wire - S01E02 - x.mkv"))?;
    fs::create_dir_all(dir.path().join("Firefly"))?;

    medialist_cmd()
        .arg("shows")
        .arg("--tv-folder")
        .arg(dir.path())
        .args(["--search", "wire", "--details"])
        .assert()
        .success()
        .stdout(contains("The Wire"))
        .stdout(contains("S01E02"))
        .stdout(contains("Firefly").not())
        .stdout(contains("Number of TV Shows"));

    Ok(())
}

#[test]
fn test_shows_command_missing_folder_warns() -> Result<(), Box<dyn Error>> {
    medialist_cmd()
        .args(["shows", "--tv-folder", "surely/this/does/not/exist/tv"])
        .assert()
        .success()
        .stderr(contains("Folder not found"));
    Ok(())
}

#[test]
fn test_movies_command_exclusions() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    touch(&dir.path().join("Heat (1995).mkv"))?;
    touch(&dir.path().join("desktop.ini"))?;

    medialist_cmd()
        .arg("movies")
        .arg("--movie-folder")
        .arg(dir.path())
        .args(["--exclude", "desktop.ini", "--json"])
        .assert()
        .success()
        .stdout(contains("Heat (1995).mkv"))
        .stdout(contains("desktop.ini").not());

    Ok(())
}

#[test]
fn test_movies_command_without_folders_warns() {
    medialist_cmd()
        .arg("movies")
        .assert()
        .success()
        .stderr(contains("No movie folders are selected"));
}

#[test]
fn test_invalid_subcommand() {
    medialist_cmd().arg("encode").assert().failure();
}
