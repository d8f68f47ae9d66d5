use medialist_core::config::{
    ENV_MOVIE_FOLDERS, ENV_PARSE_POLICY, ENV_TV_FOLDERS, LibraryConfig, ParseFailurePolicy,
};
use std::env;
use std::path::PathBuf;

// Everything touching the process environment lives in this one test so that
// parallel test threads never see half-applied variables.
#[test]
fn test_env_var_overrides() {
    let movies = env::join_paths(["/media/movies", "/media/more"]).unwrap();

    // SAFETY: no other test in this binary reads or writes the environment.
    unsafe {
        env::set_var(ENV_MOVIE_FOLDERS, &movies);
        env::set_var(ENV_TV_FOLDERS, "/media/tv");
        env::set_var(ENV_PARSE_POLICY, "skip");
    }

    let config = LibraryConfig::from_env().unwrap();
    assert_eq!(
        config.movie_folders,
        vec![PathBuf::from("/media/movies"), PathBuf::from("/media/more")]
    );
    assert_eq!(config.tv_folders, vec![PathBuf::from("/media/tv")]);
    assert_eq!(config.parse_failure_policy, ParseFailurePolicy::Skip);

    unsafe {
        env::set_var(ENV_PARSE_POLICY, "sometimes");
    }
    assert!(LibraryConfig::from_env().is_err());

    // Clean up
    unsafe {
        env::remove_var(ENV_MOVIE_FOLDERS);
        env::remove_var(ENV_TV_FOLDERS);
        env::remove_var(ENV_PARSE_POLICY);
    }
    assert_eq!(LibraryConfig::from_env().unwrap(), LibraryConfig::default());
}
