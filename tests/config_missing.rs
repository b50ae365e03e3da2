//! First resolution without the required variable.

use denops_test::config::{ENV_DENOPS_PATH, get_config};
use denops_test::error::DenopsTestError;
use denops_test::runner::{RunMode, RunOptions, run};
use tempfile::TempDir;

#[test]
fn missing_denops_path_fails_until_set() {
    // SAFETY: this file holds a single test, so nothing else reads the environment.
    unsafe {
        std::env::remove_var(ENV_DENOPS_PATH);
    }

    let err = get_config().unwrap_err();
    assert!(matches!(
        err,
        DenopsTestError::MissingRequiredConfig {
            var: "DENOPS_TEST_DENOPS_PATH"
        }
    ));

    let err = run(RunMode::Vim, ["qall!"], &RunOptions::new()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Environment variable 'DENOPS_TEST_DENOPS_PATH' is required"
    );

    // SAFETY: as above.
    unsafe {
        std::env::set_var(ENV_DENOPS_PATH, "");
    }
    assert!(get_config().is_err());

    let repo = TempDir::new().unwrap();
    // SAFETY: as above.
    unsafe {
        std::env::set_var(ENV_DENOPS_PATH, repo.path());
    }
    let config = get_config().unwrap();
    assert_eq!(config.denops_path, dunce::canonicalize(repo.path()).unwrap());
}
