//! Environment-variable layer of Settings loading.
//!
//! Kept as a single test in its own binary: environment variables are
//! process-wide and would race with parallel tests.

use std::env;
use std::fs;

use tempfile::TempDir;

use aardvark::config::Settings;

const VARS: [&str; 4] = [
    "AARDVARK_SEED__QUESTION",
    "AARDVARK_MAX_LABEL_CHARS",
    "AARDVARK_SHOW_TREE",
    "XDG_CONFIG_HOME",
];

#[test]
fn given_env_vars_and_config_file_when_load_then_env_wins() {
    // Arrange
    let xdg = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("aardvark.toml");
    fs::write(
        &path,
        r#"
max_label_chars = 40

[seed]
question = "vive na agua"
yes_animal = "peixe"
"#,
    )
    .unwrap();

    env::set_var("XDG_CONFIG_HOME", xdg.path());
    env::set_var("AARDVARK_SEED__QUESTION", "voa");
    env::set_var("AARDVARK_MAX_LABEL_CHARS", "12");
    env::set_var("AARDVARK_SHOW_TREE", "true");

    // Act
    let result = Settings::load(Some(path.as_path()));
    for var in VARS {
        env::remove_var(var);
    }
    let settings = result.expect("load settings");

    // Assert
    assert_eq!(settings.seed.question, "voa", "env beats the config file");
    assert_eq!(settings.max_label_chars, 12, "env beats the config file");
    assert!(settings.show_tree);
    assert_eq!(settings.seed.yes_animal, "peixe", "file beats defaults");
    assert_eq!(settings.seed.no_animal, "cachorro");
}
