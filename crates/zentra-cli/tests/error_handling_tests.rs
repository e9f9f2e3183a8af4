//! Exit codes and error panels for failed runs.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zentra(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("zentra").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

/// A project with `zentra/models` and, if given, a models file.
fn project(manifest: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    let models = temp.path().join("zentra/models");
    fs::create_dir_all(&models).unwrap();
    if let Some(content) = manifest {
        fs::write(models.join("zentra.toml"), content).unwrap();
    }
    temp
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let temp = TempDir::new().unwrap();
    zentra(temp.path())
        .args(["generate", "--bogus"])
        .assert()
        .code(64);
}

#[test]
fn test_generate_without_models_folder() {
    let temp = TempDir::new().unwrap();
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Models folder is missing!"))
        .stderr(predicate::str::contains("Error code: 5"))
        .stderr(predicate::str::contains("zentra init"));
}

#[test]
fn test_generate_without_models_file() {
    let temp = project(None);
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Models file missing!"));
}

#[test]
fn test_generate_with_blank_models_file() {
    let temp = project(Some("  \n\n"));
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Models file is empty!"));
}

#[test]
fn test_generate_with_invalid_toml() {
    let temp = project(Some("[app\nregister = "));
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid models file detected!"));
}

#[test]
fn test_generate_with_unknown_registered_page() {
    let temp = project(Some("[app]\nregister = [\"Landing\"]\n"));
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Landing"));
}

#[test]
fn test_generate_with_repeated_model_name() {
    let temp = project(Some(
        r#"[app]
register = ["Trips"]

[[pages]]
name = "Trips"

[[pages.blocks]]
name = "Dates"

[[pages.blocks.components]]
type = "Calendar"
name = "trip"

[[pages.blocks.components]]
type = "Calendar"
name = "trip"
"#,
    ));
    zentra(temp.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("'trip' is used more than once"));
}

#[test]
fn test_generate_with_nothing_registered() {
    let temp = project(Some("[app]\nregister = []\n"));
    zentra(temp.path())
        .args(["g"])
        .assert()
        .code(22)
        .stderr(predicate::str::contains("No components found"))
        .stderr(predicate::str::contains("Error code: 22"));
}

#[test]
fn test_init_with_nothing_registered() {
    let temp = project(Some("[app]\nregister = []\n"));
    zentra(temp.path())
        .args(["init", "--yes"])
        .assert()
        .code(12)
        .stderr(predicate::str::contains("Error code: 12"));
}

#[test]
fn test_init_with_invalid_models_file() {
    let temp = project(Some("not toml at all ="));
    zentra(temp.path())
        .args(["init", "--yes"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_config_key() {
    let temp = TempDir::new().unwrap();
    zentra(temp.path())
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(70)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_panel_links_to_help() {
    let temp = TempDir::new().unwrap();
    zentra(temp.path())
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("https://zentra.achronus.dev/help/errors/"))
        .stderr(predicate::str::contains("https://github.com/Achronus/zentra/issues"));
}
