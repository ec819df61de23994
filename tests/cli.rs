use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fontgallery(vault: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fontgallery").unwrap();
    cmd.arg("--vault").arg(vault.path());
    cmd
}

#[test]
fn test_config_shows_defaults() {
    let vault = TempDir::new().unwrap();
    fontgallery(&vault)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("template-style   = modern"))
        .stdout(predicate::str::contains("metadata         = properties"))
        .stdout(predicate::str::contains("toc-font-size    = 1.5"));
}

#[test]
fn test_config_set_and_read_back() {
    let vault = TempDir::new().unwrap();
    fontgallery(&vault)
        .args(["config", "output-folder", "Fonts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output-folder updated"));

    assert!(vault.path().join(".fontgallery/settings.json").is_file());

    fontgallery(&vault)
        .args(["config", "output-folder"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output-folder = Fonts"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let vault = TempDir::new().unwrap();
    fontgallery(&vault)
        .args(["config", "bogus", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_template_select_persists() {
    let vault = TempDir::new().unwrap();
    fontgallery(&vault)
        .args(["template", "select", "classic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Template style updated to classic"));

    fontgallery(&vault)
        .args(["template", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Classic Layout"))
        .stdout(predicate::str::contains("{fontName}"));
}

#[test]
fn test_missing_vault_directory_fails() {
    let mut cmd = Command::cargo_bin("fontgallery").unwrap();
    cmd.args(["--vault", "/nonexistent/vault/path", "config"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vault directory does not exist"));
}
