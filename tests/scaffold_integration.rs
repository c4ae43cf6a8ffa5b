use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn mint_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mint").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn read_manifest(dir: &Path) -> serde_json::Value {
    let content = fs::read_to_string(dir.join("Project.mint.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn test_init_javascript_yes_writes_required_artifacts() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .args(["init", "javascript", "--yes"])
        .assert()
        .success();

    let manifest = read_manifest(temp.path());
    assert_eq!(manifest["name"], "mint-app");
    assert_eq!(manifest["author"], "Mint");
    assert_eq!(manifest["version"], "0.0.1");
    assert_eq!(manifest["assets"], "assets");
    assert_eq!(manifest["type"], 1);

    let assets = temp.path().join("assets");
    assert!(assets.is_dir());
    assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);

    let icon = fs::read(temp.path().join("icon.png")).unwrap();
    assert_eq!(&icon[..4], &[0x89, b'P', b'N', b'G']);

    assert!(!temp.path().join("Makefile").exists());
    assert!(!temp.path().join("mint-app").exists());
}

#[test]
fn test_init_flags_request_optional_artifacts() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .args(["init", "typescript", "--yes", "--makefile", "--base"])
        .assert()
        .success();

    assert_eq!(read_manifest(temp.path())["type"], 3);

    let makefile = fs::read_to_string(temp.path().join("Makefile")).unwrap();
    assert!(makefile.contains("build:"));

    let stub = fs::read_to_string(temp.path().join("mint-app/index.ts")).unwrap();
    assert!(stub.contains("function main()"));
    assert!(!temp.path().join("mint-app/index.js").exists());
}

#[test]
fn test_init_flags_are_case_insensitive() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .args(["init", "JAVASCRIPT", "--YES", "-M", "-B"])
        .assert()
        .success();

    assert_eq!(read_manifest(temp.path())["type"], 1);
    assert!(temp.path().join("Makefile").is_file());
    assert!(temp.path().join("mint-app/index.js").is_file());
}

#[test]
fn test_init_ignores_unknown_flags() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .args(["init", "javascript", "--yes", "--frobnicate"])
        .assert()
        .success();

    assert!(temp.path().join("Project.mint.json").is_file());
}

#[test]
fn test_init_invalid_template_reports_but_still_scaffolds() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .args(["init", "bogus-template", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("bogus-template"));

    // No rollback: the scaffold is written with the default template.
    assert_eq!(read_manifest(temp.path())["type"], 1);
    assert!(temp.path().join("icon.png").is_file());
}

#[test]
fn test_unknown_command_writes_nothing() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_init_empties_a_dirty_assets_dir_on_every_run() {
    let temp = tempfile::tempdir().unwrap();
    let assets = temp.path().join("assets");

    fs::create_dir_all(&assets).unwrap();
    fs::write(assets.join("leftover.png"), "stale").unwrap();

    mint_in(temp.path())
        .args(["init", "javascript", "--yes"])
        .assert()
        .success();
    assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);

    fs::write(assets.join("leftover.png"), "stale again").unwrap();

    mint_in(temp.path())
        .args(["init", "javascript", "--yes"])
        .assert()
        .success();
    assert_eq!(fs::read_dir(&assets).unwrap().count(), 0);
}

#[test]
fn test_templates_lists_supported_names() {
    let temp = tempfile::tempdir().unwrap();

    mint_in(temp.path())
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("javascript"))
        .stdout(predicate::str::contains("typescript"));
}
