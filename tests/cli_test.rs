//! Integration tests for the conformity binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn conforming_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "src/main.rs", "fn main() { gettext(\"Hello\"); }");
    write(root, "src/util.rs", "pub fn helper() {}");
    write(
        root,
        "data/resources/ui/window.ui",
        r#"<property name="title" translatable="yes">Notes</property>"#,
    );
    write(root, "po/POTFILES.in", "data/resources/ui/window.ui\nsrc/main.rs\n");
    write(
        root,
        "data/resources/resources.gresource.xml",
        "<?xml version=\"1.0\"?>\n<gresources>\n  <gresource prefix=\"/app\">\n    \
         <file>style.css</file>\n    <file>ui/window.ui</file>\n  </gresource>\n</gresources>\n",
    );
    temp
}

fn conformity(project: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("conformity"));
    cmd.args(["--skip-rustfmt", "--skip-typos", "--no-color", "-p"]);
    cmd.arg(project);
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("conformity"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--skip-rustfmt"))
        .stdout(predicate::str::contains("--skip-typos"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("conformity"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn conforming_project_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();
    let assert = conformity(temp.path()).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        format!("running 6 checks in {}", temp.path().display())
    );
    assert_eq!(
        &lines[1..7],
        &[
            "check code style ... SKIPPED (via command flag)",
            "check spelling mistakes ... SKIPPED (via command flag)",
            "check po/POTFILES.in existence ... ok",
            "check po/POTFILES.in sanity ... ok",
            "check po/POTFILES.in order ... ok",
            "check data/resources/resources.gresource.xml order ... ok",
        ]
    );
    assert!(!stdout.contains("failures:"));
    assert!(stdout.contains("test result: ok. 4 passed; 0 failed; 2 skipped; finished in "));
    Ok(())
}

#[test]
fn missing_manifest_fails_and_skips_dependents() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();
    fs::remove_file(temp.path().join("po/POTFILES.in"))?;

    conformity(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "check po/POTFILES.in existence ... FAILED",
        ))
        .stdout(predicate::str::contains(
            "check po/POTFILES.in sanity ... SKIPPED (requires: po/POTFILES.in existence)",
        ))
        .stdout(predicate::str::contains(
            "check po/POTFILES.in order ... SKIPPED (requires: po/POTFILES.in existence)",
        ))
        .stdout(predicate::str::contains(
            "---- po/POTFILES.in existence ----\n\
             error: File `po/POTFILES.in` does not exist\n\
             \n\
             Please fix the above issues\n",
        ))
        .stdout(predicate::str::contains(
            "failures:\n    po/POTFILES.in existence\n",
        ))
        .stdout(predicate::str::contains(
            "test result: FAILED. 1 passed; 1 failed; 4 skipped;",
        ));
    Ok(())
}

#[test]
fn every_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();
    let root = temp.path();
    write(root, "src/extra.rs", "ngettext(\"a\", \"b\", n);");
    write(
        root,
        "data/resources/resources.gresource.xml",
        "<gresources><gresource prefix=\"/app\">\
         <file>ui/window.ui</file><file>style.css</file>\
         </gresource></gresources>",
    );

    conformity(root)
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "error: Found 1 file with translatable strings not present in POTFILES.in:\nsrc/extra.rs\n",
        ))
        .stdout(predicate::str::contains(
            "error: Found file `ui/window.ui` before `style.css` in resources.gresource.xml",
        ))
        .stdout(predicate::str::contains(
            "failures:\n    po/POTFILES.in sanity\n    data/resources/resources.gresource.xml order\n",
        ))
        .stdout(predicate::str::contains(
            "test result: FAILED. 2 passed; 2 failed; 2 skipped;",
        ));
    Ok(())
}

#[test]
fn unsorted_manifest_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();
    write(
        temp.path(),
        "po/POTFILES.in",
        "src/main.rs\ndata/resources/ui/window.ui\n",
    );

    conformity(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Found file `src/main.rs` before `data/resources/ui/window.ui` in POTFILES.in",
        ));
    Ok(())
}

#[test]
fn config_file_overrides_paths() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();
    let root = temp.path();
    fs::rename(root.join("po"), root.join("i18n"))?;
    write(root, "conformity.yml", "potfiles: i18n/POTFILES.in\n");

    conformity(root)
        .arg("--config")
        .arg(root.join("conformity.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "check i18n/POTFILES.in existence ... ok",
        ));
    Ok(())
}

#[test]
fn missing_explicit_config_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();

    conformity(temp.path())
        .args(["--config", "does-not-exist.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn debug_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = conforming_project();

    conformity(temp.path())
        .arg("--debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping 'code style'"))
        .stdout(predicate::str::contains("Skipping").not());
    Ok(())
}
