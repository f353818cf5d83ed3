//! Runs `GhqSource` against a fake `ghq` shell script.
//!
//! All scenarios live in one test so no other test thread forks while a
//! freshly written script is still open for writing (ETXTBSY).

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use picker_source::{GhqSource, RepositorySource, SourceError};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Write an executable shell script named `name` into `dir`.
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

fn source_for(path: &Path) -> GhqSource {
    GhqSource::new(path.to_string_lossy().into_owned())
}

#[test]
fn test_ghq_source_against_fake_tool() {
    let temp = TempDir::new().unwrap();

    // Well-behaved tool
    let ok = write_script(
        temp.path(),
        "ghq-ok",
        r#"case "$1" in
  root) echo "  /home/me/ghq  " ;;
  list) printf 'github.com/a/b\n\n  github.com/c/d  \ngithub.com/e/f\n' ;;
  *) echo "unknown command $1" >&2; exit 2 ;;
esac"#,
    );
    let source = source_for(&ok);
    assert_eq!(source.root().unwrap(), PathBuf::from("/home/me/ghq"));
    assert_eq!(
        source.list().unwrap(),
        vec!["github.com/a/b", "github.com/c/d", "github.com/e/f"]
    );

    // Tool with nothing cloned
    let empty = write_script(temp.path(), "ghq-empty", "exit 0");
    assert!(source_for(&empty).list().unwrap().is_empty());

    // Tool failing with a diagnostic on stderr
    let failing = write_script(
        temp.path(),
        "ghq-fail",
        "echo 'fatal: config broken' >&2\nexit 1",
    );
    match source_for(&failing).list().unwrap_err() {
        SourceError::ToolFailed { message, .. } => assert_eq!(message, "fatal: config broken"),
        other => panic!("expected ToolFailed, got {other:?}"),
    }

    // Tool failing silently still produces a message
    let silent = write_script(temp.path(), "ghq-silent", "exit 3");
    let err = source_for(&silent).root().unwrap_err();
    assert!(!err.is_not_found());
    assert!(err.to_string().contains("exited with"), "got: {err}");

    // Missing executable is reported distinctly
    let missing = temp.path().join("no-such-ghq");
    let err = source_for(&missing).root().unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got {err:?}");
}
