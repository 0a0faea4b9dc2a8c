use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

const LOG: &str = "undo_rename_log.txt";

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("jellyfin-renamer").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), "").unwrap();
}

fn names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extend-episodes"))
        .stdout(predicate::str::contains("parts"))
        .stdout(predicate::str::contains("undo"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_subcommand() {
    cmd().assert().failure().code(2);
}

#[test]
fn test_missing_directory_argument() {
    cmd()
        .args(["undo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_extend_episodes_scenario() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Show.S01.mkv");

    cmd()
        .args(["extend-episodes", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+)()(\.mkv)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully renamed 1 files"));

    assert!(dir.path().join("Show.S01E01.mkv").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join(LOG)).unwrap(),
        "Show.S01E01.mkv=Show.S01.mkv\n"
    );
}

#[test]
fn test_extend_episodes_start_count() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "a.S03.mkv");
    touch(dir.path(), "b.S03.mkv");

    cmd()
        .args(["extend-episodes", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+)()(\.mkv)", "-e", "12"])
        .assert()
        .success();

    assert_eq!(
        names(dir.path()),
        vec!["a.S03E12.mkv", "b.S03E13.mkv", LOG]
    );
}

#[test]
fn test_extend_episodes_dry_run() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Show.S01.mkv");

    cmd()
        .args(["extend-episodes", "--dry-run", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+)()(\.mkv)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DRY RUN"))
        .stdout(predicate::str::contains("Show.S01E01.mkv"))
        .stderr(predicate::str::contains("Dry-Run rename"));

    assert_eq!(names(dir.path()), vec!["Show.S01.mkv"]);
}

#[test]
fn test_extend_episodes_too_few_groups() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Show.S01.mkv");

    cmd()
        .args(["extend-episodes", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+)(\.mkv)"])
        .assert()
        .code(4) // ExitCode::InvalidPattern
        .stderr(predicate::str::contains("at least 3"));

    assert_eq!(names(dir.path()), vec!["Show.S01.mkv"]);
}

#[test]
fn test_invalid_regex() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["extend-episodes", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("could not be compiled"));
}

#[test]
fn test_parts_scenario_and_undo_round_trip() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Ep-A.mp4");
    touch(dir.path(), "Ep-B.mp4");
    touch(dir.path(), "Notes.txt");
    let before = names(dir.path());

    cmd()
        .args(["parts", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"^(Ep-)([A-Z])()(\.mp4)$"])
        .args(["-m", r#"{"A": "pt1", "B": "pt2"}"#])
        .assert()
        .success()
        .stderr(predicate::str::contains("Undo log written to"));

    assert_eq!(
        names(dir.path()),
        vec!["Ep-pt1.mp4", "Ep-pt2.mp4", "Notes.txt", LOG]
    );

    cmd()
        .args(["undo", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 2 files"));

    let mut after = names(dir.path());
    after.retain(|n| n != LOG);
    assert_eq!(after, before);
}

#[test]
fn test_parts_dry_run() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Ep-A.mp4");

    cmd()
        .args(["parts", "--dry-run", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"^(Ep-)([A-Z])()(\.mp4)$"])
        .args(["-m", r#"{"A": "pt1"}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 files would be renamed"));

    assert_eq!(names(dir.path()), vec!["Ep-A.mp4"]);
}

#[test]
fn test_parts_no_changes_keeps_old_log() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Ep-C.mp4");
    std::fs::write(dir.path().join(LOG), "x=y\n").unwrap();

    cmd()
        .args(["parts", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"^(Ep-)([A-Z])()(\.mp4)$"])
        .args(["-m", r#"{"A": "pt1"}"#])
        .assert()
        .success()
        .stderr(predicate::str::contains("No changes detected"));

    assert_eq!(
        std::fs::read_to_string(dir.path().join(LOG)).unwrap(),
        "x=y\n"
    );
}

#[test]
fn test_parts_invalid_mapping() {
    let dir = tempdir().unwrap();

    cmd()
        .args(["parts", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(.*)([AB])()(\.mp4)"])
        .args(["-m", "A=pt1"])
        .assert()
        .code(5) // ExitCode::InvalidMapping
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn test_undo_without_log() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Ep-pt1.mp4");

    cmd()
        .args(["undo", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No undo log found"));

    assert_eq!(names(dir.path()), vec!["Ep-pt1.mp4"]);
}

#[test]
fn test_undo_skips_missing_file() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(LOG), "Ep-pt1.mp4=Ep-A.mp4\n").unwrap();

    cmd()
        .args(["undo", "-d", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 0 files"));

    assert!(!dir.path().join("Ep-A.mp4").exists());
}

#[test]
fn test_verbose_flag() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Show.S01.mkv");

    cmd()
        .args(["-v", "extend-episodes", "--dry-run", "-d", dir.path().to_str().unwrap()])
        .args(["-r", r"(S\d+)()(\.mkv)"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Extending episode numbers"));
}

#[test]
fn test_nonexistent_directory() {
    cmd()
        .args(["parts", "-d", "/nonexistent/path"])
        .args(["-r", r"(.*)([AB])()(\.mp4)", "-m", "{}"])
        .assert()
        .code(3) // ExitCode::DirectoryNotFound
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_file_instead_of_directory() {
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("file.txt");
    std::fs::write(&file_path, "content").unwrap();

    cmd()
        .args(["undo", "-d", file_path.to_str().unwrap()])
        .assert()
        .code(3) // ExitCode::DirectoryNotFound (NotADirectory maps to same code)
        .stderr(predicate::str::contains("not a directory"));
}
