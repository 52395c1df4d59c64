//! Integration tests for savegame resolution.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, UNIX_EPOCH};

use doomdeck::launch::last_save_game;
use tempfile::TempDir;

fn touch(dir: &Path, name: &str, secs: u64) -> PathBuf {
    let path = dir.join(name);
    let file = fs::File::create(&path).expect("create save file");
    file.set_modified(UNIX_EPOCH + Duration::from_secs(secs))
        .expect("set mtime");
    path
}

#[test]
fn missing_directory_resolves_to_no_save() {
    assert_eq!(last_save_game(Path::new("/nonexistent/saves")), None);
}

#[test]
fn empty_directory_resolves_to_no_save() {
    let dir = TempDir::new().unwrap();
    assert_eq!(last_save_game(dir.path()), None);
}

#[test]
fn newest_file_wins() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "save1.zds", 1_000);
    touch(dir.path(), "save2.zds", 3_000);
    touch(dir.path(), "save3.zds", 2_000);

    assert_eq!(last_save_game(dir.path()).as_deref(), Some("save2.zds"));
}

#[test]
fn equal_timestamps_break_ties_by_name() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "beta.zds", 1_000);
    touch(dir.path(), "alpha.zds", 1_000);

    assert_eq!(last_save_game(dir.path()).as_deref(), Some("alpha.zds"));
}

#[test]
fn resolution_is_idempotent() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "save1.zds", 1_000);
    touch(dir.path(), "save2.zds", 2_000);

    let first = last_save_game(dir.path());
    let second = last_save_game(dir.path());
    assert_eq!(first, second);
    assert_eq!(first.as_deref(), Some("save2.zds"));
}

#[test]
fn subdirectories_are_eligible() {
    let dir = TempDir::new().unwrap();
    touch(dir.path(), "old.zds", 1_000);
    // Created now, so far newer than the epoch-dated file.
    fs::create_dir(dir.path().join("slot0")).unwrap();

    assert_eq!(last_save_game(dir.path()).as_deref(), Some("slot0"));
}
