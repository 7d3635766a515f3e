//! Integration tests for link-aware metadata.

mod common;

use std::io;
use std::sync::Arc;

use common::ScriptedFs;
use fslink::fs::{FileMode, FileSystem};
use fslink::memfs::{MapFile, MapFs};
use fslink::{lstat, Error, ErrorKind, LSTAT_BATCH_SIZE};

fn link_fixture() -> Arc<dyn FileSystem> {
    Arc::new(
        MapFs::new()
            .with("file", MapFile::new("data").with_mode(FileMode::file(0o600)))
            .with(
                "link",
                MapFile::symlink("file").with_mode(FileMode::symlink(0o666)),
            ),
    )
}

#[test]
fn test_lstat_reports_link_itself() {
    let fsys = link_fixture();

    let info = lstat(&fsys, "link").unwrap();
    assert_eq!(info.name(), "link");
    assert_eq!(info.mode(), FileMode::from_bits(0o666) | FileMode::SYMLINK);

    let followed = fsys.stat("link").unwrap();
    assert_eq!(followed.mode(), FileMode::file(0o600));
    assert_ne!(followed.mode(), info.mode());
}

#[test]
fn test_lstat_regular_file_matches_stat() {
    let fsys = link_fixture();
    assert_eq!(lstat(&fsys, "file").unwrap(), fsys.stat("file").unwrap());
}

#[test]
fn test_lstat_root_is_stat() {
    let fsys = link_fixture();
    assert_eq!(lstat(&fsys, ".").unwrap(), fsys.stat(".").unwrap());

    // The root never opens a parent.
    let (scripted, stats) = ScriptedFs::new(".", 3).into_handle();
    let info = lstat(&scripted, ".").unwrap();
    assert!(info.is_dir());
    assert_eq!(stats.batches(), Vec::<usize>::new());
}

#[test]
fn test_lstat_link_inside_linked_directory() {
    let fsys: Arc<dyn FileSystem> = Arc::new(
        MapFs::new()
            .with("real/inner", MapFile::symlink("../target"))
            .with("target", MapFile::new("t"))
            .with("alias", MapFile::symlink("real")),
    );
    // The parent is followed, the final element is not.
    let info = lstat(&fsys, "alias/inner").unwrap();
    assert!(info.is_symlink());
    assert_eq!(info.name(), "inner");
}

#[test]
fn test_lstat_invalid_path_before_io() {
    let (fsys, stats) = ScriptedFs::new(".", 1).into_handle();
    for name in ["", "/a", "a/", "a//b", "./a", "a/.."] {
        let err = lstat(&fsys, name).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { op: "lstat", .. }), "{name:?}");
        assert_eq!(err.path(), Some(name));
    }
    assert_eq!(stats.opened(), 0);
}

#[test]
fn test_lstat_scans_in_batches() {
    let (fsys, stats) = ScriptedFs::new("big", 250).into_handle();
    let last = ScriptedFs::entry_name(249);

    let info = lstat(&fsys, &format!("big/{last}")).unwrap();
    assert_eq!(info.name(), last);

    let batches = stats.batches();
    assert!(batches.len() >= 3, "{batches:?}");
    assert!(batches.iter().all(|&n| n <= LSTAT_BATCH_SIZE));
    assert_eq!(batches, [100, 100, 50]);
}

#[test]
fn test_lstat_stops_at_first_match() {
    let (fsys, stats) = ScriptedFs::new(".", 250).into_handle();
    lstat(&fsys, &ScriptedFs::entry_name(42)).unwrap();
    assert_eq!(stats.batches(), [100]);
}

#[test]
fn test_lstat_not_found_after_exhaustion() {
    let (fsys, stats) = ScriptedFs::new("d", 120).into_handle();
    let err = lstat(&fsys, "d/missing").unwrap_err();
    assert!(matches!(err, Error::NotFound { op: "lstat", .. }));
    assert_eq!(err.path(), Some("d/missing"));
    assert_eq!(stats.batches(), [100, 20]);
}

#[test]
fn test_lstat_empty_directory() {
    let (fsys, _stats) = ScriptedFs::new(".", 0).into_handle();
    assert!(lstat(&fsys, "x").unwrap_err().is_not_found());
}

#[test]
fn test_lstat_missing_parent_propagates() {
    let (fsys, _stats) = ScriptedFs::new("d", 1).into_handle();
    let err = lstat(&fsys, "elsewhere/x").unwrap_err();
    assert!(matches!(err, Error::NotFound { op: "open", .. }));
    assert_eq!(err.path(), Some("elsewhere"));
}

#[test]
fn test_lstat_enumeration_error_is_root_cause() {
    let (fsys, stats) = ScriptedFs::new("d", 250).failing_after(1).into_handle();
    let err = lstat(&fsys, "d/missing").unwrap_err();

    match &err {
        Error::Io { op, path, source } => {
            assert_eq!(*op, "lstat");
            assert_eq!(path, "d/missing");
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_ne!(err.kind(), ErrorKind::NotFound);
    assert_eq!(stats.batches(), [100]);
}

#[test]
fn test_lstat_unlistable_parent() {
    let (fsys, _stats) = ScriptedFs::new("d", 5).unlistable().into_handle();
    let err = lstat(&fsys, "d/entry-000").unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.op(), Some("lstat"));
    assert!(err.to_string().contains("ScriptedFs"));
}

#[test]
fn test_lstat_releases_parent_on_every_path() {
    let cases: Vec<(ScriptedFs, &str)> = vec![
        (ScriptedFs::new("d", 250), "d/entry-200"),
        (ScriptedFs::new("d", 250), "d/missing"),
        (ScriptedFs::new("d", 250).failing_after(2), "d/missing"),
        (ScriptedFs::new("d", 5).unlistable(), "d/entry-001"),
    ];
    for (scripted, name) in cases {
        let (fsys, stats) = scripted.into_handle();
        let _ = lstat(&fsys, name);
        assert_eq!(stats.opened(), 1, "{name}");
        assert_eq!(stats.released(), 1, "{name}");
    }
}
