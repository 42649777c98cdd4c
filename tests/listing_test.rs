mod common;
use common::*;
use stackvm::lang::ErrorCode;
use stackvm::mach::{Listing, Runtime};

#[test]
fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("count.svm");
    let listing: Listing = vec!["PUSH 3", "LOOP:", "  PRINT  ", "", "JMP  LOOP"]
        .into_iter()
        .collect();
    listing.save(&path).unwrap();
    let loaded = Listing::load(&path).unwrap();
    assert_eq!(loaded, listing);
    assert_eq!(loaded.len(), 5);
}

#[test]
fn test_empty_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.svm");
    Listing::new().save(&path).unwrap();
    assert!(Listing::load(&path).unwrap().is_empty());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let error = Listing::load(dir.path().join("nope.svm")).unwrap_err();
    assert!(error.is(ErrorCode::FileNotFound));
}

#[test]
fn test_run_loaded_program() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("add.svm");
    std::fs::write(&path, "PUSH 3\r\nPUSH 4\r\nADD\r\nPRINT\r\n").unwrap();
    let listing = Listing::load(&path).unwrap();
    let mut r = Runtime::new(&listing);
    assert_eq!(exec_runtime(&mut r), "Top of stack: 7\n");
}
