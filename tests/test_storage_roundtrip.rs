//! Integration tests for the file-backed snapshot store: round-trip
//! fidelity, the missing-file-is-empty contract, and failure surfaces.

use cardfile::book::AddressBook;
use cardfile::error::StorageError;
use cardfile::models::Contact;
use cardfile::storage::{FileSnapshotStore, SnapshotStore};
use std::fs;

fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();

    let mut john = Contact::new("John");
    john.add_phone("1111111111").unwrap();
    john.add_phone("2222222222").unwrap();
    john.set_birthday("15.06.2020").unwrap();
    book.add(john);

    let mut jane = Contact::new("Jane");
    jane.add_phone("3333333333").unwrap();
    book.add(jane);

    let leap = Contact::new("Leap");
    book.add(leap);

    book
}

#[test]
fn test_save_then_load_reproduces_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.pkl"));

    let book = sample_book();
    store.save(&book).unwrap();
    let loaded = store.load().unwrap();

    // Identical contents and identical insertion order.
    assert_eq!(loaded, book);
    let names: Vec<&str> = loaded.iter().map(Contact::name).collect();
    assert_eq!(names, vec!["John", "Jane", "Leap"]);
}

#[test]
fn test_load_missing_file_yields_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("never-written.pkl"));

    let book = store.load().unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_load_corrupted_blob_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.pkl");
    fs::write(&path, b"this is not a snapshot").unwrap();

    let store = FileSnapshotStore::new(path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StorageError::Decode(_)));
}

#[test]
fn test_save_into_missing_directory_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("no-such-dir").join("addressbook.pkl"));

    let err = store.save(&sample_book()).unwrap_err();
    assert!(matches!(err, StorageError::Io(_)));
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSnapshotStore::new(dir.path().join("addressbook.pkl"));

    store.save(&sample_book()).unwrap();

    let mut smaller = AddressBook::new();
    smaller.add(Contact::new("Solo"));
    store.save(&smaller).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.find("Solo").is_some());
}

#[test]
fn test_store_works_through_the_trait_object() {
    let dir = tempfile::tempdir().unwrap();
    let file_store = FileSnapshotStore::new(dir.path().join("addressbook.pkl"));
    let store: &dyn SnapshotStore = &file_store;

    store.save(&sample_book()).unwrap();
    assert_eq!(store.load().unwrap().len(), 3);
}
