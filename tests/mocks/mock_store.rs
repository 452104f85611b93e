use cardfile::book::AddressBook;
use cardfile::error::{StorageError, StorageResult};
use cardfile::storage::SnapshotStore;
use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

/// Mock snapshot store for testing.
///
/// Provides an in-memory implementation of SnapshotStore that can be
/// seeded with a snapshot and tracks method calls for verification.
#[allow(dead_code)]
pub struct MockSnapshotStore {
    snapshot: Mutex<Option<AddressBook>>,
    call_counts: Mutex<HashMap<String, usize>>,
    fail_saves: bool,
}

#[allow(dead_code)]
impl MockSnapshotStore {
    /// Create a new empty MockSnapshotStore.
    pub fn new() -> Self {
        Self {
            snapshot: Mutex::new(None),
            call_counts: Mutex::new(HashMap::new()),
            fail_saves: false,
        }
    }

    /// Create a store seeded with a snapshot to be returned by `load`.
    pub fn with_snapshot(book: AddressBook) -> Self {
        let store = Self::new();
        *store.snapshot.lock().unwrap() = Some(book);
        store
    }

    /// Create a store whose `save` always fails with an I/O error.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }

    /// The last saved snapshot, if any.
    pub fn saved(&self) -> Option<AddressBook> {
        self.snapshot.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockSnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore for MockSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");
        Ok(self.snapshot.lock().unwrap().clone().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");

        if self.fail_saves {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock save failure",
            )));
        }

        *self.snapshot.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}
