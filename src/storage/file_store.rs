use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::storage::traits::SnapshotStore;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot store backed by a single binary file.
///
/// Every save rewrites the whole file with a bincode encoding of the
/// book. A missing file is not an error: it means no snapshot has been
/// taken yet, and loads as an empty book.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store persisting to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No snapshot at {}, starting empty", self.path.display());
                return Ok(AddressBook::new());
            }
            Err(e) => return Err(StorageError::Io(e)),
        };

        let book: AddressBook = bincode::deserialize(&bytes).map_err(StorageError::Decode)?;
        tracing::debug!(
            "Loaded {} contact(s) from {}",
            book.len(),
            self.path.display()
        );
        Ok(book)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = bincode::serialize(book).map_err(StorageError::Encode)?;
        fs::write(&self.path, bytes)?;
        tracing::debug!(
            "Saved {} contact(s) to {}",
            book.len(),
            self.path.display()
        );
        Ok(())
    }
}
