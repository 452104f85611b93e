use crate::book::AddressBook;
use crate::error::StorageResult;

/// Store for address book snapshots.
///
/// Provides abstraction over snapshot persistence, enabling different
/// implementations (file-backed, mock).
pub trait SnapshotStore {
    /// Load the last saved snapshot, or an empty book when none exists.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Persist the whole book, replacing any previous snapshot.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
