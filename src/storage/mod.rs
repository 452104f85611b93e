mod file_store;
mod traits;

pub use file_store::FileSnapshotStore;
pub use traits::SnapshotStore;
