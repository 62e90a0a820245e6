use crate::StoreError;

pub mod memory;

pub use memory::MemoryStore;

/// Persistence port for the deck snapshot: one named record holding the
/// serialized card list. Backends decide where the bytes live.
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored snapshot, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored snapshot.
    fn save(&self, bytes: &[u8]) -> Result<(), StoreError>;
}
