use crate::{SnapshotStore, StoreError};
use parking_lot::RwLock;

/// In-memory snapshot store for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Vec<u8>>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising the
    /// keep-the-mutation persistence-failure path.
    pub fn read_only() -> Self {
        Self {
            slot: RwLock::new(None),
            reject_writes: true,
        }
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.slot.read().clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::Write("store is read-only".into()));
        }
        *self.slot.write() = Some(bytes.to_vec());
        Ok(())
    }
}
