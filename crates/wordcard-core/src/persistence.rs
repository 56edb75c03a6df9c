use std::sync::Mutex;

use wordcard_types::WordRecord;

use crate::error::PersistError;

/// Storage backend for the single persisted word list slot
pub trait PersistenceClient: Send + Sync {
    /// Read the whole slot, None when nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<WordRecord>>, PersistError>;

    /// Replace the whole slot
    fn save(&self, records: &[WordRecord]) -> Result<(), PersistError>;
}

/// Process-local slot, for ephemeral sessions and tests
#[derive(Default)]
pub struct MemoryPersistence {
    slot: Mutex<Option<Vec<WordRecord>>>,
    fail_writes: Mutex<bool>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<WordRecord>) -> Self {
        Self {
            slot: Mutex::new(Some(records)),
            fail_writes: Mutex::new(false),
        }
    }

    /// Make subsequent saves fail, to exercise error paths
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut flag) = self.fail_writes.lock() {
            *flag = fail;
        }
    }

    /// Snapshot of what was last saved
    pub fn saved(&self) -> Option<Vec<WordRecord>> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl PersistenceClient for MemoryPersistence {
    fn load(&self) -> Result<Option<Vec<WordRecord>>, PersistError> {
        self.slot
            .lock()
            .map(|slot| slot.clone())
            .map_err(|e| PersistError::Unavailable(e.to_string()))
    }

    fn save(&self, records: &[WordRecord]) -> Result<(), PersistError> {
        let fail = self.fail_writes.lock().map(|f| *f).unwrap_or(true);
        if fail {
            return Err(PersistError::Unavailable("writes disabled".to_string()));
        }

        let mut slot = self
            .slot
            .lock()
            .map_err(|e| PersistError::Unavailable(e.to_string()))?;
        *slot = Some(records.to_vec());
        Ok(())
    }
}
