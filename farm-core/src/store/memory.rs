use std::sync::Mutex;

use crate::models::Draft;

use super::draft_store::{DraftStore, StoreError, decode_draft};
use super::factory::{StoreConfig, StoreFactory};

/// In-process draft store. Holds the serialized blob in a mutex-guarded
/// slot, so it behaves exactly like the durable backends (including the
/// fail-soft decode path) without touching the filesystem. Used by tests
/// and by the `memory` backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the raw stored blob, bypassing serialization. Lets tests
    /// exercise the malformed-blob recovery path.
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.slot.lock().unwrap() = Some(raw.into());
    }
}

impl DraftStore for MemoryStore {
    fn load(&self) -> Draft {
        match self.slot.lock().unwrap().as_deref() {
            Some(raw) => decode_draft(raw),
            None => Draft::default(),
        }
    }

    fn save(&self, draft: &Draft) -> Result<(), StoreError> {
        let raw = serde_json::to_string(draft)?;
        *self.slot.lock().unwrap() = Some(raw);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}

/// Factory for the `memory` backend. The connection location is ignored;
/// every call produces a fresh, empty store.
pub struct MemoryStoreFactory;

impl StoreFactory for MemoryStoreFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    fn create(&self, _config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
        Ok(Box::new(MemoryStore::new()))
    }
}
