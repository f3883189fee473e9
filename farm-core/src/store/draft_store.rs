use thiserror::Error;
use tracing::warn;

use crate::models::Draft;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("draft serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store configuration error: {0}")]
    Configuration(String),
}

/// Persistence port for the in-progress draft.
///
/// A store is a dumb blob keeper scoped to one device: it holds at most one
/// draft under a single well-known name, never inspects the content, and is
/// written through on every mutation. Backends implement this trait and are
/// wired up through a [`super::StoreRegistry`] at startup.
///
/// `load` is deliberately infallible: a missing or unreadable draft is the
/// same as no draft, so callers always get something usable back.
pub trait DraftStore: Send + Sync {
    /// Returns the stored draft, or the default empty draft when nothing
    /// usable is stored. Never fails.
    fn load(&self) -> Draft;

    /// Overwrites whatever was previously stored.
    fn save(&self, draft: &Draft) -> Result<(), StoreError>;

    /// Removes the stored draft entirely.
    fn clear(&self) -> Result<(), StoreError>;
}

impl DraftStore for Box<dyn DraftStore> {
    fn load(&self) -> Draft {
        (**self).load()
    }

    fn save(&self, draft: &Draft) -> Result<(), StoreError> {
        (**self).save(draft)
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

/// Decodes a stored blob into a [`Draft`], falling back to the default on
/// malformed input. The parse failure is logged and otherwise swallowed;
/// a corrupt blob is treated exactly like a missing one.
pub fn decode_draft(raw: &str) -> Draft {
    match serde_json::from_str(raw) {
        Ok(draft) => draft,
        Err(error) => {
            warn!(%error, "stored draft is malformed; starting from an empty draft");
            Draft::default()
        }
    }
}
