use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use farm_core::models::Draft;
use farm_core::store::{DraftStore, StoreError, decode_draft};

/// Well-known name of the draft blob inside the data directory.
pub const DRAFT_FILE_NAME: &str = "farm-draft.json";

/// [`DraftStore`] backed by one JSON file.
///
/// Saves are write-through and unconditional: every call rewrites the whole
/// blob. There is no locking across processes; concurrent writers are
/// last-write-wins, the same as two browser tabs sharing a storage key.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store keeping its blob in `dir` (under
    /// [`DRAFT_FILE_NAME`]). The directory itself must already exist; the
    /// file is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(DRAFT_FILE_NAME),
        }
    }

    /// Full path of the blob file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DraftStore for FileStore {
    fn load(&self) -> Draft {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => decode_draft(&raw),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored draft");
                Draft::default()
            }
            Err(error) => {
                // Unreadable is treated the same as missing.
                warn!(%error, path = %self.path.display(), "cannot read stored draft");
                Draft::default()
            }
        }
    }

    fn save(&self, draft: &Draft) -> Result<(), StoreError> {
        let raw = serde_json::to_string(draft)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}
