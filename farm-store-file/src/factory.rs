use std::path::Path;

use farm_core::store::{DraftStore, StoreConfig, StoreError, StoreFactory};

use crate::store::FileStore;

/// Factory for the `file` backend. `location` is the data directory; it is
/// created (with parents) when missing.
pub struct FileStoreFactory;

impl StoreFactory for FileStoreFactory {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    fn create(&self, config: &StoreConfig) -> Result<Box<dyn DraftStore>, StoreError> {
        let dir = if config.location.is_empty() {
            Path::new(".")
        } else {
            Path::new(&config.location)
        };
        std::fs::create_dir_all(dir)?;
        Ok(Box::new(FileStore::new(dir)))
    }
}
