pub mod draft_store;
pub mod factory;
pub mod memory;

pub use draft_store::{DraftStore, StoreError, decode_draft};
pub use factory::{StoreConfig, StoreFactory, StoreRegistry};
pub use memory::{MemoryStore, MemoryStoreFactory};
