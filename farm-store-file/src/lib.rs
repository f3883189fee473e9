//! File-backed draft store.
//!
//! Persists the draft as a single JSON blob under a well-known file name
//! inside a configurable directory, which gives the same semantics as a
//! browser's per-origin local storage: one draft per device, overwritten
//! on every save, gone after a clear.

mod factory;
mod store;

pub use factory::FileStoreFactory;
pub use store::{DRAFT_FILE_NAME, FileStore};
