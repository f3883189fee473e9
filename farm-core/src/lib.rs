pub mod models;
pub mod store;
pub mod wizard;

pub use models::*;
pub use store::{DraftStore, StoreConfig, StoreError, StoreFactory, StoreRegistry};
pub use wizard::{
    Advance, DraftUpdate, FieldErrors, ReviewSummary, Step, SubmissionClient, SubmitError,
    UpdateParseError, Wizard, validate,
};
