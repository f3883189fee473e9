pub mod controller;
pub mod review;
pub mod step;
pub mod submit;
pub mod update;
pub mod validate;

pub use controller::{Advance, Wizard};
pub use review::{ReviewRow, ReviewSection, ReviewSummary, format_date, format_rupees};
pub use step::Step;
pub use submit::{SubmissionClient, SubmitError};
pub use update::{DraftUpdate, UpdateParseError};
pub use validate::{FieldErrors, validate};
