use tracing::{debug, info, warn};

use crate::models::Draft;
use crate::store::DraftStore;

use super::step::Step;
use super::submit::{SubmissionClient, SubmitError};
use super::update::DraftUpdate;
use super::validate::{FieldErrors, validate};

/// Result of a [`Wizard::next`] attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The current step validated cleanly and the wizard moved to the
    /// contained step.
    Moved(Step),
    /// Validation failed; the wizard stayed put and [`Wizard::errors`]
    /// holds the per-field messages.
    Blocked,
}

/// The single state machine governing the data-entry flow.
///
/// Owns the draft exclusively for the lifetime of the session and writes it
/// through to the injected [`DraftStore`] on every mutation. The step index
/// is deliberately *not* persisted: restoring a saved draft always restarts
/// review at the first step.
pub struct Wizard<S: DraftStore> {
    store: S,
    draft: Draft,
    step: Step,
    errors: FieldErrors,
    submitting: bool,
    submit_error: Option<String>,
}

impl<S: DraftStore> Wizard<S> {
    /// Creates a wizard over `store`, restoring any previously saved draft.
    /// A missing or unreadable draft silently becomes an empty one.
    pub fn new(store: S) -> Self {
        let draft = store.load();
        Self {
            store,
            draft,
            step: Step::Crop,
            errors: FieldErrors::new(),
            submitting: false,
            submit_error: None,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Non-field error from the last failed submission, if any.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Applies a draft mutation and persists the result.
    ///
    /// Error messages for the touched fields are dropped immediately so the
    /// user sees corrections take effect without re-validating. A store
    /// write failure is logged and swallowed; the next mutation writes the
    /// full draft again, so nothing accumulates.
    pub fn update(&mut self, update: DraftUpdate) {
        update.apply(&mut self.draft);
        self.errors.retain(|key, _| !update.clears_error(key));

        if let Err(error) = self.store.save(&self.draft) {
            warn!(%error, "draft save failed; will retry on next change");
        }
    }

    /// Validates the current step and, if clean, moves forward one step
    /// (clamped at review). On failure the errors are kept for rendering
    /// and the step does not change.
    pub fn next(&mut self) -> Advance {
        let errors = validate(&self.draft, self.step);
        if !errors.is_empty() {
            debug!(step = ?self.step, fields = errors.len(), "step blocked by validation");
            self.errors = errors;
            return Advance::Blocked;
        }

        self.errors.clear();
        self.step = self.step.forward();
        Advance::Moved(self.step)
    }

    /// Moves back one step (clamped at the first). Backward navigation is
    /// always allowed and never validates.
    pub fn previous(&mut self) {
        self.step = self.step.back();
    }

    /// Sends the draft through `client`. Only valid from the review step.
    ///
    /// On success the stored draft is cleared and the wizard is done; the
    /// caller is expected to tear it down. On rejection the draft and the
    /// store are left intact and the message is kept in
    /// [`Wizard::submit_error`] so the user can retry without re-entering
    /// anything.
    pub async fn submit(&mut self, client: &dyn SubmissionClient) -> Result<(), SubmitError> {
        if self.step != Step::Review {
            return Err(SubmitError::NotAtReview);
        }
        if self.submitting {
            return Err(SubmitError::AlreadySubmitting);
        }

        self.submitting = true;
        self.submit_error = None;
        let result = client.submit(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(()) => {
                info!("draft submitted; clearing stored copy");
                if let Err(error) = self.store.clear() {
                    // The submission itself succeeded; a stale stored draft
                    // is the lesser problem and is logged only.
                    warn!(%error, "failed to clear stored draft after submission");
                }
                Ok(())
            }
            Err(error) => {
                self.submit_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Throws away everything: the draft, the stored copy, the errors, and
    /// the position. Not recoverable, so callers must confirm with the
    /// user first.
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.step = Step::Crop;
        self.errors.clear();
        self.submit_error = None;
        if let Err(error) = self.store.clear() {
            warn!(%error, "failed to clear stored draft on reset");
        }
    }
}
