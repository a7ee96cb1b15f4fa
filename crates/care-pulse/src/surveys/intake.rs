use std::sync::Arc;

use serde::Serialize;

use super::domain::{FieldError, Submission, SurveyForm};
use super::report::DashboardReport;
use super::store::{StoreError, SubmissionStore};
use super::validate::validate_form;

/// Service composing the field validators, the submission store, and the
/// reporting engine behind the two operations the delivery layer exposes.
pub struct CourtesySurveyService<S> {
    store: Arc<S>,
}

impl<S> CourtesySurveyService<S>
where
    S: SubmissionStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Validate a raw form and append the normalized submission.
    ///
    /// Every field error is collected before rejecting, and a rejection
    /// carries the values exactly as they were submitted so callers can
    /// re-display the form. The store is only touched on success.
    pub fn submit(&self, form: SurveyForm) -> Result<Submission, SurveyIntakeError> {
        match validate_form(&form) {
            Ok(submission) => {
                self.store.append(submission)?;
                Ok(submission)
            }
            Err(errors) => Err(SurveyIntakeError::Rejected(SubmissionRejection {
                errors,
                values: form,
            })),
        }
    }

    /// Build the dashboard from a snapshot of the store.
    pub fn dashboard(&self) -> Result<DashboardReport, StoreError> {
        Ok(DashboardReport::from_submissions(self.store.all()?))
    }

    /// Append a batch of already-validated submissions (archive imports,
    /// demo seeding). Returns how many records were appended.
    pub fn seed(&self, submissions: Vec<Submission>) -> Result<usize, StoreError> {
        let count = submissions.len();
        for submission in submissions {
            self.store.append(submission)?;
        }
        Ok(count)
    }
}

/// Everything a caller needs to re-display a rejected form: the full
/// error list plus the untrimmed field values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRejection {
    pub errors: Vec<FieldError>,
    pub values: SurveyForm,
}

/// Error raised by the survey intake service.
#[derive(Debug, thiserror::Error)]
pub enum SurveyIntakeError {
    #[error("submission failed validation")]
    Rejected(SubmissionRejection),
    #[error(transparent)]
    Store(#[from] StoreError),
}
