//! Courtesy survey intake, storage, and daily satisfaction reporting.
//!
//! Intake validates raw form fields and appends normalized submissions to
//! the store; reporting reads a store snapshot and derives the dashboard.
//! The flow is strictly one-way: intake -> store -> report.

pub mod backfill;
pub mod domain;
pub mod intake;
pub mod report;
pub mod router;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests;

pub use backfill::{SurveyBackfill, SurveyBackfillError};
pub use domain::{
    CourtesyRating, FieldError, FieldErrorKind, RatingOutOfRange, Submission, SurveyField,
    SurveyForm,
};
pub use intake::{CourtesySurveyService, SubmissionRejection, SurveyIntakeError};
pub use report::DashboardReport;
pub use router::survey_router;
pub use store::{InMemorySubmissionStore, StoreError, SubmissionStore};
