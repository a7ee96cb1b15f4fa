use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::surveys::domain::{CourtesyRating, Submission, SurveyForm};
use crate::surveys::intake::CourtesySurveyService;
use crate::surveys::store::{InMemorySubmissionStore, StoreError, SubmissionStore};

pub(super) fn visit(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn form(visit_date: &str, nurse: &str, physician: &str) -> SurveyForm {
    SurveyForm {
        visit_date: Some(visit_date.to_string()),
        nurse_rating: Some(nurse.to_string()),
        physician_rating: Some(physician.to_string()),
    }
}

pub(super) fn submission(visit_date: NaiveDate, nurse: u8, physician: u8) -> Submission {
    Submission {
        visit_date,
        nurse_rating: CourtesyRating::new(nurse).expect("nurse rating in range"),
        physician_rating: CourtesyRating::new(physician).expect("physician rating in range"),
    }
}

pub(super) fn build_service() -> (
    Arc<CourtesySurveyService<InMemorySubmissionStore>>,
    Arc<InMemorySubmissionStore>,
) {
    let store = Arc::new(InMemorySubmissionStore::default());
    let service = Arc::new(CourtesySurveyService::new(store.clone()));
    (service, store)
}

pub(super) struct UnavailableStore;

impl SubmissionStore for UnavailableStore {
    fn append(&self, _submission: Submission) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn all(&self) -> Result<Vec<Submission>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
