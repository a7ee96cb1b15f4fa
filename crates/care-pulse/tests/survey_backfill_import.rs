//! Integration specifications for importing archived survey responses and
//! serving them through the dashboard.

use std::io::Cursor;
use std::sync::Arc;

use chrono::NaiveDate;

use care_pulse::surveys::{
    CourtesySurveyService, InMemorySubmissionStore, SurveyBackfill, SurveyBackfillError,
};

fn visit(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn archive_rows_feed_the_dashboard_through_seeding() {
    let csv = "visit_date,nurse_rating,physician_rating\n\
2026-02-26,3,2\n\
2026-02-27,5,4\n\
2026-02-27,3,2\n";
    let submissions = SurveyBackfill::from_reader(Cursor::new(csv)).expect("import succeeds");

    let store = Arc::new(InMemorySubmissionStore::default());
    let service = CourtesySurveyService::new(store.clone());
    let seeded = service.seed(submissions).expect("seed succeeds");
    assert_eq!(seeded, 3);

    let report = service.dashboard().expect("dashboard");
    assert_eq!(report.dates, vec![visit(2026, 2, 26), visit(2026, 2, 27)]);
    assert_eq!(report.nurse_averages, vec![3.0, 4.0]);
    assert_eq!(report.physician_averages, vec![2.0, 3.0]);
    assert_eq!(report.response_counts, vec![1, 2]);
    assert_eq!(store.len(), 3);
}

#[test]
fn archived_rows_obey_the_same_validation_as_live_intake() {
    let csv = "visit_date,nurse_rating,physician_rating\n\
2026-02-26,3,2\n\
2026-2-27,5,4\n";
    let error = SurveyBackfill::from_reader(Cursor::new(csv)).expect_err("unpadded date rejected");

    match error {
        SurveyBackfillError::Row { record, errors } => {
            assert_eq!(record, 2);
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors[0].message,
                "Visit date must be in YYYY-MM-DD format."
            );
        }
        other => panic!("expected row error, got {other:?}"),
    }
}

#[test]
fn import_errors_carry_a_readable_summary() {
    let csv = "visit_date,nurse_rating,physician_rating\nnot-a-date,,5\n";
    let error = SurveyBackfill::from_reader(Cursor::new(csv)).expect_err("invalid row rejected");

    let message = error.to_string();
    assert!(message.contains("row 1"));
    assert!(message.contains("Visit date must be in YYYY-MM-DD format."));
    assert!(message.contains("Nurse courtesy rating is required."));
}

#[test]
fn missing_archives_surface_io_errors() {
    let error = SurveyBackfill::from_path("./no-such-archive.csv").expect_err("expected io error");

    match error {
        SurveyBackfillError::Io(_) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}
