use super::common::*;

use serde_json::Value;

use crate::surveys::report::DashboardReport;

#[test]
fn averages_group_by_visit_date() {
    let report = DashboardReport::from_submissions(vec![
        submission(visit(2026, 2, 27), 5, 4),
        submission(visit(2026, 2, 27), 3, 2),
        submission(visit(2026, 2, 28), 4, 5),
    ]);

    assert_eq!(report.dates, vec![visit(2026, 2, 27), visit(2026, 2, 28)]);
    assert_eq!(report.nurse_averages, vec![4.0, 4.0]);
    assert_eq!(report.physician_averages, vec![3.0, 5.0]);
    assert_eq!(report.response_counts, vec![2, 1]);
}

#[test]
fn dates_ascend_regardless_of_insertion_order() {
    let report = DashboardReport::from_submissions(vec![
        submission(visit(2026, 3, 10), 4, 4),
        submission(visit(2026, 1, 5), 2, 3),
        submission(visit(2026, 2, 14), 5, 5),
    ]);

    assert_eq!(
        report.dates,
        vec![visit(2026, 1, 5), visit(2026, 2, 14), visit(2026, 3, 10)]
    );
}

#[test]
fn listing_is_most_recent_first_with_stable_ties() {
    let first_on_day = submission(visit(2026, 2, 27), 1, 2);
    let second_on_day = submission(visit(2026, 2, 27), 5, 4);
    let report = DashboardReport::from_submissions(vec![
        first_on_day,
        submission(visit(2026, 2, 28), 3, 3),
        second_on_day,
    ]);

    assert_eq!(report.all_submissions.len(), 3);
    assert_eq!(report.all_submissions[0].visit_date, visit(2026, 2, 28));
    // Same-day records keep their arrival order.
    assert_eq!(report.all_submissions[1], first_on_day);
    assert_eq!(report.all_submissions[2], second_on_day);
}

#[test]
fn averages_round_half_away_from_zero_to_two_decimals() {
    // 4+4+4+4+4+4+4+5 = 33 over 8 responses = 4.125 -> 4.13.
    let mut submissions: Vec<_> = (0..7)
        .map(|_| submission(visit(2026, 2, 27), 4, 4))
        .collect();
    submissions.push(submission(visit(2026, 2, 27), 5, 4));

    let report = DashboardReport::from_submissions(submissions);
    assert_eq!(report.nurse_averages, vec![4.13]);
    assert_eq!(report.physician_averages, vec![4.0]);
}

#[test]
fn repeating_thirds_round_to_two_decimals() {
    let report = DashboardReport::from_submissions(vec![
        submission(visit(2026, 2, 27), 4, 2),
        submission(visit(2026, 2, 27), 4, 2),
        submission(visit(2026, 2, 27), 5, 3),
    ]);

    assert_eq!(report.nurse_averages, vec![4.33]);
    assert_eq!(report.physician_averages, vec![2.33]);
}

#[test]
fn empty_input_yields_an_empty_report() {
    let report = DashboardReport::from_submissions(Vec::new());

    assert!(report.is_empty());
    assert!(report.dates.is_empty());
    assert!(report.nurse_averages.is_empty());
    assert!(report.physician_averages.is_empty());
    assert!(report.response_counts.is_empty());
    assert!(report.all_submissions.is_empty());
}

#[test]
fn report_serializes_the_dashboard_payload_shape() {
    let report = DashboardReport::from_submissions(vec![submission(visit(2026, 2, 27), 5, 3)]);
    let payload = serde_json::to_value(&report).expect("report serializes");

    assert_eq!(payload["dates"], serde_json::json!(["2026-02-27"]));
    assert_eq!(payload["nurse_averages"], serde_json::json!([5.0]));
    assert_eq!(payload["physician_averages"], serde_json::json!([3.0]));
    assert_eq!(payload["response_counts"], serde_json::json!([1]));
    assert_eq!(
        payload["all_submissions"]
            .as_array()
            .map(Vec::len),
        Some(1)
    );
    assert_eq!(
        payload["all_submissions"][0]["visit_date"],
        Value::from("2026-02-27")
    );
}
