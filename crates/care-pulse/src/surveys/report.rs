use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::Submission;

/// Derived dashboard payload: a chronological chart series plus the full
/// submission listing, most recent visit first.
///
/// `nurse_averages`, `physician_averages`, and `response_counts` run
/// parallel to `dates`, so index `i` across all four describes one visit
/// day. Everything is recomputed from the store snapshot on each read;
/// nothing is cached between requests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardReport {
    pub dates: Vec<NaiveDate>,
    pub nurse_averages: Vec<f64>,
    pub physician_averages: Vec<f64>,
    pub response_counts: Vec<usize>,
    pub all_submissions: Vec<Submission>,
}

#[derive(Debug, Default)]
struct DailyBucket {
    nurse_total: u64,
    physician_total: u64,
    responses: u64,
}

impl DashboardReport {
    /// Group submissions by visit date and average each day's ratings.
    ///
    /// Dates come out ascending. Averages are rounded half away from zero
    /// to two decimal places. The listing is ordered by visit date
    /// descending with a stable sort, so records from the same day keep
    /// their insertion order.
    pub fn from_submissions(submissions: Vec<Submission>) -> Self {
        let mut buckets: BTreeMap<NaiveDate, DailyBucket> = BTreeMap::new();
        for submission in &submissions {
            let bucket = buckets.entry(submission.visit_date).or_default();
            bucket.nurse_total += u64::from(submission.nurse_rating.get());
            bucket.physician_total += u64::from(submission.physician_rating.get());
            bucket.responses += 1;
        }

        let mut report = DashboardReport::default();
        for (date, bucket) in buckets {
            // A bucket only exists once a submission landed on that date,
            // so the division is never by zero.
            report.dates.push(date);
            report
                .nurse_averages
                .push(round2(bucket.nurse_total as f64 / bucket.responses as f64));
            report.physician_averages.push(round2(
                bucket.physician_total as f64 / bucket.responses as f64,
            ));
            report.response_counts.push(bucket.responses as usize);
        }

        let mut all_submissions = submissions;
        all_submissions.sort_by(|a, b| b.visit_date.cmp(&a.visit_date));
        report.all_submissions = all_submissions;

        report
    }

    /// True when no submission has been recorded yet, so delivery layers
    /// can render their "no data" state instead of empty charts.
    pub fn is_empty(&self) -> bool {
        self.all_submissions.is_empty()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
