use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Args;

use care_pulse::error::AppError;
use care_pulse::surveys::{
    CourtesySurveyService, DashboardReport, InMemorySubmissionStore, SurveyBackfill, SurveyForm,
    SurveyIntakeError,
};

#[derive(Args, Debug)]
pub(crate) struct DashboardArgs {
    /// Survey archive CSV to aggregate (visit_date,nurse_rating,physician_rating)
    #[arg(long)]
    pub(crate) from_csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional survey archive CSV appended before the scripted submissions
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
    /// Base date for the scripted submissions (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let submissions = SurveyBackfill::from_path(&args.from_csv)?;
    let report = DashboardReport::from_submissions(submissions);
    render_dashboard(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { seed_csv, today } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let yesterday = today - chrono::Duration::days(1);

    println!("Courtesy survey demo");

    let store = Arc::new(InMemorySubmissionStore::default());
    let service = CourtesySurveyService::new(store);

    if let Some(path) = seed_csv.as_ref() {
        let submissions = SurveyBackfill::from_path(path)?;
        let seeded = service.seed(submissions)?;
        println!(
            "Seeded {} archived submissions from {}",
            seeded,
            path.display()
        );
    }

    println!("\nRecording sample ratings");
    let samples = [
        (yesterday, "5", "4"),
        (yesterday, "3", "2"),
        (today, "4", "5"),
    ];
    for (visit_date, nurse, physician) in samples {
        let form = SurveyForm {
            visit_date: Some(visit_date.to_string()),
            nurse_rating: Some(nurse.to_string()),
            physician_rating: Some(physician.to_string()),
        };
        match service.submit(form) {
            Ok(submission) => println!(
                "- Recorded {}: nurse {}, physician {}",
                submission.visit_date, submission.nurse_rating, submission.physician_rating
            ),
            Err(err) => {
                println!("- Intake unavailable: {}", err);
                return Ok(());
            }
        }
    }

    println!("\nRejected form walkthrough");
    let bad_form = SurveyForm {
        visit_date: Some("02/27/2026".to_string()),
        nurse_rating: Some("10".to_string()),
        physician_rating: None,
    };
    match service.submit(bad_form) {
        Err(SurveyIntakeError::Rejected(rejection)) => {
            for error in &rejection.errors {
                println!("  - {}", error.message);
            }
            println!(
                "  Echoed visit date for re-display: {:?}",
                rejection.values.visit_date
            );
        }
        Ok(_) => println!("  Unexpected acceptance of a malformed form"),
        Err(err) => println!("  Intake unavailable: {}", err),
    }

    let report = service.dashboard()?;
    println!();
    render_dashboard(&report);

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("\nDashboard payload:\n{}", json),
        Err(err) => println!("\nDashboard payload unavailable: {}", err),
    }

    Ok(())
}

pub(crate) fn render_dashboard(report: &DashboardReport) {
    println!("Courtesy dashboard");

    if report.is_empty() {
        println!("No ratings recorded yet.");
        return;
    }

    println!("\nDaily averages");
    for (index, date) in report.dates.iter().enumerate() {
        println!(
            "- {}: nurse {:.2}, physician {:.2} ({} responses)",
            date,
            report.nurse_averages[index],
            report.physician_averages[index],
            report.response_counts[index]
        );
    }

    println!("\nAll submissions (most recent first)");
    for submission in &report.all_submissions {
        println!(
            "- {}: nurse {}, physician {}",
            submission.visit_date, submission.nurse_rating, submission.physician_rating
        );
    }
}
