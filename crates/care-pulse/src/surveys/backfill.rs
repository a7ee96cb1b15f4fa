use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::domain::{FieldError, Submission, SurveyForm};
use super::validate::validate_form;

/// Importer for archived survey responses exported as CSV.
///
/// The expected layout is a header row of
/// `visit_date,nurse_rating,physician_rating` followed by one row per
/// response. Every row passes through the same field validators as live
/// intake, so a backfilled store holds nothing an interactive submission
/// could not have produced. The first invalid row aborts the import.
pub struct SurveyBackfill;

impl SurveyBackfill {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Submission>, SurveyBackfillError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Submission>, SurveyBackfillError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut submissions = Vec::new();

        for (index, row) in csv_reader.deserialize::<BackfillRow>().enumerate() {
            let row = row?;
            let form = SurveyForm {
                visit_date: Some(row.visit_date),
                nurse_rating: Some(row.nurse_rating),
                physician_rating: Some(row.physician_rating),
            };

            let submission = validate_form(&form).map_err(|errors| SurveyBackfillError::Row {
                record: index + 1,
                errors,
            })?;
            submissions.push(submission);
        }

        Ok(submissions)
    }
}

#[derive(Debug, Deserialize)]
struct BackfillRow {
    visit_date: String,
    nurse_rating: String,
    physician_rating: String,
}

#[derive(Debug)]
pub enum SurveyBackfillError {
    Io(std::io::Error),
    Csv(csv::Error),
    Row {
        record: usize,
        errors: Vec<FieldError>,
    },
}

impl std::fmt::Display for SurveyBackfillError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurveyBackfillError::Io(err) => write!(f, "failed to read survey archive: {}", err),
            SurveyBackfillError::Csv(err) => write!(f, "invalid survey archive CSV: {}", err),
            SurveyBackfillError::Row { record, errors } => {
                let messages: Vec<&str> = errors
                    .iter()
                    .map(|error| error.message.as_str())
                    .collect();
                write!(
                    f,
                    "survey archive row {} failed validation: {}",
                    record,
                    messages.join(" ")
                )
            }
        }
    }
}

impl std::error::Error for SurveyBackfillError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurveyBackfillError::Io(err) => Some(err),
            SurveyBackfillError::Csv(err) => Some(err),
            SurveyBackfillError::Row { .. } => None,
        }
    }
}

impl From<std::io::Error> for SurveyBackfillError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for SurveyBackfillError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}
