use chrono::NaiveDate;

use super::domain::{CourtesyRating, FieldError, Submission, SurveyField, SurveyForm};

/// Parse a courtesy rating from user-supplied text.
///
/// Accepts whole numbers 1 through 5 only. Anything that fails integer
/// parsing (float-looking text included) is rejected the same way an
/// out-of-scale number is, so callers cannot tell the two apart.
pub fn parse_rating(raw: &str) -> Option<CourtesyRating> {
    let value = raw.parse::<i64>().ok()?;
    CourtesyRating::try_from(value).ok()
}

/// Parse a visit date from user-supplied text.
///
/// Exactly `YYYY-MM-DD`: zero-padded, dash-separated, and a real calendar
/// date. `chrono` alone tolerates un-padded months and days, so the shape
/// is checked byte-wise before the calendar parse.
pub fn parse_visit_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(index, byte)| matches!(index, 4 | 7) || byte.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Validate a whole form, collecting every field error before deciding.
///
/// Each field is trimmed and checked independently: a bad date never
/// short-circuits the rating checks, and a missing field is reported
/// distinctly from a malformed one. Errors come out in form order
/// (visit date, nurse, physician).
pub fn validate_form(form: &SurveyForm) -> Result<Submission, Vec<FieldError>> {
    let mut errors = Vec::new();

    let visit_date = checked_field(
        form.visit_date.as_deref(),
        SurveyField::VisitDate,
        parse_visit_date,
        &mut errors,
    );
    let nurse_rating = checked_field(
        form.nurse_rating.as_deref(),
        SurveyField::NurseRating,
        parse_rating,
        &mut errors,
    );
    let physician_rating = checked_field(
        form.physician_rating.as_deref(),
        SurveyField::PhysicianRating,
        parse_rating,
        &mut errors,
    );

    match (visit_date, nurse_rating, physician_rating) {
        (Some(visit_date), Some(nurse_rating), Some(physician_rating)) => Ok(Submission {
            visit_date,
            nurse_rating,
            physician_rating,
        }),
        _ => Err(errors),
    }
}

fn checked_field<T>(
    raw: Option<&str>,
    field: SurveyField,
    parse: impl Fn(&str) -> Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    match raw.map(str::trim) {
        None | Some("") => {
            errors.push(FieldError::missing(field));
            None
        }
        Some(trimmed) => match parse(trimmed) {
            Some(value) => Some(value),
            None => {
                errors.push(FieldError::invalid(field));
                None
            }
        },
    }
}
