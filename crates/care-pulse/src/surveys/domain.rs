use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

const RATING_MIN: u8 = 1;
const RATING_MAX: u8 = 5;

/// Courtesy score on the 1-5 scale patients see on the survey card.
///
/// Values outside the scale cannot be constructed, so every stored
/// submission is arithmetically safe to average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CourtesyRating(u8);

impl CourtesyRating {
    pub fn new(value: u8) -> Result<Self, RatingOutOfRange> {
        if (RATING_MIN..=RATING_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(RatingOutOfRange {
                value: i64::from(value),
            })
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CourtesyRating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for CourtesyRating {
    type Error = RatingOutOfRange;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(|narrowed| Self::new(narrowed).ok())
            .ok_or(RatingOutOfRange { value })
    }
}

impl From<CourtesyRating> for u8 {
    fn from(rating: CourtesyRating) -> Self {
        rating.0
    }
}

impl fmt::Display for CourtesyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for rating values outside the 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("rating {value} is outside the 1-5 courtesy scale")]
pub struct RatingOutOfRange {
    pub value: i64,
}

/// One validated survey response tied to the date of the visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub visit_date: NaiveDate,
    pub nurse_rating: CourtesyRating,
    pub physician_rating: CourtesyRating,
}

/// Raw survey fields exactly as the patient submitted them, before any
/// trimming or validation.
///
/// Clients sometimes send the rating fields as JSON numbers instead of
/// strings, so each field accepts either and stringifies on the way in.
/// Validation then sees one uniform representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyForm {
    #[serde(default, deserialize_with = "raw_form_field")]
    pub visit_date: Option<String>,
    #[serde(default, deserialize_with = "raw_form_field")]
    pub nurse_rating: Option<String>,
    #[serde(default, deserialize_with = "raw_form_field")]
    pub physician_rating: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFieldValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

fn raw_form_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFieldValue>::deserialize(deserializer)?;
    Ok(raw.map(|value| match value {
        RawFieldValue::Text(text) => text,
        RawFieldValue::Int(number) => number.to_string(),
        RawFieldValue::Float(number) => number.to_string(),
        RawFieldValue::Bool(flag) => flag.to_string(),
    }))
}

/// The three fields a survey form carries, used to key validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyField {
    VisitDate,
    NurseRating,
    PhysicianRating,
}

impl SurveyField {
    pub const fn label(self) -> &'static str {
        match self {
            SurveyField::VisitDate => "visit_date",
            SurveyField::NurseRating => "nurse_rating",
            SurveyField::PhysicianRating => "physician_rating",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            SurveyField::VisitDate => "Visit date",
            SurveyField::NurseRating => "Nurse courtesy rating",
            SurveyField::PhysicianRating => "Physician courtesy rating",
        }
    }
}

/// Distinguishes an absent field from one that was present but unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    Missing,
    Invalid,
}

/// A single validation failure tied to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: SurveyField,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn missing(field: SurveyField) -> Self {
        Self {
            field,
            kind: FieldErrorKind::Missing,
            message: format!("{} is required.", field.display_name()),
        }
    }

    pub fn invalid(field: SurveyField) -> Self {
        let message = match field {
            SurveyField::VisitDate => {
                format!("{} must be in YYYY-MM-DD format.", field.display_name())
            }
            SurveyField::NurseRating | SurveyField::PhysicianRating => {
                format!(
                    "{} must be a number between 1 and 5.",
                    field.display_name()
                )
            }
        };

        Self {
            field,
            kind: FieldErrorKind::Invalid,
            message,
        }
    }
}
