//! Core crate for the patient courtesy survey service: form validation,
//! the append-only submission store, the daily satisfaction dashboard,
//! and the axum router exposing both over HTTP.

pub mod config;
pub mod error;
pub mod surveys;
pub mod telemetry;
