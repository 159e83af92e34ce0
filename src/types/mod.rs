use thiserror::Error;

mod domain_types;
mod synonyms;

pub use domain_types::*;
pub use synonyms::*;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid API token: {reason}")]
    InvalidApiToken { reason: String },

    #[error("Invalid organization login '{login}': {reason}")]
    InvalidOrganization { login: String, reason: String },

    #[error("Invalid date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Report window starts ({start}) after it ends ({end})")]
    InvertedWindow { start: String, end: String },

    #[error("Field name(s) listed as both actual and estimate: {}", names.join(", "))]
    OverlappingSynonyms { names: Vec<String> },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Empty required field: {0}")]
    EmptyField(&'static str),

    #[error("Value out of bounds: {value}, expected {min}..={max}")]
    OutOfBounds { value: u64, min: u64, max: u64 },
}
