// src/error.rs
//! Application error types with structured error handling.
//!
//! Each variant names what went wrong and where. Transport failures are the
//! only kind the aggregator isolates per project; the rest abort the run.

use std::fmt;
use thiserror::Error;

/// Why the GraphQL service refused a request, derived from the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceFailure {
    /// Token missing, expired or revoked
    Unauthorized,
    /// Token lacks the `read:project` scope, or a secondary rate limit hit
    Forbidden,
    /// Endpoint or organization does not exist
    NotFound,
    /// Primary rate limit exceeded
    RateLimited,
    /// GitHub-side failure (5xx)
    ServerError(u16),
    /// Any other non-success status
    HttpStatus(u16),
}

impl ServiceFailure {
    pub fn from_http_status(status: u16) -> Self {
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::ServerError(status),
            other => Self::HttpStatus(other),
        }
    }
}

impl fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::Forbidden => write!(f, "forbidden"),
            Self::NotFound => write!(f, "not_found"),
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ServerError(code) => write!(f, "server_error_{}", code),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("GitHub API returned an error ({code}, HTTP {status}): {message}")]
    GraphQlService {
        code: ServiceFailure,
        status: u16,
        message: String,
    },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Filesystem IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("Failed to write report archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("No report workbooks were generated")]
    NothingGenerated,

    #[error("Internal error: {message}")]
    InternalError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether the failure came from talking to the API (connection, timeout
    /// or non-success status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkFailure(_) | Self::GraphQlService { .. })
    }

    pub(crate) fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            source: None,
        }
    }
}

// The message flattens the context chain; the source keeps it walkable.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalError {
            message: format!("{:#}", err),
            source: Some(err.into()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;
