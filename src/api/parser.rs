// src/api/parser.rs
//! Turns raw HTTP responses into GraphQL envelopes or transport errors.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, ServiceFailure};
use serde_json::Value;

/// Decodes a response body into a JSON envelope.
///
/// Non-success statuses become [`AppError::GraphQlService`]; a 2xx body that
/// is not JSON is [`AppError::MalformedResponse`].
pub fn parse_envelope(result: ApiResponse<String>) -> Result<Value, AppError> {
    if !result.status.is_success() {
        log::error!("HTTP {} from {}", result.status, result.url);
        return Err(AppError::GraphQlService {
            code: ServiceFailure::from_http_status(result.status.as_u16()),
            status: result.status.as_u16(),
            message: preview(&result.data),
        });
    }

    serde_json::from_str(&result.data).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", result.url, e);
        AppError::MalformedResponse(format!("{} (body: {})", e, preview(&result.data)))
    })
}

/// First characters of a body, for error messages.
fn preview(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(ERROR_BODY_PREVIEW_LENGTH).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
