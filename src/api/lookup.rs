// src/api/lookup.rs
//! Safe navigation through GraphQL response envelopes.
//!
//! GitHub answers partial permissions and unknown numbers with `null`s or
//! missing keys deep inside `data`. Every lookup here yields `None` for an
//! absent segment instead of failing.

use super::types::PaginatedResponse;
use serde_json::Value;

/// Follows a dotted path (`"organization.projectV2.items"`) from `root`.
///
/// Returns `None` as soon as a segment is missing, `null`, or the current
/// node is not an object.
pub fn walk<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|segment| !segment.is_empty())
        .try_fold(root, |node, segment| node.get(segment))
        .filter(|node| !node.is_null())
}

/// Reads the connection at `data.<path>` out of a response envelope.
///
/// A missing connection reads as an empty last page. `null` entries in the
/// node list are dropped.
pub(super) fn connection_page(envelope: &Value, path: &str) -> PaginatedResponse<Value> {
    let Some(connection) = envelope.get("data").and_then(|data| walk(data, path)) else {
        log::debug!("No connection at data.{}, treating as empty page", path);
        return PaginatedResponse::empty();
    };

    let results = connection
        .get("nodes")
        .and_then(Value::as_array)
        .map(|nodes| nodes.iter().filter(|n| !n.is_null()).cloned().collect())
        .unwrap_or_default();

    let page_info = connection.get("pageInfo");
    let has_next_page = page_info
        .and_then(|info| info.get("hasNextPage"))
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let end_cursor = page_info
        .and_then(|info| info.get("endCursor"))
        .and_then(Value::as_str)
        .map(str::to_string);

    PaginatedResponse {
        results,
        has_next_page,
        end_cursor,
    }
}

/// Logs GraphQL-level `errors` reported alongside a 2xx envelope.
pub(super) fn log_graphql_errors(envelope: &Value) {
    let Some(errors) = envelope.get("errors").and_then(Value::as_array) else {
        return;
    };
    for error in errors {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("<no message>");
        log::warn!("GraphQL error: {}", message);
    }
}
