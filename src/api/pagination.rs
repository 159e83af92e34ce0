// src/api/pagination.rs
//! Cursor pagination over GraphQL connections.

use super::lookup::{connection_page, log_graphql_errors};
use super::types::{PaginatedResponse, PaginationResult};
use super::GraphQlTransport;
use crate::error::AppError;
use serde_json::Value;

/// Drives `fetch_fn` from a null cursor until the connection is exhausted.
///
/// `fetch_fn` receives the cursor for the next page. The first error aborts
/// the whole walk; no partial result is returned.
pub async fn fetch_all_pages<T, F, Fut>(mut fetch_fn: F) -> Result<PaginationResult<T>, AppError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;

    loop {
        let response = fetch_fn(cursor).await?;
        pages_fetched += 1;

        let has_next_page = response.has_next_page;
        cursor = response.end_cursor;
        all_items.extend(response.results);

        if !has_next_page {
            break;
        }
        if cursor.is_none() {
            log::warn!(
                "Connection reported another page without an end cursor; stopping after {} page(s)",
                pages_fetched
            );
            break;
        }
    }

    Ok(PaginationResult {
        items: all_items,
        pages_fetched,
    })
}

/// Fetches every node of the connection found at `data.<path>`.
///
/// Each request sends `query` with `variables` plus `first = page_size` and
/// `after = <cursor>`; only the cursor changes between requests. Nodes come
/// back as opaque JSON in API order.
pub async fn fetch_all(
    transport: &dyn GraphQlTransport,
    query: &str,
    variables: &Value,
    path: &str,
    page_size: u32,
) -> Result<Vec<Value>, AppError> {
    let base = variables.as_object().cloned().ok_or_else(|| {
        AppError::internal(format!(
            "GraphQL variables for {} must be a JSON object",
            path
        ))
    })?;

    let result = fetch_all_pages(|cursor| {
        let mut page_variables = base.clone();
        page_variables.insert("first".to_string(), Value::from(page_size));
        page_variables.insert("after".to_string(), cursor.map_or(Value::Null, Value::from));
        let page_variables = Value::Object(page_variables);

        async move {
            let envelope = transport.execute(query, &page_variables).await?;
            log_graphql_errors(&envelope);
            Ok(connection_page(&envelope, path))
        }
    })
    .await?;

    log::debug!(
        "Fetched {} node(s) from {} in {} page(s)",
        result.items.len(),
        path,
        result.pages_fetched
    );

    Ok(result.items)
}
