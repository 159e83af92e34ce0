// src/api/types.rs
//! Type definitions for the API module.

/// One page of a cursor-paginated GraphQL connection.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl<T> PaginatedResponse<T> {
    /// A page with no nodes and nothing after it.
    pub fn empty() -> Self {
        Self {
            results: Vec::new(),
            has_next_page: false,
            end_cursor: None,
        }
    }
}

/// Everything collected from a connection.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub pages_fetched: u32,
}
