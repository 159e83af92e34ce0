// src/api/mod.rs
//! GitHub GraphQL interaction: paging through project data.
//!
//! Business logic depends on the [`GraphQlTransport`] trait, never on HTTP
//! details, so discovery and extraction can run against a scripted transport.

pub mod client;
mod lookup;
mod pagination;
pub mod parser;
pub mod queries;
pub mod responses;
mod types;

use crate::error::AppError;
use serde_json::Value;

/// The ability to execute one GraphQL request.
///
/// Implementations return the decoded response envelope for 2xx responses
/// and a transport error for anything else.
#[async_trait::async_trait]
pub trait GraphQlTransport: Send + Sync {
    async fn execute(&self, query: &str, variables: &Value) -> Result<Value, AppError>;
}

// Re-export the public interface
pub use client::GitHubHttpClient;
pub use lookup::walk;
pub use pagination::{fetch_all, fetch_all_pages};
pub use types::{PaginatedResponse, PaginationResult};
