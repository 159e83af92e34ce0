// src/lib.rs
//! gh-project-report library: per-assignee hour reports from GitHub Projects.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ReportConfig`, `ExtractionContext`
//! - **Domain model**: `ProjectSummary`, `ProjectKey`, `TaskRecord`, `HourTotals`
//! - **API client**: `GraphQlTransport`, `GitHubHttpClient`, `fetch_all`
//! - **Collection**: `list_eligible_projects`, `extract_tasks`, `aggregate`
//! - **Reporting**: `partition`, `compose_workbook`, `write_archive`

mod aggregate;
pub mod api;
mod config;
pub mod constants;
mod discovery;
mod error;
mod extract;
mod model;
mod output;
mod partition;
mod pipeline;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, Result, ServiceFailure};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExtractionContext, ReportConfig};

// --- Domain Model ---
pub use crate::model::{HourTotals, ProjectKey, ProjectSummary, TaskRecord};

// --- Domain Types ---
pub use crate::types::{
    ApiEndpoint, ApiToken, HourMetric, MetricSynonyms, OrgLogin, ReportWindow,
};

// --- API Client ---
pub use crate::api::{fetch_all, walk, GitHubHttpClient, GraphQlTransport};

// --- Collection ---
pub use crate::aggregate::{aggregate, aggregate_projects, Aggregation};
pub use crate::discovery::{is_recent, list_eligible_projects};
pub use crate::extract::{extract_tasks, normalize_item};

// --- Reporting ---
pub use crate::output::{
    compose_workbook, default_archive_name, write_archive, ArchiveReport, WorkbookFile,
};
pub use crate::partition::{group_by_project, partition};

// --- Pipeline ---
pub use crate::pipeline::{
    execute_pipeline, NothingToReport, ReportComposer, ReportDelivery, ReportPipeline,
    RunOutcome, TaskSource,
};
