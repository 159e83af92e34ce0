// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// GitHub API boundaries
// ---------------------------------------------------------------------------

/// Public GitHub GraphQL endpoint.
pub const GITHUB_GRAPHQL_ENDPOINT: &str = "https://api.github.com/graphql";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// How many nodes one GraphQL connection page returns.
///
/// GitHub caps `first` at 100.
pub const GITHUB_API_PAGE_SIZE: u32 = 100;

/// Upper bound accepted for `--page-size`.
pub const GITHUB_API_MAX_PAGE_SIZE: u32 = 100;

/// Per-request transport timeout.
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// GitHub rejects API requests without a User-Agent header.
pub const USER_AGENT: &str = concat!("gh-project-report/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

/// Number of projects extracted at the same time by default.
pub const DEFAULT_CONCURRENCY: usize = 4;

/// Hard cap on concurrent project extractions (outbound connections).
pub const MAX_CONCURRENCY: usize = 32;

// ---------------------------------------------------------------------------
// Field-name synonyms
// ---------------------------------------------------------------------------

/// Project number-field names counted as hours actually spent.
///
/// "acutal hours" is a misspelling that exists on real boards.
pub const DEFAULT_ACTUAL_NAMES: [&str; 3] = ["actual", "actual hours", "acutal hours"];

/// Project number-field names counted as estimated hours.
pub const DEFAULT_ESTIMATE_NAMES: [&str; 5] = [
    "estimate",
    "planned hours",
    "hours",
    "estimate hours",
    "estimates",
];

// ---------------------------------------------------------------------------
// Report layout
// ---------------------------------------------------------------------------

/// Characters of a project title kept in its project key.
pub const PROJECT_KEY_TITLE_LENGTH: usize = 25;

/// Excel's limit on worksheet names.
pub const SHEET_NAME_MAX_LENGTH: usize = 31;

/// Name of the per-assignee sheet holding every task.
pub const SUMMARY_SHEET_NAME: &str = "Summary";

/// Charts are inserted at 1.5x Excel's default 480x288 size.
pub const CHART_WIDTH_PX: u32 = 720;
pub const CHART_HEIGHT_PX: u32 = 432;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing error response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
