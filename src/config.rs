// src/config.rs
use crate::constants::{
    DEFAULT_CONCURRENCY, GITHUB_API_MAX_PAGE_SIZE, GITHUB_API_PAGE_SIZE, GITHUB_GRAPHQL_ENDPOINT,
    MAX_CONCURRENCY, REQUEST_TIMEOUT_SECS, TOKEN_ENV_VAR,
};
use crate::error::AppError;
use crate::types::{ApiEndpoint, ApiToken, MetricSynonyms, OrgLogin, ReportWindow, ValidationError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed command-line input.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// First day of the report window (YYYY-MM-DD); also the project recency cut-off
    #[arg(short, long)]
    pub start: String,

    /// Last day of the report window (YYYY-MM-DD), inclusive
    #[arg(short, long)]
    pub end: String,

    /// Only build the report for this GitHub login
    #[arg(short, long)]
    pub assignee: Option<String>,

    /// Output zip file (defaults to reports_<start>_<end>.zip)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GitHub organization whose projects are scanned
    #[arg(long, env = "GITHUB_ORG")]
    pub org: String,

    /// GraphQL endpoint (override for GitHub Enterprise)
    #[arg(long, default_value = GITHUB_GRAPHQL_ENDPOINT)]
    pub api_url: String,

    /// Nodes requested per GraphQL page (1-100)
    #[arg(long, default_value_t = GITHUB_API_PAGE_SIZE)]
    pub page_size: u32,

    /// Number of projects fetched concurrently (1-32)
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Comma-separated field names counted as actual hours (replaces the defaults)
    #[arg(long, value_delimiter = ',')]
    pub actual_names: Vec<String>,

    /// Comma-separated field names counted as estimated hours (replaces the defaults)
    #[arg(long, value_delimiter = ',')]
    pub estimate_names: Vec<String>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved run configuration, validated and threaded through every stage.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub token: ApiToken,
    pub endpoint: ApiEndpoint,
    pub timeout: Duration,
    pub output: PathBuf,
    pub assignee: Option<String>,
    pub verbose: bool,
    pub extraction: ExtractionContext,
}

/// What discovery, extraction and aggregation need to know about a run.
#[derive(Debug, Clone)]
pub struct ExtractionContext {
    pub org: OrgLogin,
    pub window: ReportWindow,
    pub synonyms: MetricSynonyms,
    pub page_size: u32,
    pub concurrency: usize,
}

impl ExtractionContext {
    pub fn new(org: OrgLogin, window: ReportWindow) -> Self {
        Self {
            org,
            window,
            synonyms: MetricSynonyms::default(),
            page_size: GITHUB_API_PAGE_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl ReportConfig {
    /// Resolves a complete configuration from CLI input and the environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
            AppError::MissingConfiguration(format!(
                "{} environment variable not set",
                TOKEN_ENV_VAR
            ))
        })?;
        Self::from_parts(cli, &token)
    }

    /// Validates CLI input together with an already obtained token.
    pub fn from_parts(cli: CommandLineInput, token: &str) -> Result<Self, AppError> {
        let token = ApiToken::new(token)?;
        let org = OrgLogin::new(cli.org)?;
        let window = ReportWindow::parse(&cli.start, &cli.end)?;
        let endpoint = ApiEndpoint::parse(&cli.api_url)?;

        let page_size = check_bounds(cli.page_size as u64, 1, GITHUB_API_MAX_PAGE_SIZE as u64)?;
        let concurrency = check_bounds(cli.concurrency as u64, 1, MAX_CONCURRENCY as u64)?;
        let timeout_secs = check_bounds(cli.timeout_secs, 1, 600)?;

        let synonyms = resolve_synonyms(cli.actual_names, cli.estimate_names)?;

        let assignee = cli
            .assignee
            .map(|login| login.trim().to_string())
            .filter(|login| !login.is_empty());

        let output = cli
            .output
            .unwrap_or_else(|| PathBuf::from(crate::output::default_archive_name(&window)));

        Ok(ReportConfig {
            token,
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            output,
            assignee,
            verbose: cli.verbose,
            extraction: ExtractionContext {
                org,
                window,
                synonyms,
                page_size: page_size as u32,
                concurrency: concurrency as usize,
            },
        })
    }
}

fn check_bounds(value: u64, min: u64, max: u64) -> Result<u64, ValidationError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::OutOfBounds { value, min, max })
    }
}

/// Explicit names replace the default set for that metric only.
fn resolve_synonyms(
    actual: Vec<String>,
    estimate: Vec<String>,
) -> Result<MetricSynonyms, ValidationError> {
    if actual.is_empty() && estimate.is_empty() {
        return Ok(MetricSynonyms::default());
    }

    let defaults = MetricSynonyms::default();
    let actual = if actual.is_empty() {
        defaults.actual_names().map(str::to_string).collect()
    } else {
        actual
    };
    let estimate = if estimate.is_empty() {
        defaults.estimate_names().map(str::to_string).collect()
    } else {
        estimate
    };

    MetricSynonyms::new(actual, estimate)
}
