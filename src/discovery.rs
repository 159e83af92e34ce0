// src/discovery.rs
//! Project discovery: which of the organization's boards are worth scanning.

use crate::api::queries::{PROJECTS_PATH, PROJECTS_QUERY};
use crate::api::responses::{parse_timestamp, ProjectNode};
use crate::api::{fetch_all, GraphQlTransport};
use crate::config::ExtractionContext;
use crate::error::AppError;
use crate::model::ProjectSummary;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};

/// Lists the organization's projects updated on or after the window start.
///
/// Projects with a missing or unparseable `updatedAt` are skipped with a
/// warning. An empty result is not an error.
pub async fn list_eligible_projects(
    transport: &dyn GraphQlTransport,
    ctx: &ExtractionContext,
) -> Result<Vec<ProjectSummary>, AppError> {
    let variables = json!({ "org": ctx.org.as_str() });
    let nodes = fetch_all(
        transport,
        PROJECTS_QUERY,
        &variables,
        PROJECTS_PATH,
        ctx.page_size,
    )
    .await?;

    let total = nodes.len();
    let watermark = ctx.window.watermark();
    let eligible: Vec<ProjectSummary> = nodes
        .into_iter()
        .filter_map(summarize_project)
        .filter(|project| is_recent(project, watermark))
        .collect();

    log::info!(
        "{} of {} project(s) in {} updated since {}",
        eligible.len(),
        total,
        ctx.org,
        ctx.window.start()
    );

    Ok(eligible)
}

/// Converts a raw project node, skipping nodes that cannot be dated.
fn summarize_project(raw: Value) -> Option<ProjectSummary> {
    let node: ProjectNode = match serde_json::from_value(raw) {
        Ok(node) => node,
        Err(e) => {
            log::warn!("Skipping unreadable project node: {}", e);
            return None;
        }
    };

    let Some(number) = node.number else {
        log::warn!("Skipping project without a number");
        return None;
    };

    let updated_at = match node.updated_at.as_deref().map(parse_timestamp) {
        Some(Ok(ts)) => ts,
        Some(Err(_)) | None => {
            log::warn!("Invalid updatedAt in project #{}", number);
            return None;
        }
    };

    Some(ProjectSummary {
        number,
        title: node.title.unwrap_or_default(),
        updated_at,
    })
}

/// Whether a project counts as recent for the given watermark.
pub fn is_recent(project: &ProjectSummary, watermark: DateTime<Utc>) -> bool {
    project.updated_at >= watermark
}
