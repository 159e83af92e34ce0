// src/extract.rs
//! Task extraction: one project's items flattened into report rows.

use crate::api::queries::{PROJECT_ITEMS_PATH, PROJECT_ITEMS_QUERY};
use crate::api::responses::{parse_timestamp, FieldValueNode, ProjectItemNode};
use crate::api::{fetch_all, GraphQlTransport};
use crate::config::ExtractionContext;
use crate::error::AppError;
use crate::model::{ProjectKey, ProjectSummary, TaskRecord};
use crate::types::{HourMetric, MetricSynonyms, ReportWindow};
use serde_json::{json, Value};

/// Fetches every item of `project` and keeps the issues created inside the
/// window.
///
/// An empty vector means the project had nothing in range; fetch failures
/// are returned as errors.
pub async fn extract_tasks(
    transport: &dyn GraphQlTransport,
    ctx: &ExtractionContext,
    project: &ProjectSummary,
) -> Result<Vec<TaskRecord>, AppError> {
    let key = project.key();
    let variables = json!({ "org": ctx.org.as_str(), "projNum": project.number });
    let items = fetch_all(
        transport,
        PROJECT_ITEMS_QUERY,
        &variables,
        PROJECT_ITEMS_PATH,
        ctx.page_size,
    )
    .await?;

    let total = items.len();
    let rows: Vec<TaskRecord> = items
        .into_iter()
        .filter_map(|raw| decode_item(&key, raw))
        .filter_map(|item| normalize_item(&key, item, &ctx.window, &ctx.synonyms))
        .collect();

    log::info!(
        "Project {}: {} of {} item(s) in window",
        key,
        rows.len(),
        total
    );

    Ok(rows)
}

fn decode_item(key: &ProjectKey, raw: Value) -> Option<ProjectItemNode> {
    serde_json::from_value(raw)
        .map_err(|e| log::warn!("Project {}: skipping unreadable item: {}", key, e))
        .ok()
}

/// Turns one project item into a row, or `None` when the item is not an
/// issue, has no readable creation time, or was created outside the window.
pub fn normalize_item(
    key: &ProjectKey,
    item: ProjectItemNode,
    window: &ReportWindow,
    synonyms: &MetricSynonyms,
) -> Option<TaskRecord> {
    let issue = item.content.filter(|content| content.is_issue())?;
    let issue_number = issue.number?;

    let created_at = match issue.created_at.as_deref().map(parse_timestamp) {
        Some(Ok(ts)) => ts,
        _ => {
            log::debug!(
                "Project {}: issue #{} has no valid createdAt, skipping",
                key,
                issue_number
            );
            return None;
        }
    };
    if !window.contains(&created_at) {
        return None;
    }

    let mut assignees: Vec<String> = Vec::new();
    for login in issue.assignees.iter().filter_map(|user| user.login.clone()) {
        if !assignees.contains(&login) {
            assignees.push(login);
        }
    }

    let (actual_hours, estimate_hours) = read_hours(item.field_values.iter(), synonyms);

    Some(TaskRecord {
        project_key: key.clone(),
        issue_number,
        title: issue.title.unwrap_or_default(),
        repository: issue.repository.and_then(|repo| repo.name).unwrap_or_default(),
        url: issue.url.unwrap_or_default(),
        created_at,
        assignees,
        actual_hours,
        estimate_hours,
    })
}

/// Picks `(actual, estimate)` from an item's number fields.
///
/// The first matching field of each metric wins; unmatched metrics are 0.
fn read_hours<'a, I>(field_values: I, synonyms: &MetricSynonyms) -> (f64, f64)
where
    I: IntoIterator<Item = &'a FieldValueNode>,
{
    let mut actual = None;
    let mut estimate = None;

    for (name, value) in field_values.into_iter().filter_map(FieldValueNode::named_number) {
        match synonyms.classify(name) {
            Some(HourMetric::Actual) => {
                actual.get_or_insert(value);
            }
            Some(HourMetric::Estimate) => {
                estimate.get_or_insert(value);
            }
            None => {}
        }
    }

    (actual.unwrap_or(0.0), estimate.unwrap_or(0.0))
}
