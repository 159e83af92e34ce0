// src/aggregate.rs
//! Concurrent extraction across every eligible project.
//!
//! Projects are fetched on a bounded set of tokio tasks. A project whose
//! extraction fails is logged and contributes nothing; the others still
//! report.

use crate::api::GraphQlTransport;
use crate::config::ExtractionContext;
use crate::extract::extract_tasks;
use crate::model::{ProjectSummary, TaskRecord};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinSet};

/// Rows from every project that succeeded, plus the numbers of those that
/// did not.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub rows: Vec<TaskRecord>,
    pub failed_projects: Vec<u64>,
}

/// Extracts tasks from all `projects`, at most `ctx.concurrency` at a time.
///
/// Rows are concatenated in completion order. Failures never propagate.
pub async fn aggregate(
    transport: Arc<dyn GraphQlTransport>,
    ctx: Arc<ExtractionContext>,
    projects: Vec<ProjectSummary>,
) -> Vec<TaskRecord> {
    aggregate_projects(transport, ctx, projects).await.rows
}

/// Same as [`aggregate`], also reporting which projects failed or panicked.
pub async fn aggregate_projects(
    transport: Arc<dyn GraphQlTransport>,
    ctx: Arc<ExtractionContext>,
    projects: Vec<ProjectSummary>,
) -> Aggregation {
    let permits = Arc::new(Semaphore::new(ctx.concurrency.max(1)));
    let project_count = projects.len();
    let mut join_set = JoinSet::new();
    let mut spawned: HashMap<Id, u64> = HashMap::with_capacity(project_count);

    for project in projects {
        let transport = Arc::clone(&transport);
        let ctx = Arc::clone(&ctx);
        let permits = Arc::clone(&permits);
        let number = project.number;

        let handle = join_set.spawn(async move {
            // Closed only if the semaphore is dropped, which cannot happen while tasks hold it.
            let _permit = permits.acquire_owned().await.ok();
            let outcome = extract_tasks(transport.as_ref(), &ctx, &project).await;
            (project, outcome)
        });
        spawned.insert(handle.id(), number);
    }

    let mut result = Aggregation::default();

    while let Some(joined) = join_set.join_next().await {
        match joined {
            Ok((_, Ok(tasks))) => result.rows.extend(tasks),
            Ok((project, Err(e))) => {
                result.failed_projects.push(project.number);
                log::error!(
                    "Failed to extract tasks from project #{} ({}): {}",
                    project.number,
                    project.title,
                    e
                );
            }
            Err(e) => match spawned.get(&e.id()) {
                Some(&number) => {
                    result.failed_projects.push(number);
                    log::error!("Extraction task for project #{} did not finish: {}", number, e);
                }
                None => log::error!("Extraction task did not finish: {}", e),
            },
        }
    }

    log::info!(
        "Collected {} task(s) from {} project(s), {} failed",
        result.rows.len(),
        project_count,
        result.failed_projects.len()
    );

    result
}
