// src/pipeline.rs
//! Pipeline capability traits and the report run that drives them.
//!
//! Each trait describes a single stage (collect, render, deliver) so stages
//! can be exercised in isolation.

use crate::aggregate::aggregate;
use crate::api::GraphQlTransport;
use crate::config::{ExtractionContext, ReportConfig};
use crate::discovery::list_eligible_projects;
use crate::error::AppError;
use crate::model::{HourTotals, ProjectSummary, TaskRecord};
use crate::output::{compose_workbook, write_archive, ArchiveReport, WorkbookFile};
use crate::partition::partition;
use std::fmt;
use std::sync::Arc;

/// Collects task rows from GitHub.
#[async_trait::async_trait]
pub trait TaskSource {
    async fn discover(&self) -> Result<Vec<ProjectSummary>, AppError>;
    async fn harvest(&self, projects: Vec<ProjectSummary>) -> Vec<TaskRecord>;
}

/// Renders one assignee's rows into a workbook.
pub trait ReportComposer {
    fn compose(&self, assignee: &str, tasks: &[&TaskRecord]) -> Result<WorkbookFile, AppError>;
}

/// Delivers rendered workbooks to their destination.
pub trait ReportDelivery {
    fn deliver(&self, workbooks: &[WorkbookFile]) -> Result<ArchiveReport, AppError>;
}

/// Why a run ended without writing an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NothingToReport {
    NoEligibleProjects,
    NoTasksInWindow,
    NoAssignedTasks,
    AssigneeHasNoTasks(String),
}

impl fmt::Display for NothingToReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NothingToReport::NoEligibleProjects => {
                f.write_str("no projects were updated within the window")
            }
            NothingToReport::NoTasksInWindow => f.write_str("no tasks were created within the window"),
            NothingToReport::NoAssignedTasks => f.write_str("no task in the window has an assignee"),
            NothingToReport::AssigneeHasNoTasks(login) => {
                write!(f, "no tasks found for assignee {}", login)
            }
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Delivered(ArchiveReport),
    NothingToReport(NothingToReport),
}

/// One report run: discovery, aggregation, partitioning, rendering and
/// archiving, in that order.
pub struct ReportPipeline {
    transport: Arc<dyn GraphQlTransport>,
    extraction: Arc<ExtractionContext>,
    config: ReportConfig,
}

impl ReportPipeline {
    pub fn new(config: ReportConfig, transport: Arc<dyn GraphQlTransport>) -> Self {
        Self {
            transport,
            extraction: Arc::new(config.extraction.clone()),
            config,
        }
    }

    pub async fn run(&self) -> Result<RunOutcome, AppError> {
        let projects = self.discover().await?;
        if projects.is_empty() {
            return Ok(RunOutcome::NothingToReport(
                NothingToReport::NoEligibleProjects,
            ));
        }

        let tasks = self.harvest(projects).await;
        if tasks.is_empty() {
            return Ok(RunOutcome::NothingToReport(NothingToReport::NoTasksInWindow));
        }

        let groups = partition(&tasks, self.config.assignee.as_deref());
        if groups.values().all(Vec::is_empty) {
            let reason = match &self.config.assignee {
                Some(login) => NothingToReport::AssigneeHasNoTasks(login.clone()),
                None => NothingToReport::NoAssignedTasks,
            };
            return Ok(RunOutcome::NothingToReport(reason));
        }

        log::info!("Building reports for {} assignee(s)", groups.len());
        let mut workbooks = Vec::with_capacity(groups.len());
        for (login, rows) in &groups {
            if rows.is_empty() {
                log::info!("No tasks for {}, skipping", login);
                continue;
            }
            workbooks.push(self.compose(login, rows)?);
        }

        let totals = workbooks
            .iter()
            .fold(HourTotals::default(), |acc, workbook| acc.merge(workbook.totals));
        log::info!(
            "{} row(s) across {} workbook(s): {} estimated hour(s), {} actual",
            totals.tasks,
            workbooks.len(),
            totals.estimate,
            totals.actual
        );

        let report = self.deliver(&workbooks)?;
        Ok(RunOutcome::Delivered(report))
    }
}

#[async_trait::async_trait]
impl TaskSource for ReportPipeline {
    async fn discover(&self) -> Result<Vec<ProjectSummary>, AppError> {
        list_eligible_projects(self.transport.as_ref(), &self.extraction).await
    }

    async fn harvest(&self, projects: Vec<ProjectSummary>) -> Vec<TaskRecord> {
        aggregate(
            Arc::clone(&self.transport),
            Arc::clone(&self.extraction),
            projects,
        )
        .await
    }
}

impl ReportComposer for ReportPipeline {
    fn compose(&self, assignee: &str, tasks: &[&TaskRecord]) -> Result<WorkbookFile, AppError> {
        compose_workbook(assignee, tasks, &self.extraction.window)
    }
}

impl ReportDelivery for ReportPipeline {
    fn deliver(&self, workbooks: &[WorkbookFile]) -> Result<ArchiveReport, AppError> {
        write_archive(&self.config.output, workbooks)
    }
}

/// Runs a full report with the given configuration and transport.
pub async fn execute_pipeline(
    config: ReportConfig,
    transport: Arc<dyn GraphQlTransport>,
) -> Result<RunOutcome, AppError> {
    log::info!(
        "Reporting on {} for {}",
        config.extraction.org,
        config.extraction.window
    );
    ReportPipeline::new(config, transport).run().await
}
