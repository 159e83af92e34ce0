// src/model/task.rs
use super::ProjectKey;
use chrono::{DateTime, Utc};

/// One issue on a project board, normalized into a report row.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub project_key: ProjectKey,
    pub issue_number: u64,
    pub title: String,
    pub repository: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Assignee logins in API order, without duplicates.
    pub assignees: Vec<String>,
    pub actual_hours: f64,
    pub estimate_hours: f64,
}

impl TaskRecord {
    pub fn is_assigned_to(&self, login: &str) -> bool {
        self.assignees.iter().any(|assignee| assignee == login)
    }

    /// Assignees as a single cell value.
    pub fn assignee_list(&self) -> String {
        self.assignees.join(", ")
    }
}

/// Summed hours over a set of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HourTotals {
    pub estimate: f64,
    pub actual: f64,
    pub tasks: usize,
}

impl HourTotals {
    pub fn of<'a, I>(tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a TaskRecord>,
    {
        tasks.into_iter().fold(Self::default(), |totals, task| Self {
            estimate: totals.estimate + task.estimate_hours,
            actual: totals.actual + task.actual_hours,
            tasks: totals.tasks + 1,
        })
    }

    pub fn merge(self, other: Self) -> Self {
        Self {
            estimate: self.estimate + other.estimate,
            actual: self.actual + other.actual,
            tasks: self.tasks + other.tasks,
        }
    }
}
