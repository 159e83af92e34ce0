// src/model/mod.rs
//! Domain model: the project and task rows extracted from GitHub Projects.

mod project;
mod task;

pub use project::{ProjectKey, ProjectSummary};
pub use task::{HourTotals, TaskRecord};
