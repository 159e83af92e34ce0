// src/partition.rs
//! Splitting collected rows into per-assignee report groups.

use crate::model::{ProjectKey, TaskRecord};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Groups tasks by assignee login.
///
/// A task with several assignees appears in each of their groups, so hours
/// are counted once per assignee. Unassigned tasks appear in no group. With
/// `only` set, the result holds exactly that login's group, which is empty
/// when the login has no tasks.
pub fn partition<'a>(
    tasks: &'a [TaskRecord],
    only: Option<&str>,
) -> BTreeMap<String, Vec<&'a TaskRecord>> {
    let mut groups: BTreeMap<String, Vec<&'a TaskRecord>> = BTreeMap::new();

    if let Some(login) = only {
        let rows = tasks.iter().filter(|t| t.is_assigned_to(login)).collect();
        groups.insert(login.to_string(), rows);
        return groups;
    }

    for task in tasks {
        for login in &task.assignees {
            groups.entry(login.clone()).or_default().push(task);
        }
    }

    groups
}

/// Groups rows by project, keeping projects in first-seen order.
pub fn group_by_project<'a, I>(tasks: I) -> IndexMap<&'a ProjectKey, Vec<&'a TaskRecord>>
where
    I: IntoIterator<Item = &'a TaskRecord>,
{
    let mut groups: IndexMap<&'a ProjectKey, Vec<&'a TaskRecord>> = IndexMap::new();
    for task in tasks {
        groups.entry(&task.project_key).or_default().push(task);
    }
    groups
}
