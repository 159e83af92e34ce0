// src/api/responses.rs
//! Typed views of the GraphQL nodes returned by the project queries.
//!
//! Every field is optional or defaults to empty: GitHub leaves fragments it
//! could not apply as `{}` (e.g. a pull request under `... on Issue`) and
//! returns `null` for content the token cannot see.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// A GraphQL connection reduced to its node list.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Option<T>>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> Connection<T> {
    /// Present (non-null) nodes.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.nodes.iter().flatten()
    }
}

/// Node of `organization.projectsV2`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectNode {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub updated_at: Option<String>,
}

/// Node of `organization.projectV2.items`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItemNode {
    pub content: Option<IssueContent>,
    #[serde(deserialize_with = "null_as_default")]
    pub field_values: Connection<FieldValueNode>,
}

/// The `... on Issue` fragment of an item's content.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IssueContent {
    pub number: Option<u64>,
    pub title: Option<String>,
    pub repository: Option<RepositoryRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub assignees: Connection<UserRef>,
    pub url: Option<String>,
    pub created_at: Option<String>,
}

impl IssueContent {
    /// An empty fragment means the item is a pull request or draft issue.
    pub fn is_issue(&self) -> bool {
        self.number.is_some()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RepositoryRef {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UserRef {
    pub login: Option<String>,
}

/// The `... on ProjectV2ItemFieldNumberValue` fragment of a field value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldValueNode {
    pub field: Option<FieldRef>,
    pub number: Option<f64>,
}

impl FieldValueNode {
    /// Field name and value, when both are present.
    pub fn named_number(&self) -> Option<(&str, f64)> {
        let name = self.field.as_ref()?.name.as_deref()?;
        Some((name, self.number?))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldRef {
    pub name: Option<String>,
}

/// Parses a GitHub timestamp (`2024-01-15T10:00:00Z`).
///
/// Offsets other than `Z` are converted to UTC; a timestamp without any
/// offset is read as UTC.
pub fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    let input = input.trim();
    DateTime::parse_from_rfc3339(input)
        .map(|ts| ts.with_timezone(&Utc))
        .or_else(|err| {
            NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
                .map_err(|_| err)
        })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
