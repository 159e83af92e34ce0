// src/model/project.rs
use crate::constants::PROJECT_KEY_TITLE_LENGTH;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Characters Excel forbids in sheet names.
static UNSAFE_TITLE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\\/?*\[\]:]").expect("static pattern is valid"));

/// A project as listed by discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectSummary {
    pub number: u64,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

impl ProjectSummary {
    pub fn key(&self) -> ProjectKey {
        ProjectKey::derive(self.number, &self.title)
    }
}

/// Stable grouping key for a project: `{number}_{sanitized title}`.
///
/// The title has every character Excel rejects in sheet names replaced by
/// `_` and is cut to its first 25 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectKey(String);

impl ProjectKey {
    pub fn derive(number: u64, title: &str) -> Self {
        let sanitized = UNSAFE_TITLE_CHARS.replace_all(title, "_");
        let truncated: String = sanitized.chars().take(PROJECT_KEY_TITLE_LENGTH).collect();
        Self(format!("{}_{}", number, truncated))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
