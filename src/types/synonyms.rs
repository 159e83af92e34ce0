// src/types/synonyms.rs
//! Field-name synonym sets that map project number fields onto hour metrics.

use super::ValidationError;
use crate::constants::{DEFAULT_ACTUAL_NAMES, DEFAULT_ESTIMATE_NAMES};
use std::collections::BTreeSet;

/// The hour metric a project field contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourMetric {
    Actual,
    Estimate,
}

/// Two disjoint sets of normalized (trimmed, lower-case) field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSynonyms {
    actual: BTreeSet<String>,
    estimate: BTreeSet<String>,
}

impl MetricSynonyms {
    /// Builds the sets, rejecting empty sets and names present in both.
    pub fn new<A, E, S>(actual: A, estimate: E) -> Result<Self, ValidationError>
    where
        A: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let actual = normalize_all(actual);
        let estimate = normalize_all(estimate);

        if actual.is_empty() {
            return Err(ValidationError::EmptyField("actual hours field names"));
        }
        if estimate.is_empty() {
            return Err(ValidationError::EmptyField("estimate field names"));
        }

        let overlap: Vec<String> = actual.intersection(&estimate).cloned().collect();
        if !overlap.is_empty() {
            return Err(ValidationError::OverlappingSynonyms { names: overlap });
        }

        Ok(Self { actual, estimate })
    }

    /// Which metric a raw field name belongs to, if any.
    pub fn classify(&self, field_name: &str) -> Option<HourMetric> {
        let name = normalize(field_name);
        if self.actual.contains(&name) {
            Some(HourMetric::Actual)
        } else if self.estimate.contains(&name) {
            Some(HourMetric::Estimate)
        } else {
            None
        }
    }

    pub fn actual_names(&self) -> impl Iterator<Item = &str> {
        self.actual.iter().map(String::as_str)
    }

    pub fn estimate_names(&self) -> impl Iterator<Item = &str> {
        self.estimate.iter().map(String::as_str)
    }
}

impl Default for MetricSynonyms {
    fn default() -> Self {
        Self {
            actual: normalize_all(DEFAULT_ACTUAL_NAMES),
            estimate: normalize_all(DEFAULT_ESTIMATE_NAMES),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn normalize_all<I, S>(names: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| normalize(name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ignores_case_and_padding() {
        let synonyms = MetricSynonyms::default();
        assert_eq!(synonyms.classify("  Actual Hours "), Some(HourMetric::Actual));
        assert_eq!(synonyms.classify("ACUTAL HOURS"), Some(HourMetric::Actual));
        assert_eq!(synonyms.classify("Planned Hours"), Some(HourMetric::Estimate));
        assert_eq!(synonyms.classify("hours"), Some(HourMetric::Estimate));
        assert_eq!(synonyms.classify("Story Points"), None);
    }

    #[test]
    fn default_sets_are_disjoint() {
        let defaults = MetricSynonyms::default();
        let rebuilt = MetricSynonyms::new(
            defaults.actual_names().collect::<Vec<_>>(),
            defaults.estimate_names().collect::<Vec<_>>(),
        );
        assert_eq!(rebuilt, Ok(defaults));
    }

    #[test]
    fn overlapping_sets_are_rejected() {
        let result = MetricSynonyms::new(["Hours", "actual"], ["hours ", "estimate"]);
        assert_eq!(
            result,
            Err(ValidationError::OverlappingSynonyms {
                names: vec!["hours".to_string()]
            })
        );
    }

    #[test]
    fn blank_names_do_not_count() {
        let result = MetricSynonyms::new(["  ", ""], ["estimate"]);
        assert!(matches!(result, Err(ValidationError::EmptyField(_))));
    }
}
