// src/output/paths.rs
//! Pure functions for file and sheet naming.
//!
//! Nothing here touches the filesystem.

use crate::constants::SHEET_NAME_MAX_LENGTH;
use crate::model::ProjectKey;
use crate::types::ReportWindow;
use std::collections::HashSet;

/// Default archive name for a window: `reports_{start}_{end}.zip`.
pub fn default_archive_name(window: &ReportWindow) -> String {
    format!("reports_{}.zip", window.label())
}

/// Workbook entry name: `GitHub_Report_{assignee}_{start}_{end}.xlsx`.
pub fn workbook_file_name(assignee: &str, window: &ReportWindow) -> String {
    format!(
        "GitHub_Report_{}_{}.xlsx",
        sanitize_filename(assignee),
        window.label()
    )
}

/// Sanitizes a string to be safe for use in a filename.
pub fn sanitize_filename(name: &str) -> String {
    let safe_name: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let safe_name = safe_name.trim().trim_matches('.');
    if safe_name.is_empty() {
        "unnamed".to_string()
    } else {
        safe_name.to_string()
    }
}

/// Hands out worksheet names that are unique within one workbook.
///
/// Excel compares sheet names case-insensitively and caps them at 31
/// characters, so two long project keys can collide after truncation. A name
/// may not start or end with an apostrophe.
#[derive(Debug, Default)]
pub struct SheetNamer {
    taken: HashSet<String>,
}

impl SheetNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves a fixed name such as the summary sheet.
    pub fn reserve(&mut self, name: &str) {
        self.taken.insert(name.to_lowercase());
    }

    /// Returns the key cut to 31 characters, suffixed `~2`, `~3`, ... on collision.
    pub fn name_for(&mut self, key: &ProjectKey) -> String {
        let base = unquote_edges(truncate_chars(key.as_str(), SHEET_NAME_MAX_LENGTH));
        if self.taken.insert(base.to_lowercase()) {
            return base;
        }

        let mut counter = 2usize;
        loop {
            let suffix = format!("~{}", counter);
            let stem = truncate_chars(key.as_str(), SHEET_NAME_MAX_LENGTH - suffix.len());
            let candidate = unquote_edges(format!("{}{}", stem, suffix));
            if self.taken.insert(candidate.to_lowercase()) {
                return candidate;
            }
            counter += 1;
        }
    }
}

fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Swaps a leading or trailing `'` for `_`.
fn unquote_edges(name: String) -> String {
    let last = name.chars().count().saturating_sub(1);
    name.chars()
        .enumerate()
        .map(|(i, c)| if c == '\'' && (i == 0 || i == last) { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> ReportWindow {
        ReportWindow::parse("2024-01-01", "2024-01-31").unwrap()
    }

    #[test]
    fn file_names_carry_the_window() {
        assert_eq!(default_archive_name(&window()), "reports_2024-01-01_2024-01-31.zip");
        assert_eq!(
            workbook_file_name("alice", &window()),
            "GitHub_Report_alice_2024-01-01_2024-01-31.xlsx"
        );
    }

    #[test]
    fn sanitize_replaces_path_separators() {
        assert_eq!(sanitize_filename("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_filename(" .. "), "unnamed");
    }

    #[test]
    fn sheet_names_are_truncated_and_deduplicated() {
        let mut namer = SheetNamer::new();
        namer.reserve("Summary");

        let first = ProjectKey::derive(1234567, "Quarterly planning board A");
        let second = ProjectKey::derive(1234567, "Quarterly planning boarXX");
        assert_ne!(first, second);

        let a = namer.name_for(&first);
        let b = namer.name_for(&second);

        assert_eq!(a, "1234567_Quarterly planning boar");
        assert_eq!(b, "1234567_Quarterly planning bo~2");
        assert_eq!(b.chars().count(), 31);
    }

    #[test]
    fn reserved_names_are_skipped_case_insensitively() {
        let mut namer = SheetNamer::new();
        namer.reserve("5_X");
        assert_eq!(namer.name_for(&ProjectKey::derive(5, "x")), "5_x~2");
        assert_eq!(namer.name_for(&ProjectKey::derive(5, "x")), "5_x~3");
    }

    #[test]
    fn apostrophes_at_the_edges_are_replaced() {
        let mut namer = SheetNamer::new();
        assert_eq!(
            namer.name_for(&ProjectKey::derive(3, "Release 'Q1'")),
            "3_Release 'Q1_"
        );

        // cut lands right after an apostrophe
        let key = ProjectKey::derive(1234567, "Quarterly planning boa'rd");
        assert_eq!(namer.name_for(&key), "1234567_Quarterly planning boa_");
        assert_eq!(namer.name_for(&key), "1234567_Quarterly planning bo~2");
    }

    #[test]
    fn short_keys_pass_through() {
        let mut namer = SheetNamer::new();
        assert_eq!(namer.name_for(&ProjectKey::derive(42, "Sprint")), "42_Sprint");
    }
}
