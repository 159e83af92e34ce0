// src/output/types.rs
//! Value types produced by report rendering and delivery.

use crate::model::HourTotals;
use std::path::PathBuf;

/// One rendered workbook, held in memory until it is archived.
#[derive(Debug, Clone)]
pub struct WorkbookFile {
    /// Entry name inside the archive.
    pub file_name: String,
    pub assignee: String,
    pub bytes: Vec<u8>,
    /// Totals over every row of the workbook's summary sheet.
    pub totals: HourTotals,
}

/// Result of writing the archive.
#[derive(Debug, Clone)]
pub struct ArchiveReport {
    pub path: PathBuf,
    /// Entry names in write order.
    pub entries: Vec<String>,
    pub bytes_written: u64,
    pub duration_ms: u64,
}
