// src/output/mod.rs
//! Report rendering and delivery.
//!
//! Workbooks are composed in memory (pure apart from logging); only the
//! archive writer performs I/O.

mod archive;
mod paths;
mod types;
mod workbook;

pub use archive::write_archive;
pub use paths::default_archive_name;
pub use types::{ArchiveReport, WorkbookFile};
pub use workbook::compose_workbook;
