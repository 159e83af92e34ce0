// src/output/archive.rs
//! The only place report files touch the disk.

use super::types::{ArchiveReport, WorkbookFile};
use crate::error::AppError;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packs the workbooks into a single deflate-compressed zip at `path`.
///
/// Parent directories are created as needed and an existing file is
/// replaced. An empty workbook list is an error and leaves no file behind.
pub fn write_archive(path: &Path, workbooks: &[WorkbookFile]) -> Result<ArchiveReport, AppError> {
    if workbooks.is_empty() {
        return Err(AppError::NothingGenerated);
    }

    let start_time = Instant::now();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    log::debug!(
        "Writing {} workbook(s) to {}",
        workbooks.len(),
        path.display()
    );

    let mut zip = ZipWriter::new(BufWriter::new(File::create(path)?));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut entries = Vec::with_capacity(workbooks.len());

    for workbook in workbooks {
        zip.start_file(workbook.file_name.as_str(), options)?;
        zip.write_all(&workbook.bytes)?;
        entries.push(workbook.file_name.clone());
    }

    zip.finish()?.flush()?;
    let bytes_written = fs::metadata(path)?.len();
    let duration_ms = start_time.elapsed().as_millis() as u64;

    log::info!(
        "Archive ready: {} ({} entries, {} bytes in {}ms)",
        path.display(),
        entries.len(),
        bytes_written,
        duration_ms
    );

    Ok(ArchiveReport {
        path: path.to_path_buf(),
        entries,
        bytes_written,
        duration_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HourTotals;

    #[test]
    fn empty_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports.zip");

        let result = write_archive(&path, &[]);

        assert!(matches!(result, Err(AppError::NothingGenerated)));
        assert!(!path.exists());
    }

    #[test]
    fn entries_keep_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("reports.zip");
        let file = |name: &str| WorkbookFile {
            file_name: name.to_string(),
            assignee: "x".to_string(),
            bytes: b"content".to_vec(),
            totals: HourTotals::default(),
        };

        let report = write_archive(&path, &[file("b.xlsx"), file("a.xlsx")]).unwrap();

        assert_eq!(report.entries, vec!["b.xlsx", "a.xlsx"]);
        assert!(report.bytes_written > 0);
        assert!(path.exists());
    }
}
