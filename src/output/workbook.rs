// src/output/workbook.rs
//! Per-assignee Excel workbooks.
//!
//! Layout of every sheet: a bold header row, one row per task, then a
//! totals block (labels row, sums row) directly under the data and a
//! column chart of the sums two rows further down. Project sheets come
//! first in encounter order; the `Summary` sheet is last and carries an
//! extra leading `project` column.

use super::paths::{workbook_file_name, SheetNamer};
use super::types::WorkbookFile;
use crate::constants::{CHART_HEIGHT_PX, CHART_WIDTH_PX, SUMMARY_SHEET_NAME};
use crate::error::AppError;
use crate::model::{HourTotals, TaskRecord};
use crate::partition::group_by_project;
use crate::types::ReportWindow;
use rust_xlsxwriter::{
    Chart, ChartLegendPosition, ChartType, ColNum, Format, RowNum, Workbook, Worksheet,
};

const TASK_COLUMNS: [&str; 8] = [
    "number",
    "title",
    "repo",
    "url",
    "createdAt",
    "assignees",
    "estimate",
    "actual",
];

const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders one assignee's rows into an in-memory `.xlsx`.
pub fn compose_workbook(
    assignee: &str,
    tasks: &[&TaskRecord],
    window: &ReportWindow,
) -> Result<WorkbookFile, AppError> {
    let file_name = workbook_file_name(assignee, window);
    log::info!("Creating {} ({} task(s))", file_name, tasks.len());

    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();
    let mut namer = SheetNamer::new();
    namer.reserve(SUMMARY_SHEET_NAME);

    for (key, rows) in group_by_project(tasks.iter().copied()) {
        let sheet_name = namer.name_for(key);
        let sheet = render_sheet(&sheet_name, &rows, SheetKind::Project, &header)?;
        workbook.push_worksheet(sheet);
    }

    let summary = render_sheet(SUMMARY_SHEET_NAME, tasks, SheetKind::Summary, &header)?;
    workbook.push_worksheet(summary);

    let bytes = workbook.save_to_buffer()?;
    log::debug!("{}: {} bytes", file_name, bytes.len());

    Ok(WorkbookFile {
        file_name,
        assignee: assignee.to_string(),
        bytes,
        totals: HourTotals::of(tasks.iter().copied()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SheetKind {
    Project,
    Summary,
}

impl SheetKind {
    /// Column where the task columns start.
    fn offset(self) -> ColNum {
        match self {
            SheetKind::Project => 0,
            SheetKind::Summary => 1,
        }
    }
}

fn render_sheet(
    name: &str,
    rows: &[&TaskRecord],
    kind: SheetKind,
    header: &Format,
) -> Result<Worksheet, AppError> {
    let mut sheet = Worksheet::new();
    sheet.set_name(name)?;

    let offset = kind.offset();
    if kind == SheetKind::Summary {
        sheet.write_string_with_format(0, 0, "project", header)?;
    }
    for (i, title) in TASK_COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, offset + i as ColNum, *title, header)?;
    }

    for (i, task) in rows.iter().enumerate() {
        let row = i as RowNum + 1;
        if kind == SheetKind::Summary {
            sheet.write_string(row, 0, task.project_key.as_str())?;
        }
        write_task_row(&mut sheet, row, offset, task)?;
    }

    let totals = HourTotals::of(rows.iter().copied());
    write_totals(&mut sheet, name, rows.len() as RowNum, offset, &totals)?;

    Ok(sheet)
}

fn write_task_row(
    sheet: &mut Worksheet,
    row: RowNum,
    offset: ColNum,
    task: &TaskRecord,
) -> Result<(), AppError> {
    sheet.write_number(row, offset, task.issue_number as f64)?;
    sheet.write_string(row, offset + 1, &task.title)?;
    sheet.write_string(row, offset + 2, &task.repository)?;
    sheet.write_string(row, offset + 3, &task.url)?;
    sheet.write_string(
        row,
        offset + 4,
        task.created_at.format(CREATED_AT_FORMAT).to_string(),
    )?;
    sheet.write_string(row, offset + 5, task.assignee_list())?;
    sheet.write_number(row, offset + 6, task.estimate_hours)?;
    sheet.write_number(row, offset + 7, task.actual_hours)?;
    Ok(())
}

/// Writes the totals block under `data_rows` rows of data and charts it.
fn write_totals(
    sheet: &mut Worksheet,
    sheet_name: &str,
    data_rows: RowNum,
    offset: ColNum,
    totals: &HourTotals,
) -> Result<(), AppError> {
    let label_row = data_rows + 1;
    let sum_row = data_rows + 2;
    let estimate_col = offset + 6;
    let actual_col = offset + 7;

    sheet.write_string(label_row, estimate_col, "estimate")?;
    sheet.write_string(label_row, actual_col, "actual")?;
    sheet.write_number(sum_row, estimate_col, totals.estimate)?;
    sheet.write_number(sum_row, actual_col, totals.actual)?;

    let categories = (sheet_name, label_row, estimate_col, label_row, actual_col);
    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_name("Estimate")
        .set_categories(categories)
        .set_values((sheet_name, sum_row, estimate_col, sum_row, estimate_col));
    chart
        .add_series()
        .set_name("Actual")
        .set_categories(categories)
        .set_values((sheet_name, sum_row, actual_col, sum_row, actual_col));
    chart.title().set_name(if sheet_name == SUMMARY_SHEET_NAME {
        "Hours (Summary)"
    } else {
        "Hours"
    });
    chart.legend().set_position(ChartLegendPosition::Bottom);
    chart.set_width(CHART_WIDTH_PX).set_height(CHART_HEIGHT_PX);

    sheet.insert_chart(sum_row + 2, 0, &chart)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectKey;
    use chrono::{TimeZone, Utc};

    fn task(project: u64, title: &str, estimate: f64, actual: f64) -> TaskRecord {
        TaskRecord {
            project_key: ProjectKey::derive(project, title),
            issue_number: project * 10,
            title: "Work".to_string(),
            repository: "repo".to_string(),
            url: "https://github.com/acme/repo/issues/1".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap(),
            assignees: vec!["alice".to_string()],
            actual_hours: actual,
            estimate_hours: estimate,
        }
    }

    #[test]
    fn workbook_is_named_and_totalled() {
        let window = ReportWindow::parse("2024-01-01", "2024-01-31").unwrap();
        let rows = vec![task(42, "Sprint", 5.0, 3.0), task(7, "Backlog", 1.5, 2.0)];
        let refs: Vec<&TaskRecord> = rows.iter().collect();

        let file = compose_workbook("alice", &refs, &window).unwrap();

        assert_eq!(file.file_name, "GitHub_Report_alice_2024-01-01_2024-01-31.xlsx");
        assert_eq!(file.assignee, "alice");
        assert_eq!(file.totals.tasks, 2);
        assert_eq!(file.totals.estimate, 6.5);
        assert_eq!(file.totals.actual, 5.0);
        // xlsx files are zip containers
        assert_eq!(&file.bytes[..2], b"PK");
    }

    #[test]
    fn summary_columns_shift_by_one() {
        assert_eq!(SheetKind::Project.offset(), 0);
        assert_eq!(SheetKind::Summary.offset(), 1);
    }
}
