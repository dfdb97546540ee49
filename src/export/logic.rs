use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_absolute, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::build_rows;
use crate::models::{WeekReport, WeekState};
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the computed week to `file` in the requested format.
    pub fn export(
        week: &WeekState,
        report: &WeekReport,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_absolute(path)?;
        ensure_writable(path, force)?;

        let rows = build_rows(week, &report.days);

        match format {
            ExportFormat::Json => export_json(&rows, path),
            ExportFormat::Csv => export_csv(&rows, path),
        }
    }
}
