// src/export/logic.rs

use crate::core::WeeklyGrid;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::Schedule;
use std::path::Path;

/// High-level export of a derived week.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `grid` to `file`.
    ///
    /// - `format`: `csv` | `json` | `xlsx`; inferred from the extension
    ///   when `None`
    /// - `file`: absolute path of the output file
    /// - `force`: overwrite without asking
    pub fn export(
        grid: &WeeklyGrid,
        schedule: &Schedule,
        format: Option<ExportFormat>,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(path)?,
        };

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(grid, path)?,
            ExportFormat::Json => export_json(grid, path)?,
            ExportFormat::Xlsx => export_xlsx(grid, schedule, path)?,
        }

        notify_export_success(format, path);
        Ok(())
    }
}
