// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{GridExport, grid_headers, grid_table};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(format: ExportFormat, path: &Path) {
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }

    /// Infer the format from the output file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" => Ok(ExportFormat::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}
