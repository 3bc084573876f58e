// src/export/json_csv.rs

use crate::core::WeeklyGrid;
use crate::errors::{AppError, AppResult};
use crate::export::model::{GridExport, grid_headers, grid_table};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(grid: &WeeklyGrid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&GridExport::from_grid(grid))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

/// Export CSV: one row per 30-minute slot, one column per weekday.
pub(crate) fn export_csv(grid: &WeeklyGrid, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(grid_headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in grid_table(grid) {
        wtr.write_record(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    Ok(())
}
