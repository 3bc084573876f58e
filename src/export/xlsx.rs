// src/export/xlsx.rs

use crate::core::{EMPTY, WeeklyGrid};
use crate::errors::{AppError, AppResult};
use crate::export::model::{grid_headers, grid_table};
use crate::models::Schedule;
use crate::ui::messages::info;
use crate::utils::colors::{contrast_for, parse_hex};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: weekday header, category row, then one row per slot with
/// every cell filled in its activity color.
pub(crate) fn export_xlsx(grid: &WeeklyGrid, schedule: &Schedule, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Weekly schedule").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = grid_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    // ---------------------------
    // Category row
    // ---------------------------
    let category_format = Format::new()
        .set_italic()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    worksheet
        .write_with_format(1, 0, "category", &category_format)
        .map_err(to_app_error)?;

    for (i, day) in grid.days().iter().enumerate() {
        let col = i + 1;
        worksheet
            .write_with_format(1, col as u16, day.pattern_title.as_str(), &category_format)
            .map_err(to_app_error)?;
        col_widths[col] = col_widths[col].max(day.pattern_title.width());
    }

    worksheet.set_freeze_panes(2, 1).map_err(to_app_error)?;

    // ---------------------------
    // Slot rows
    // ---------------------------
    for (r, values) in grid_table(grid).iter().enumerate() {
        let row = (r + 2) as u32;

        for (col, value) in values.iter().enumerate() {
            let fmt = if col == 0 {
                Format::new().set_border(FormatBorder::Thin)
            } else {
                activity_format(value, schedule)?
            };

            worksheet
                .write_with_format(row, col as u16, value.as_str(), &fmt)
                .map_err(to_app_error)?;

            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    Ok(())
}

fn activity_format(id: &str, schedule: &Schedule) -> AppResult<Format> {
    let base = Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    if id == EMPTY {
        return Ok(base);
    }

    let color = schedule.color_of(id)?;

    Ok(match parse_hex(color) {
        Some((r, g, b)) => {
            let rgb = ((r as u32) << 16) | ((g as u32) << 8) | b as u32;
            let font = match contrast_for(r, g, b) {
                ansi_term::Colour::Black => 0x000000,
                _ => 0xFFFFFF,
            };
            base.set_background_color(Color::RGB(rgb))
                .set_pattern(FormatPattern::Solid)
                .set_font_color(Color::RGB(font))
        }
        None => base,
    })
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
