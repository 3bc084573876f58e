use crate::cli::parser::Commands;
use crate::core::{EMPTY, WeeklyGrid, build_weekly_grid};
use crate::errors::AppResult;
use crate::models::{Schedule, Weekday};
use crate::utils::colors::{grey, paint_cell};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use crate::utils::time::slot_label;
use std::collections::BTreeMap;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Show { plain, totals } = cmd {
        let schedule = super::load_schedule(path)?;
        let grid = build_weekly_grid(&schedule)?;

        print!("{}", render_grid(&grid, &schedule, *plain)?);

        if *totals {
            println!();
            print!("{}", render_totals(&grid));
        }
    }
    Ok(())
}

/// Resolve a color for every non-empty id in the grid up front, so a
/// missing one fails before anything is printed.
fn resolve_colors<'a>(grid: &WeeklyGrid, schedule: &'a Schedule) -> AppResult<BTreeMap<String, &'a str>> {
    let mut colors = BTreeMap::new();
    for id in grid.totals().into_keys() {
        if id != EMPTY {
            let color = schedule.color_of(&id)?;
            colors.insert(id, color);
        }
    }
    Ok(colors)
}

pub fn render_grid(grid: &WeeklyGrid, schedule: &Schedule, plain: bool) -> AppResult<String> {
    let colors = if plain {
        BTreeMap::new()
    } else {
        resolve_colors(grid, schedule)?
    };

    let width = grid
        .totals()
        .keys()
        .map(|id| id.width())
        .chain(Weekday::ALL.iter().map(|d| d.name().len()))
        .max()
        .unwrap_or(9);

    let mut columns = vec![Column::new("Time", 5)];
    columns.extend(Weekday::ALL.iter().map(|d| Column::new(d.name(), width)));
    let mut table = Table::new(columns);

    for (slot, ids) in grid.rows().into_iter().enumerate() {
        let mut row = vec![slot_label(slot)];
        row.extend(ids.into_iter().map(str::to_string));
        table.add_row(row);
    }

    let body = table.render_with(|_, col, raw, padded| {
        if plain || col == 0 {
            return padded;
        }
        match colors.get(raw) {
            Some(color) => paint_cell(&padded, color),
            None => grey(&padded),
        }
    });

    let mut out = String::new();
    out.push_str(&format!("{:<5} ", ""));
    for d in grid.days() {
        let title = d.pattern_title.replace("Night shift", "Shift").replace("Off day", "Off");
        let title: String = title.chars().take(width).collect();
        out.push_str(&format!("{:<width$} ", title, width = width));
    }
    out.push('\n');
    out.push_str(&body);
    Ok(out)
}

fn render_totals(grid: &WeeklyGrid) -> String {
    let mut table = Table::new(vec![Column::new("Activity", 12), Column::new("Week", 9)]);
    for (id, mins) in grid.totals() {
        table.add_row(vec![id, mins2readable(mins, false)]);
    }
    table.render()
}
