use crate::cli::parser::Commands;
use crate::core::{clock_markers, clock_segments};
use crate::errors::{AppError, AppResult};
use crate::models::SchedulePattern;
use crate::ui::messages::{header, info};
use crate::utils::formatting::degrees;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Handle the `clock` command: the numbers a circular renderer needs.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Clock { pattern, markers } = cmd {
        let schedule = super::load_schedule(path)?;

        let selected: Vec<&SchedulePattern> = match pattern {
            Some(title) => vec![
                schedule
                    .pattern(title)
                    .ok_or_else(|| AppError::UnknownPattern(title.clone()))?,
            ],
            None => schedule.patterns.iter().collect(),
        };

        if selected.is_empty() {
            info("No schedule patterns configured.");
        }

        for (i, p) in selected.iter().enumerate() {
            if selected.len() > 1 {
                info(format!("Pattern {} of {}", i + 1, selected.len()));
            }
            header(&p.title);
            print!("{}", render_segments(p));

            if *markers {
                println!();
                print!("{}", render_markers(p));
            }
            println!();
        }
    }
    Ok(())
}

pub fn render_segments(pattern: &SchedulePattern) -> String {
    let mut table = Table::new(vec![
        Column::new("Activity", 10),
        Column::new("From", 5),
        Column::new("To", 5),
        Column::new("Duration", 8),
        Column::new("Start", 7),
        Column::new("End", 7),
        Column::new("Mid", 7),
        Column::new("Label", 7),
    ]);

    for seg in clock_segments(pattern) {
        table.add_row(vec![
            seg.id,
            seg.start.to_clock_string(),
            seg.end.to_clock_string(),
            seg.duration_string,
            degrees(seg.angle_start),
            degrees(seg.angle_end),
            degrees(seg.mid_angle),
            format!("{:.1}°", seg.label_rotation),
        ]);
    }

    table.render()
}

fn render_markers(pattern: &SchedulePattern) -> String {
    let mut table = Table::new(vec![
        Column::new("Marker", 6),
        Column::new("Angle", 7),
        Column::new("Label", 7),
    ]);

    for m in clock_markers(pattern) {
        table.add_row(vec![
            m.time.to_clock_string(),
            degrees(m.angle),
            format!("{:.1}°", m.label_rotation),
        ]);
    }

    table.render()
}
