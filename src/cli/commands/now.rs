use crate::cli::parser::Commands;
use crate::core::build_weekly_grid;
use crate::errors::{AppError, AppResult};
use crate::models::{TimeToken, Weekday};
use crate::utils::time::{now_slot, slot_label, token_slot};
use chrono::{Datelike, Local};
use std::path::Path;

/// Handle the `now` command: today's category and the current activity.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Now { day, at } = cmd {
        let schedule = super::load_schedule(path)?;
        let grid = build_weekly_grid(&schedule)?;

        let local = Local::now();

        let weekday = match day {
            Some(name) => {
                Weekday::from_name(name).ok_or_else(|| AppError::InvalidWeekday(name.clone()))?
            }
            None => Weekday::from_chrono(local.weekday()),
        };

        let slot = match at {
            Some(token) => token_slot(TimeToken::parse(token)?),
            None => now_slot(local.time()),
        };

        let today = grid.day(weekday);
        let current = &today.activities[slot];

        let block = grid
            .blocks(weekday)
            .into_iter()
            .find(|b| (b.start_slot..b.end_slot).contains(&slot));

        println!("{} — {}", weekday.name(), today.pattern_title);
        match block {
            Some(b) => println!(
                "{} → {}: {}",
                slot_label(b.start_slot),
                slot_label(b.end_slot),
                current
            ),
            None => println!("{}: {}", slot_label(slot), current),
        }
    }
    Ok(())
}
