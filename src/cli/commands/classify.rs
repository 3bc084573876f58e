use crate::cli::parser::Commands;
use crate::core::classify_week;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use std::path::Path;

/// Handle the `classify` command: one line per weekday.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Classify = cmd {
        let schedule = super::load_schedule(path)?;

        let mut table = Table::new(vec![
            Column::new("Day", 10),
            Column::new("Worked", 7),
            Column::new("Category", 24),
            Column::new("Pattern", 8),
        ]);

        for (day, category) in classify_week(&schedule) {
            let title = category.title();
            let found = if schedule.pattern(&title).is_some() {
                "ok"
            } else {
                "MISSING"
            };
            table.add_row(vec![
                day.name().to_string(),
                if category.is_work_day() { "yes" } else { "no" }.to_string(),
                title,
                found.to_string(),
            ]);
        }

        print!("{}", table.render());
    }
    Ok(())
}
