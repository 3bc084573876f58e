use crate::cli::parser::Commands;
use crate::core::build_weekly_grid;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;
use std::path::Path;

pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let schedule = super::load_schedule(path)?;
        let grid = build_weekly_grid(&schedule)?;

        let file = expand_tilde(file).to_string_lossy().to_string();
        ExportLogic::export(&grid, &schedule, *format, &file, *force)?;
    }
    Ok(())
}
