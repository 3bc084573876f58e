use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the example configuration.
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        info(format!("Writing example configuration to {}", path.display()));
        Config::init_file(path, *force)?;
        success(format!("Config file: {}", path.display()));
        info("Edit workdays, colors and schedule_patterns, then run `shiftclock show`.");
    }
    Ok(())
}
