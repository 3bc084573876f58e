pub mod classify;
pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod now;
pub mod show;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Schedule;
use std::path::Path;

/// Load the configuration at `path` and convert it into a schedule.
pub(crate) fn load_schedule(path: &Path) -> AppResult<Schedule> {
    Config::load(path)?.to_schedule()
}
