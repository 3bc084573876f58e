use crate::errors::{AppError, AppResult};
use crate::models::{Interval, Schedule, SchedulePattern, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod check;
mod example;

pub use check::CheckReport;

/// On-disk interval: tokens stay strings until [`Config::to_schedule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigInterval {
    pub id: String,
    pub start: String,
    pub end: String,
    #[serde(default)]
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigPattern {
    pub title: String,
    #[serde(default)]
    pub intervals: Vec<ConfigInterval>,
}

/// The configuration document, JSON (default) or YAML.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workdays: Vec<String>,
    #[serde(default)]
    pub prev_week_night: bool,
    #[serde(default)]
    pub next_week_night: bool,
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub schedule_patterns: Vec<ConfigPattern>,
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".shiftclock")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.json")
    }

    pub fn from_json(content: &str) -> AppResult<Self> {
        serde_json::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load configuration from `path`; `.yaml`/`.yml` files are read as
    /// YAML, anything else as JSON.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;

        if is_yaml(path) {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    pub fn to_text(&self, yaml: bool) -> AppResult<String> {
        if yaml {
            Ok(serde_yaml::to_string(self)?)
        } else {
            Ok(serde_json::to_string_pretty(self)?)
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let text = self.to_text(is_yaml(path))?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|_| AppError::ConfigSave(path.display().to_string()))?;
        }

        fs::write(path, text).map_err(|_| AppError::ConfigSave(path.display().to_string()))
    }

    /// Write the example configuration to `path` unless a file is already
    /// there and `force` is not set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        Self::example().save(path)
    }

    pub fn example() -> Self {
        example::example_config()
    }

    /// Convert into the typed schedule every derivation call receives.
    pub fn to_schedule(&self) -> AppResult<Schedule> {
        let workdays = self
            .workdays
            .iter()
            .map(|name| Weekday::from_name(name).ok_or_else(|| AppError::InvalidWeekday(name.clone())))
            .collect::<AppResult<BTreeSet<Weekday>>>()?;

        let patterns = self
            .schedule_patterns
            .iter()
            .map(|p| {
                let intervals = p
                    .intervals
                    .iter()
                    .map(|iv| Interval::parse(&iv.id, &iv.start, &iv.end, &iv.color))
                    .collect::<AppResult<Vec<_>>>()?;
                Ok(SchedulePattern::new(&p.title, intervals))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Schedule {
            workdays,
            prev_week_night: self.prev_week_night,
            next_week_night: self.next_week_night,
            colors: self.colors.clone(),
            patterns,
        })
    }

    pub fn check(&self) -> CheckReport {
        check::check(self)
    }
}
