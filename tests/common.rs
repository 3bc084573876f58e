#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use shiftclock::config::{Config, ConfigInterval, ConfigPattern};
use shiftclock::models::{DayCategory, Interval, Schedule, SchedulePattern, Weekday};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn shc() -> Command {
    cargo_bin_cmd!("shiftclock")
}

/// Write `cfg` as JSON into the system temp dir and return its path.
pub fn temp_config(name: &str, cfg: &Config) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_shiftclock.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, serde_json::to_string_pretty(cfg).expect("serialize config")).expect("write config");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn iv(id: &str, start: &str, end: &str) -> Interval {
    Interval::parse(id, start, end, "#000000").expect("valid interval")
}

/// One single-interval pattern per day category, id = short label.
pub fn all_category_patterns() -> Vec<SchedulePattern> {
    DayCategory::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| SchedulePattern::new(&c.title(), vec![iv(&format!("p{i}"), "0000", "1200")]))
        .collect()
}

pub fn schedule(workdays: &[Weekday], prev: bool, next: bool) -> Schedule {
    Schedule {
        workdays: workdays.iter().copied().collect(),
        prev_week_night: prev,
        next_week_night: next,
        colors: Default::default(),
        patterns: all_category_patterns(),
    }
}

/// Small on-disk configuration: Monday and Tuesday nights worked.
pub fn mon_tue_config() -> Config {
    let ci = |id: &str, start: &str, end: &str| ConfigInterval {
        id: id.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        color: String::new(),
    };

    let titles = [
        "Night shift (Night-Any)",
        "Night shift (Off-Any)",
        "Off day (Night-Night)",
        "Off day (Night-Off)",
        "Off day (Off-Night)",
        "Off day (Off-Off)",
    ];

    let schedule_patterns = titles
        .iter()
        .map(|t| ConfigPattern {
            title: t.to_string(),
            intervals: if t.starts_with("Night shift") {
                vec![ci("asleep", "0800", "1600"), ci("work", "2200", "0600")]
            } else {
                vec![ci("asleep", "2300", "0700"), ci("awake", "0700", "2300")]
            },
        })
        .collect();

    Config {
        workdays: vec!["Monday".into(), "Tuesday".into()],
        prev_week_night: false,
        next_week_night: false,
        colors: [
            ("work", "#c0392b"),
            ("asleep", "#2c3e50"),
            ("awake", "#27ae60"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect(),
        schedule_patterns,
    }
}
