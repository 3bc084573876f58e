//! Configuration checker: reports everything that would make derivation
//! or rendering fail, without stopping at the first problem.

use super::Config;
use crate::core::classifier::classify_week;
use crate::models::{DayCategory, TimeToken, Weekday};
use regex::Regex;
use std::collections::BTreeSet;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Problems that make `show`/`export` fail.
    pub errors: Vec<String>,
    /// Problems that only affect rendering, or unused entries.
    pub warnings: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

fn hex_color_re() -> Regex {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex color regex")
}

pub(super) fn check(cfg: &Config) -> CheckReport {
    let mut report = CheckReport::default();
    let hex = hex_color_re();

    // ---------------------------
    // Workdays
    // ---------------------------
    for name in &cfg.workdays {
        if Weekday::from_name(name).is_none() {
            report.errors.push(format!("Unknown weekday in workdays: '{name}'"));
        }
    }

    // ---------------------------
    // Patterns and intervals
    // ---------------------------
    let mut titles = BTreeSet::new();
    for p in &cfg.schedule_patterns {
        if !titles.insert(p.title.as_str()) {
            report.warnings.push(format!(
                "Duplicate pattern title '{}': the last one declared is used",
                p.title
            ));
        }

        if DayCategory::from_title(&p.title).is_none() {
            report.warnings.push(format!(
                "Pattern '{}' matches no day category and is only reachable with `clock`",
                p.title
            ));
        }

        for iv in &p.intervals {
            for (label, token) in [("start", &iv.start), ("end", &iv.end)] {
                if TimeToken::parse(token).is_err() {
                    report.errors.push(format!(
                        "Pattern '{}', interval '{}': invalid {label} time '{token}'",
                        p.title, iv.id
                    ));
                }
            }

            if !cfg.colors.contains_key(&iv.id) {
                report.warnings.push(format!(
                    "Pattern '{}': activity '{}' has no entry in colors",
                    p.title, iv.id
                ));
            }

            if !iv.color.is_empty() && !hex.is_match(&iv.color) {
                report.warnings.push(format!(
                    "Pattern '{}', interval '{}': color '{}' is not a hex color",
                    p.title, iv.id, iv.color
                ));
            }
        }
    }

    for (id, color) in &cfg.colors {
        if !hex.is_match(color) {
            report
                .warnings
                .push(format!("Color for '{id}' is not a hex color: '{color}'"));
        }
    }

    // ---------------------------
    // Categories actually needed this week
    // ---------------------------
    if let Ok(schedule) = cfg.to_schedule() {
        let needed: BTreeSet<String> = classify_week(&schedule)
            .iter()
            .map(|(_, c)| c.title())
            .collect();

        for title in needed {
            if schedule.pattern(&title).is_none() {
                report
                    .errors
                    .push(format!("Missing schedule pattern '{title}'"));
            }
        }
    }

    report
}
