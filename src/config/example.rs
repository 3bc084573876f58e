use super::{Config, ConfigInterval, ConfigPattern};
use std::collections::BTreeMap;

fn iv(id: &str, start: &str, end: &str, colors: &BTreeMap<String, String>) -> ConfigInterval {
    ConfigInterval {
        id: id.to_string(),
        start: start.to_string(),
        end: end.to_string(),
        color: colors.get(id).cloned().unwrap_or_default(),
    }
}

/// Five night shifts, Monday to Friday, one pattern per day category.
pub(super) fn example_config() -> Config {
    let colors: BTreeMap<String, String> = [
        ("work", "#c0392b"),
        ("break", "#e67e22"),
        ("commute", "#7f8c8d"),
        ("asleep", "#2c3e50"),
        ("awake", "#27ae60"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    let c = &colors;
    let schedule_patterns = vec![
        ConfigPattern {
            title: "Night shift (Night-Any)".into(),
            intervals: vec![
                iv("work", "2200", "0630", c),
                iv("break", "0200", "0230", c),
                iv("commute", "0630", "0730", c),
                iv("asleep", "0730", "1500", c),
                iv("awake", "1500", "2100", c),
                iv("commute", "2100", "2200", c),
            ],
        },
        ConfigPattern {
            title: "Night shift (Off-Any)".into(),
            intervals: vec![
                iv("asleep", "0000", "0800", c),
                iv("awake", "0800", "1300", c),
                iv("asleep", "1300", "1700", c),
                iv("awake", "1700", "2100", c),
                iv("commute", "2100", "2200", c),
                iv("work", "2200", "0000", c),
            ],
        },
        ConfigPattern {
            title: "Off day (Night-Night)".into(),
            intervals: vec![
                iv("work", "0000", "0630", c),
                iv("break", "0200", "0230", c),
                iv("commute", "0630", "0730", c),
                iv("asleep", "0730", "1300", c),
                iv("awake", "1300", "0000", c),
            ],
        },
        ConfigPattern {
            title: "Off day (Night-Off)".into(),
            intervals: vec![
                iv("work", "0000", "0630", c),
                iv("break", "0200", "0230", c),
                iv("commute", "0630", "0730", c),
                iv("asleep", "0730", "1200", c),
                iv("awake", "1200", "2300", c),
                iv("asleep", "2300", "0000", c),
            ],
        },
        ConfigPattern {
            title: "Off day (Off-Night)".into(),
            intervals: vec![
                iv("asleep", "0000", "0800", c),
                iv("awake", "0800", "0000", c),
            ],
        },
        ConfigPattern {
            title: "Off day (Off-Off)".into(),
            intervals: vec![
                iv("asleep", "0000", "0730", c),
                iv("awake", "0730", "2300", c),
                iv("asleep", "2300", "0000", c),
            ],
        },
    ];

    Config {
        workdays: ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
            .into_iter()
            .map(String::from)
            .collect(),
        prev_week_night: false,
        next_week_night: false,
        colors,
        schedule_patterns,
    }
}
