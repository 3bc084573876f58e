mod common;
use common::{mon_tue_config, temp_out};
use shiftclock::config::Config;
use shiftclock::core::{EMPTY, build_weekly_grid};
use shiftclock::errors::AppError;
use shiftclock::models::{DayCategory, Weekday};
use std::fs;
use std::path::Path;

#[test]
fn test_example_config_is_complete() {
    let cfg = Config::example();
    let report = cfg.check();
    assert!(report.is_ok(), "{:?}", report.errors);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);

    let schedule = cfg.to_schedule().unwrap();
    for c in DayCategory::ALL {
        assert!(schedule.pattern(&c.title()).is_some(), "{c}");
    }

    let grid = build_weekly_grid(&schedule).unwrap();
    for d in grid.days() {
        assert_eq!(d.activities.count(EMPTY), 0, "{}", d.day);
    }
    assert_eq!(grid.activity_at(Weekday::Tuesday, 4), Some("break"));
}

#[test]
fn test_minimal_json_uses_defaults() {
    let cfg = Config::from_json(r#"{ "workdays": ["Monday"] }"#).unwrap();
    assert!(!cfg.prev_week_night);
    assert!(!cfg.next_week_night);
    assert!(cfg.colors.is_empty());
    assert!(cfg.schedule_patterns.is_empty());

    let schedule = cfg.to_schedule().unwrap();
    assert!(schedule.is_workday(Weekday::Monday));
    assert!(matches!(
        build_weekly_grid(&schedule),
        Err(AppError::MissingPattern(_))
    ));
}

#[test]
fn test_wire_format_field_names() {
    let json = r##"{
        "workdays": ["monday", "Tue"],
        "prev_week_night": true,
        "next_week_night": false,
        "colors": { "work": "#ff0000" },
        "schedule_patterns": [
            { "title": "Night shift (Off-Any)",
              "intervals": [ { "id": "work", "start": "2200", "end": "0600", "color": "#ff0000" } ] }
        ]
    }"##;

    let schedule = Config::from_json(json).unwrap().to_schedule().unwrap();
    assert!(schedule.prev_week_night);
    assert!(schedule.is_workday(Weekday::Monday));
    assert!(schedule.is_workday(Weekday::Tuesday));
    assert_eq!(schedule.patterns[0].intervals[0].start.to_string(), "2200");
    assert_eq!(schedule.color_of("work").unwrap(), "#ff0000");
}

#[test]
fn test_invalid_token_is_reported_not_defaulted() {
    let mut cfg = mon_tue_config();
    cfg.schedule_patterns[0].intervals[0].end = "2460".into();

    assert!(matches!(
        cfg.to_schedule(),
        Err(AppError::InvalidTimeFormat(ref t)) if t == "2460"
    ));

    let report = cfg.check();
    assert!(!report.is_ok());
    assert!(report.errors.iter().any(|e| e.contains("'2460'")));
}

#[test]
fn test_unknown_weekday() {
    let mut cfg = mon_tue_config();
    cfg.workdays.push("Funday".into());

    assert!(matches!(
        cfg.to_schedule(),
        Err(AppError::InvalidWeekday(ref d)) if d == "Funday"
    ));
    assert!(cfg.check().errors.iter().any(|e| e.contains("Funday")));
}

#[test]
fn test_check_reports_missing_pattern_only_when_needed() {
    let mut cfg = mon_tue_config();
    // Night-Night is never used by a Monday/Tuesday week.
    cfg.schedule_patterns
        .retain(|p| p.title != "Off day (Night-Night)");
    assert!(cfg.check().is_ok());

    cfg.schedule_patterns
        .retain(|p| p.title != "Night shift (Off-Any)");
    let report = cfg.check();
    assert_eq!(
        report.errors,
        vec!["Missing schedule pattern 'Night shift (Off-Any)'".to_string()]
    );
}

#[test]
fn test_check_warnings() {
    let mut cfg = mon_tue_config();
    cfg.colors.remove("awake");
    cfg.colors.insert("work".into(), "crimson".into());
    let dup = cfg.schedule_patterns[0].clone();
    cfg.schedule_patterns.push(dup);

    let report = cfg.check();
    assert!(report.is_ok());
    assert!(report.warnings.iter().any(|w| w.contains("'awake' has no entry in colors")));
    assert!(report.warnings.iter().any(|w| w.contains("'crimson'")));
    assert!(report.warnings.iter().any(|w| w.contains("Duplicate pattern title")));
}

#[test]
fn test_missing_color_is_a_lookup_error() {
    let schedule = mon_tue_config().to_schedule().unwrap();
    assert_eq!(schedule.color_of("asleep").unwrap(), "#2c3e50");
    assert!(matches!(
        schedule.color_of("commute"),
        Err(AppError::MissingColor(ref id)) if id == "commute"
    ));

    // Derivation itself never needs colors.
    let mut schedule = schedule;
    schedule.colors.clear();
    assert!(build_weekly_grid(&schedule).is_ok());
}

#[test]
fn test_load_json_and_yaml_files() {
    let cfg = mon_tue_config();

    let json_path = temp_out("config_load_json", "json");
    cfg.save(Path::new(&json_path)).unwrap();
    assert_eq!(Config::load(Path::new(&json_path)).unwrap(), cfg);

    let yaml_path = temp_out("config_load_yaml", "yaml");
    cfg.save(Path::new(&yaml_path)).unwrap();
    let text = fs::read_to_string(&yaml_path).unwrap();
    assert!(text.contains("schedule_patterns:"));
    assert_eq!(Config::load(Path::new(&yaml_path)).unwrap(), cfg);
}

#[test]
fn test_load_errors() {
    let missing = temp_out("config_missing", "json");
    assert!(matches!(
        Config::load(Path::new(&missing)),
        Err(AppError::ConfigLoad(_))
    ));

    let broken = temp_out("config_broken", "json");
    fs::write(&broken, "{ \"workdays\": ").unwrap();
    assert!(matches!(
        Config::load(Path::new(&broken)),
        Err(AppError::Config(_))
    ));
}

#[test]
fn test_init_file_refuses_to_overwrite() {
    let path = temp_out("config_init", "json");
    let path = Path::new(&path);

    Config::init_file(path, false).unwrap();
    assert_eq!(Config::load(path).unwrap(), Config::example());

    assert!(matches!(
        Config::init_file(path, false),
        Err(AppError::Config(_))
    ));
    Config::init_file(path, true).unwrap();
}
