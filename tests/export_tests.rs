mod common;
use common::{mon_tue_config, shc, temp_config, temp_out};
use shiftclock::config::Config;
use shiftclock::core::build_weekly_grid;
use shiftclock::export::{ExportFormat, ExportLogic, grid_headers, grid_table};
use std::fs;
use std::path::Path;

#[test]
fn test_export_csv_layout() {
    let path = temp_config("export_csv", &mon_tue_config());
    let out = temp_out("export_csv", "csv");

    shc()
        .args(["--config", &path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 49);
    assert_eq!(
        lines[0],
        "time,Sunday,Monday,Tuesday,Wednesday,Thursday,Friday,Saturday"
    );
    // The 2200-0600 shift wraps onto the start of the same day.
    assert_eq!(lines[1], "00:00,asleep,work,work,asleep,asleep,asleep,asleep");
    // 06:00-08:00 is left unscheduled on shift days.
    assert_eq!(lines[13], "06:00,asleep,empty,empty,asleep,asleep,asleep,asleep");
    assert!(lines[48].starts_with("23:30,"));
}

#[test]
fn test_export_json_infers_format() {
    let path = temp_config("export_json", &mon_tue_config());
    let out = temp_out("export_json", "json");

    shc()
        .args(["--config", &path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(value["categories"]["Monday"], "Night shift (Off-Any)");
    assert_eq!(value["slots"].as_array().unwrap().len(), 48);
    assert_eq!(value["days"]["Tuesday"][0], "work");
    assert_eq!(value["days"]["Sunday"].as_array().unwrap().len(), 48);

    // days keep the week order, Sunday first
    let order = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
    let positions: Vec<usize> = order
        .iter()
        .map(|d| content.find(&format!("\"{d}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn test_export_xlsx() {
    let path = temp_config("export_xlsx", &Config::example());
    let out = temp_out("export_xlsx", "xlsx");

    shc()
        .args(["--config", &path, "export", "--file", &out])
        .assert()
        .success();

    let bytes = fs::read(&out).expect("read xlsx");
    // xlsx files are zip archives
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_xlsx_needs_colors() {
    let mut cfg = Config::example();
    cfg.colors.remove("commute");
    let schedule = cfg.to_schedule().unwrap();
    let grid = build_weekly_grid(&schedule).unwrap();
    let out = temp_out("export_xlsx_colors", "xlsx");

    let err = ExportLogic::export(&grid, &schedule, Some(ExportFormat::Xlsx), &out, true)
        .unwrap_err();
    assert!(err.to_string().contains("commute"));
}

#[test]
fn test_export_rejects_relative_path_and_unknown_extension() {
    let schedule = mon_tue_config().to_schedule().unwrap();
    let grid = build_weekly_grid(&schedule).unwrap();

    assert!(ExportLogic::export(&grid, &schedule, None, "week.csv", true).is_err());

    let out = temp_out("export_unknown", "txt");
    let err = ExportLogic::export(&grid, &schedule, None, &out, true).unwrap_err();
    assert!(err.to_string().contains("not supported"));
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_overwrite_with_force() {
    let path = temp_config("export_force", &mon_tue_config());
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old").unwrap();

    shc()
        .args(["--config", &path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("time,"));
}

#[test]
fn test_export_existing_file_declined() {
    let path = temp_config("export_declined", &mon_tue_config());
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "old").unwrap();

    shc()
        .args(["--config", &path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}

#[test]
fn test_grid_table_matches_headers() {
    let schedule = mon_tue_config().to_schedule().unwrap();
    let grid = build_weekly_grid(&schedule).unwrap();
    let table = grid_table(&grid);

    assert_eq!(grid_headers().len(), 8);
    assert_eq!(table.len(), 48);
    assert!(table.iter().all(|r| r.len() == 8));
    assert_eq!(table[1][0], "00:30");
}
