use shiftclock::errors::AppError;
use shiftclock::models::TimeToken;
use shiftclock::utils::time::{
    duration, format_duration, label_rotation, parse_time, slot_label, to_angle, to_minutes,
    to_slot_index,
};
use std::f64::consts::{PI, TAU};

fn close_deg(a: f64, b: f64) -> bool {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d) < 1e-9
}

fn all_tokens() -> impl Iterator<Item = String> {
    (0..24).flat_map(|h| (0..60).map(move |m| format!("{h:02}{m:02}")))
}

#[test]
fn test_parse_time_valid() {
    assert_eq!(parse_time("0000").unwrap(), (0, 0));
    assert_eq!(parse_time("2359").unwrap(), (23, 59));
    assert_eq!(parse_time("0730").unwrap(), (7, 30));
}

#[test]
fn test_parse_time_rejects_malformed_tokens() {
    for bad in ["", "930", "09300", "2400", "1260", "ab12", "09:3", "-100", " 930", "１２３４"] {
        let err = parse_time(bad).unwrap_err();
        assert!(
            matches!(err, AppError::InvalidTimeFormat(ref t) if t == bad),
            "expected InvalidTimeFormat for {bad:?}, got {err:?}"
        );
    }
}

#[test]
fn test_to_minutes() {
    assert_eq!(to_minutes("0000").unwrap(), 0);
    assert_eq!(to_minutes("0130").unwrap(), 90);
    assert_eq!(to_minutes("2359").unwrap(), 1439);
}

#[test]
fn test_slot_index_and_angle_ranges_for_every_token() {
    for t in all_tokens() {
        let slot = to_slot_index(&t).unwrap();
        assert!(slot <= 47, "{t} -> slot {slot}");

        let angle = to_angle(&t).unwrap();
        assert!((0.0..TAU).contains(&angle), "{t} -> angle {angle}");
    }
}

#[test]
fn test_slot_index_boundaries() {
    assert_eq!(to_slot_index("0000").unwrap(), 0);
    assert_eq!(to_slot_index("0029").unwrap(), 0);
    assert_eq!(to_slot_index("0030").unwrap(), 1);
    assert_eq!(to_slot_index("0200").unwrap(), 4);
    assert_eq!(to_slot_index("2200").unwrap(), 44);
    assert_eq!(to_slot_index("2359").unwrap(), 47);
}

#[test]
fn test_angles_on_the_clock_face() {
    assert_eq!(to_angle("0000").unwrap(), 0.0);
    assert!((to_angle("0600").unwrap() - PI / 2.0).abs() < 1e-12);
    assert!((to_angle("1200").unwrap() - PI).abs() < 1e-12);
    assert!((to_angle("1800").unwrap() - 3.0 * PI / 2.0).abs() < 1e-12);
}

#[test]
fn test_duration_wraps_past_midnight() {
    assert_eq!(duration("2200", "0600").unwrap(), (8, 0));
    assert_eq!(duration("0900", "0900").unwrap(), (0, 0));
    assert_eq!(duration("0900", "1745").unwrap(), (8, 45));
    assert_eq!(duration("2330", "0015").unwrap(), (0, 45));
    assert_eq!(duration("0001", "0000").unwrap(), (23, 59));
}

#[test]
fn test_duration_rejects_invalid_tokens() {
    assert!(matches!(
        duration("2500", "0600"),
        Err(AppError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        duration("2200", "06"),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_format_duration_and_slot_labels() {
    assert_eq!(format_duration((8, 0)), "8h00m");
    assert_eq!(format_duration((0, 45)), "0h45m");
    assert_eq!(slot_label(0), "00:00");
    assert_eq!(slot_label(3), "01:30");
    assert_eq!(slot_label(47), "23:30");
}

#[test]
fn test_time_token_display_round_trips() {
    let t: TimeToken = "0705".parse().unwrap();
    assert_eq!(t.to_string(), "0705");
    assert_eq!(t.to_clock_string(), "07:05");
    assert!(!t.is_on_the_hour());
    assert!(TimeToken::parse("1300").unwrap().is_on_the_hour());
}

#[test]
fn test_label_rotation_keeps_text_upright() {
    for t in all_tokens() {
        let rot = label_rotation(to_angle(&t).unwrap());
        assert!((0.0..360.0).contains(&rot), "{t} -> {rot}");
        assert!(!(90.0 < rot && rot < 270.0), "{t} -> upside down {rot}");
    }

    // Midnight sits at the top: 270° - 0° = 270°, flipped to 90°.
    assert!(close_deg(label_rotation(0.0), 90.0));
    // 03:00 → 45° on the face → 225°, flipped to 45°.
    assert!(close_deg(label_rotation(PI / 4.0), 45.0));
    // 10:00 → 150° → 120°, flipped to 300°.
    assert!(close_deg(label_rotation(to_angle("1000").unwrap()), 300.0));
    // 21:00 → 315° → -45° ≡ 315°, kept.
    assert!(close_deg(label_rotation(to_angle("2100").unwrap()), 315.0));
}
