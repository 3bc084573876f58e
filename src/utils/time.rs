//! Time utilities: parsing HHMM tokens, minute offsets, clock angles,
//! slot indices and durations, all with midnight wraparound.

use crate::errors::AppResult;
use crate::models::time_token::{MINUTES_PER_DAY, TimeToken};
use chrono::{NaiveTime, Timelike};
use std::f64::consts::TAU;

pub const SLOT_MINUTES: u32 = 30;
pub const SLOTS_PER_DAY: usize = (MINUTES_PER_DAY / SLOT_MINUTES) as usize;

pub fn parse_time(token: &str) -> AppResult<(u8, u8)> {
    let t = TimeToken::parse(token)?;
    Ok((t.hour(), t.minute()))
}

pub fn to_minutes(token: &str) -> AppResult<u32> {
    Ok(TimeToken::parse(token)?.minutes())
}

pub fn to_angle(token: &str) -> AppResult<f64> {
    Ok(token_angle(TimeToken::parse(token)?))
}

pub fn to_slot_index(token: &str) -> AppResult<usize> {
    Ok(token_slot(TimeToken::parse(token)?))
}

pub fn duration(start: &str, end: &str) -> AppResult<(u32, u32)> {
    Ok(token_duration(
        TimeToken::parse(start)?,
        TimeToken::parse(end)?,
    ))
}

/// Clockwise angle in radians, midnight at the top, in `[0, 2π)`.
pub fn token_angle(t: TimeToken) -> f64 {
    t.minutes() as f64 / MINUTES_PER_DAY as f64 * TAU
}

/// 30-minute slot containing `t`, in `0..48`.
pub fn token_slot(t: TimeToken) -> usize {
    (t.minutes() / SLOT_MINUTES) as usize
}

/// Non-negative span from `start` to `end`, wrapping past midnight.
/// Equal tokens give zero, not a full day.
pub fn token_duration(start: TimeToken, end: TimeToken) -> (u32, u32) {
    let mut mins = end.minutes() as i64 - start.minutes() as i64;
    if mins < 0 {
        mins += MINUTES_PER_DAY as i64;
    }
    let mins = mins as u32;
    (mins / 60, mins % 60)
}

/// `8h00m`
pub fn format_duration((hours, minutes): (u32, u32)) -> String {
    format!("{}h{:02}m", hours, minutes)
}

/// `HH:MM` label of the first minute of slot `i`.
pub fn slot_label(i: usize) -> String {
    let mins = (i % SLOTS_PER_DAY) as u32 * SLOT_MINUTES;
    format!("{:02}:{:02}", mins / 60, mins % 60)
}

pub fn slot_labels() -> Vec<String> {
    (0..SLOTS_PER_DAY).map(slot_label).collect()
}

pub fn now_slot(t: NaiveTime) -> usize {
    ((t.hour() * 60 + t.minute()) / SLOT_MINUTES) as usize
}

/// Text rotation in degrees for a label sitting at `angle` on the clock
/// face, flipped on the left half so it never reads upside down.
pub fn label_rotation(angle: f64) -> f64 {
    let mut rot = wrap_degrees(270.0 - angle.to_degrees());
    if (90.0..=270.0).contains(&rot) {
        rot = wrap_degrees(rot + 180.0);
    }
    rot
}

/// Into `[0, 360)`; `rem_euclid` alone can round up to exactly 360.
fn wrap_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d >= 360.0 { 0.0 } else { d }
}
