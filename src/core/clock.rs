//! Clock-face geometry for the circular renderer: one arc per interval,
//! boundary markers that fall between hours, and the 24 hour ticks.

use crate::models::{SchedulePattern, TimeToken};
use crate::utils::time::{format_duration, label_rotation, token_angle, token_duration};
use serde::Serialize;
use std::collections::BTreeSet;
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockSegment {
    pub id: String,
    pub color: String,
    pub start: TimeToken,
    pub end: TimeToken,
    /// Radians, clockwise from midnight.
    pub angle_start: f64,
    /// Radians; past `2π` when the interval crosses midnight.
    pub angle_end: f64,
    pub mid_angle: f64,
    /// Degrees in `[0, 360)`.
    pub label_rotation: f64,
    pub duration: (u32, u32),
    pub duration_string: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockMarker {
    pub time: TimeToken,
    pub angle: f64,
    pub label_rotation: f64,
}

pub fn clock_segments(pattern: &SchedulePattern) -> Vec<ClockSegment> {
    pattern
        .intervals
        .iter()
        .map(|iv| {
            let angle_start = token_angle(iv.start);
            let mut angle_end = token_angle(iv.end);
            if iv.crosses_midnight() {
                angle_end += TAU;
            }

            let mid_angle = ((angle_start + angle_end) / 2.0).rem_euclid(TAU);
            let duration = token_duration(iv.start, iv.end);

            ClockSegment {
                id: iv.id.clone(),
                color: iv.color.clone(),
                start: iv.start,
                end: iv.end,
                angle_start,
                angle_end,
                mid_angle,
                label_rotation: label_rotation(mid_angle),
                duration,
                duration_string: format_duration(duration),
            }
        })
        .collect()
}

/// Interval boundaries that are not on the hour, sorted and deduplicated.
pub fn clock_markers(pattern: &SchedulePattern) -> Vec<ClockMarker> {
    let times: BTreeSet<TimeToken> = pattern
        .intervals
        .iter()
        .flat_map(|iv| [iv.start, iv.end])
        .filter(|t| !t.is_on_the_hour())
        .collect();

    times
        .into_iter()
        .map(|time| {
            let angle = token_angle(time);
            ClockMarker {
                time,
                angle,
                label_rotation: label_rotation(angle),
            }
        })
        .collect()
}

pub fn hour_ticks() -> Vec<(u8, f64)> {
    (0..24u8)
        .map(|h| (h, h as f64 / 24.0 * TAU))
        .collect()
}
