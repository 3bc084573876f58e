//! Formatting utilities used for CLI and export outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

/// `07h30m`, or `07:30` when `short`.
pub fn mins2readable(mins: u32, short: bool) -> String {
    let hours = mins / 60;
    let minutes = mins % 60;

    if short {
        format!("{:02}:{:02}", hours, minutes)
    } else {
        format!("{:02}h {:02}m", hours, minutes)
    }
}

/// Degrees with one decimal, e.g. `292.5°`.
pub fn degrees(radians: f64) -> String {
    format!("{:.1}°", radians.to_degrees())
}
