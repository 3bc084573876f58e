//! ANSI color helpers for terminal output.
use ansi_term::{Colour, Style};

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";

/// Parse `#RGB` or `#RRGGBB` into its channels.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#').filter(|h| h.is_ascii())?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        6 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        3 => {
            let c = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
            Some((c(0)?, c(1)?, c(2)?))
        }
        _ => None,
    }
}

/// White or black text, whichever reads better on `(r, g, b)`.
pub fn contrast_for(r: u8, g: u8, b: u8) -> Colour {
    let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luma > 150.0 {
        Colour::Black
    } else {
        Colour::White
    }
}

/// Paint `text` on the background `color`; unparseable colors leave the
/// text plain.
pub fn paint_cell(text: &str, color: &str) -> String {
    match parse_hex(color) {
        Some((r, g, b)) => Style::new()
            .on(Colour::RGB(r, g, b))
            .fg(contrast_for(r, g, b))
            .paint(text)
            .to_string(),
        None => text.to_string(),
    }
}

pub fn grey(text: &str) -> String {
    format!("{GREY}{text}{RESET}")
}
