//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (wide characters count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(fill))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", " ".repeat(fill), s)
}

/// Shortest text that reads back as the same number, always with a
/// decimal point: `0.0`, `1.5`, `0.3333333333333333`.
pub fn format_hours(hours: f64) -> String {
    format!("{:?}", hours)
}

/// Hours as `HHh MMm`, rounded to the minute.
pub fn hours2readable(hours: f64) -> String {
    let mins = (hours * 60.0).round() as i64;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
