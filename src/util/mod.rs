//! Small utility helpers for config parsing, display width and time formatting.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Truncate text to a terminal column budget.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max_cols`: Available display columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…` that fits.
///
/// Details:
/// - Measures display width, so wide glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max_cols {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// What: Format a local timestamp for log lines.
///
/// Output:
/// - `"YYYY-MM-DD-T HH:MM:SS"` in local time.
#[must_use]
pub fn log_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string()
}
