//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `₹220`
pub fn money(currency: &str, amount: u64) -> String {
    format!("{}{}", currency, amount)
}

/// Pad to a display width (CJK and emoji count as two columns).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Wrap free text (descriptions, notes) to `width` columns.
pub fn wrap(s: &str, width: usize) -> Vec<String> {
    textwrap::wrap(s, width.max(1))
        .into_iter()
        .map(|c| c.into_owned())
        .collect()
}
