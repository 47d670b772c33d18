//! Utility functions for formatting and display

/// Format an integer with en-US thousands grouping.
///
/// Examples:
/// - 0 -> "0"
/// - 999 -> "999"
/// - 12345 -> "12,345"
/// - 1000000 -> "1,000,000"
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Counter label: grouped value with a trailing "+".
pub fn format_counter_label(value: u64) -> String {
    format!("{}+", format_grouped(value))
}

/// CSS pixel length for a style property value, e.g. `12px`.
pub fn format_px(value: i32) -> String {
    format!("{}px", value)
}
