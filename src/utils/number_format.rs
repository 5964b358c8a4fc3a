//! Thousands grouping for experience figures.
//!
//! The stats provider and the chat replies both use `.` as the thousands
//! separator (`1.234.567`). Experience is always an integer, so `,` is treated
//! as an alternate separator and never as a decimal mark.

/// Removes `.` and `,` grouping characters from a numeric token.
pub fn strip_grouping(token: &str) -> String {
    token.chars().filter(|c| !matches!(c, '.' | ',')).collect()
}

/// Parses a grouped numeric token such as `12.345` or `1,234,567`.
///
/// Returns `None` if nothing but digits remains after stripping separators,
/// or the value overflows `u64`.
pub fn parse_grouped(token: &str) -> Option<u64> {
    let digits = strip_grouping(token);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Formats a value with `.` between each group of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}
