//! Parsing of the textual `YYYY-MM-DD` form shared by both date types.

use crate::CalendarError;

/// Splits `YYYY-MM-DD` into (year, 0-based month, day).
///
/// Only the shape and numeric content are checked here; callers validate the
/// resulting components against their own calendar.
pub(crate) fn iso_components(s: &str, separator: char) -> Result<(i32, u8, u8), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(separator).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(CalendarError::InvalidFormat(format!(
            "expected YYYY{separator}MM{separator}DD, found {} component(s) in {trimmed:?}",
            parts.len()
        )));
    };

    let year = parse_i32(year)?;
    let month = parse_u8(month)?
        .checked_sub(1)
        .ok_or_else(|| CalendarError::InvalidFormat(format!("month 0 in {trimmed:?}")))?;
    let day = parse_u8(day)?;

    Ok((year, month, day))
}

/// Helper to parse i32 with better error messages
fn parse_i32(s: &str) -> Result<i32, CalendarError> {
    s.parse::<i32>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

/// Helper to parse u8 with better error messages
fn parse_u8(s: &str) -> Result<u8, CalendarError> {
    s.parse::<u8>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}
