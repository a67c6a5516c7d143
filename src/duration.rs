use std::num::IntErrorKind;

use crate::error::DurationError;

const DAY_MARKER: &str = "days";

/// Converts a `diff` value into whole days.
///
/// Text without a `days` marker (`"5 hours"`, `"00:30:00"`, `""`) counts as
/// zero days. When the marker is present, everything before the first
/// `" days"` must be an integer. Counts beyond `i64::MAX` saturate.
pub fn parse_days(text: &str) -> Result<i64, DurationError> {
    if !text.contains(DAY_MARKER) {
        return Ok(0);
    }

    // "10days" has the marker but no " days" split point, so the whole text
    // is the prefix and fails to parse.
    let prefix = text.split_once(" days").map_or(text, |(prefix, _)| prefix);

    match prefix.trim().parse::<i64>() {
        Ok(days) => Ok(days),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        Err(_) => Err(DurationError::Malformed {
            text: text.to_string(),
        }),
    }
}
