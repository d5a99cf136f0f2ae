//! Chest-log date normalization.
//!
//! The chest log writes dates as `M/D/YYYY HH:MM:SS` (month and day may be
//! unpadded). The loot log uses ISO-8601 UTC with milliseconds. Converting to
//! the latter makes both lexically comparable.

use crate::error::LogError;

/// Convert a chest-log date to `YYYY-MM-DDTHH:MM:SS.000Z`.
///
/// Month and day are zero-padded to two digits. The time part is copied
/// verbatim; it is expected to be `HH:MM:SS` already.
pub fn to_iso8601(date: &str) -> Result<String, LogError> {
    let parts: Vec<&str> = date.split(' ').collect();
    let [date_part, time_part] = parts[..] else {
        return Err(LogError::Format {
            raw: date.to_string(),
            reason: "expected '<date> <time>' separated by a single space",
        });
    };

    let components: Vec<&str> = date_part.split('/').collect();
    let [month, day, year] = components[..] else {
        return Err(LogError::Format {
            raw: date.to_string(),
            reason: "expected date as month/day/year",
        });
    };

    Ok(format!("{year}-{month:0>2}-{day:0>2}T{time_part}.000Z"))
}
