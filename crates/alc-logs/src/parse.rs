//! Parsers for the two log exports.
//!
//! Both parsers share the same contract:
//! - blank lines (whitespace only) are ignored everywhere;
//! - the first non-blank line must equal the exact header of the format;
//! - a data line with the wrong number of fields is skipped, not an error;
//! - a data line whose quantity/amount is not a non-negative integer is
//!   skipped as well;
//! - lines split on `\n` or `\r\n`, so a CRLF export (header included) reads
//!   the same as an LF one.
//!
//! Only an empty text or a header mismatch is returned as `Err`.

use tracing::{debug, warn};

use crate::error::{LogError, LogKind};
use crate::records::{CheckRecord, LootRecord, CHECK_LOG_HEADER, LOOT_LOG_HEADER};

const LOOT_FIELD_COUNT: usize = 10;
const CHECK_FIELD_COUNT: usize = 6;

/// Parse the text of a Loot Logger export into records, in file order.
pub fn parse_loot_records(text: &str) -> Result<Vec<LootRecord>, LogError> {
    let mut lines = non_blank_lines(text);
    expect_header(&mut lines, LogKind::LootLogger, LOOT_LOG_HEADER)?;

    let mut out = Vec::new();
    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != LOOT_FIELD_COUNT {
            debug!(line_no, fields = fields.len(), "loot log: skipping malformed row");
            continue;
        }

        let quantity = match parse_count(fields[6]) {
            Some(q) => q,
            None => {
                warn!(line_no, raw = fields[6], "loot log: skipping row with invalid quantity");
                continue;
            }
        };

        out.push(LootRecord {
            timestamp_utc: fields[0].to_string(),
            looted_by_alliance: fields[1].to_string(),
            looted_by_guild: fields[2].to_string(),
            looted_by_name: fields[3].to_string(),
            item_id: fields[4].to_string(),
            item_name: fields[5].to_string(),
            quantity,
            looted_from_alliance: fields[7].to_string(),
            looted_from_guild: fields[8].to_string(),
            looted_from_name: fields[9].to_string(),
        });
    }

    debug!(records = out.len(), "loot log parsed");
    Ok(out)
}

/// Parse the text of a Chest Log export into records, in file order.
///
/// Every `"` in a data line is removed before splitting on tabs, so quoted
/// and unquoted rows read the same.
pub fn parse_check_records(text: &str) -> Result<Vec<CheckRecord>, LogError> {
    let mut lines = non_blank_lines(text);
    expect_header(&mut lines, LogKind::ChestLog, CHECK_LOG_HEADER)?;

    let mut out = Vec::new();
    for (line_no, line) in lines {
        let unquoted = line.replace('"', "");
        let fields: Vec<&str> = unquoted.split('\t').collect();
        if fields.len() != CHECK_FIELD_COUNT {
            debug!(line_no, fields = fields.len(), "chest log: skipping malformed row");
            continue;
        }

        let amount = match parse_count(fields[5]) {
            Some(a) => a,
            None => {
                warn!(line_no, raw = fields[5], "chest log: skipping row with invalid amount");
                continue;
            }
        };

        out.push(CheckRecord {
            date: fields[0].to_string(),
            player: fields[1].to_string(),
            item: fields[2].to_string(),
            enchantment: fields[3].to_string(),
            quality: fields[4].to_string(),
            amount,
        });
    }

    debug!(records = out.len(), "chest log parsed");
    Ok(out)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Non-blank lines paired with their 1-based line number in the source text.
///
/// `str::lines` already drops the `\r` of CRLF line endings.
fn non_blank_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
}

fn expect_header<'a>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    log: LogKind,
    expected: &str,
) -> Result<(), LogError> {
    match lines.next() {
        None => Err(LogError::EmptyInput { log }),
        Some((_, header)) if header == expected => Ok(()),
        Some((_, header)) => Err(LogError::HeaderMismatch {
            log,
            found: header.to_string(),
        }),
    }
}

/// Decimal, non-negative integer; surrounding whitespace tolerated.
fn parse_count(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}
