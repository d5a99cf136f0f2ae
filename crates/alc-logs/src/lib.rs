//! alc-logs
//!
//! Typed records for the two loot logs and their text formats.
//!
//! - Loot Logger export: semicolon-delimited, one loot event per line.
//! - Chest Log export: tab-delimited, every field double-quoted.
//!
//! This crate owns parsing, serialization and the chest-log date normalizer.
//! It does **not** read files and does not merge, prune or match records;
//! that is `alc-reconcile`.

mod error;
pub mod parse;
mod records;
pub mod serialize;
pub mod timestamp;

pub use error::{LogError, LogKind};
pub use parse::{parse_check_records, parse_loot_records};
pub use records::{CheckRecord, LootRecord, CHECK_LOG_HEADER, LOOT_LOG_HEADER};
pub use serialize::{serialize_check_records, serialize_loot_records};
pub use timestamp::to_iso8601;
