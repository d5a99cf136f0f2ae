//! alc-reconcile
//!
//! Reconciles Loot Logger records against a Chest Log:
//! - merge any number of loot logs (order preserved, no dedupe)
//! - prune chest rows older than the latest loot event
//! - greedily offset loot quantities against chest amounts per (player, item)
//! - render both sets back to text
//!
//! Deterministic, pure logic. No IO; callers hand in decoded text.

mod engine;
mod merge;
mod pipeline;
mod progress;
mod prune;
mod types;

pub use engine::match_and_reduce;
pub use merge::merge_loot_records;
pub use pipeline::{reconcile, NamedLog, ReconcileError, ReconcileInputs, ReconcileOutcome};
pub use progress::{NoProgress, ProgressSink, Step};
pub use prune::{latest_loot_timestamp, prune_stale};
pub use types::*;

/// Drop every element whose flag in `remove` is set, keeping survivor order.
///
/// `remove` is indexed like `items` before compaction.
pub(crate) fn compact<T>(items: &mut Vec<T>, remove: &[bool]) {
    debug_assert_eq!(items.len(), remove.len());
    let mut flags = remove.iter();
    items.retain(|_| !flags.next().copied().unwrap_or(false));
}
