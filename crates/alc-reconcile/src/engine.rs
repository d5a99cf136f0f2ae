use std::collections::BTreeMap;

use alc_logs::{CheckRecord, LootRecord};
use tracing::debug;

use crate::compact;
use crate::types::MatchReport;

/// Offset loot quantities against chest amounts sharing `(player, item)`.
///
/// Two phases, so no index is invalidated while buckets are walked:
///
/// 1. Reduce. Chest rows are bucketed by key in collection order. Each loot
///    record, in collection order, consumes its bucket front to back
///    (`min(remaining, amount)` per row) and stops as soon as its quantity is
///    covered; later rows of the bucket are left for later loot records.
///    A chest row at 0 after the walk is marked; a loot record covered in
///    full is marked, otherwise its quantity becomes what is left.
/// 2. Compact. Marked records are dropped from both collections, survivors
///    keep their relative order.
///
/// Zero quantities:
/// - a loot record with quantity 0 is removed iff its key has a bucket;
/// - a chest row with amount 0 is removed iff a walk reaches it while the
///   loot record still has quantity left; it contributes nothing.
pub fn match_and_reduce(loot: &mut Vec<LootRecord>, checks: &mut Vec<CheckRecord>) -> MatchReport {
    let mut report = MatchReport::default();

    let mut amounts: Vec<u64> = checks.iter().map(|c| c.amount).collect();
    let mut check_exhausted = vec![false; checks.len()];
    // None: no bucket for the key. Some(q): quantity left after the walk.
    let mut loot_left: Vec<Option<u64>> = vec![None; loot.len()];

    {
        let mut buckets: BTreeMap<(&str, &str), Vec<usize>> = BTreeMap::new();
        for (i, row) in checks.iter().enumerate() {
            buckets.entry(row.key()).or_default().push(i);
        }

        for (j, record) in loot.iter().enumerate() {
            let Some(bucket) = buckets.get(&record.key()) else {
                continue;
            };
            report.loot_matched += 1;

            let mut remaining = record.quantity;
            for &i in bucket {
                if remaining == 0 {
                    break;
                }
                let consumed = remaining.min(amounts[i]);
                amounts[i] -= consumed;
                remaining -= consumed;
                report.units_matched = report.units_matched.saturating_add(consumed);
                if amounts[i] == 0 {
                    check_exhausted[i] = true;
                }
            }

            loot_left[j] = Some(remaining);
        }
    }

    // Phase 2: write back, then compact.
    for (i, row) in checks.iter_mut().enumerate() {
        if check_exhausted[i] {
            report.check_removed += 1;
        } else if amounts[i] != row.amount {
            report.check_reduced += 1;
        }
        row.amount = amounts[i];
    }

    let mut loot_covered = vec![false; loot.len()];
    for (j, record) in loot.iter_mut().enumerate() {
        match loot_left[j] {
            None => {}
            Some(0) => {
                loot_covered[j] = true;
                report.loot_removed += 1;
            }
            Some(left) => {
                if left != record.quantity {
                    report.loot_reduced += 1;
                }
                record.quantity = left;
            }
        }
    }

    compact(checks, &check_exhausted);
    compact(loot, &loot_covered);

    debug!(
        loot_matched = report.loot_matched,
        loot_removed = report.loot_removed,
        loot_reduced = report.loot_reduced,
        check_removed = report.check_removed,
        check_reduced = report.check_reduced,
        units_matched = report.units_matched,
        "match and reduce done"
    );

    report
}
