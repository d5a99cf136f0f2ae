use alc_logs::{to_iso8601, CheckRecord, LootRecord};
use tracing::{debug, warn};

use crate::types::PruneOutcome;
use crate::compact;

/// Latest non-empty loot timestamp, compared lexically (ISO-8601 sorts).
pub fn latest_loot_timestamp(loot: &[LootRecord]) -> Option<&str> {
    loot.iter()
        .map(|r| r.timestamp_utc.as_str())
        .filter(|t| !t.is_empty())
        .max()
}

/// Remove chest rows dated before the latest loot event.
///
/// - No loot timestamp => no-op; chest dates stay in their original form.
/// - Otherwise every chest date is normalized; rows strictly older than the
///   cut-off are removed, the rest keep their order and get the ISO date.
/// - A row whose date cannot be normalized cannot be proven fresh and is
///   removed (fail-closed).
pub fn prune_stale(loot: &[LootRecord], checks: &mut Vec<CheckRecord>) -> PruneOutcome {
    let Some(cutoff) = latest_loot_timestamp(loot) else {
        debug!(rows = checks.len(), "prune skipped: no loot timestamp");
        return PruneOutcome::skipped(checks.len());
    };

    let mut remove = vec![false; checks.len()];
    let mut removed_stale = 0;
    let mut removed_undatable = 0;

    for (i, row) in checks.iter_mut().enumerate() {
        match to_iso8601(&row.date) {
            Ok(iso) if iso.as_str() < cutoff => {
                remove[i] = true;
                removed_stale += 1;
            }
            Ok(iso) => row.date = iso,
            Err(e) => {
                warn!(player = %row.player, item = %row.item, "dropping chest row: {e}");
                remove[i] = true;
                removed_undatable += 1;
            }
        }
    }

    compact(checks, &remove);

    debug!(
        cutoff,
        kept = checks.len(),
        removed_stale,
        removed_undatable,
        "prune done"
    );

    PruneOutcome {
        cutoff: Some(cutoff.to_string()),
        kept: checks.len(),
        removed_stale,
        removed_undatable,
    }
}
