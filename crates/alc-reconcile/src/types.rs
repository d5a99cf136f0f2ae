use serde::{Deserialize, Serialize};

/// What [`crate::prune_stale`] did to the chest log.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneOutcome {
    /// Latest loot timestamp used as the cut-off. `None` means the pruner
    /// did nothing (no loot records with a timestamp).
    pub cutoff: Option<String>,
    /// Rows kept; their dates are now ISO-8601.
    pub kept: usize,
    /// Rows dated strictly before the cut-off.
    pub removed_stale: usize,
    /// Rows whose date could not be normalized.
    pub removed_undatable: usize,
}

impl PruneOutcome {
    pub fn skipped(rows: usize) -> Self {
        Self {
            cutoff: None,
            kept: rows,
            removed_stale: 0,
            removed_undatable: 0,
        }
    }

    pub fn removed(&self) -> usize {
        self.removed_stale + self.removed_undatable
    }
}

/// Counts from one [`crate::match_and_reduce`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Loot records whose key had at least one chest row.
    pub loot_matched: usize,
    /// Loot records fully offset and removed.
    pub loot_removed: usize,
    /// Loot records that survive with a smaller quantity.
    pub loot_reduced: usize,
    /// Chest rows exhausted and removed.
    pub check_removed: usize,
    /// Chest rows that survive with a smaller amount.
    pub check_reduced: usize,
    /// Total quantity offset across all keys, saturating at `u64::MAX`.
    pub units_matched: u64,
}

impl MatchReport {
    pub fn is_noop(&self) -> bool {
        self.loot_removed == 0
            && self.loot_reduced == 0
            && self.check_removed == 0
            && self.check_reduced == 0
    }
}

/// Record count of one named input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCount {
    pub name: String,
    pub records: usize,
}

/// Per-step counts of a full pipeline run, suitable for a run manifest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileSummary {
    pub loot_inputs: Vec<InputCount>,
    pub chest_input: InputCount,
    pub merged_loot_records: usize,
    pub prune: PruneOutcome,
    pub matching: MatchReport,
    pub loot_records_out: usize,
    pub check_records_out: usize,
}
