//! End-to-end run: parse → merge → prune → match → serialize.

use std::fmt;

use alc_logs::{
    parse_check_records, parse_loot_records, serialize_check_records, serialize_loot_records,
    CheckRecord, LogError, LootRecord,
};
use tracing::{debug, info};

use crate::progress::{ProgressSink, Step};
use crate::types::{InputCount, ReconcileSummary};
use crate::{match_and_reduce, merge_loot_records, prune_stale};

/// Decoded text of one input file plus a display name (usually the file name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedLog {
    pub name: String,
    pub text: String,
}

impl NamedLog {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct ReconcileInputs {
    /// Loot logs in merge order. The first is the confirmed log; any further
    /// ones are unconfirmed logs. At least one is required.
    pub loot_logs: Vec<NamedLog>,
    /// Exactly one chest log.
    pub chest_log: NamedLog,
}

/// Result of one run: the mutated record sets and their rendered text.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub loot_records: Vec<LootRecord>,
    pub check_records: Vec<CheckRecord>,
    /// Loot events not accounted for by the chest log.
    pub loot_output: String,
    /// Chest rows left over after matching.
    pub chest_output: String,
    pub summary: ReconcileSummary,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// `loot_logs` was empty.
    NoLootLogs,
    /// An input could not be parsed; the run is aborted.
    Parse { input: String, source: LogError },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::NoLootLogs => write!(f, "at least one Loot Logger file is required"),
            ReconcileError::Parse { input, source } => write!(f, "{input}: {source}"),
        }
    }
}

impl std::error::Error for ReconcileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReconcileError::NoLootLogs => None,
            ReconcileError::Parse { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Run
// ---------------------------------------------------------------------------

fn report(progress: &mut dyn ProgressSink, step: Step) {
    debug!(percent = step.percent(), "{}", step.message());
    progress.step(step.percent(), step.message());
}

/// Run the full reconciliation over decoded input texts.
///
/// Every input is parsed before anything is mutated; the first parse error
/// aborts the run and no partial result is returned.
pub fn reconcile(
    inputs: &ReconcileInputs,
    progress: &mut dyn ProgressSink,
) -> Result<ReconcileOutcome, ReconcileError> {
    if inputs.loot_logs.is_empty() {
        return Err(ReconcileError::NoLootLogs);
    }

    report(progress, Step::Parse);
    let mut loot_sets = Vec::with_capacity(inputs.loot_logs.len());
    let mut loot_inputs = Vec::with_capacity(inputs.loot_logs.len());
    for log in &inputs.loot_logs {
        let records = parse_loot_records(&log.text).map_err(|source| ReconcileError::Parse {
            input: log.name.clone(),
            source,
        })?;
        info!(input = %log.name, records = records.len(), "loot log parsed");
        loot_inputs.push(InputCount {
            name: log.name.clone(),
            records: records.len(),
        });
        loot_sets.push(records);
    }

    let chest = &inputs.chest_log;
    let parsed_checks = parse_check_records(&chest.text).map_err(|source| ReconcileError::Parse {
        input: chest.name.clone(),
        source,
    })?;
    info!(input = %chest.name, records = parsed_checks.len(), "chest log parsed");
    let chest_input = InputCount {
        name: chest.name.clone(),
        records: parsed_checks.len(),
    };

    report(progress, Step::Merge);
    let mut loot = merge_loot_records(loot_sets);
    let merged_loot_records = loot.len();

    // The parsed chest log is owned here; later steps mutate this working set.
    report(progress, Step::CopyChestLog);
    let mut checks = parsed_checks;

    report(progress, Step::Prune);
    let prune = prune_stale(&loot, &mut checks);
    info!(
        cutoff = prune.cutoff.as_deref().unwrap_or("-"),
        kept = prune.kept,
        removed = prune.removed(),
        "chest log pruned"
    );

    report(progress, Step::Match);
    let matching = match_and_reduce(&mut loot, &mut checks);
    info!(
        loot_left = loot.len(),
        chest_left = checks.len(),
        units_matched = matching.units_matched,
        "quantities matched"
    );

    report(progress, Step::Serialize);
    let loot_output = serialize_loot_records(&loot);
    let chest_output = serialize_check_records(&checks);

    report(progress, Step::Complete);

    let summary = ReconcileSummary {
        loot_inputs,
        chest_input,
        merged_loot_records,
        prune,
        matching,
        loot_records_out: loot.len(),
        check_records_out: checks.len(),
    };

    Ok(ReconcileOutcome {
        loot_records: loot,
        check_records: checks,
        loot_output,
        chest_output,
        summary,
    })
}
