use alc_logs::LootRecord;

/// Concatenate parsed loot logs in the order given.
///
/// Identical events appearing in two logs are kept twice; the matcher and
/// pruner decide what survives.
pub fn merge_loot_records(sets: Vec<Vec<LootRecord>>) -> Vec<LootRecord> {
    let total = sets.iter().map(Vec::len).sum();
    let mut merged = Vec::with_capacity(total);
    for mut set in sets {
        merged.append(&mut set);
    }
    merged
}
