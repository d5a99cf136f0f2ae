//! Render record sets back to their export formats.
//!
//! Output is header + one line per record, joined with `\n`, no trailing
//! newline. Serializers only read the records.

use crate::records::{CheckRecord, LootRecord, CHECK_LOG_HEADER, LOOT_LOG_HEADER};

pub fn serialize_loot_records(records: &[LootRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(LOOT_LOG_HEADER.to_string());
    for r in records {
        let quantity = r.quantity.to_string();
        let fields: [&str; 10] = [
            &r.timestamp_utc,
            &r.looted_by_alliance,
            &r.looted_by_guild,
            &r.looted_by_name,
            &r.item_id,
            &r.item_name,
            &quantity,
            &r.looted_from_alliance,
            &r.looted_from_guild,
            &r.looted_from_name,
        ];
        lines.push(fields.join(";"));
    }
    lines.join("\n")
}

pub fn serialize_check_records(records: &[CheckRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CHECK_LOG_HEADER.to_string());
    for r in records {
        lines.push(format!(
            "\"{}\"\t\"{}\"\t\"{}\"\t\"{}\"\t\"{}\"\t\"{}\"",
            r.date, r.player, r.item, r.enchantment, r.quality, r.amount
        ));
    }
    lines.join("\n")
}
