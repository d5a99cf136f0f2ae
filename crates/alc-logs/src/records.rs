use serde::{Deserialize, Serialize};

/// Exact header line of a Loot Logger export (case- and order-sensitive).
pub const LOOT_LOG_HEADER: &str = "timestamp_utc;looted_by__alliance;looted_by__guild;looted_by__name;item_id;item_name;quantity;looted_from__alliance;looted_from__guild;looted_from__name";

/// Exact header line of a Chest Log export.
pub const CHECK_LOG_HEADER: &str =
    "\"Date\"\t\"Player\"\t\"Item\"\t\"Enchantment\"\t\"Quality\"\t\"Amount\"";

/// One loot event from a Loot Logger export.
///
/// Field order matches the column order of [`LOOT_LOG_HEADER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LootRecord {
    /// ISO-8601 UTC timestamp; compared lexically.
    pub timestamp_utc: String,
    pub looted_by_alliance: String,
    pub looted_by_guild: String,
    pub looted_by_name: String,
    pub item_id: String,
    pub item_name: String,
    pub quantity: u64,
    pub looted_from_alliance: String,
    pub looted_from_guild: String,
    pub looted_from_name: String,
}

impl LootRecord {
    /// Matching key: `(looted_by_name, item_name)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.looted_by_name, &self.item_name)
    }
}

/// One row of a Chest Log export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckRecord {
    /// `MM/DD/YYYY HH:MM:SS` as read; rewritten to ISO-8601 by the pruner.
    pub date: String,
    pub player: String,
    pub item: String,
    pub enchantment: String,
    pub quality: String,
    pub amount: u64,
}

impl CheckRecord {
    /// Matching key: `(player, item)`.
    pub fn key(&self) -> (&str, &str) {
        (&self.player, &self.item)
    }
}
