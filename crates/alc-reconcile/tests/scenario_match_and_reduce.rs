use alc_logs::{CheckRecord, LootRecord};
use alc_reconcile::match_and_reduce;

fn loot(name: &str, item: &str, quantity: u64) -> LootRecord {
    LootRecord {
        timestamp_utc: "2025-09-27T04:19:58.481Z".to_string(),
        looted_by_alliance: "Alliance".to_string(),
        looted_by_guild: "GuildX".to_string(),
        looted_by_name: name.to_string(),
        item_id: "T4_MAIN_SWORD".to_string(),
        item_name: item.to_string(),
        quantity,
        looted_from_alliance: String::new(),
        looted_from_guild: String::new(),
        looted_from_name: "@MOB".to_string(),
    }
}

fn check(player: &str, item: &str, amount: u64) -> CheckRecord {
    CheckRecord {
        date: "2025-09-27T05:00:00.000Z".to_string(),
        player: player.to_string(),
        item: item.to_string(),
        enchantment: "0".to_string(),
        quality: "Normal".to_string(),
        amount,
    }
}

fn amounts(checks: &[CheckRecord]) -> Vec<u64> {
    checks.iter().map(|c| c.amount).collect()
}

#[test]
fn partial_consumption_of_first_bucket_entry() {
    let mut l = vec![loot("PlayerA", "Sword of Dawn", 3)];
    let mut c = vec![
        check("PlayerA", "Sword of Dawn", 5),
        check("PlayerA", "Sword of Dawn", 2),
    ];

    match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty(), "fully offset loot record must be removed");
    assert_eq!(amounts(&c), vec![2, 2]);
}

#[test]
fn both_sides_exhausted_are_removed() {
    let mut l = vec![loot("PlayerA", "Sword of Dawn", 5)];
    let mut c = vec![
        check("PlayerA", "Sword of Dawn", 3),
        check("PlayerA", "Sword of Dawn", 2),
    ];

    match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty());
    assert!(c.is_empty());
}

#[test]
fn greedy_walk_stops_exactly_at_exhaustion() {
    let mut l = vec![loot("PlayerA", "Sword of Dawn", 4)];
    let mut c = vec![
        check("PlayerA", "Sword of Dawn", 2),
        check("PlayerA", "Sword of Dawn", 1),
        check("PlayerA", "Sword of Dawn", 3),
    ];

    match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty());
    assert_eq!(amounts(&c), vec![2]);
}

#[test]
fn non_matching_keys_leave_everything_unchanged() {
    let mut l = vec![loot("PlayerB", "Different Item", 3)];
    let mut c = vec![check("PlayerA", "Sword of Dawn", 5)];
    let (l0, c0) = (l.clone(), c.clone());

    let report = match_and_reduce(&mut l, &mut c);

    assert_eq!(l, l0);
    assert_eq!(c, c0);
    assert!(report.is_noop());
    assert_eq!(report.loot_matched, 0);
}

#[test]
fn same_player_different_item_does_not_match() {
    let mut l = vec![loot("PlayerA", "Shield of Light", 1)];
    let mut c = vec![check("PlayerA", "Sword of Dawn", 1)];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(l.len(), 1);
    assert_eq!(c.len(), 1);
}

#[test]
fn multiple_keys_are_reduced_independently() {
    let mut l = vec![
        loot("PlayerA", "Sword of Dawn", 2),
        loot("PlayerB", "Shield of Light", 3),
    ];
    let mut c = vec![
        check("PlayerA", "Sword of Dawn", 5),
        check("PlayerB", "Shield of Light", 2),
    ];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(l.len(), 1);
    assert_eq!(l[0].looted_by_name, "PlayerB");
    assert_eq!(l[0].quantity, 1);

    assert_eq!(c.len(), 1);
    assert_eq!(c[0].player, "PlayerA");
    assert_eq!(c[0].amount, 3);
}

#[test]
fn loot_records_sharing_a_key_consume_in_their_own_order() {
    // Three loot events for the same key against a bucket of [2, 4].
    let mut l = vec![
        loot("PlayerA", "Bag", 1),
        loot("PlayerA", "Bag", 3),
        loot("PlayerA", "Bag", 5),
    ];
    let mut c = vec![check("PlayerA", "Bag", 2), check("PlayerA", "Bag", 4)];

    let report = match_and_reduce(&mut l, &mut c);

    // #1 takes 1 from row 0 (2 -> 1).
    // #2 takes 1 from row 0 (-> 0) then 2 from row 1 (4 -> 2).
    // #3 finds row 0 empty, takes 2 from row 1 (-> 0), 3 left over.
    assert_eq!(l.len(), 1);
    assert_eq!(l[0].quantity, 3);
    assert!(c.is_empty());
    assert_eq!(report.units_matched, 6);
    assert_eq!(report.loot_removed, 2);
    assert_eq!(report.loot_reduced, 1);
}

#[test]
fn processing_order_is_collection_order_not_quantity_order() {
    let mut first_small = vec![loot("P", "Bag", 1), loot("P", "Bag", 4)];
    let mut c1 = vec![check("P", "Bag", 4)];
    match_and_reduce(&mut first_small, &mut c1);
    assert_eq!(first_small.len(), 1);
    assert_eq!(first_small[0].quantity, 1);

    let mut first_big = vec![loot("P", "Bag", 4), loot("P", "Bag", 1)];
    let mut c2 = vec![check("P", "Bag", 4)];
    match_and_reduce(&mut first_big, &mut c2);
    assert_eq!(first_big.len(), 1);
    assert_eq!(first_big[0].quantity, 1);
    assert!(c1.is_empty() && c2.is_empty());
}

#[test]
fn loot_record_survives_with_remaining_quantity_when_bucket_runs_out() {
    let mut l = vec![loot("PlayerA", "Bag", 10)];
    let mut c = vec![check("PlayerA", "Bag", 3), check("PlayerA", "Bag", 4)];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(l.len(), 1);
    assert_eq!(l[0].quantity, 3);
    assert!(c.is_empty());
}

#[test]
fn bucket_entries_are_interleaved_with_other_keys() {
    let mut l = vec![loot("A", "Bag", 3)];
    let mut c = vec![
        check("A", "Bag", 1),
        check("B", "Bag", 9),
        check("A", "Cape", 9),
        check("A", "Bag", 5),
    ];

    match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty());
    let left: Vec<(&str, &str, u64)> = c
        .iter()
        .map(|r| (r.player.as_str(), r.item.as_str(), r.amount))
        .collect();
    assert_eq!(left, vec![("B", "Bag", 9), ("A", "Cape", 9), ("A", "Bag", 3)]);
}

#[test]
fn survivors_keep_relative_order_on_both_sides() {
    let mut l = vec![
        loot("A", "x", 1),
        loot("B", "y", 1),
        loot("C", "z", 1),
        loot("D", "w", 1),
    ];
    let mut c = vec![check("B", "y", 1), check("D", "w", 1), check("E", "v", 1)];

    match_and_reduce(&mut l, &mut c);

    let names: Vec<&str> = l.iter().map(|r| r.looted_by_name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(c.len(), 1);
    assert_eq!(c[0].player, "E");
}

// ---------------------------------------------------------------------------
// Zero quantities
// ---------------------------------------------------------------------------

#[test]
fn zero_quantity_loot_with_bucket_is_removed_without_consuming() {
    let mut l = vec![loot("A", "Bag", 0)];
    let mut c = vec![check("A", "Bag", 4)];

    let report = match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty());
    assert_eq!(amounts(&c), vec![4]);
    assert_eq!(report.units_matched, 0);
}

#[test]
fn zero_quantity_loot_without_bucket_is_kept() {
    let mut l = vec![loot("A", "Bag", 0)];
    let mut c = vec![check("B", "Bag", 4)];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(l.len(), 1);
    assert_eq!(l[0].quantity, 0);
}

#[test]
fn zero_amount_chest_row_reached_by_a_walk_is_removed() {
    let mut l = vec![loot("A", "Bag", 2)];
    let mut c = vec![check("A", "Bag", 0), check("A", "Bag", 5)];

    let report = match_and_reduce(&mut l, &mut c);

    assert!(l.is_empty());
    assert_eq!(amounts(&c), vec![3]);
    assert_eq!(report.check_removed, 1);
    assert_eq!(report.check_reduced, 1);
}

#[test]
fn zero_amount_chest_row_not_reached_is_kept() {
    // The walk stops on the first row; the trailing zero row is never reached.
    let mut l = vec![loot("A", "Bag", 2)];
    let mut c = vec![check("A", "Bag", 5), check("A", "Bag", 0)];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(amounts(&c), vec![3, 0]);
}

#[test]
fn zero_amount_chest_row_without_loot_is_kept() {
    let mut l: Vec<LootRecord> = Vec::new();
    let mut c = vec![check("A", "Bag", 0)];

    match_and_reduce(&mut l, &mut c);

    assert_eq!(c.len(), 1);
}

#[test]
fn no_quantity_or_amount_is_left_at_zero_after_a_walk() {
    let mut l = vec![loot("A", "Bag", 3), loot("A", "Bag", 2), loot("A", "Bag", 7)];
    let mut c = vec![check("A", "Bag", 4), check("A", "Bag", 4)];

    match_and_reduce(&mut l, &mut c);

    assert!(l.iter().all(|r| r.quantity > 0));
    assert!(c.iter().all(|r| r.amount > 0));
    assert_eq!(l.len(), 1);
    assert_eq!(l[0].quantity, 4);
    assert!(c.is_empty());
}
