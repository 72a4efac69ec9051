use super::*;

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn test_player_dedup() {
    let mut acc = DetectionAccumulator::default();
    assert!(acc.record_player(Slot::First, "Apple", secs(2)));
    assert!(!acc.record_player(Slot::First, "Apple", secs(5)));
    assert_eq!(acc.players(Slot::First).len(), 1);
    // First sighting's timestamp wins
    assert_eq!(acc.players(Slot::First)[0].detected_at, secs(2));
}

#[test]
fn test_players_independent_per_slot() {
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs(1));
    assert!(acc.record_player(Slot::Second, "Apple", secs(1)));
    assert_eq!(acc.players(Slot::First).len(), 1);
    assert_eq!(acc.players(Slot::Second).len(), 1);
}

#[test]
fn test_card_dedup() {
    let mut acc = DetectionAccumulator::default();
    assert!(acc.record_card(Slot::First, "card_12a"));
    assert!(!acc.record_card(Slot::First, "card_12a"));
    assert_eq!(acc.card_count(Slot::First), 1);
}

#[test]
fn test_card_capacity() {
    let mut acc = DetectionAccumulator::default();
    for label in ["c_1a", "c_2b", "c_3o", "c_4p"] {
        assert!(acc.record_card(Slot::Second, label));
    }
    assert!(!acc.record_card(Slot::Second, "c_5x"));
    assert_eq!(acc.card_count(Slot::Second), 4);
}

#[test]
fn test_detection_counts() {
    let mut acc = DetectionAccumulator::default();
    acc.record_card(Slot::First, "card_12a");
    acc.record_card(Slot::First, "card_12a");
    acc.record_card(Slot::First, "card_12a");
    assert_eq!(acc.detection_count(Slot::First, "card_12a"), 3);
    assert_eq!(acc.detection_count(Slot::First, "card_99z"), 0);
}

#[test]
fn test_backfill_duplicates_last_entry() {
    let mut acc = DetectionAccumulator::default();
    acc.record_card(Slot::Second, "c_1a");
    acc.record_card(Slot::Second, "c_2b");
    acc.record_card(Slot::Second, "c_3o");
    assert!(acc.backfill_missing_cards(Slot::Second));
    assert_eq!(acc.card_count(Slot::Second), 4);
    assert_eq!(acc.cards(Slot::Second)[3].label, "c_3o");
}

#[test]
fn test_backfill_respects_capacity_and_empty_slot() {
    let mut acc = DetectionAccumulator::default();
    assert!(!acc.backfill_missing_cards(Slot::Second));
    for label in ["c_1a", "c_2b", "c_3o", "c_4p"] {
        acc.record_card(Slot::Second, label);
    }
    assert!(!acc.backfill_missing_cards(Slot::Second));
    assert_eq!(acc.card_count(Slot::Second), 4);
}

#[test]
fn test_clear_resets_slot() {
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs(1));
    acc.record_card(Slot::First, "card_12a");
    acc.clear(Slot::First);
    assert!(acc.players(Slot::First).is_empty());
    assert_eq!(acc.card_count(Slot::First), 0);
    assert_eq!(acc.detection_count(Slot::First, "card_12a"), 0);
}

#[test]
fn test_remove_commands() {
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs(2));
    acc.record_card(Slot::First, "card_12a");

    assert!(!acc.remove_player(Slot::First, "Apple", secs(3)));
    assert!(acc.remove_player(Slot::First, "Apple", secs(2)));
    assert!(acc.players(Slot::First).is_empty());

    assert!(acc.remove_card(Slot::First, "card_12a"));
    assert!(!acc.remove_card(Slot::First, "card_12a"));
}
