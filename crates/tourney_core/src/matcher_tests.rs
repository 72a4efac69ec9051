use super::*;
use std::time::Duration;

fn secs_f(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

fn acc_with(players: &[(&str, f64)], cards: &[&str]) -> DetectionAccumulator {
    let mut acc = DetectionAccumulator::default();
    for (name, t) in players {
        acc.record_player(Slot::First, name, secs_f(*t));
    }
    for label in cards {
        acc.record_card(Slot::First, label);
    }
    acc
}

#[test]
fn test_single_pairing() {
    let acc = acc_with(&[("A", 2.5)], &["card_12A"]);
    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].player.name, "A");
    assert_eq!(plays[0].player.detected_at, secs_f(2.5));
    assert_eq!(plays[0].card.label, "card_12A");
}

#[test]
fn test_case_insensitive_keys() {
    let acc = acc_with(&[("apple", 1.0)], &["card_07A"]);
    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].card.canonical_id, "07");
}

#[test]
fn test_first_fit_by_insertion_order() {
    // Both cards match 'a'; the earlier-inserted card wins.
    let acc = acc_with(&[("Apple", 1.0)], &["card_10a", "card_20a"]);
    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].card.label, "card_10a");
}

#[test]
fn test_card_consumed_at_most_once() {
    // Two players share the leading character but only one card matches.
    let acc = acc_with(&[("Apple", 1.0), ("Avocado", 2.0)], &["card_10a"]);
    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].player.name, "Apple");
}

#[test]
fn test_unmatched_player_omitted() {
    let acc = acc_with(&[("Apple", 1.0), ("Orange", 2.0)], &["card_10a"]);
    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].player.name, "Apple");
}

#[test]
fn test_no_duplicate_player_time_pairs() {
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs_f(1.0));
    acc.record_player(Slot::Second, "Apple", secs_f(1.0));
    acc.record_card(Slot::First, "card_10a");
    acc.record_card(Slot::Second, "card_10a");

    let plays = match_players_to_cards(&acc);
    // Identical (player, time, label) across slots collapses to one play.
    assert_eq!(plays.len(), 1);
    assert_eq!(plays[0].slot, Slot::First);
}

#[test]
fn test_slots_matched_independently() {
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs_f(1.0));
    acc.record_card(Slot::First, "card_10a");
    acc.record_player(Slot::Second, "Orange", secs_f(3.0));
    acc.record_card(Slot::Second, "card_22o");

    let plays = match_players_to_cards(&acc);
    assert_eq!(plays.len(), 2);
    assert_eq!(plays[0].slot, Slot::First);
    assert_eq!(plays[1].slot, Slot::Second);
    assert_eq!(plays[1].player.name, "Orange");
}

#[test]
fn test_cross_slot_cards_not_shared() {
    // A card in the second slot never pairs with a first-slot player.
    let mut acc = DetectionAccumulator::default();
    acc.record_player(Slot::First, "Apple", secs_f(1.0));
    acc.record_card(Slot::Second, "card_10a");
    assert!(match_players_to_cards(&acc).is_empty());
}
