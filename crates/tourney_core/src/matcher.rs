//! Player-to-card pairing
//!
//! Greedy first-fit over insertion order: for each player, the first
//! unconsumed card whose trailing character equals the player's leading
//! character (case-insensitive) is accepted. This is deliberately not a
//! maximum matching; ties are broken purely by detection order, which
//! favors earlier-detected players.

use crate::accumulator::DetectionAccumulator;
use crate::types::{CardObservation, PlayerObservation, Slot};

/// One finalized pairing, still carrying the slot it came from so the
/// caller can issue removal commands.
#[derive(Clone, Debug)]
pub struct MatchedPlay {
    pub slot: Slot,
    pub player: PlayerObservation,
    pub card: CardObservation,
}

/// Match both slots independently and concatenate, first slot first.
///
/// Each card is consumed at most once, and no two plays share the same
/// (player, detected_at) pair. Players with no matching card are
/// silently omitted.
pub fn match_players_to_cards(acc: &DetectionAccumulator) -> Vec<MatchedPlay> {
    let mut plays = Vec::new();
    for slot in [Slot::First, Slot::Second] {
        match_slot(slot, acc.players(slot), acc.cards(slot), &mut plays);
    }
    plays
}

fn match_slot(
    slot: Slot,
    players: &[PlayerObservation],
    cards: &[CardObservation],
    plays: &mut Vec<MatchedPlay>,
) {
    let mut used = vec![false; cards.len()];
    for player in players {
        let key = match player.match_key() {
            Some(key) => key,
            None => continue,
        };
        for (i, card) in cards.iter().enumerate() {
            if used[i] || card.match_key != Some(key) {
                continue;
            }
            let already_matched = plays.iter().any(|p| {
                p.player.name == player.name
                    && p.player.detected_at == player.detected_at
                    && p.card.label == card.label
            });
            if already_matched {
                continue;
            }
            used[i] = true;
            plays.push(MatchedPlay {
                slot,
                player: player.clone(),
                card: card.clone(),
            });
            break;
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
