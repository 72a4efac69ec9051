//! Per-round detection bookkeeping
//!
//! Tracks which players and which cards have been observed in each
//! slot since the round started. Observation sets are owned exclusively
//! here; the rest of the engine reads them through slices and mutates
//! them through explicit commands.

use std::collections::HashMap;
use std::time::Duration;

use crate::types::{CardObservation, PlayerObservation, Slot};

/// Maximum distinct cards tracked per slot.
pub const DEFAULT_SLOT_CAPACITY: usize = 4;

#[derive(Clone, Debug, Default)]
struct SlotState {
    players: Vec<PlayerObservation>,
    cards: Vec<CardObservation>,
    /// Sightings per label, including sightings rejected by dedup or
    /// capacity. Reset when the slot is cleared.
    detection_counts: HashMap<String, u32>,
}

/// Per-round, per-slot accumulation of distinct observations.
#[derive(Clone, Debug)]
pub struct DetectionAccumulator {
    capacity: usize,
    slots: [SlotState; 2],
}

impl DetectionAccumulator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            slots: [SlotState::default(), SlotState::default()],
        }
    }

    /// Insert a player sighting unless the name is already present in
    /// the slot. Returns whether it was inserted.
    pub fn record_player(&mut self, slot: Slot, name: &str, elapsed: Duration) -> bool {
        let state = &mut self.slots[slot.idx()];
        if state.players.iter().any(|p| p.name == name) {
            return false;
        }
        state.players.push(PlayerObservation::new(name, elapsed));
        true
    }

    /// Insert a card sighting unless the label is already present or
    /// the slot is at capacity. Returns whether it was inserted.
    pub fn record_card(&mut self, slot: Slot, label: &str) -> bool {
        let state = &mut self.slots[slot.idx()];
        *state.detection_counts.entry(label.to_string()).or_insert(0) += 1;
        if state.cards.len() >= self.capacity {
            return false;
        }
        if state.cards.iter().any(|c| c.label == label) {
            return false;
        }
        state.cards.push(CardObservation::parse(label));
        true
    }

    /// Duplicate the most recent card entry to stand in for a sighting
    /// the detector is assumed to have missed. Bypasses label dedup but
    /// respects capacity; no-op on an empty slot.
    pub fn backfill_missing_cards(&mut self, slot: Slot) -> bool {
        let state = &mut self.slots[slot.idx()];
        if state.cards.is_empty() || state.cards.len() >= self.capacity {
            return false;
        }
        let copy = state.cards.last().cloned();
        if let Some(card) = copy {
            state.cards.push(card);
            return true;
        }
        false
    }

    /// Drop all observations and detection counts for the slot.
    pub fn clear(&mut self, slot: Slot) {
        self.slots[slot.idx()] = SlotState::default();
    }

    pub fn players(&self, slot: Slot) -> &[PlayerObservation] {
        &self.slots[slot.idx()].players
    }

    pub fn cards(&self, slot: Slot) -> &[CardObservation] {
        &self.slots[slot.idx()].cards
    }

    pub fn card_count(&self, slot: Slot) -> usize {
        self.slots[slot.idx()].cards.len()
    }

    pub fn detection_count(&self, slot: Slot, label: &str) -> u32 {
        self.slots[slot.idx()]
            .detection_counts
            .get(label)
            .copied()
            .unwrap_or(0)
    }

    /// Remove the player observation matching both name and timestamp.
    pub fn remove_player(&mut self, slot: Slot, name: &str, detected_at: Duration) -> bool {
        let state = &mut self.slots[slot.idx()];
        match state
            .players
            .iter()
            .position(|p| p.name == name && p.detected_at == detected_at)
        {
            Some(i) => {
                state.players.remove(i);
                true
            }
            None => false,
        }
    }

    /// Remove the first card observation with the given label.
    pub fn remove_card(&mut self, slot: Slot, label: &str) -> bool {
        let state = &mut self.slots[slot.idx()];
        match state.cards.iter().position(|c| c.label == label) {
            Some(i) => {
                state.cards.remove(i);
                true
            }
            None => false,
        }
    }
}

impl Default for DetectionAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_CAPACITY)
    }
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod accumulator_tests;
