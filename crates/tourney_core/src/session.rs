//! Round lifecycle state machine
//!
//! A session loops through one `ROUND_ACTIVE` state per round: every
//! detection tick is ingested, the completion predicate is evaluated,
//! and on completion the matched plays are finalized into records, the
//! slots are cleared, and the next round's matchups are fetched.
//! Termination is an external decision; the session itself never stops.

use std::time::Duration;

use crate::accumulator::{DetectionAccumulator, DEFAULT_SLOT_CAPACITY};
use crate::matcher::match_players_to_cards;
use crate::schedule::{RoundRobinScheduler, DEFAULT_ROSTER};
use crate::types::{phase_for_round, Matchup, RoundRecord, SessionStatus, Slot};
use crate::{PlayEvent, RecordSink, SinkError};

/// Session configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// The four tournament participants, in scheduling order.
    pub roster: [String; 4],
    /// Rounds routed to the first slot; later rounds use the second.
    pub first_phase_rounds: u32,
    /// Last round of each phase except the final open-ended one.
    pub phase_boundaries: Vec<u32>,
    /// Maximum distinct cards per slot.
    pub slot_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.map(String::from),
            first_phase_rounds: 1,
            phase_boundaries: vec![1, 2],
            slot_capacity: DEFAULT_SLOT_CAPACITY,
        }
    }
}

/// One frame's worth of detection results, already serialized into a
/// single consistent tick by the caller.
#[derive(Clone, Debug, Default)]
pub struct TickInput {
    /// Distinct player identifiers recognized this tick.
    pub players: Vec<String>,
    /// Card labels visible this tick; empty means no cards visible.
    pub cards: Vec<String>,
}

/// What a tick produced: zero or more finalized records, plus any sink
/// failures (which never affect in-memory state).
#[derive(Debug, Default)]
pub struct TickOutcome {
    /// Whether this tick closed a round (possibly with zero matches).
    pub round_ended: bool,
    pub finalized: Vec<RoundRecord>,
    pub sink_errors: Vec<SinkError>,
}

/// The tournament session: scheduler, accumulator, and round/phase
/// progression, plus the growing record log.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    scheduler: RoundRobinScheduler,
    accumulator: DetectionAccumulator,
    round: u32,
    phase: u32,
    matchups: [Matchup; 2],
    /// Monotonic timestamp of the current round's start.
    round_start: Duration,
    records: Vec<RoundRecord>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let scheduler = RoundRobinScheduler::new(&config.roster);
        let matchups = scheduler.matchups_for(1).clone();
        let phase = phase_for_round(1, &config.phase_boundaries);
        Self {
            accumulator: DetectionAccumulator::new(config.slot_capacity),
            config,
            scheduler,
            round: 1,
            phase,
            matchups,
            round_start: Duration::ZERO,
            records: Vec::new(),
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn matchups(&self) -> &[Matchup] {
        &self.matchups
    }

    /// All records finalized so far, in emission order.
    pub fn records(&self) -> &[RoundRecord] {
        &self.records
    }

    /// Batch export: hand the full record log to the caller.
    pub fn take_records(&mut self) -> Vec<RoundRecord> {
        std::mem::take(&mut self.records)
    }

    pub fn status(&self) -> SessionStatus {
        SessionStatus {
            phase: self.phase,
            round: self.round,
            matchups: self.matchups.to_vec(),
        }
    }

    pub fn accumulator(&self) -> &DetectionAccumulator {
        &self.accumulator
    }

    fn active_slot(&self) -> Slot {
        Slot::for_round(self.round, self.config.first_phase_rounds)
    }

    /// Ingest one tick of detection results and advance the state
    /// machine. `now` is a monotonic clock reading from the caller;
    /// thinking times are measured against the round's start.
    pub fn process_tick(
        &mut self,
        input: &TickInput,
        now: Duration,
        sink: &mut dyn RecordSink,
    ) -> TickOutcome {
        let elapsed = now.saturating_sub(self.round_start);
        let slot = self.active_slot();

        for name in &input.players {
            self.accumulator.record_player(slot, name, elapsed);
        }
        for label in &input.cards {
            self.accumulator.record_card(slot, label);
        }

        let player_seen = !input.players.is_empty();
        let cards_seen = !input.cards.is_empty();

        // Second-slot backfill for suspected missed detections. Runs
        // before the completion check so a synthesized entry can close
        // the round on this same tick.
        if self.round > self.config.first_phase_rounds
            && player_seen
            && !cards_seen
            && self.accumulator.card_count(Slot::Second) < self.config.slot_capacity
        {
            self.accumulator.backfill_missing_cards(Slot::Second);
        }

        let mut outcome = TickOutcome::default();
        if self.accumulator.card_count(slot) == self.config.slot_capacity
            && player_seen
            && !cards_seen
        {
            self.end_round(now, sink, &mut outcome);
        }
        outcome
    }

    /// Finalize the current round: match, record, clear, advance.
    fn end_round(&mut self, now: Duration, sink: &mut dyn RecordSink, outcome: &mut TickOutcome) {
        outcome.round_ended = true;
        let plays = match_players_to_cards(&self.accumulator);
        for play in plays {
            self.accumulator
                .remove_player(play.slot, &play.player.name, play.player.detected_at);
            self.accumulator.remove_card(play.slot, &play.card.label);

            let event = PlayEvent {
                player: play.player.name.clone(),
                card_label: play.card.label.clone(),
                thinking_time: play.player.detected_at,
                round: self.round,
                matchups: self.matchups.to_vec(),
            };
            if let Err(e) = sink.record_play(&event) {
                outcome.sink_errors.push(e);
            }

            let vs = self
                .matchups
                .iter()
                .find_map(|m| m.opponent_of(&play.player.name))
                .map(String::from);
            let record = RoundRecord {
                phase: self.phase,
                round: self.round,
                player: play.player.name,
                card: play.card.canonical_id,
                vs,
                thinking_time: play.player.detected_at,
            };
            self.records.push(record.clone());
            outcome.finalized.push(record);
        }

        // Unmatched observations are dropped at the round boundary.
        self.accumulator.clear(Slot::First);
        self.accumulator.clear(Slot::Second);

        self.round += 1;
        self.phase = phase_for_round(self.round, &self.config.phase_boundaries);
        self.matchups = self.scheduler.matchups_for(self.round).clone();
        self.round_start = now;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
