//! Round Lifecycle & Matching Engine
//!
//! Core of a camera-tracked card-tournament recorder:
//! - Round-robin scheduling over a fixed 4-participant roster
//! - Per-round accumulation of player and card detections
//! - Greedy player-to-card matching at round end
//! - Round/phase progression and finalized record emission
//!
//! The engine is single-threaded and tick-driven: the surrounding
//! vision pipeline (frame capture, QR decoding, object detection) feeds
//! one [`TickInput`] per frame and the engine does no I/O of its own.
//! Persistence is behind the [`RecordSink`] trait.

pub mod accumulator;
pub mod matcher;
pub mod schedule;
pub mod session;
pub mod types;

// Re-export the engine surface (not the internal slot bookkeeping)
pub use accumulator::*;
pub use matcher::*;
pub use schedule::*;
pub use session::*;
pub use types::*;

use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// RecordSink trait — implemented by external persistence adapters
// =============================================================================

/// Raw play forwarded to a sink the moment a round finalizes, before
/// the card label is canonicalized.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayEvent {
    pub player: String,
    /// Card label as the detector emitted it.
    pub card_label: String,
    pub thinking_time: Duration,
    pub round: u32,
    pub matchups: Vec<Matchup>,
}

/// Failure reported by a sink. Sink failures never mutate round state;
/// the session continues and the caller may retry export later.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write play record: {0}")]
    Write(String),
}

/// Boundary to external persistence (time-series write, tabular export).
///
/// The engine owns no storage format or transport; adapters decide how
/// a play is persisted.
pub trait RecordSink {
    /// Persist one finalized play. Errors are reported to the caller
    /// of [`Session::process_tick`] but do not affect the session.
    fn record_play(&mut self, play: &PlayEvent) -> Result<(), SinkError>;
}

/// Sink that drops every play. Useful for tests and sink-less runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn record_play(&mut self, _play: &PlayEvent) -> Result<(), SinkError> {
        Ok(())
    }
}
