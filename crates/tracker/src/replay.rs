//! Scripted replay of detection ticks
//!
//! A tick script is a JSON array of `{ at_secs, players, cards }`
//! entries, one per video frame, standing in for the excluded vision
//! pipeline. Replaying a script through a session reproduces the exact
//! round progression the live pipeline would have produced.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use tourney_core::{RecordSink, RoundRecord, Session, SinkError, TickInput};

/// One scripted detection tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptTick {
    /// Monotonic timestamp of the tick, seconds since session start.
    pub at_secs: f64,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub cards: Vec<String>,
}

impl ScriptTick {
    fn input(&self) -> TickInput {
        TickInput {
            players: self.players.clone(),
            cards: self.cards.clone(),
        }
    }
}

/// What a replay produced.
#[derive(Debug, Default)]
pub struct ReplayOutcome {
    pub rounds_completed: u32,
    pub finalized: Vec<RoundRecord>,
    pub sink_errors: Vec<SinkError>,
}

/// Load a tick script from a JSON file.
pub fn load_script(path: &Path) -> Result<Vec<ScriptTick>, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read script: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse script: {}", e))
}

/// Feed every scripted tick through the session, in order.
pub fn run_script(
    session: &mut Session,
    ticks: &[ScriptTick],
    sink: &mut dyn RecordSink,
) -> ReplayOutcome {
    let mut outcome = ReplayOutcome::default();
    for tick in ticks {
        let now = Duration::from_secs_f64(tick.at_secs);
        let result = session.process_tick(&tick.input(), now, sink);
        if result.round_ended {
            outcome.rounds_completed += 1;
        }
        outcome.finalized.extend(result.finalized);
        outcome.sink_errors.extend(result.sink_errors);
    }
    outcome
}
