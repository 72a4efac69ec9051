//! Tracker configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use tourney_core::{SessionConfig, DEFAULT_ROSTER, DEFAULT_SLOT_CAPACITY};

/// On-disk configuration (`tracker.toml`). Every field has a default,
/// so a partial or missing file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    /// The four tournament participants, in scheduling order.
    pub roster: Vec<String>,
    /// Rounds routed to the first slot.
    pub first_phase_rounds: u32,
    /// Last round of each phase except the final open-ended one.
    pub phase_boundaries: Vec<u32>,
    /// Maximum distinct cards per slot.
    pub slot_capacity: usize,
    /// Directory for CSV and play-log output.
    pub output_dir: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            roster: DEFAULT_ROSTER.map(String::from).to_vec(),
            first_phase_rounds: 1,
            phase_boundaries: vec![1, 2],
            slot_capacity: DEFAULT_SLOT_CAPACITY,
            output_dir: ".".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {}", e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Load from a file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, String> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate and convert into the core session configuration.
    pub fn session_config(&self) -> Result<SessionConfig, String> {
        let roster: [String; 4] = self
            .roster
            .clone()
            .try_into()
            .map_err(|r: Vec<String>| format!("roster must have exactly 4 players, got {}", r.len()))?;
        if self.slot_capacity == 0 {
            return Err("slot_capacity must be at least 1".to_string());
        }
        Ok(SessionConfig {
            roster,
            first_phase_rounds: self.first_phase_rounds,
            phase_boundaries: self.phase_boundaries.clone(),
            slot_capacity: self.slot_capacity,
        })
    }
}
