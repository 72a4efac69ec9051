use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One of the two parallel sub-contests within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub fn other(self) -> Slot {
        match self {
            Slot::First => Slot::Second,
            Slot::Second => Slot::First,
        }
    }

    pub fn idx(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }

    /// Slot that receives detections for the given round.
    pub fn for_round(round: u32, first_phase_rounds: u32) -> Slot {
        if round <= first_phase_rounds {
            Slot::First
        } else {
            Slot::Second
        }
    }
}

/// A player sighting within the current round.
///
/// `detected_at` is the time since the round started, i.e. the player's
/// thinking time if this sighting ends up matched to a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerObservation {
    pub name: String,
    pub detected_at: Duration,
}

impl PlayerObservation {
    pub fn new(name: &str, detected_at: Duration) -> Self {
        Self {
            name: name.to_string(),
            detected_at,
        }
    }

    /// Lowercased leading character of the player name, used as the
    /// correspondence key against card labels.
    pub fn match_key(&self) -> Option<char> {
        self.name.chars().next().map(|c| c.to_ascii_lowercase())
    }
}

/// A card sighting within the current round.
///
/// Detector labels encode two things at once: the digits form the
/// logical card identity, and the trailing character names the player
/// the card belongs to. Both parts are derived once here so the rest
/// of the engine never rescans the label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardObservation {
    /// Raw label as emitted by the detector, e.g. "card_12a".
    pub label: String,
    /// Lowercased trailing character (None for an empty label).
    pub match_key: Option<char>,
    /// Digits-only card identity, e.g. "12".
    pub canonical_id: String,
}

impl CardObservation {
    pub fn parse(label: &str) -> Self {
        Self {
            label: label.to_string(),
            match_key: label.chars().last().map(|c| c.to_ascii_lowercase()),
            canonical_id: label.chars().filter(|c| c.is_ascii_digit()).collect(),
        }
    }
}

/// An unordered pairing of two participants for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchup {
    pub home: String,
    pub away: String,
}

impl Matchup {
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: home.to_string(),
            away: away.to_string(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.home == name || self.away == name
    }

    /// The other participant of this matchup, if `name` is one of them.
    pub fn opponent_of(&self, name: &str) -> Option<&str> {
        if self.home == name {
            Some(&self.away)
        } else if self.away == name {
            Some(&self.home)
        } else {
            None
        }
    }
}

/// Durable output unit for one matched play. Immutable once emitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub phase: u32,
    pub round: u32,
    pub player: String,
    /// Canonical (digits-only) card identity.
    pub card: String,
    /// Opponent from the round's matchups, None if the player was not scheduled.
    pub vs: Option<String>,
    pub thinking_time: Duration,
}

/// Per-tick status snapshot for external display/telemetry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionStatus {
    pub phase: u32,
    pub round: u32,
    pub matchups: Vec<Matchup>,
}

/// Phase for a round number, given the configured phase boundaries.
///
/// Each boundary is the last round of its phase; rounds past the final
/// boundary all belong to the last phase. With the default boundaries
/// `[1, 2]`: round 1 -> phase 1, round 2 -> phase 2, rounds 3+ -> phase 3.
pub fn phase_for_round(round: u32, boundaries: &[u32]) -> u32 {
    boundaries.iter().filter(|&&b| round > b).count() as u32 + 1
}
