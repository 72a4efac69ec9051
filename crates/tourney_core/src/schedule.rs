//! Round-robin matchup scheduling
//!
//! A fixed 3-round rotation over a 4-participant roster. The table is
//! built once; lookups are pure and periodic with period 3, so the
//! same round number always yields the same matchups.

use crate::types::Matchup;

/// Roster used when no configuration is supplied.
pub const DEFAULT_ROSTER: [&str; 4] = ["Apple", "Pear", "Orange", "Banana"];

/// Roster index pairs for the 3-round rotation.
const CYCLE: [[(usize, usize); 2]; 3] = [
    [(0, 1), (2, 3)],
    [(0, 3), (2, 1)],
    [(1, 3), (2, 0)],
];

/// Stateless round-number-indexed matchup table.
#[derive(Clone, Debug)]
pub struct RoundRobinScheduler {
    table: [[Matchup; 2]; 3],
}

impl RoundRobinScheduler {
    pub fn new(roster: &[String; 4]) -> Self {
        let table = CYCLE.map(|entries| {
            entries.map(|(a, b)| Matchup::new(&roster[a], &roster[b]))
        });
        Self { table }
    }

    /// Matchups for the given round.
    ///
    /// Pure lookup keyed by `((round - 1) % 3) + 1`. Round numbers
    /// start at 1; 0 is a contract violation and panics.
    pub fn matchups_for(&self, round: u32) -> &[Matchup; 2] {
        assert!(round >= 1, "round numbers start at 1, got {round}");
        &self.table[((round - 1) % 3) as usize]
    }
}

impl Default for RoundRobinScheduler {
    fn default() -> Self {
        let roster = DEFAULT_ROSTER.map(String::from);
        Self::new(&roster)
    }
}

#[cfg(test)]
#[path = "schedule_tests.rs"]
mod schedule_tests;
