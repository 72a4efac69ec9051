//! Synthetic detection feed
//!
//! Generates a plausible tick script without any camera: each round,
//! the four players arrive in shuffled order with jittered thinking
//! times, their cards stay visible on the table, and a final quiet
//! player-only tick closes the round. Useful for exercising the whole
//! pipeline before pointing it at real detections.

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use tourney_core::SessionConfig;

use crate::replay::ScriptTick;

/// Build a tick script covering `rounds` complete rounds.
pub fn synthetic_script(config: &SessionConfig, rounds: u32) -> Vec<ScriptTick> {
    let mut rng = thread_rng();
    let mut ticks = Vec::new();
    let mut t = 0.0_f64;

    for _round in 0..rounds {
        let mut order: Vec<&String> = config.roster.iter().collect();
        order.shuffle(&mut rng);

        let mut visible: Vec<String> = Vec::new();
        let mut used_nums: Vec<u32> = Vec::new();

        for player in order {
            t += rng.gen_range(1.5..6.0);
            visible.push(fresh_card(&mut rng, &mut used_nums, player));
            ticks.push(ScriptTick {
                at_secs: t,
                players: vec![player.clone()],
                cards: visible.clone(),
            });
        }

        // Pad with unowned cards if the slot wants more than one per player
        while visible.len() < config.slot_capacity {
            t += rng.gen_range(0.5..2.0);
            visible.push(fresh_card(&mut rng, &mut used_nums, "x"));
            ticks.push(ScriptTick {
                at_secs: t,
                players: vec![],
                cards: visible.clone(),
            });
        }

        // Cards leave the table while a player is still in frame,
        // which is the round-completion signal.
        t += rng.gen_range(1.0..3.0);
        ticks.push(ScriptTick {
            at_secs: t,
            players: vec![config.roster[0].clone()],
            cards: vec![],
        });
    }

    ticks
}

fn fresh_card(rng: &mut impl Rng, used_nums: &mut Vec<u32>, owner: &str) -> String {
    let num = loop {
        let n = rng.gen_range(10u32..100);
        if !used_nums.contains(&n) {
            break n;
        }
    };
    used_nums.push(num);
    let initial = owner.chars().next().unwrap_or('x');
    format!("card_{}{}", num, initial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::run_script;
    use tourney_core::{NullSink, Session};

    #[test]
    fn test_synthetic_feed_completes_rounds() {
        let config = SessionConfig::default();
        let script = synthetic_script(&config, 3);
        let mut session = Session::new(config);
        let outcome = run_script(&mut session, &script, &mut NullSink);

        assert_eq!(outcome.rounds_completed, 3);
        // Every player plays exactly one card per round
        assert_eq!(outcome.finalized.len(), 12);
        assert_eq!(session.round(), 4);

        let phases: Vec<u32> = outcome.finalized.iter().map(|r| r.phase).collect();
        assert!(phases.starts_with(&[1, 1, 1, 1]));
        assert!(phases.ends_with(&[3, 3, 3, 3]));
    }

    #[test]
    fn test_timestamps_monotonic() {
        let script = synthetic_script(&SessionConfig::default(), 2);
        for pair in script.windows(2) {
            assert!(pair[0].at_secs < pair[1].at_secs);
        }
    }
}
