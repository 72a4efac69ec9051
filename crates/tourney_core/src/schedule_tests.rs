use super::*;

#[test]
fn test_default_table() {
    let sched = RoundRobinScheduler::default();
    assert_eq!(
        *sched.matchups_for(1),
        [Matchup::new("Apple", "Pear"), Matchup::new("Orange", "Banana")]
    );
    assert_eq!(
        *sched.matchups_for(2),
        [Matchup::new("Apple", "Banana"), Matchup::new("Orange", "Pear")]
    );
    assert_eq!(
        *sched.matchups_for(3),
        [Matchup::new("Pear", "Banana"), Matchup::new("Orange", "Apple")]
    );
}

#[test]
fn test_periodicity() {
    let sched = RoundRobinScheduler::default();
    for round in 1..=30 {
        assert_eq!(sched.matchups_for(round), sched.matchups_for(round + 3));
    }
}

#[test]
fn test_custom_roster() {
    let roster = ["Ann", "Bob", "Cid", "Dee"].map(String::from);
    let sched = RoundRobinScheduler::new(&roster);
    assert_eq!(
        *sched.matchups_for(4),
        [Matchup::new("Ann", "Bob"), Matchup::new("Cid", "Dee")]
    );
}

#[test]
#[should_panic(expected = "round numbers start at 1")]
fn test_round_zero_panics() {
    let sched = RoundRobinScheduler::default();
    sched.matchups_for(0);
}
