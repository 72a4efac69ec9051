//! Text reporting for session state and the record log

use tourney_core::{RoundRecord, SessionStatus};

/// Generate a text report of the session so far.
pub fn generate_report(status: &SessionStatus, records: &[RoundRecord]) -> String {
    let mut report = String::new();
    report.push_str("=== Tournament Session ===\n\n");
    report.push_str(&format!(
        "Current: round {}, phase {}\n",
        status.round, status.phase
    ));
    report.push_str("Matchups: ");
    let pairs: Vec<String> = status
        .matchups
        .iter()
        .map(|m| format!("{} vs {}", m.home, m.away))
        .collect();
    report.push_str(&pairs.join(", "));
    report.push_str("\n\n");

    report.push_str(&format!(
        "{:<6} {:<6} {:<12} {:<6} {:<12} {:>14}\n",
        "Phase", "Round", "Player", "Card", "VS", "Thinking Time"
    ));
    report.push_str(&"-".repeat(62));
    report.push('\n');

    for record in records {
        report.push_str(&format!(
            "{:<6} {:<6} {:<12} {:<6} {:<12} {:>13.3}s\n",
            record.phase,
            record.round,
            record.player,
            record.card,
            record.vs.as_deref().unwrap_or("-"),
            record.thinking_time.as_secs_f64()
        ));
    }

    report.push_str(&format!("\n{} plays recorded\n", records.len()));
    report
}

/// Print the report to stdout.
pub fn print_report(status: &SessionStatus, records: &[RoundRecord]) {
    println!("{}", generate_report(status, records));
}
