//! Tracker CLI
//!
//! Replay recorded detection ticks or drive a session from a synthetic
//! feed, then report and export the finalized round records.

use std::env;
use std::path::{Path, PathBuf};

use tourney_core::{NullSink, RecordSink, Session};
use tracker::{
    csv_file_name, load_script, print_report, run_script, synthetic_script, write_csv,
    PlayLogSink, ReplayOutcome, TrackerConfig,
};

fn print_usage() {
    println!("Card-tournament tracker");
    println!();
    println!("Usage:");
    println!("  tracker replay <script.json> [--config PATH] [--plays PATH]");
    println!("  tracker simulate [--rounds N] [--config PATH] [--plays PATH]");
    println!();
    println!("Options:");
    println!("  --config PATH   TOML configuration (default: tracker.toml)");
    println!("  --plays PATH    Append raw plays to a JSON-lines log");
    println!("  --rounds N      Rounds to simulate (default: 3)");
    println!();
    println!("Examples:");
    println!("  tracker replay session.json --config tracker.toml");
    println!("  tracker simulate --rounds 6 --plays plays.jsonl");
}

struct CliOptions {
    config_path: PathBuf,
    plays_path: Option<PathBuf>,
    rounds: u32,
    positional: Vec<String>,
}

fn parse_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        config_path: PathBuf::from("tracker.toml"),
        plays_path: None,
        rounds: 3,
        positional: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    options.config_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--plays" | "-p" => {
                if i + 1 < args.len() {
                    options.plays_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--rounds" | "-r" => {
                if i + 1 < args.len() {
                    options.rounds = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            other => options.positional.push(other.to_string()),
        }
        i += 1;
    }
    options
}

fn make_sink(options: &CliOptions) -> Result<Box<dyn RecordSink>, String> {
    match &options.plays_path {
        Some(path) => Ok(Box::new(PlayLogSink::create(path)?)),
        None => Ok(Box::new(NullSink)),
    }
}

/// Report the session and write the CSV batch export.
fn finish_session(session: &Session, outcome: &ReplayOutcome, config: &TrackerConfig) {
    for error in &outcome.sink_errors {
        eprintln!("Warning: {}", error);
    }

    println!();
    print_report(&session.status(), session.records());

    let csv_path = Path::new(&config.output_dir).join(csv_file_name("round_data"));
    match write_csv(session.records(), &csv_path) {
        Ok(()) => println!("Wrote {}", csv_path.display()),
        Err(e) => eprintln!("Warning: {}", e),
    }
}

fn run_replay(args: &[String]) -> Result<(), String> {
    let options = parse_options(args);
    let script_path = options
        .positional
        .first()
        .ok_or_else(|| "replay requires a script file".to_string())?;

    let config = TrackerConfig::load_or_default(&options.config_path)?;
    let mut session = Session::new(config.session_config()?);
    let script = load_script(Path::new(script_path))?;
    let mut sink = make_sink(&options)?;

    println!("=== Replay: {} ({} ticks) ===", script_path, script.len());
    let outcome = run_script(&mut session, &script, sink.as_mut());
    println!(
        "{} rounds completed, {} plays recorded",
        outcome.rounds_completed,
        outcome.finalized.len()
    );

    finish_session(&session, &outcome, &config);
    Ok(())
}

fn run_simulate(args: &[String]) -> Result<(), String> {
    let options = parse_options(args);
    let config = TrackerConfig::load_or_default(&options.config_path)?;
    let session_config = config.session_config()?;

    println!("=== Simulate: {} rounds ===", options.rounds);
    let script = synthetic_script(&session_config, options.rounds);
    let mut session = Session::new(session_config);
    let mut sink = make_sink(&options)?;

    let outcome = run_script(&mut session, &script, sink.as_mut());
    println!(
        "{} rounds completed, {} plays recorded",
        outcome.rounds_completed,
        outcome.finalized.len()
    );

    finish_session(&session, &outcome, &config);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let result = match args[1].as_str() {
        "replay" => run_replay(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
