//! Record export: CSV tables, JSON snapshots, and a play-log sink

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tourney_core::{PlayEvent, RecordSink, RoundRecord, SinkError};

/// Column order of the CSV export.
pub const CSV_HEADER: [&str; 6] = ["Phase", "Round", "Player", "Card", "VS", "Thinking Time"];

/// Dated file name for a session's CSV export.
pub fn csv_file_name(prefix: &str) -> String {
    let stamp = chrono::Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("{}_{}.csv", prefix, stamp)
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render the record log as CSV text.
pub fn records_to_csv(records: &[RoundRecord]) -> String {
    let mut out = String::new();
    out.push_str(&CSV_HEADER.join(","));
    out.push('\n');
    for record in records {
        let row = [
            record.phase.to_string(),
            record.round.to_string(),
            csv_field(&record.player),
            csv_field(&record.card),
            csv_field(record.vs.as_deref().unwrap_or("")),
            format!("{:.3}", record.thinking_time.as_secs_f64()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Write the record log as a CSV file.
pub fn write_csv(records: &[RoundRecord], path: &Path) -> Result<(), String> {
    std::fs::write(path, records_to_csv(records))
        .map_err(|e| format!("Failed to write CSV: {}", e))
}

/// Save the record log as pretty JSON.
pub fn save_records(records: &[RoundRecord], path: &Path) -> Result<(), String> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| format!("Failed to serialize records: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write records: {}", e))
}

/// Load a record log previously saved with [`save_records`].
pub fn load_records(path: &Path) -> Result<Vec<RoundRecord>, String> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read records: {}", e))?;
    serde_json::from_str(&contents).map_err(|e| format!("Failed to parse records: {}", e))
}

/// Sink that appends each play as one JSON line, standing in for the
/// time-series write of the full vision pipeline.
pub struct PlayLogSink {
    path: PathBuf,
    file: File,
}

impl PlayLogSink {
    pub fn create(path: &Path) -> Result<Self, String> {
        let file = File::create(path)
            .map_err(|e| format!("Failed to create play log {}: {}", path.display(), e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSink for PlayLogSink {
    fn record_play(&mut self, play: &PlayEvent) -> Result<(), SinkError> {
        let line = serde_json::to_string(play).map_err(|e| SinkError::Write(e.to_string()))?;
        writeln!(self.file, "{}", line).map_err(|e| SinkError::Write(e.to_string()))
    }
}
