//! Session driver for the card-tournament tracker
//!
//! This crate wraps the core engine with everything a session needs at
//! the edges:
//! - TOML configuration (roster, phase boundaries, capacities)
//! - CSV/JSON export of the finalized record log
//! - A play-log sink standing in for the time-series store
//! - Scripted replay of detection ticks, and a synthetic feed
//!
//! # Usage
//!
//! ```bash
//! # Replay a recorded detection script
//! cargo run -p tracker -- replay session.json --config tracker.toml
//!
//! # Drive a session from a synthetic detection stream
//! cargo run -p tracker -- simulate --rounds 6
//! ```

pub mod config;
pub mod export;
pub mod feed;
pub mod replay;
pub mod report;

pub use config::*;
pub use export::*;
pub use feed::*;
pub use replay::*;
pub use report::*;
