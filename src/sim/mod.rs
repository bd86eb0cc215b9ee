//! Batch simulation: run many seeded games and collect their records.
//!
//! Each game gets its own engine and deterministic seed, so batches are
//! reproducible and independent games can run on parallel threads with no
//! shared state. Turn logging is an in-memory buffer with periodic flush;
//! it never blocks the turn loop on I/O mid-turn.

pub mod logger;
pub mod runner;

pub use logger::{LogRow, TurnLogger};
pub use runner::{GameRecord, SimulationConfig, Simulator};
