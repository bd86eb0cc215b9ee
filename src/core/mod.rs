//! Core simulator types: player identity, RNG, configuration.
//!
//! This module holds the building blocks every other subsystem leans on.
//! Game-rule numbers (salary, fines, caps) live in `GameConfig` rather than
//! being scattered as constants through the engine.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
