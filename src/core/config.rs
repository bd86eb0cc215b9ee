//! Game configuration.
//!
//! All rule numbers the engine consults live here so variants (short
//! training games, scarce-money banks) are a builder call away instead of
//! an engine edit.

use serde::{Deserialize, Serialize};

use crate::bank::BankMode;

/// Numeric game parameters.
///
/// Defaults are the standard London box: £1500 starting cash, £200 GO
/// salary, £50 jail fine, a £20580 bank that prints money when empty, and
/// a 1000-turn cap. Training harnesses typically tighten `max_turns`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (2-8).
    pub num_players: usize,

    /// Cash each player starts with.
    pub starting_cash: i64,

    /// Salary credited when passing GO.
    pub salary: i64,

    /// Fine for the forced jail exit after three failed rolls.
    pub jail_fine: i64,

    /// Turn cap; the game ends when the turn counter reaches it.
    pub max_turns: u32,

    /// Bank opening reserve.
    pub bank_reserve: i64,

    /// Whether the bank prints money or runs dry.
    pub bank_mode: BankMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            starting_cash: 1500,
            salary: 200,
            jail_fine: 50,
            max_turns: 1000,
            bank_reserve: 20580,
            bank_mode: BankMode::Infinite,
        }
    }
}

impl GameConfig {
    /// Create a config with default rule numbers for `num_players` seats.
    #[must_use]
    pub fn new(num_players: usize) -> Self {
        assert!(
            (2..=8).contains(&num_players),
            "Player count must be 2-8"
        );
        Self {
            num_players,
            ..Self::default()
        }
    }

    /// Set the starting cash per player.
    #[must_use]
    pub fn with_starting_cash(mut self, cash: i64) -> Self {
        self.starting_cash = cash;
        self
    }

    /// Set the GO salary.
    #[must_use]
    pub fn with_salary(mut self, salary: i64) -> Self {
        self.salary = salary;
        self
    }

    /// Set the jail fine.
    #[must_use]
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    /// Set the turn cap.
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Set the bank opening reserve.
    #[must_use]
    pub fn with_bank_reserve(mut self, reserve: i64) -> Self {
        self.bank_reserve = reserve;
        self
    }

    /// Set the bank mode.
    #[must_use]
    pub fn with_bank_mode(mut self, mode: BankMode) -> Self {
        self.bank_mode = mode;
        self
    }
}
