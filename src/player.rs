//! Per-player wallet, position, holdings, and jail state.
//!
//! Movement and money stay separate concerns: [`Player::move_by`] reports
//! GO passage but never credits the salary. That is the engine's job,
//! because salary comes out of the bank.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, BOARD_SIZE};
use crate::cards::{Card, DeckKind};
use crate::core::PlayerId;

/// Result of a payment attempt.
///
/// `pay` always debits the full amount, into negative cash if necessary.
/// `Short` signals the payer could not cover it; the turn-resolution layer
/// interprets that as a bankruptcy trigger. This is deliberate: the player
/// never silently refuses a debt, the engine decides what insolvency means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub enum Payment {
    /// The full amount was covered.
    Paid,
    /// The payer went into debt; `owed` is how far below zero they are.
    Short { owed: i64 },
}

impl Payment {
    /// Whether the payment was fully covered.
    #[must_use]
    pub fn is_paid(self) -> bool {
        matches!(self, Payment::Paid)
    }
}

/// A "Get Out of Jail Free" card held by a player, remembering which deck
/// it must return to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeldJailCard {
    pub deck: DeckKind,
    pub card: Card,
}

/// One player's state. Created at game start, never destroyed; bankrupt
/// players remain and are skipped by the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub cash: i64,
    /// Board position, 0-39.
    pub position: usize,
    /// Indices of owned spaces, in acquisition order.
    pub properties: SmallVec<[usize; 8]>,
    pub in_jail: bool,
    /// Consecutive failed escape rolls this jail stay.
    pub turns_in_jail: u8,
    pub is_bankrupt: bool,
    /// Held jail-free cards, at most one per deck.
    pub jail_cards: Vec<HeldJailCard>,
}

impl Player {
    /// Create a player at GO with the given starting cash.
    #[must_use]
    pub fn new(id: PlayerId, starting_cash: i64) -> Self {
        Self {
            id,
            cash: starting_cash,
            position: 0,
            properties: SmallVec::new(),
            in_jail: false,
            turns_in_jail: 0,
            is_bankrupt: false,
            jail_cards: Vec::new(),
        }
    }

    /// Advance `steps` spaces, wrapping at 40. Returns whether GO was
    /// passed; the caller credits the salary.
    pub fn move_by(&mut self, steps: usize) -> bool {
        let new_position = (self.position + steps) % BOARD_SIZE;
        let passed_go = new_position < self.position && steps > 0;
        self.position = new_position;
        passed_go
    }

    /// Debit `amount`, into negative cash if short.
    pub fn pay(&mut self, amount: i64) -> Payment {
        self.cash -= amount;
        if self.cash >= 0 {
            Payment::Paid
        } else {
            Payment::Short { owed: -self.cash }
        }
    }

    /// Credit `amount` unconditionally.
    pub fn receive(&mut self, amount: i64) {
        self.cash += amount;
    }

    /// Teleport to jail and start a fresh jail stay.
    pub fn go_to_jail(&mut self, jail_index: usize) {
        self.position = jail_index;
        self.in_jail = true;
        self.turns_in_jail = 0;
    }

    /// Exit jail, clearing the stay counter.
    pub fn leave_jail(&mut self) {
        self.in_jail = false;
        self.turns_in_jail = 0;
    }

    /// Whether this player holds the deed for a space.
    #[must_use]
    pub fn owns(&self, index: usize) -> bool {
        self.properties.contains(&index)
    }

    /// Record a newly acquired deed.
    pub fn add_property(&mut self, index: usize) {
        debug_assert!(!self.owns(index), "deed {} acquired twice", index);
        self.properties.push(index);
    }

    /// Drop a deed. Returns whether it was held.
    pub fn remove_property(&mut self, index: usize) -> bool {
        if let Some(pos) = self.properties.iter().position(|&p| p == index) {
            self.properties.remove(pos);
            true
        } else {
            false
        }
    }

    /// Precise net worth: cash plus face value and building value of every
    /// holding.
    #[must_use]
    pub fn net_worth(&self, board: &Board) -> i64 {
        let assets: i64 = self
            .properties
            .iter()
            .map(|&idx| {
                let space = board.space(idx);
                let buildings = i64::from(space.houses()) * board.house_cost(idx);
                space.price().unwrap_or(0) + buildings
            })
            .sum();
        self.cash + assets
    }

    /// Fast net worth: cash plus face values only.
    ///
    /// Omits building value. An approximation for high-frequency use such
    /// as per-decision reward shaping, not a substitute for
    /// [`Player::net_worth`].
    #[must_use]
    pub fn net_worth_raw(&self, board: &Board) -> i64 {
        let assets: i64 = self
            .properties
            .iter()
            .map(|&idx| board.space(idx).price().unwrap_or(0))
            .sum();
        self.cash + assets
    }
}
