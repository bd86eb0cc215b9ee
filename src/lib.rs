//! # rust-tycoon
//!
//! A Monopoly-style economy simulator built for RL training.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Given a seed and a decision policy, every game
//!    replays exactly. All randomness flows through one seeded `GameRng`.
//!
//! 2. **Policies Are Injected**: The engine consults `BuyPolicy` and
//!    `TradePolicy` trait objects at its two decision points and never
//!    inspects how a decision was made. Heuristics, trained models, and
//!    test scripts are interchangeable.
//!
//! 3. **Reports Over Side Effects**: Each turn yields a structured
//!    `TurnReport`; the engine performs no I/O of its own. Logging and
//!    training collaborators consume the report stream.
//!
//! ## Modules
//!
//! - `core`: Player IDs, deterministic RNG, game configuration
//! - `board`: The 40-space board, groups, rent rules
//! - `bank`: Cash reserve and building stock
//! - `dice`: Two-die rolls with doubles tracking
//! - `cards`: Chance and Community Chest decks
//! - `player`: Wallets, positions, holdings, jail state
//! - `policy`: Decision-policy traits and default heuristics
//! - `engine`: The per-turn state machine
//! - `trade`: Set-completer negotiation
//! - `nn`: State encoding for policy models
//! - `sim`: Batch simulation and turn logging

pub mod bank;
pub mod board;
pub mod cards;
pub mod core;
pub mod dice;
pub mod engine;
pub mod nn;
pub mod player;
pub mod policy;
pub mod sim;
pub mod trade;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameRngState, PlayerId, PlayerMap};

pub use crate::bank::{Bank, BankMode};

pub use crate::board::{Board, BoardError, Group, RentSchedule, Space, BOARD_SIZE};

pub use crate::cards::{Card, CardAction, CardDeck, CardManager, DeckKind};

pub use crate::dice::{Dice, DiceRoll};

pub use crate::player::{HeldJailCard, Payment, Player};

pub use crate::policy::{
    AlwaysBuy, AlwaysTrade, BuyAffordable, BuyPolicy, GameView, NeverTrade, ScriptedBuys,
    TradePolicy,
};

pub use crate::engine::{Engine, TurnOutcome, TurnReport};

pub use crate::trade::TradeOutcome;

pub use crate::nn::{BoardEncoder, EncodedState, StateEncoder, ZeroEncoder};

pub use crate::sim::{GameRecord, LogRow, SimulationConfig, Simulator, TurnLogger};
