//! Decision-policy interface.
//!
//! The engine consults an external policy at exactly two points in a turn:
//! trade intent before rolling, and buy/no-buy on landing on an unowned
//! space. Policies are injected at construction as trait objects, so a
//! heuristic, a trained model, or a test script are all swappable without
//! touching engine internals. Policies see a read-only [`GameView`] and
//! must not mutate game state.

use std::collections::VecDeque;

use crate::bank::Bank;
use crate::board::{Board, Space};
use crate::player::Player;

/// Read-only view of the game handed to decision policies. Enough state to
/// support arbitrary feature encodings: positions, cash, jail flags, and
/// per-space owner/house/mortgage via the board.
pub struct GameView<'a> {
    pub board: &'a Board,
    pub players: &'a [Player],
    pub bank: &'a Bank,
    pub turn_count: u32,
}

/// Decides whether to buy an unowned space the player landed on.
///
/// `Send` so whole engines can move across threads for parallel batch
/// simulation; instances share no state between games.
pub trait BuyPolicy: Send {
    fn decide_buy(&mut self, player: &Player, space: &Space, view: &GameView<'_>) -> bool;
}

/// Decides whether to attempt a trade before rolling.
pub trait TradePolicy: Send {
    fn decide_trade_intent(&mut self, player: &Player, view: &GameView<'_>) -> bool;
}

/// Default buy heuristic: buy if cash exceeds the price by a safety margin.
#[derive(Clone, Copy, Debug)]
pub struct BuyAffordable {
    pub margin: i64,
}

impl Default for BuyAffordable {
    fn default() -> Self {
        Self { margin: 50 }
    }
}

impl BuyPolicy for BuyAffordable {
    fn decide_buy(&mut self, player: &Player, space: &Space, _view: &GameView<'_>) -> bool {
        match space.price() {
            Some(price) => player.cash > price + self.margin,
            None => false,
        }
    }
}

/// Default trade policy: never initiate trades.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverTrade;

impl TradePolicy for NeverTrade {
    fn decide_trade_intent(&mut self, _player: &Player, _view: &GameView<'_>) -> bool {
        false
    }
}

/// Always signal trade intent. Test policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysTrade;

impl TradePolicy for AlwaysTrade {
    fn decide_trade_intent(&mut self, _player: &Player, _view: &GameView<'_>) -> bool {
        true
    }
}

/// Buy everything affordable at face value. Test policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysBuy;

impl BuyPolicy for AlwaysBuy {
    fn decide_buy(&mut self, player: &Player, space: &Space, _view: &GameView<'_>) -> bool {
        space.price().is_some_and(|price| player.cash >= price)
    }
}

/// Replays a fixed sequence of buy decisions, then falls back to a
/// constant. Test policy for scripted scenarios.
#[derive(Clone, Debug)]
pub struct ScriptedBuys {
    decisions: VecDeque<bool>,
    fallback: bool,
}

impl ScriptedBuys {
    /// Script the given decisions, in order, with a fallback for any
    /// decision past the end of the script.
    #[must_use]
    pub fn new(decisions: impl IntoIterator<Item = bool>, fallback: bool) -> Self {
        Self {
            decisions: decisions.into_iter().collect(),
            fallback,
        }
    }
}

impl BuyPolicy for ScriptedBuys {
    fn decide_buy(&mut self, _player: &Player, _space: &Space, _view: &GameView<'_>) -> bool {
        self.decisions.pop_front().unwrap_or(self.fallback)
    }
}
