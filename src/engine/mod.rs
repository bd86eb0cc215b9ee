//! The turn engine.
//!
//! `run_turn` is the single entry point: it executes exactly one logical
//! turn for the current player and returns a [`TurnReport`]. One call
//! resolves one of:
//!
//! - a no-op when the game is over,
//! - a skip when the current player is bankrupt,
//! - a jail turn (escape roll, forced exit, or stay) with no landing
//!   resolution,
//! - or a full turn: optional pre-roll trade attempt, dice roll, speeding
//!   check, movement with GO salary, and landing resolution.
//!
//! A non-bankrupt player who rolled a double keeps the seat: the call
//! returns and the caller invokes `run_turn` again for the same player.
//! Doubles never recurse inside the engine.

pub mod report;

use crate::bank::Bank;
use crate::board::{Board, Space};
use crate::cards::{CardAction, CardManager, DeckKind};
use crate::core::{GameConfig, GameRng, PlayerId};
use crate::dice::Dice;
use crate::player::{HeldJailCard, Player};
use crate::policy::{BuyAffordable, BuyPolicy, GameView, NeverTrade, TradePolicy};
use crate::trade::{self, TradeOutcome};

pub use report::{TurnOutcome, TurnReport};

/// Jail stays end with a forced exit after this many failed rolls.
const MAX_JAIL_TURNS: u8 = 3;

/// Consecutive doubles that trigger the speeding rule.
const SPEEDING_DOUBLES: u8 = 3;

/// A complete game: board, bank, decks, dice, and players, advanced one
/// turn at a time.
pub struct Engine {
    config: GameConfig,
    board: Board,
    bank: Bank,
    dice: Dice,
    cards: CardManager,
    players: Vec<Player>,
    rng: GameRng,
    current_player: usize,
    turn_count: u32,
    game_over: bool,
    history: im::Vector<TurnReport>,
    buy_policy: Box<dyn BuyPolicy>,
    trade_policy: Box<dyn TradePolicy>,
}

impl Engine {
    /// Create a fresh game on the standard board with default policies
    /// (buy if affordable with a margin, never trade).
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let cards = CardManager::standard(&rng);
        let players = (0..config.num_players)
            .map(|i| Player::new(PlayerId::new(i as u8), config.starting_cash))
            .collect();

        Self {
            board: Board::standard(),
            bank: Bank::new(config.bank_reserve, config.bank_mode),
            dice: Dice::new(),
            cards,
            players,
            rng,
            current_player: 0,
            turn_count: 0,
            game_over: false,
            history: im::Vector::new(),
            buy_policy: Box::new(BuyAffordable::default()),
            trade_policy: Box::new(NeverTrade),
            config,
        }
    }

    /// Swap in a buy policy.
    #[must_use]
    pub fn with_buy_policy(mut self, policy: Box<dyn BuyPolicy>) -> Self {
        self.buy_policy = policy;
        self
    }

    /// Swap in a trade policy.
    #[must_use]
    pub fn with_trade_policy(mut self, policy: Box<dyn TradePolicy>) -> Self {
        self.trade_policy = policy;
        self
    }

    // === Read-only state ===

    /// The game configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The bank.
    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// All players, in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// One player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Mutable access to one player, for external collaborators such as a
    /// liquidation step.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// Mutable access to the board, for the same collaborators.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Whose turn the next `run_turn` call executes.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current_player as u8)
    }

    /// Completed turn count.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Every report produced so far. Cheap to clone.
    #[must_use]
    pub fn history(&self) -> &im::Vector<TurnReport> {
        &self.history
    }

    /// Read-only view handed to decision policies.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            players: &self.players,
            bank: &self.bank,
            turn_count: self.turn_count,
        }
    }

    /// The player with the highest precise net worth. Ties go to the
    /// earlier seat.
    #[must_use]
    pub fn winner(&self) -> PlayerId {
        let mut best = self.players[0].id;
        let mut best_worth = self.players[0].net_worth(&self.board);
        for player in &self.players[1..] {
            let worth = player.net_worth(&self.board);
            if worth > best_worth {
                best = player.id;
                best_worth = worth;
            }
        }
        best
    }

    /// Reinitialize everything for a new game without reallocating the
    /// engine. Deck shuffles differ from the previous game but stay
    /// deterministic under the original seed.
    pub fn reset(&mut self, num_players: usize) {
        assert!(
            (2..=8).contains(&num_players),
            "Player count must be 2-8"
        );

        self.config.num_players = num_players;
        self.board.reset();
        self.bank.reset();
        self.dice.reset_doubles();
        let deck_rng = self.rng.fork();
        self.cards = CardManager::standard(&deck_rng);
        self.players = (0..num_players)
            .map(|i| Player::new(PlayerId::new(i as u8), self.config.starting_cash))
            .collect();
        self.current_player = 0;
        self.turn_count = 0;
        self.game_over = false;
        self.history.clear();
    }

    // === Turn state machine ===

    /// Execute one turn for the current player.
    pub fn run_turn(&mut self) -> TurnReport {
        if self.game_over {
            return self.make_report(self.current_player, 0, false, TurnOutcome::GameOver, None);
        }

        let idx = self.current_player;

        if self.players[idx].is_bankrupt {
            if self.players.iter().all(|p| p.is_bankrupt) {
                self.game_over = true;
            }
            self.advance_player();
            let report = self.make_report(idx, 0, false, TurnOutcome::Skip, None);
            self.history.push_back(report.clone());
            return report;
        }

        if self.players[idx].in_jail {
            return self.run_jail_turn(idx);
        }

        // Pre-roll trading phase. The attempt's outcome is recorded but the
        // turn proceeds to the roll either way.
        let trade = self.run_trade_phase(idx);

        let roll = self.dice.roll(&mut self.rng);

        // Speeding rule: the third consecutive double jails the player
        // with no movement or landing this turn.
        if self.dice.doubles_count() >= SPEEDING_DOUBLES {
            let jail = self.board.jail_index();
            self.players[idx].go_to_jail(jail);
            self.advance_player();
            let report = self.make_report(idx, roll.total(), roll.is_double, TurnOutcome::SentToJail, trade);
            self.history.push_back(report.clone());
            return report;
        }

        let passed_go = self.players[idx].move_by(roll.total() as usize);
        if passed_go {
            let salary = self.bank.withdraw(self.config.salary);
            self.players[idx].receive(salary);
        }

        let outcome = self.resolve_landing(idx);

        if self.players[idx].cash < 0 && !self.players[idx].is_bankrupt {
            self.players[idx].is_bankrupt = true;
            tracing::debug!(
                player = idx,
                cash = self.players[idx].cash,
                "player went bankrupt"
            );
        }

        // A double keeps the seat unless it bankrupted the roller.
        if !roll.is_double || self.players[idx].is_bankrupt {
            self.advance_player();
        }

        self.turn_count += 1;
        if self.turn_count >= self.config.max_turns {
            self.game_over = true;
        }

        let report = self.make_report(idx, roll.total(), roll.is_double, outcome, trade);
        self.history.push_back(report.clone());
        report
    }

    fn run_trade_phase(&mut self, idx: usize) -> Option<TradeOutcome> {
        let intent = {
            let view = GameView {
                board: &self.board,
                players: &self.players,
                bank: &self.bank,
                turn_count: self.turn_count,
            };
            self.trade_policy
                .decide_trade_intent(&self.players[idx], &view)
        };

        if !intent {
            return None;
        }

        Some(trade::attempt_trade(
            &mut self.board,
            &mut self.players,
            PlayerId::new(idx as u8),
        ))
    }

    /// Jail resolution consumes the whole turn. A double escapes and moves
    /// the player with no landing side effects. The third failed roll
    /// forces an exit: a held jail-free card is played if there is one,
    /// otherwise the fine is paid. The exit fails open: the player is
    /// released even if the payment comes up short.
    fn run_jail_turn(&mut self, idx: usize) -> TurnReport {
        let roll = self.dice.roll(&mut self.rng);

        let outcome = if roll.is_double {
            self.players[idx].leave_jail();
            let _ = self.players[idx].move_by(roll.total() as usize);
            TurnOutcome::JailEscapeDoubles
        } else {
            self.players[idx].turns_in_jail += 1;
            if self.players[idx].turns_in_jail >= MAX_JAIL_TURNS {
                if let Some(HeldJailCard { deck, card }) = self.players[idx].jail_cards.pop() {
                    self.cards.return_jail_card(deck, card);
                } else {
                    let _ = self.players[idx].pay(self.config.jail_fine);
                    self.bank.deposit(self.config.jail_fine);
                    if self.players[idx].cash < 0 {
                        self.players[idx].is_bankrupt = true;
                    }
                }
                self.players[idx].leave_jail();
                let _ = self.players[idx].move_by(roll.total() as usize);
                TurnOutcome::JailForcedExit
            } else {
                TurnOutcome::JailStay
            }
        };

        self.advance_player();
        let report = self.make_report(idx, roll.total(), roll.is_double, outcome, None);
        self.history.push_back(report.clone());
        report
    }

    /// Resolve the space the player is standing on.
    fn resolve_landing(&mut self, idx: usize) -> TurnOutcome {
        let position = self.players[idx].position;

        match self.board.space(position) {
            Space::Property { .. } | Space::Station { .. } | Space::Utility { .. } => {
                self.resolve_ownable(idx, position)
            }
            Space::Tax { amount, .. } => {
                let amount = *amount;
                let _ = self.players[idx].pay(amount);
                self.bank.deposit(amount);
                TurnOutcome::PaidTax { amount }
            }
            Space::Chance => self.apply_card(idx, DeckKind::Chance),
            Space::CommunityChest => self.apply_card(idx, DeckKind::CommunityChest),
            Space::GoToJail => {
                let jail = self.board.jail_index();
                self.players[idx].go_to_jail(jail);
                self.dice.reset_doubles();
                TurnOutcome::SentToJail
            }
            Space::Go | Space::FreeParking | Space::Jail => TurnOutcome::Safe,
        }
    }

    fn resolve_ownable(&mut self, idx: usize, position: usize) -> TurnOutcome {
        let space = self.board.space(position);
        let price = space.price().expect("ownable space has a price");
        let me = PlayerId::new(idx as u8);

        match space.owner() {
            None => {
                let wants_it = {
                    let view = GameView {
                        board: &self.board,
                        players: &self.players,
                        bank: &self.bank,
                        turn_count: self.turn_count,
                    };
                    self.buy_policy
                        .decide_buy(&self.players[idx], self.board.space(position), &view)
                };

                if wants_it && self.players[idx].cash >= price {
                    let payment = self.players[idx].pay(price);
                    debug_assert!(payment.is_paid());
                    self.bank.deposit(price);
                    self.board.space_mut(position).set_owner(Some(me));
                    self.players[idx].add_property(position);
                    TurnOutcome::BoughtProperty
                } else {
                    TurnOutcome::PassedProperty
                }
            }
            Some(owner) if owner != me => {
                if self.board.space(position).is_mortgaged() {
                    return TurnOutcome::Safe;
                }
                // Rent is wealth redistribution, not money creation: the
                // bank is not involved.
                let rent = self.board.rent(position).expect("owned space has rent");
                let _ = self.players[idx].pay(rent);
                self.players[owner.index()].receive(rent);
                TurnOutcome::PaidRent { amount: rent }
            }
            Some(_) => TurnOutcome::Safe,
        }
    }

    fn apply_card(&mut self, idx: usize, kind: DeckKind) -> TurnOutcome {
        let card = match self.cards.draw(kind) {
            Some(c) => c,
            // An empty deck is a no-op card, not an error.
            None => return TurnOutcome::Safe,
        };

        match card.action {
            CardAction::MoveAbs => {
                let destination = card.value as usize;
                assert!(
                    destination < crate::board::BOARD_SIZE,
                    "card teleports off the board"
                );
                // Teleport: no GO salary, no resolution of the new space.
                self.players[idx].position = destination;
            }
            CardAction::Earn => {
                let got = self.bank.withdraw(card.value);
                self.players[idx].receive(got);
            }
            CardAction::Pay => {
                let _ = self.players[idx].pay(card.value);
                self.bank.deposit(card.value);
            }
            CardAction::GoToJail => {
                let jail = self.board.jail_index();
                self.players[idx].go_to_jail(jail);
                self.dice.reset_doubles();
            }
            CardAction::JailFree => {
                self.players[idx].jail_cards.push(HeldJailCard {
                    deck: kind,
                    card: card.clone(),
                });
            }
        }

        TurnOutcome::Card {
            action: card.action,
        }
    }

    fn advance_player(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.dice.reset_doubles();
    }

    fn make_report(
        &self,
        idx: usize,
        roll: u8,
        is_double: bool,
        outcome: TurnOutcome,
        trade: Option<TradeOutcome>,
    ) -> TurnReport {
        let position = self.players[idx].position;
        TurnReport {
            player: PlayerId::new(idx as u8),
            roll,
            is_double,
            position,
            space_name: self.board.space(position).name().to_string(),
            cash: self.players[idx].cash,
            bank_cash: self.bank.cash(),
            outcome,
            trade,
        }
    }
}
