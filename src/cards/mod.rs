//! Chance and Community Chest decks.
//!
//! Both decks circulate: an ordinary card goes straight to the back of the
//! deck when drawn, so deck composition is stable turn to turn. The one
//! exception is "Get Out of Jail Free": the player keeps it and the deck
//! runs one card short until [`CardDeck::return_jail_card`] puts it back.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// What a drawn card does to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAction {
    /// Teleport to an absolute board index (no GO salary, no landing
    /// resolution at the destination).
    MoveAbs,
    /// Collect from the bank.
    Earn,
    /// Pay the bank.
    Pay,
    /// Straight to jail.
    GoToJail,
    /// Keep the card; it leaves the deck until played.
    JailFree,
}

impl CardAction {
    /// Snake-case tag used in turn report strings.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            CardAction::MoveAbs => "move_abs",
            CardAction::Earn => "earn",
            CardAction::Pay => "pay",
            CardAction::GoToJail => "go_to_jail",
            CardAction::JailFree => "jail_free",
        }
    }
}

/// One card. Immutable once the deck is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Flavor text shown in logs.
    pub text: String,
    /// Effect on the drawing player.
    pub action: CardAction,
    /// Action parameter: board index for `MoveAbs`, amount for
    /// `Earn`/`Pay`, unused otherwise.
    pub value: i64,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub fn new(text: &str, action: CardAction, value: i64) -> Self {
        Self {
            text: text.to_string(),
            action,
            value,
        }
    }
}

/// A FIFO circulating deck.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardDeck {
    cards: VecDeque<Card>,
}

impl CardDeck {
    /// Build a deck from a card list, in order.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: cards.into(),
        }
    }

    /// Build a deck and shuffle it once.
    #[must_use]
    pub fn shuffled(cards: Vec<Card>, rng: &mut GameRng) -> Self {
        let mut deck = Self::new(cards);
        deck.shuffle(rng);
        deck
    }

    /// Randomize the deck order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.cards.drain(..).collect();
        rng.shuffle(&mut cards);
        self.cards = cards.into();
    }

    /// Cards currently in the deck (shrinks only while a jail-free card is
    /// held by a player).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card.
    ///
    /// An ordinary card is re-enqueued at the back before being returned.
    /// A jail-free card is withheld: the caller is responsible for
    /// eventually calling [`CardDeck::return_jail_card`]. Returns `None`
    /// on an empty deck, which the engine treats as a no-op card.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front()?;
        if card.action != CardAction::JailFree {
            self.cards.push_back(card.clone());
        }
        Some(card)
    }

    /// Put a played or traded jail-free card back at the bottom.
    pub fn return_jail_card(&mut self, card: Card) {
        self.cards.push_back(card);
    }
}

/// Which deck a card came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

/// Holds both decks and routes draws and jail-card returns.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardManager {
    chance: CardDeck,
    community_chest: CardDeck,
}

impl CardManager {
    /// Build both decks from explicit card lists.
    #[must_use]
    pub fn new(chance: CardDeck, community_chest: CardDeck) -> Self {
        Self {
            chance,
            community_chest,
        }
    }

    /// The standard decks, each shuffled on its own RNG stream so one
    /// deck's composition never affects the other's order.
    #[must_use]
    pub fn standard(rng: &GameRng) -> Self {
        let mut chance_rng = rng.for_context("chance-deck");
        let mut chest_rng = rng.for_context("community-chest-deck");

        Self {
            chance: CardDeck::shuffled(chance_cards(), &mut chance_rng),
            community_chest: CardDeck::shuffled(community_chest_cards(), &mut chest_rng),
        }
    }

    /// Draw from the given deck.
    pub fn draw(&mut self, kind: DeckKind) -> Option<Card> {
        self.deck_mut(kind).draw()
    }

    /// Return a jail-free card to the deck it came from.
    pub fn return_jail_card(&mut self, kind: DeckKind, card: Card) {
        self.deck_mut(kind).return_jail_card(card);
    }

    /// Inspect a deck.
    #[must_use]
    pub fn deck(&self, kind: DeckKind) -> &CardDeck {
        match kind {
            DeckKind::Chance => &self.chance,
            DeckKind::CommunityChest => &self.community_chest,
        }
    }

    fn deck_mut(&mut self, kind: DeckKind) -> &mut CardDeck {
        match kind {
            DeckKind::Chance => &mut self.chance,
            DeckKind::CommunityChest => &mut self.community_chest,
        }
    }
}

/// The standard Chance deck.
pub fn chance_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO", CardAction::MoveAbs, 0),
        Card::new("Advance to Pall Mall", CardAction::MoveAbs, 11),
        Card::new("Advance to Trafalgar Square", CardAction::MoveAbs, 24),
        Card::new("Advance to Mayfair", CardAction::MoveAbs, 39),
        Card::new("Take a trip to King's Cross Station", CardAction::MoveAbs, 5),
        Card::new("Go to Jail", CardAction::GoToJail, 0),
        Card::new("Bank pays you dividend", CardAction::Earn, 50),
        Card::new("Your building loan matures", CardAction::Earn, 150),
        Card::new("Speeding fine", CardAction::Pay, 15),
        Card::new("Pay school fees", CardAction::Pay, 150),
        Card::new("Get Out of Jail Free", CardAction::JailFree, 0),
    ]
}

/// The standard Community Chest deck.
pub fn community_chest_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO", CardAction::MoveAbs, 0),
        Card::new("Bank error in your favour", CardAction::Earn, 200),
        Card::new("Doctor's fee", CardAction::Pay, 50),
        Card::new("From sale of stock you get", CardAction::Earn, 50),
        Card::new("Go to Jail", CardAction::GoToJail, 0),
        Card::new("Holiday fund matures", CardAction::Earn, 100),
        Card::new("Income tax refund", CardAction::Earn, 20),
        Card::new("Hospital fees", CardAction::Pay, 100),
        Card::new("It is your birthday", CardAction::Earn, 10),
        Card::new("You inherit", CardAction::Earn, 100),
        Card::new("Get Out of Jail Free", CardAction::JailFree, 0),
    ]
}
