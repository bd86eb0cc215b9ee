//! Two-die roll generator with consecutive-doubles tracking.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Outcome of one roll of two dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    /// First die, 1-6.
    pub die1: u8,
    /// Second die, 1-6.
    pub die2: u8,
    /// Whether both dice matched.
    pub is_double: bool,
}

impl DiceRoll {
    /// Sum of the two dice, 2-12.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.die1 + self.die2
    }
}

/// The dice cup. Tracks consecutive doubles for the speeding rule; the
/// engine resets the counter on turn handoff and on jail entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Dice {
    doubles_count: u8,
}

impl Dice {
    /// Create a dice cup with a clear doubles counter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll both dice. A double increments the consecutive-doubles
    /// counter; anything else clears it.
    pub fn roll(&mut self, rng: &mut GameRng) -> DiceRoll {
        let die1 = rng.roll_die();
        let die2 = rng.roll_die();
        let is_double = die1 == die2;

        if is_double {
            self.doubles_count += 1;
        } else {
            self.doubles_count = 0;
        }

        DiceRoll {
            die1,
            die2,
            is_double,
        }
    }

    /// Consecutive doubles rolled so far (3 triggers the speeding rule).
    #[must_use]
    pub fn doubles_count(&self) -> u8 {
        self.doubles_count
    }

    /// Clear the doubles counter.
    pub fn reset_doubles(&mut self) {
        self.doubles_count = 0;
    }
}
