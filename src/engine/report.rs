//! Structured turn reports.
//!
//! Every call to `run_turn` yields one report. Consumers that want the
//! original log strings render them with [`TurnOutcome::tag`] /
//! [`TurnReport::result_tag`]; everything else should match on the enums.

use serde::{Deserialize, Serialize};

use crate::cards::CardAction;
use crate::core::PlayerId;
use crate::trade::TradeOutcome;

/// How a turn resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The game already ended; nothing happened.
    GameOver,
    /// The current player is bankrupt and was skipped.
    Skip,
    /// Sent to jail by the go-to-jail space or the speeding rule.
    SentToJail,
    /// Escaped jail by rolling a double.
    JailEscapeDoubles,
    /// Released after the third failed roll, by fine or jail-free card.
    JailForcedExit,
    /// Still in jail.
    JailStay,
    /// Bought the landed-on space.
    BoughtProperty,
    /// Declined or could not afford the landed-on space.
    PassedProperty,
    /// Paid rent to the space's owner.
    PaidRent { amount: i64 },
    /// Paid a tax space to the bank.
    PaidTax { amount: i64 },
    /// Drew and applied a card.
    Card { action: CardAction },
    /// Nothing to resolve (GO, Free Parking, visiting jail, own or
    /// mortgaged space).
    Safe,
}

impl TurnOutcome {
    /// Snake-case tag string for logs.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            TurnOutcome::GameOver => "game_over".to_string(),
            TurnOutcome::Skip => "skip".to_string(),
            TurnOutcome::SentToJail => "sent_to_jail".to_string(),
            TurnOutcome::JailEscapeDoubles => "jail_escape_doubles".to_string(),
            TurnOutcome::JailForcedExit => "jail_forced_exit".to_string(),
            TurnOutcome::JailStay => "jail_stay".to_string(),
            TurnOutcome::BoughtProperty => "bought_property".to_string(),
            TurnOutcome::PassedProperty => "passed_property".to_string(),
            TurnOutcome::PaidRent { amount } => format!("paid_rent_{}", amount),
            TurnOutcome::PaidTax { amount } => format!("paid_tax_{}", amount),
            TurnOutcome::Card { action } => format!("card_{}", action.tag()),
            TurnOutcome::Safe => "safe".to_string(),
        }
    }
}

/// One turn's worth of observable state, produced by the engine and
/// consumed by logging and training collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whose turn it was.
    pub player: PlayerId,
    /// Dice total for this turn, 0 when no dice were rolled.
    pub roll: u8,
    /// Whether the roll was a double.
    pub is_double: bool,
    /// The player's position after the turn.
    pub position: usize,
    /// Name of the space at that position.
    pub space_name: String,
    /// The player's cash after the turn.
    pub cash: i64,
    /// Bank reserve after the turn.
    pub bank_cash: i64,
    /// How the turn resolved.
    pub outcome: TurnOutcome,
    /// Outcome of the pre-roll trade attempt, absent if none was made.
    pub trade: Option<TradeOutcome>,
}

impl TurnReport {
    /// The outcome tag string.
    #[must_use]
    pub fn result_tag(&self) -> String {
        self.outcome.tag()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tags() {
        assert_eq!(TurnOutcome::GameOver.tag(), "game_over");
        assert_eq!(TurnOutcome::Skip.tag(), "skip");
        assert_eq!(TurnOutcome::SentToJail.tag(), "sent_to_jail");
        assert_eq!(TurnOutcome::JailEscapeDoubles.tag(), "jail_escape_doubles");
        assert_eq!(TurnOutcome::JailForcedExit.tag(), "jail_forced_exit");
        assert_eq!(TurnOutcome::JailStay.tag(), "jail_stay");
        assert_eq!(TurnOutcome::BoughtProperty.tag(), "bought_property");
        assert_eq!(TurnOutcome::PassedProperty.tag(), "passed_property");
        assert_eq!(TurnOutcome::PaidRent { amount: 26 }.tag(), "paid_rent_26");
        assert_eq!(TurnOutcome::PaidTax { amount: 200 }.tag(), "paid_tax_200");
        assert_eq!(
            TurnOutcome::Card {
                action: CardAction::Earn
            }
            .tag(),
            "card_earn"
        );
        assert_eq!(TurnOutcome::Safe.tag(), "safe");
    }

    #[test]
    fn test_report_serialization() {
        let report = TurnReport {
            player: PlayerId::new(1),
            roll: 7,
            is_double: false,
            position: 7,
            space_name: "Chance".to_string(),
            cash: 1450,
            bank_cash: 20630,
            outcome: TurnOutcome::Card {
                action: CardAction::Pay,
            },
            trade: Some(TradeOutcome::Rejected),
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: TurnReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
