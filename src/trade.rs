//! Negotiation: set-completer trades.
//!
//! A trade attempt has three stages, each pure until execution:
//!
//! 1. **Search**: find the first space that would extend one of the
//!    buyer's partially-held groups and is owned by a solvent opponent.
//! 2. **Offer**: price the deed at 2.5x face value, escalating to 4x when
//!    the buyer has plenty of headroom.
//! 3. **Acceptance**: the owner weighs the strategic threat. Handing the
//!    buyer a completed monopoly takes a 5x kingmaker premium, and a
//!    financially secure owner refuses outright at any price.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Group};
use crate::core::PlayerId;
use crate::player::Player;

/// Escalated offer multiplier for a cash-rich buyer.
const ESCALATED_MULTIPLIER: i64 = 4;

/// Premium multiplier demanded for a monopoly-completing sale.
const KINGMAKER_MULTIPLIER: i64 = 5;

/// An owner at or above this cash will not sell a monopoly-completing
/// deed at any price.
const SELLER_SECURE_CASH: i64 = 300;

/// An owner below this cash accepts any offer above face value for a
/// non-threatening deed.
const SELLER_DESPERATE_CASH: i64 = 100;

/// Cash the buyer must retain beyond the offer itself.
const CASH_BUFFER: i64 = 100;

/// The deed a trade attempt is after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TradeTarget {
    pub space_index: usize,
    pub owner: PlayerId,
    pub group: Group,
}

/// Outcome of a trade attempt, recorded in the turn report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    /// The owner accepted; the deed and cash changed hands.
    Completed { space: String, offer: i64 },
    /// The owner turned the offer down. No state changed.
    Rejected,
    /// No partially-held group has a member owned by a solvent opponent.
    NoTarget,
    /// The buyer cannot afford the offer plus a cash buffer.
    TooPoor,
}

impl TradeOutcome {
    /// Report tag string.
    #[must_use]
    pub fn tag(&self) -> String {
        match self {
            TradeOutcome::Completed { space, .. } => format!("trade_success_{}", space),
            TradeOutcome::Rejected => "trade_rejected".to_string(),
            TradeOutcome::NoTarget => "trade_no_target".to_string(),
            TradeOutcome::TooPoor => "trade_too_poor".to_string(),
        }
    }
}

/// Find the buyer's set completer: the first member of a group the buyer
/// partially holds that belongs to a different, non-bankrupt player.
///
/// Groups are considered in the order the buyer acquired their deeds;
/// members in board order. Read-only.
#[must_use]
pub fn find_set_completer(
    board: &Board,
    players: &[Player],
    buyer: &Player,
) -> Option<TradeTarget> {
    let mut seen_groups = Vec::new();

    for &held_idx in &buyer.properties {
        let group = match board.space(held_idx).group() {
            Some(g) => g,
            None => continue,
        };
        if seen_groups.contains(&group) {
            continue;
        }
        seen_groups.push(group);

        if board.has_monopoly(group, buyer.id) {
            continue;
        }

        for &member_idx in board.group_indices(group) {
            let owner = match board.space(member_idx).owner() {
                Some(o) => o,
                None => continue,
            };
            if owner != buyer.id && !players[owner.index()].is_bankrupt {
                return Some(TradeTarget {
                    space_index: member_idx,
                    owner,
                    group,
                });
            }
        }
    }

    None
}

/// Price an offer for a deed with face value `price`.
///
/// Base offer is 2.5x face. A buyer whose cash exceeds double the base
/// escalates to 4x, modeling a wealthy buyer overpaying for the missing
/// piece. Returns `None` when the buyer cannot cover the offer plus the
/// retained cash buffer.
#[must_use]
pub fn formulate_offer(buyer: &Player, price: i64) -> Option<i64> {
    let base = price * 5 / 2;
    let offer = if buyer.cash > base * 2 {
        price * ESCALATED_MULTIPLIER
    } else {
        base
    };

    if buyer.cash < offer + CASH_BUFFER {
        None
    } else {
        Some(offer)
    }
}

/// Whether acquiring one more member of `group` would hand `buyer` the
/// complete set.
#[must_use]
pub fn completes_monopoly(board: &Board, buyer: PlayerId, group: Group) -> bool {
    board.owned_in_group(group, buyer) == group.size() - 1
}

/// The owner's decision on an offer for the deed at `target_index`.
///
/// A monopoly-completing sale is refused outright by a secure owner
/// (cash >= 300) and otherwise requires the 5x kingmaker premium. A
/// non-threatening sale goes through above face value for a desperate
/// owner (cash < 100), or at 2.5x face for anyone else.
#[must_use]
pub fn accept_offer(
    board: &Board,
    seller: &Player,
    buyer: PlayerId,
    target_index: usize,
    offer: i64,
) -> bool {
    let space = board.space(target_index);
    let price = space
        .price()
        .expect("trade target must be an ownable space");
    let group = space
        .group()
        .expect("trade target must belong to a group");

    if completes_monopoly(board, buyer, group) {
        if seller.cash >= SELLER_SECURE_CASH {
            return false;
        }
        return offer >= price * KINGMAKER_MULTIPLIER;
    }

    if seller.cash < SELLER_DESPERATE_CASH {
        offer > price
    } else {
        // Ordinary greed threshold: 2.5x face.
        offer * 2 >= price * 5
    }
}

/// Run a full trade attempt for `buyer`: search, offer, acceptance, and
/// execution on acceptance. Rejection and failed searches leave all state
/// untouched.
pub fn attempt_trade(board: &mut Board, players: &mut [Player], buyer: PlayerId) -> TradeOutcome {
    let target = match find_set_completer(board, players, &players[buyer.index()]) {
        Some(t) => t,
        None => return TradeOutcome::NoTarget,
    };

    let price = board
        .space(target.space_index)
        .price()
        .expect("trade target must be an ownable space");

    let offer = match formulate_offer(&players[buyer.index()], price) {
        Some(o) => o,
        None => return TradeOutcome::TooPoor,
    };

    let accepted = accept_offer(
        board,
        &players[target.owner.index()],
        buyer,
        target.space_index,
        offer,
    );
    if !accepted {
        return TradeOutcome::Rejected;
    }

    let payment = players[buyer.index()].pay(offer);
    debug_assert!(payment.is_paid(), "offer affordability was pre-checked");
    players[target.owner.index()].receive(offer);

    board.space_mut(target.space_index).set_owner(Some(buyer));
    players[target.owner.index()].remove_property(target.space_index);
    players[buyer.index()].add_property(target.space_index);

    let space_name = board.space(target.space_index).name().to_string();
    tracing::debug!(
        buyer = buyer.index(),
        seller = target.owner.index(),
        space = %space_name,
        offer,
        "trade completed"
    );

    TradeOutcome::Completed {
        space: space_name,
        offer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(num_players: usize) -> (Board, Vec<Player>) {
        let board = Board::standard();
        let players = (0..num_players)
            .map(|i| Player::new(PlayerId::new(i as u8), 1500))
            .collect();
        (board, players)
    }

    fn give(board: &mut Board, players: &mut [Player], owner: usize, index: usize) {
        board.space_mut(index).set_owner(Some(PlayerId::new(owner as u8)));
        players[owner].add_property(index);
    }

    #[test]
    fn test_search_finds_missing_group_member() {
        let (mut board, mut players) = setup(2);

        // Buyer holds one brown deed; the opponent holds the other.
        give(&mut board, &mut players, 0, 1);
        give(&mut board, &mut players, 1, 3);

        let target = find_set_completer(&board, &players, &players[0]).unwrap();
        assert_eq!(target.space_index, 3);
        assert_eq!(target.owner, PlayerId::new(1));
        assert_eq!(target.group, Group::Brown);
    }

    #[test]
    fn test_search_skips_unowned_members() {
        let (mut board, mut players) = setup(2);

        // Buyer holds one light blue; the rest of the group is unowned.
        give(&mut board, &mut players, 0, 6);

        assert_eq!(find_set_completer(&board, &players, &players[0]), None);
    }

    #[test]
    fn test_search_skips_completed_groups() {
        let (mut board, mut players) = setup(2);

        give(&mut board, &mut players, 0, 1);
        give(&mut board, &mut players, 0, 3);

        assert_eq!(find_set_completer(&board, &players, &players[0]), None);
    }

    #[test]
    fn test_search_skips_bankrupt_owners() {
        let (mut board, mut players) = setup(3);

        give(&mut board, &mut players, 0, 1);
        give(&mut board, &mut players, 1, 3);
        players[1].is_bankrupt = true;

        assert_eq!(find_set_completer(&board, &players, &players[0]), None);
    }

    #[test]
    fn test_offer_base_multiplier() {
        let mut buyer = Player::new(PlayerId::new(0), 500);
        buyer.cash = 250; // exactly the offer, below offer + buffer

        assert_eq!(formulate_offer(&buyer, 100), None);

        buyer.cash = 350;
        assert_eq!(formulate_offer(&buyer, 100), Some(250));
    }

    #[test]
    fn test_offer_escalates_for_rich_buyer() {
        let mut buyer = Player::new(PlayerId::new(0), 1500);

        // cash 501 > 2 * 250 escalates to 4x face.
        buyer.cash = 501;
        assert_eq!(formulate_offer(&buyer, 100), Some(400));

        // At exactly double the base, no escalation.
        buyer.cash = 500;
        assert_eq!(formulate_offer(&buyer, 100), Some(250));
    }

    #[test]
    fn test_kingmaker_refused_by_secure_seller() {
        let (mut board, mut players) = setup(2);

        // Buyer owns 2/3 of light blue; seller owns the third.
        give(&mut board, &mut players, 0, 6);
        give(&mut board, &mut players, 0, 8);
        give(&mut board, &mut players, 1, 9);

        players[1].cash = 300;

        // Secure seller refuses regardless of offer size.
        assert!(!accept_offer(&board, &players[1], PlayerId::new(0), 9, 1_000_000));
    }

    #[test]
    fn test_kingmaker_premium_accepted_by_pressed_seller() {
        let (mut board, mut players) = setup(2);

        give(&mut board, &mut players, 0, 6);
        give(&mut board, &mut players, 0, 8);
        give(&mut board, &mut players, 1, 9);

        players[1].cash = 299;

        // Pentonville Road faces 120: the premium is 600.
        assert!(!accept_offer(&board, &players[1], PlayerId::new(0), 9, 599));
        assert!(accept_offer(&board, &players[1], PlayerId::new(0), 9, 600));
    }

    #[test]
    fn test_non_threatening_desperate_seller() {
        let (mut board, mut players) = setup(2);

        // Buyer owns 1/3 of light blue: buying one more is not a monopoly.
        give(&mut board, &mut players, 0, 6);
        give(&mut board, &mut players, 1, 9);

        players[1].cash = 99;

        assert!(!accept_offer(&board, &players[1], PlayerId::new(0), 9, 120));
        assert!(accept_offer(&board, &players[1], PlayerId::new(0), 9, 121));
    }

    #[test]
    fn test_non_threatening_greed_threshold() {
        let (mut board, mut players) = setup(2);

        give(&mut board, &mut players, 0, 6);
        give(&mut board, &mut players, 1, 9);

        players[1].cash = 100;

        // 2.5 x 120 = 300.
        assert!(!accept_offer(&board, &players[1], PlayerId::new(0), 9, 299));
        assert!(accept_offer(&board, &players[1], PlayerId::new(0), 9, 300));
    }

    #[test]
    fn test_attempt_trade_rejection_leaves_state() {
        let (mut board, mut players) = setup(2);

        // Brown is a two-space group, so this sale would hand player 0 a
        // monopoly. The escalated offer (4 x 60 = 240) misses the 5x
        // premium (300), so the pressed seller still refuses.
        give(&mut board, &mut players, 0, 1);
        give(&mut board, &mut players, 1, 3);
        players[0].cash = 2000;
        players[1].cash = 50;

        let outcome = attempt_trade(&mut board, &mut players, PlayerId::new(0));
        assert_eq!(outcome, TradeOutcome::Rejected);

        assert_eq!(board.space(3).owner(), Some(PlayerId::new(1)));
        assert!(players[1].owns(3));
        assert_eq!(players[0].cash, 2000);
        assert_eq!(players[1].cash, 50);
    }

    #[test]
    fn test_attempt_trade_completes_and_transfers() {
        let (mut board, mut players) = setup(2);

        // Orange has three members; owning a second one is no monopoly
        // threat, and the desperate seller takes anything above face.
        give(&mut board, &mut players, 0, 16);
        give(&mut board, &mut players, 1, 18);
        players[0].cash = 2000; // escalates the offer to 4 x 180 = 720
        players[1].cash = 50;

        let outcome = attempt_trade(&mut board, &mut players, PlayerId::new(0));
        assert_eq!(
            outcome,
            TradeOutcome::Completed {
                space: "Marlborough Street".to_string(),
                offer: 720,
            }
        );

        assert_eq!(board.space(18).owner(), Some(PlayerId::new(0)));
        assert!(players[0].owns(18));
        assert!(!players[1].owns(18));
        assert_eq!(players[0].cash, 2000 - 720);
        assert_eq!(players[1].cash, 50 + 720);
    }

    #[test]
    fn test_attempt_trade_no_target() {
        let (mut board, mut players) = setup(2);
        let outcome = attempt_trade(&mut board, &mut players, PlayerId::new(0));
        assert_eq!(outcome, TradeOutcome::NoTarget);
    }

    #[test]
    fn test_attempt_trade_too_poor() {
        let (mut board, mut players) = setup(2);

        give(&mut board, &mut players, 0, 1);
        give(&mut board, &mut players, 1, 3);

        players[0].cash = 100; // base offer for 60 is 150

        let outcome = attempt_trade(&mut board, &mut players, PlayerId::new(0));
        assert_eq!(outcome, TradeOutcome::TooPoor);
    }

    #[test]
    fn test_trade_conserves_total_cash() {
        let (mut board, mut players) = setup(2);

        give(&mut board, &mut players, 0, 16);
        give(&mut board, &mut players, 1, 18);
        players[0].cash = 2000;
        players[1].cash = 50;

        let before: i64 = players.iter().map(|p| p.cash).sum();
        let _ = attempt_trade(&mut board, &mut players, PlayerId::new(0));
        let after: i64 = players.iter().map(|p| p.cash).sum();

        assert_eq!(before, after);
    }
}
