//! The board: 40 ordered spaces plus group membership and rent rules.
//!
//! Static metadata (names, prices, rent tables) is fixed at construction;
//! `reset()` clears only the dynamic ownership state so one board serves
//! many games.

pub mod space;
pub mod standard;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::PlayerId;

pub use space::{Group, RentSchedule, Space};

/// Number of board slots.
pub const BOARD_SIZE: usize = 40;

/// Flat rent for a landed-on utility.
pub const UTILITY_RENT: i64 = 28;

/// Station rent by number of stations the owner holds (capped at 4).
pub const STATION_RENT: [i64; 5] = [0, 25, 50, 100, 200];

/// Board layout problems, fatal at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("board must have 40 spaces, got {got}")]
    WrongSpaceCount { got: usize },

    #[error("board has no jail space")]
    MissingJail,

    #[error("group {group} has {got} members, expected {want}")]
    GroupSize {
        group: Group,
        got: usize,
        want: usize,
    },
}

/// The playing board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    spaces: Vec<Space>,
    groups: FxHashMap<Group, Vec<usize>>,
    jail_index: usize,
}

impl Board {
    /// The standard London board.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_spaces(standard::standard_spaces())
            .expect("standard layout is a valid board")
    }

    /// Build a board from an explicit space list, validating the layout.
    pub fn from_spaces(spaces: Vec<Space>) -> Result<Self, BoardError> {
        if spaces.len() != BOARD_SIZE {
            return Err(BoardError::WrongSpaceCount { got: spaces.len() });
        }

        let jail_index = spaces
            .iter()
            .position(|s| matches!(s, Space::Jail))
            .ok_or(BoardError::MissingJail)?;

        let mut groups: FxHashMap<Group, Vec<usize>> = FxHashMap::default();
        for (idx, space) in spaces.iter().enumerate() {
            if let Some(group) = space.group() {
                groups.entry(group).or_default().push(idx);
            }
        }

        for (&group, members) in &groups {
            if members.len() != group.size() {
                return Err(BoardError::GroupSize {
                    group,
                    got: members.len(),
                    want: group.size(),
                });
            }
        }

        Ok(Self {
            spaces,
            groups,
            jail_index,
        })
    }

    /// Get a space by index.
    ///
    /// Panics on an index outside 0-39; that is a programming error, not a
    /// game state.
    #[must_use]
    pub fn space(&self, index: usize) -> &Space {
        assert!(
            index < BOARD_SIZE,
            "board index {} out of bounds (0-{})",
            index,
            BOARD_SIZE - 1
        );
        &self.spaces[index]
    }

    /// Get a mutable space by index. Same bounds contract as [`Board::space`].
    pub fn space_mut(&mut self, index: usize) -> &mut Space {
        assert!(
            index < BOARD_SIZE,
            "board index {} out of bounds (0-{})",
            index,
            BOARD_SIZE - 1
        );
        &mut self.spaces[index]
    }

    /// All 40 spaces in play order.
    #[must_use]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    /// Index of the jail space.
    #[must_use]
    pub fn jail_index(&self) -> usize {
        self.jail_index
    }

    /// Board indices of every space in a group, in play order.
    #[must_use]
    pub fn group_indices(&self, group: Group) -> &[usize] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// How many spaces of a group a player owns.
    #[must_use]
    pub fn owned_in_group(&self, group: Group, owner: PlayerId) -> usize {
        self.group_indices(group)
            .iter()
            .filter(|&&idx| self.spaces[idx].owner() == Some(owner))
            .count()
    }

    /// Whether a player owns the entire group.
    #[must_use]
    pub fn has_monopoly(&self, group: Group, owner: PlayerId) -> bool {
        self.owned_in_group(group, owner) == group.size()
    }

    /// Rent owed for landing on a space, or `None` if the space is not an
    /// owned ownable.
    ///
    /// Color-set rent comes from the space's schedule at its house count.
    /// Station rent scales with the owner's station holdings. Utility rent
    /// is the flat constant.
    #[must_use]
    pub fn rent(&self, index: usize) -> Option<i64> {
        let space = self.space(index);
        let owner = space.owner()?;

        let rent = match space {
            Space::Property { rent, houses, .. } => rent.at(*houses),
            Space::Station { .. } => {
                let count = self.owned_in_group(Group::Station, owner).min(4);
                STATION_RENT[count]
            }
            Space::Utility { .. } => UTILITY_RENT,
            _ => return None,
        };

        Some(rent)
    }

    /// Per-house build cost for a space, by board quarter (50 on the first
    /// side up to 200 on the last). Used for building value in net worth.
    #[must_use]
    pub fn house_cost(&self, index: usize) -> i64 {
        assert!(
            index < BOARD_SIZE,
            "board index {} out of bounds (0-{})",
            index,
            BOARD_SIZE - 1
        );
        ((index / 10) as i64 + 1) * 50
    }

    /// Clear ownership, houses, and mortgage flags for a new game.
    pub fn reset(&mut self) {
        for space in &mut self.spaces {
            match space {
                Space::Property {
                    owner,
                    houses,
                    mortgaged,
                    ..
                } => {
                    *owner = None;
                    *houses = 0;
                    *mortgaged = false;
                }
                Space::Station {
                    owner, mortgaged, ..
                }
                | Space::Utility {
                    owner, mortgaged, ..
                } => {
                    *owner = None;
                    *mortgaged = false;
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_shape() {
        let board = Board::standard();

        assert_eq!(board.spaces().len(), BOARD_SIZE);
        assert_eq!(board.jail_index(), 10);
        assert_eq!(board.space(0).name(), "GO");
        assert_eq!(board.space(39).name(), "Mayfair");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_space_out_of_bounds() {
        Board::standard().space(40);
    }

    #[test]
    fn test_from_spaces_rejects_wrong_count() {
        let err = Board::from_spaces(vec![Space::Go; 12]).unwrap_err();
        assert_eq!(err, BoardError::WrongSpaceCount { got: 12 });
    }

    #[test]
    fn test_from_spaces_rejects_missing_jail() {
        let err = Board::from_spaces(vec![Space::Go; 40]).unwrap_err();
        assert_eq!(err, BoardError::MissingJail);
    }

    #[test]
    fn test_from_spaces_rejects_partial_group() {
        let mut spaces = vec![Space::Go; 40];
        spaces[10] = Space::Jail;
        // Brown needs two members.
        spaces[1] = Space::property("Old Kent Road", Group::Brown, 60, [2, 10, 30, 90, 160, 250]);

        let err = Board::from_spaces(spaces).unwrap_err();
        assert_eq!(
            err,
            BoardError::GroupSize {
                group: Group::Brown,
                got: 1,
                want: 2,
            }
        );
    }

    #[test]
    fn test_group_indices() {
        let board = Board::standard();

        assert_eq!(board.group_indices(Group::Brown), &[1, 3]);
        assert_eq!(board.group_indices(Group::Station), &[5, 15, 25, 35]);
        assert_eq!(board.group_indices(Group::Utility), &[12, 28]);
        assert_eq!(board.group_indices(Group::DarkBlue), &[37, 39]);
    }

    #[test]
    fn test_owned_in_group_and_monopoly() {
        let mut board = Board::standard();
        let p0 = PlayerId::new(0);

        assert_eq!(board.owned_in_group(Group::Brown, p0), 0);
        assert!(!board.has_monopoly(Group::Brown, p0));

        board.space_mut(1).set_owner(Some(p0));
        assert_eq!(board.owned_in_group(Group::Brown, p0), 1);
        assert!(!board.has_monopoly(Group::Brown, p0));

        board.space_mut(3).set_owner(Some(p0));
        assert!(board.has_monopoly(Group::Brown, p0));
    }

    #[test]
    fn test_rent_unowned_is_none() {
        let board = Board::standard();
        assert_eq!(board.rent(1), None);
        assert_eq!(board.rent(0), None); // GO is not ownable
    }

    #[test]
    fn test_property_rent_follows_schedule() {
        let mut board = Board::standard();
        board.space_mut(1).set_owner(Some(PlayerId::new(0)));

        assert_eq!(board.rent(1), Some(2));

        if let Space::Property { houses, .. } = board.space_mut(1) {
            *houses = 3;
        }
        assert_eq!(board.rent(1), Some(90));

        if let Space::Property { houses, .. } = board.space_mut(1) {
            *houses = 5;
        }
        assert_eq!(board.rent(1), Some(250));
    }

    #[test]
    fn test_station_rent_scales_with_holdings() {
        let mut board = Board::standard();
        let p0 = PlayerId::new(0);

        board.space_mut(5).set_owner(Some(p0));
        assert_eq!(board.rent(5), Some(25));

        board.space_mut(15).set_owner(Some(p0));
        assert_eq!(board.rent(5), Some(50));

        board.space_mut(25).set_owner(Some(p0));
        board.space_mut(35).set_owner(Some(p0));
        assert_eq!(board.rent(5), Some(200));
    }

    #[test]
    fn test_station_rent_counts_only_same_owner() {
        let mut board = Board::standard();

        board.space_mut(5).set_owner(Some(PlayerId::new(0)));
        board.space_mut(15).set_owner(Some(PlayerId::new(1)));

        assert_eq!(board.rent(5), Some(25));
        assert_eq!(board.rent(15), Some(25));
    }

    #[test]
    fn test_utility_rent_is_flat() {
        let mut board = Board::standard();
        board.space_mut(12).set_owner(Some(PlayerId::new(1)));
        board.space_mut(28).set_owner(Some(PlayerId::new(1)));

        assert_eq!(board.rent(12), Some(UTILITY_RENT));
        assert_eq!(board.rent(28), Some(UTILITY_RENT));
    }

    #[test]
    fn test_reset_clears_dynamic_state_only() {
        let mut board = Board::standard();
        let p0 = PlayerId::new(0);

        board.space_mut(1).set_owner(Some(p0));
        board.space_mut(5).set_owner(Some(p0));
        if let Space::Property { houses, mortgaged, .. } = board.space_mut(1) {
            *houses = 4;
            *mortgaged = true;
        }

        board.reset();

        assert_eq!(board.space(1).owner(), None);
        assert_eq!(board.space(1).houses(), 0);
        assert!(!board.space(1).is_mortgaged());
        assert_eq!(board.space(5).owner(), None);
        // Static metadata untouched.
        assert_eq!(board.space(1).price(), Some(60));
        assert_eq!(board.space(1).name(), "Old Kent Road");
    }

    #[test]
    fn test_house_cost_by_quarter() {
        let board = Board::standard();

        assert_eq!(board.house_cost(1), 50);
        assert_eq!(board.house_cost(11), 100);
        assert_eq!(board.house_cost(21), 150);
        assert_eq!(board.house_cost(39), 200);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board.spaces(), deserialized.spaces());
    }
}
