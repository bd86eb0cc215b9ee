//! Board space model.
//!
//! A space couples static metadata (name, price, rent schedule) with the
//! dynamic ownership state that changes during play. Non-ownable spaces
//! carry no dynamic state at all.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The ownership groups on the board: eight color sets plus the stations
/// and utilities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Group {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Station,
    Utility,
}

impl Group {
    /// Number of spaces in this group on the standard board.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Group::Brown | Group::DarkBlue | Group::Utility => 2,
            Group::Station => 4,
            _ => 3,
        }
    }

    /// Whether this is a color set (house-building group).
    #[must_use]
    pub const fn is_color_set(self) -> bool {
        !matches!(self, Group::Station | Group::Utility)
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Group::Brown => "Brown",
            Group::LightBlue => "Light Blue",
            Group::Pink => "Pink",
            Group::Orange => "Orange",
            Group::Red => "Red",
            Group::Yellow => "Yellow",
            Group::Green => "Green",
            Group::DarkBlue => "Dark Blue",
            Group::Station => "Station",
            Group::Utility => "Utility",
        };
        f.write_str(name)
    }
}

/// Rent by building count: index 0 is unimproved, 5 is the hotel tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentSchedule(pub [i64; 6]);

impl RentSchedule {
    /// Rent owed at the given house count (5 houses = hotel).
    ///
    /// Panics on a house count above 5; that is a corrupted board, not a
    /// recoverable state.
    #[must_use]
    pub fn at(&self, houses: u8) -> i64 {
        assert!(houses <= 5, "house count {} exceeds hotel tier", houses);
        self.0[houses as usize]
    }
}

/// One of the 40 board slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Go,
    Property {
        name: String,
        group: Group,
        price: i64,
        rent: RentSchedule,
        owner: Option<PlayerId>,
        houses: u8,
        mortgaged: bool,
    },
    Station {
        name: String,
        price: i64,
        owner: Option<PlayerId>,
        mortgaged: bool,
    },
    Utility {
        name: String,
        price: i64,
        owner: Option<PlayerId>,
        mortgaged: bool,
    },
    Tax {
        name: String,
        amount: i64,
    },
    Chance,
    CommunityChest,
    Jail,
    GoToJail,
    FreeParking,
}

impl Space {
    /// Create an unowned color-set property.
    #[must_use]
    pub fn property(name: &str, group: Group, price: i64, rent: [i64; 6]) -> Self {
        Space::Property {
            name: name.to_string(),
            group,
            price,
            rent: RentSchedule(rent),
            owner: None,
            houses: 0,
            mortgaged: false,
        }
    }

    /// Create an unowned station.
    #[must_use]
    pub fn station(name: &str, price: i64) -> Self {
        Space::Station {
            name: name.to_string(),
            price,
            owner: None,
            mortgaged: false,
        }
    }

    /// Create an unowned utility.
    #[must_use]
    pub fn utility(name: &str, price: i64) -> Self {
        Space::Utility {
            name: name.to_string(),
            price,
            owner: None,
            mortgaged: false,
        }
    }

    /// Create a tax space.
    #[must_use]
    pub fn tax(name: &str, amount: i64) -> Self {
        Space::Tax {
            name: name.to_string(),
            amount,
        }
    }

    /// Display name of the space.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Space::Go => "GO",
            Space::Property { name, .. }
            | Space::Station { name, .. }
            | Space::Utility { name, .. }
            | Space::Tax { name, .. } => name,
            Space::Chance => "Chance",
            Space::CommunityChest => "Community Chest",
            Space::Jail => "Jail",
            Space::GoToJail => "Go To Jail",
            Space::FreeParking => "Free Parking",
        }
    }

    /// Purchase price, if this space can be bought.
    #[must_use]
    pub fn price(&self) -> Option<i64> {
        match self {
            Space::Property { price, .. }
            | Space::Station { price, .. }
            | Space::Utility { price, .. } => Some(*price),
            _ => None,
        }
    }

    /// Ownership group, if this space belongs to one.
    #[must_use]
    pub fn group(&self) -> Option<Group> {
        match self {
            Space::Property { group, .. } => Some(*group),
            Space::Station { .. } => Some(Group::Station),
            Space::Utility { .. } => Some(Group::Utility),
            _ => None,
        }
    }

    /// Whether this space can be owned at all.
    #[must_use]
    pub fn is_ownable(&self) -> bool {
        self.price().is_some()
    }

    /// Current owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Space::Property { owner, .. }
            | Space::Station { owner, .. }
            | Space::Utility { owner, .. } => *owner,
            _ => None,
        }
    }

    /// Assign or clear the owner.
    ///
    /// Panics on a non-ownable space; only the engine and trade subsystem
    /// transfer deeds, and they dispatch on space type first.
    pub fn set_owner(&mut self, new_owner: Option<PlayerId>) {
        match self {
            Space::Property { owner, .. }
            | Space::Station { owner, .. }
            | Space::Utility { owner, .. } => *owner = new_owner,
            other => panic!("cannot set owner on {}", other.name()),
        }
    }

    /// Whether the space is mortgaged.
    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        match self {
            Space::Property { mortgaged, .. }
            | Space::Station { mortgaged, .. }
            | Space::Utility { mortgaged, .. } => *mortgaged,
            _ => false,
        }
    }

    /// House count (0 for anything but a color-set property).
    #[must_use]
    pub fn houses(&self) -> u8 {
        match self {
            Space::Property { houses, .. } => *houses,
            _ => 0,
        }
    }
}
