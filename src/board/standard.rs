//! The standard London board layout.

use super::space::{Group, Space};

/// The 40 spaces of the standard London board, in play order from GO.
pub fn standard_spaces() -> Vec<Space> {
    use Group::*;

    vec![
        Space::Go,
        Space::property("Old Kent Road", Brown, 60, [2, 10, 30, 90, 160, 250]),
        Space::CommunityChest,
        Space::property("Whitechapel Road", Brown, 60, [4, 20, 60, 180, 320, 450]),
        Space::tax("Income Tax", 200),
        Space::station("King's Cross Station", 200),
        Space::property("The Angel Islington", LightBlue, 100, [6, 30, 90, 270, 400, 550]),
        Space::Chance,
        Space::property("Euston Road", LightBlue, 100, [6, 30, 90, 270, 400, 550]),
        Space::property("Pentonville Road", LightBlue, 120, [8, 40, 100, 300, 450, 600]),
        Space::Jail,
        Space::property("Pall Mall", Pink, 140, [10, 50, 150, 450, 625, 750]),
        Space::utility("Electric Company", 150),
        Space::property("Whitehall", Pink, 140, [10, 50, 150, 450, 625, 750]),
        Space::property("Northumberland Avenue", Pink, 160, [12, 60, 180, 500, 700, 900]),
        Space::station("Marylebone Station", 200),
        Space::property("Bow Street", Orange, 180, [14, 70, 200, 550, 750, 950]),
        Space::CommunityChest,
        Space::property("Marlborough Street", Orange, 180, [14, 70, 200, 550, 750, 950]),
        Space::property("Vine Street", Orange, 200, [16, 80, 220, 600, 800, 1000]),
        Space::FreeParking,
        Space::property("Strand", Red, 220, [18, 90, 250, 700, 875, 1050]),
        Space::Chance,
        Space::property("Fleet Street", Red, 220, [18, 90, 250, 700, 875, 1050]),
        Space::property("Trafalgar Square", Red, 240, [20, 100, 300, 750, 925, 1100]),
        Space::station("Fenchurch St Station", 200),
        Space::property("Leicester Square", Yellow, 260, [22, 110, 330, 800, 975, 1150]),
        Space::property("Coventry Street", Yellow, 260, [22, 110, 330, 800, 975, 1150]),
        Space::utility("Water Works", 150),
        Space::property("Piccadilly", Yellow, 280, [24, 120, 360, 850, 1025, 1200]),
        Space::GoToJail,
        Space::property("Regent Street", Green, 300, [26, 130, 390, 900, 1100, 1275]),
        Space::property("Oxford Street", Green, 300, [26, 130, 390, 900, 1100, 1275]),
        Space::CommunityChest,
        Space::property("Bond Street", Green, 320, [28, 150, 450, 1000, 1200, 1400]),
        Space::station("Liverpool Street Station", 200),
        Space::Chance,
        Space::property("Park Lane", DarkBlue, 350, [35, 175, 500, 1100, 1300, 1500]),
        Space::tax("Super Tax", 100),
        Space::property("Mayfair", DarkBlue, 400, [50, 200, 600, 1400, 1700, 2000]),
    ]
}
