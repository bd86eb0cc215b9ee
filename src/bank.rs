//! The bank: cash reserve and building stock.
//!
//! The reserve is the only place money is created or destroyed. Player to
//! player transfers never touch it, so across any game the sum of player
//! cash and the reserve moves only when the bank prints money in
//! [`BankMode::Infinite`].

use serde::{Deserialize, Serialize};

/// Total houses in the box.
pub const TOTAL_HOUSES: u8 = 32;

/// Total hotels in the box.
pub const TOTAL_HOTELS: u8 = 12;

/// What the bank does when a withdrawal exceeds the reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BankMode {
    /// The bank prints money: the reserve goes negative to track the
    /// deficit and the full amount is paid out.
    Infinite,
    /// Hard currency: the bank pays out whatever is left and zeroes the
    /// reserve.
    HardLimit,
}

/// Cash reserve plus house/hotel inventory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Bank {
    cash: i64,
    starting_cash: i64,
    mode: BankMode,
    houses_available: u8,
    hotels_available: u8,
}

impl Bank {
    /// Create a bank with the given opening reserve.
    #[must_use]
    pub fn new(starting_cash: i64, mode: BankMode) -> Self {
        Self {
            cash: starting_cash,
            starting_cash,
            mode,
            houses_available: TOTAL_HOUSES,
            hotels_available: TOTAL_HOTELS,
        }
    }

    /// Current reserve. Negative in infinite mode means printed money.
    #[must_use]
    pub fn cash(&self) -> i64 {
        self.cash
    }

    /// Houses left in stock.
    #[must_use]
    pub fn houses_available(&self) -> u8 {
        self.houses_available
    }

    /// Hotels left in stock.
    #[must_use]
    pub fn hotels_available(&self) -> u8 {
        self.hotels_available
    }

    /// Take money out of the bank. Returns the amount actually paid out:
    /// the full request in infinite mode, possibly less in hard-limit mode.
    #[must_use]
    pub fn withdraw(&mut self, amount: i64) -> i64 {
        if self.cash >= amount {
            self.cash -= amount;
            return amount;
        }

        match self.mode {
            BankMode::Infinite => {
                self.cash -= amount;
                amount
            }
            BankMode::HardLimit => {
                let remaining = self.cash.max(0);
                self.cash -= remaining;
                remaining
            }
        }
    }

    /// Pay money into the bank. Always credits the full amount.
    pub fn deposit(&mut self, amount: i64) {
        self.cash += amount;
    }

    /// Whether a house is in stock.
    #[must_use]
    pub fn can_build_house(&self) -> bool {
        self.houses_available > 0
    }

    /// Whether a hotel is in stock.
    #[must_use]
    pub fn can_build_hotel(&self) -> bool {
        self.hotels_available > 0
    }

    /// Take a house from stock. Returns false if none are left.
    pub fn release_house(&mut self) -> bool {
        if self.houses_available > 0 {
            self.houses_available -= 1;
            true
        } else {
            false
        }
    }

    /// Take a hotel from stock. Returns false if none are left.
    pub fn release_hotel(&mut self) -> bool {
        if self.hotels_available > 0 {
            self.hotels_available -= 1;
            true
        } else {
            false
        }
    }

    /// Return a house to stock, capped at the box total.
    pub fn return_house(&mut self) {
        if self.houses_available < TOTAL_HOUSES {
            self.houses_available += 1;
        }
    }

    /// Return a hotel to stock, capped at the box total.
    pub fn return_hotel(&mut self) {
        if self.hotels_available < TOTAL_HOTELS {
            self.hotels_available += 1;
        }
    }

    /// Restock cash and buildings for a new game.
    pub fn reset(&mut self) {
        self.cash = self.starting_cash;
        self.houses_available = TOTAL_HOUSES;
        self.hotels_available = TOTAL_HOTELS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_withdraw_within_reserve() {
        let mut bank = Bank::new(1000, BankMode::Infinite);

        assert_eq!(bank.withdraw(200), 200);
        assert_eq!(bank.cash(), 800);
    }

    #[test]
    fn test_withdraw_infinite_goes_negative() {
        let mut bank = Bank::new(100, BankMode::Infinite);

        assert_eq!(bank.withdraw(500), 500);
        assert_eq!(bank.cash(), -400);
    }

    #[test]
    fn test_withdraw_hard_limit_drains() {
        let mut bank = Bank::new(100, BankMode::HardLimit);

        assert_eq!(bank.withdraw(500), 100);
        assert_eq!(bank.cash(), 0);

        // Nothing left to give.
        assert_eq!(bank.withdraw(50), 0);
        assert_eq!(bank.cash(), 0);
    }

    #[test]
    fn test_deposit_exact_regardless_of_sign() {
        let mut bank = Bank::new(100, BankMode::Infinite);
        let _ = bank.withdraw(500);
        assert_eq!(bank.cash(), -400);

        bank.deposit(150);
        assert_eq!(bank.cash(), -250);

        bank.deposit(1000);
        assert_eq!(bank.cash(), 750);
    }

    #[test]
    fn test_building_stock() {
        let mut bank = Bank::new(0, BankMode::Infinite);

        assert!(bank.can_build_house());
        assert!(bank.can_build_hotel());

        for _ in 0..TOTAL_HOUSES {
            assert!(bank.release_house());
        }
        assert!(!bank.can_build_house());
        assert!(!bank.release_house());

        bank.return_house();
        assert_eq!(bank.houses_available(), 1);
    }

    #[test]
    fn test_return_capped_at_box_total() {
        let mut bank = Bank::new(0, BankMode::Infinite);

        bank.return_house();
        bank.return_hotel();

        assert_eq!(bank.houses_available(), TOTAL_HOUSES);
        assert_eq!(bank.hotels_available(), TOTAL_HOTELS);
    }

    #[test]
    fn test_hotel_stock() {
        let mut bank = Bank::new(0, BankMode::Infinite);

        for _ in 0..TOTAL_HOTELS {
            assert!(bank.release_hotel());
        }
        assert!(!bank.release_hotel());
        assert_eq!(bank.hotels_available(), 0);
    }

    #[test]
    fn test_reset_restocks() {
        let mut bank = Bank::new(20580, BankMode::Infinite);
        let _ = bank.withdraw(21000);
        let _ = bank.release_house();
        let _ = bank.release_hotel();

        bank.reset();

        assert_eq!(bank.cash(), 20580);
        assert_eq!(bank.houses_available(), TOTAL_HOUSES);
        assert_eq!(bank.hotels_available(), TOTAL_HOTELS);
    }
}
