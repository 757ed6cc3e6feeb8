//! # Denomination Catalog
//!
//! The fixed set of US currency denominations a drawer can hold.
//!
//! The catalog is ordered from smallest to largest unit value. That order is
//! significant: change calculation walks it in reverse (largest first), and
//! drawer displays walk it forward (penny first), matching how the physical
//! drawer slots are laid out.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// A single currency denomination.
///
/// ## Design Notes
/// A statically-typed enum instead of `(name, value)` tuples: the compiler
/// rules out positional-index mistakes and unknown names at the type level.
/// String names exist only at the boundary (config files, rendered output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Denomination {
    /// 1¢ coin.
    Penny,
    /// 5¢ coin.
    Nickel,
    /// 10¢ coin.
    Dime,
    /// 25¢ coin.
    Quarter,
    /// $1 bill.
    One,
    /// $5 bill.
    Five,
    /// $10 bill.
    Ten,
    /// $20 bill.
    Twenty,
    /// $100 bill.
    #[serde(rename = "ONE HUNDRED")]
    OneHundred,
}

impl Denomination {
    /// All denominations, ordered smallest to largest unit value.
    ///
    /// Greedy change-making iterates this in reverse.
    pub const CATALOG: [Denomination; 9] = [
        Denomination::Penny,
        Denomination::Nickel,
        Denomination::Dime,
        Denomination::Quarter,
        Denomination::One,
        Denomination::Five,
        Denomination::Ten,
        Denomination::Twenty,
        Denomination::OneHundred,
    ];

    /// The value of one physical unit of this denomination, in cents.
    #[inline]
    pub const fn unit_cents(&self) -> i64 {
        match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1_000,
            Denomination::Twenty => 2_000,
            Denomination::OneHundred => 10_000,
        }
    }

    /// The value of one physical unit as [`Money`].
    #[inline]
    pub const fn unit_value(&self) -> Money {
        Money::from_cents(self.unit_cents())
    }

    /// Display name used on receipts and in config files.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Denomination::Penny => "PENNY",
            Denomination::Nickel => "NICKEL",
            Denomination::Dime => "DIME",
            Denomination::Quarter => "QUARTER",
            Denomination::One => "ONE",
            Denomination::Five => "FIVE",
            Denomination::Ten => "TEN",
            Denomination::Twenty => "TWENTY",
            Denomination::OneHundred => "ONE HUNDRED",
        }
    }

    /// Looks up a denomination by its display name.
    ///
    /// Used when resolving config files; names are matched exactly as
    /// rendered ("ONE HUNDRED", not "ONE_HUNDRED").
    pub fn from_name(name: &str) -> Option<Denomination> {
        Denomination::CATALOG
            .iter()
            .copied()
            .find(|d| d.name() == name)
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_ascending() {
        let mut previous = 0;
        for denomination in Denomination::CATALOG {
            assert!(
                denomination.unit_cents() > previous,
                "{} out of order",
                denomination
            );
            previous = denomination.unit_cents();
        }
    }

    #[test]
    fn test_unit_values() {
        assert_eq!(Denomination::Penny.unit_cents(), 1);
        assert_eq!(Denomination::Quarter.unit_cents(), 25);
        assert_eq!(Denomination::Twenty.unit_cents(), 2_000);
        assert_eq!(Denomination::OneHundred.unit_value(), Money::from_cents(10_000));
    }

    #[test]
    fn test_name_round_trip() {
        for denomination in Denomination::CATALOG {
            assert_eq!(
                Denomination::from_name(denomination.name()),
                Some(denomination)
            );
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Denomination::from_name("DOUBLOON"), None);
        assert_eq!(Denomination::from_name("penny"), None);
        assert_eq!(Denomination::from_name("ONE_HUNDRED"), None);
    }

    #[test]
    fn test_display_uses_receipt_names() {
        assert_eq!(Denomination::OneHundred.to_string(), "ONE HUNDRED");
        assert_eq!(Denomination::Penny.to_string(), "PENNY");
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&Denomination::OneHundred).unwrap();
        assert_eq!(json, "\"ONE HUNDRED\"");

        let back: Denomination = serde_json::from_str("\"QUARTER\"").unwrap();
        assert_eq!(back, Denomination::Quarter);
    }
}
