//! # Till State
//!
//! The cash drawer contents: one slot per catalog denomination, holding the
//! total value of that denomination in the drawer.
//!
//! ## Invariants
//! - Exactly one entry per denomination in [`Denomination::CATALOG`] order
//! - Every amount is non-negative
//! - Every amount is a whole multiple of its denomination's unit value
//!   (a drawer cannot hold 3¢ worth of nickels)
//!
//! ## Mutation Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Till Ownership Flow                                │
//! │                                                                         │
//! │  caller's Till ──(borrowed)──► calculate_change()                       │
//! │        │                            │                                   │
//! │        │                    internal working copy                       │
//! │        │                    (caller till untouched)                     │
//! │        │                            │                                   │
//! │        │                            ▼                                   │
//! │        │                      TenderOutcome                             │
//! │        │                            │                                   │
//! │        └──── apply_breakdown() ◄────┘  (explicit caller step,           │
//! │                                         OPEN / CLOSED results only)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::tender::ChangeBreakdown;

// =============================================================================
// Till Entry
// =============================================================================

/// One drawer slot: a denomination and the total value held in it.
///
/// `available` is a value, not a count: `QUARTER / $4.25` means seventeen
/// quarters, stored as 425 cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TillEntry {
    pub denomination: Denomination,
    pub available: Money,
}

// =============================================================================
// Till
// =============================================================================

/// The cash drawer.
///
/// Constructed through [`Till::from_amounts`], which enforces the slot
/// invariants; after that the entries are only mutated through
/// [`Till::apply_breakdown`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Till {
    entries: Vec<TillEntry>,
}

impl Till {
    /// Builds a till from per-denomination amounts.
    ///
    /// ## Behavior
    /// - Denominations not listed get an empty slot (zero available)
    /// - Listing a denomination twice is an error
    /// - Negative amounts and amounts that are not a whole multiple of the
    ///   denomination's unit value are errors
    ///
    /// ## Example
    /// ```rust
    /// use drawer_core::{Denomination, Money, Till};
    ///
    /// let till = Till::from_amounts(&[
    ///     (Denomination::Quarter, Money::from_cents(425)),
    ///     (Denomination::One, Money::from_cents(9_000)),
    /// ]).unwrap();
    ///
    /// assert_eq!(till.available(Denomination::Quarter), Money::from_cents(425));
    /// assert_eq!(till.available(Denomination::Penny), Money::zero());
    /// ```
    pub fn from_amounts(amounts: &[(Denomination, Money)]) -> CoreResult<Till> {
        let mut entries: Vec<TillEntry> = Denomination::CATALOG
            .iter()
            .map(|&denomination| TillEntry {
                denomination,
                available: Money::zero(),
            })
            .collect();

        let mut seen = [false; Denomination::CATALOG.len()];

        for &(denomination, available) in amounts {
            let slot = Self::slot_index(denomination);
            if seen[slot] {
                return Err(CoreError::DuplicateTillEntry { denomination });
            }
            seen[slot] = true;

            if available.is_negative() {
                return Err(CoreError::NegativeTillAmount {
                    denomination,
                    available,
                });
            }
            if available.cents() % denomination.unit_cents() != 0 {
                return Err(CoreError::FractionalTillAmount {
                    denomination,
                    available,
                });
            }

            entries[slot].available = available;
        }

        Ok(Till { entries })
    }

    /// An empty till (every slot zero).
    pub fn empty() -> Till {
        // from_amounts with no entries cannot violate any invariant
        Till::from_amounts(&[]).expect("empty till is always valid")
    }

    /// The drawer slots, smallest denomination first.
    #[inline]
    pub fn entries(&self) -> &[TillEntry] {
        &self.entries
    }

    /// The amount available in one slot.
    #[inline]
    pub fn available(&self, denomination: Denomination) -> Money {
        self.entries[Self::slot_index(denomination)].available
    }

    /// Total value held across all slots.
    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |sum, entry| sum + entry.available)
    }

    /// Checks whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.total().is_zero()
    }

    /// Removes a dispensed change breakdown from the drawer.
    ///
    /// This is the explicit second step after a successful tender: the
    /// calculator never touches the caller's till, so the caller applies
    /// OPEN / CLOSED breakdowns itself once the cash physically leaves
    /// the drawer.
    ///
    /// ## Errors
    /// Fails without modifying any slot if any dispensed amount exceeds
    /// what the slot holds.
    pub fn apply_breakdown(&mut self, breakdown: &ChangeBreakdown) -> CoreResult<()> {
        // Validate the whole breakdown before mutating anything
        for dispensed in breakdown.entries() {
            let available = self.available(dispensed.denomination);
            if dispensed.amount > available {
                return Err(CoreError::DispenseExceedsAvailable {
                    denomination: dispensed.denomination,
                    requested: dispensed.amount,
                    available,
                });
            }
        }

        for dispensed in breakdown.entries() {
            let slot = Self::slot_index(dispensed.denomination);
            self.entries[slot].available -= dispensed.amount;
        }

        Ok(())
    }

    /// Position of a denomination in the catalog (and in `entries`).
    #[inline]
    fn slot_index(denomination: Denomination) -> usize {
        Denomination::CATALOG
            .iter()
            .position(|&d| d == denomination)
            .expect("catalog contains every denomination")
    }
}

impl Default for Till {
    fn default() -> Self {
        Till::empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tender::Dispensed;

    fn quarters_and_ones() -> Till {
        Till::from_amounts(&[
            (Denomination::Quarter, Money::from_cents(425)),
            (Denomination::One, Money::from_cents(9_000)),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_amounts_fills_missing_slots_with_zero() {
        let till = quarters_and_ones();

        assert_eq!(till.entries().len(), Denomination::CATALOG.len());
        assert_eq!(till.available(Denomination::Penny), Money::zero());
        assert_eq!(till.available(Denomination::Quarter), Money::from_cents(425));
    }

    #[test]
    fn test_entries_follow_catalog_order() {
        let till = quarters_and_ones();
        for (entry, denomination) in till.entries().iter().zip(Denomination::CATALOG) {
            assert_eq!(entry.denomination, denomination);
        }
    }

    #[test]
    fn test_total() {
        let till = quarters_and_ones();
        assert_eq!(till.total(), Money::from_cents(9_425));

        assert_eq!(Till::empty().total(), Money::zero());
        assert!(Till::empty().is_empty());
    }

    #[test]
    fn test_duplicate_denomination_rejected() {
        let result = Till::from_amounts(&[
            (Denomination::Dime, Money::from_cents(310)),
            (Denomination::Dime, Money::from_cents(100)),
        ]);
        assert!(matches!(
            result,
            Err(CoreError::DuplicateTillEntry {
                denomination: Denomination::Dime
            })
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = Till::from_amounts(&[(Denomination::Five, Money::from_cents(-500))]);
        assert!(matches!(result, Err(CoreError::NegativeTillAmount { .. })));
    }

    #[test]
    fn test_fractional_amount_rejected() {
        // 3 cents cannot be made of nickels
        let result = Till::from_amounts(&[(Denomination::Nickel, Money::from_cents(3))]);
        assert!(matches!(result, Err(CoreError::FractionalTillAmount { .. })));

        // 425 cents of quarters is fine (17 coins)
        assert!(Till::from_amounts(&[(Denomination::Quarter, Money::from_cents(425))]).is_ok());
    }

    #[test]
    fn test_apply_breakdown_subtracts_slots() {
        let mut till = quarters_and_ones();
        let breakdown = ChangeBreakdown::from_entries(vec![
            Dispensed {
                denomination: Denomination::One,
                amount: Money::from_cents(300),
            },
            Dispensed {
                denomination: Denomination::Quarter,
                amount: Money::from_cents(50),
            },
        ]);

        till.apply_breakdown(&breakdown).unwrap();

        assert_eq!(till.available(Denomination::One), Money::from_cents(8_700));
        assert_eq!(till.available(Denomination::Quarter), Money::from_cents(375));
    }

    #[test]
    fn test_apply_breakdown_rejects_overdraw_without_mutating() {
        let mut till = quarters_and_ones();
        let breakdown = ChangeBreakdown::from_entries(vec![
            Dispensed {
                denomination: Denomination::One,
                amount: Money::from_cents(100),
            },
            Dispensed {
                denomination: Denomination::Quarter,
                amount: Money::from_cents(500), // more than the $4.25 held
            },
        ]);

        let err = till.apply_breakdown(&breakdown).unwrap_err();
        assert!(matches!(err, CoreError::DispenseExceedsAvailable { .. }));

        // First entry must not have been applied either
        assert_eq!(till.available(Denomination::One), Money::from_cents(9_000));
    }
}
