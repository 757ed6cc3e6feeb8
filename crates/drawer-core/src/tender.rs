//! # Tender Calculation
//!
//! Computes the change owed for a cash tender and classifies the outcome.
//! This module is the heart of the crate; everything else supports it.
//!
//! ## Decision Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      calculate_change()                                 │
//! │                                                                         │
//! │  tendered < price ──────────────────────────► INSUFFICIENT_CASH         │
//! │        │                                                                │
//! │  tendered == price ─────────────────────────► EXACT                     │
//! │        │                                                                │
//! │  change due = tendered - price                                          │
//! │        │                                                                │
//! │  till total < change due ───────────────────► INSUFFICIENT_FUNDS        │
//! │        │                                      (drawer too poor overall) │
//! │        ▼                                                                │
//! │  greedy fill, largest denomination first                                │
//! │        │                                                                │
//! │  change left over ──────────────────────────► INSUFFICIENT_FUNDS        │
//! │        │                                      (wrong denomination mix)  │
//! │        ▼                                                                │
//! │  till total == change due ──────────────────► CLOSED (drawer emptied)   │
//! │        │                                                                │
//! │        └────────────────────────────────────► OPEN                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two INSUFFICIENT_FUNDS guards are distinct on purpose: the aggregate
//! check fires before the fill ever runs, the mix check fires after it. Both
//! report the same status because the cashier's recourse is the same.
//!
//! Greedy largest-first is the contract here, not minimal coin count: the
//! drawer dispenses as much of each denomination as fits before moving to
//! the next smaller one.

use serde::{Deserialize, Serialize};

use crate::denomination::Denomination;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::till::Till;

// =============================================================================
// Change Breakdown
// =============================================================================

/// One dispensed denomination within a change breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispensed {
    pub denomination: Denomination,
    /// Total value dispensed in this denomination (not a coin count).
    pub amount: Money,
}

/// The itemized change handed back to the customer.
///
/// ## Invariants
/// - Entries are ordered largest denomination first
/// - Zero-amount entries are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeBreakdown {
    entries: Vec<Dispensed>,
}

impl ChangeBreakdown {
    /// Wraps already-ordered dispense entries.
    pub fn from_entries(entries: Vec<Dispensed>) -> Self {
        ChangeBreakdown { entries }
    }

    /// The dispensed entries, largest denomination first.
    #[inline]
    pub fn entries(&self) -> &[Dispensed] {
        &self.entries
    }

    /// Sum of all dispensed amounts.
    pub fn total(&self) -> Money {
        self.entries
            .iter()
            .fold(Money::zero(), |sum, d| sum + d.amount)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tender Outcome
// =============================================================================

/// The classified result of one cash tender.
///
/// Business outcomes are values, never errors: a drawer that cannot make
/// change is a normal result the shell must render, not a failure.
///
/// ## Wire Shape
/// Serializes as a tagged object for integration consumers:
/// ```json
/// {"status":"OPEN","change":[{"denomination":"QUARTER","amount":50}]}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "change", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderOutcome {
    /// Customer tendered less than the price. No change, no drawer checks.
    InsufficientCash,

    /// Customer paid the exact price. No change, drawer untouched.
    Exact,

    /// The drawer cannot produce the exact change owed, either because its
    /// total value is too low or because its denomination mix cannot
    /// represent the amount.
    InsufficientFunds,

    /// Change dispensed and the drawer is now completely empty.
    Closed(ChangeBreakdown),

    /// Change dispensed; the drawer retains a nonzero remainder.
    Open(ChangeBreakdown),
}

impl TenderOutcome {
    /// The status tag as rendered on receipts ("OPEN", "CLOSED", ...).
    pub const fn status(&self) -> &'static str {
        match self {
            TenderOutcome::InsufficientCash => "INSUFFICIENT_CASH",
            TenderOutcome::Exact => "EXACT",
            TenderOutcome::InsufficientFunds => "INSUFFICIENT_FUNDS",
            TenderOutcome::Closed(_) => "CLOSED",
            TenderOutcome::Open(_) => "OPEN",
        }
    }

    /// The change breakdown, present only for dispensing outcomes.
    pub fn breakdown(&self) -> Option<&ChangeBreakdown> {
        match self {
            TenderOutcome::Closed(breakdown) | TenderOutcome::Open(breakdown) => Some(breakdown),
            _ => None,
        }
    }
}

// =============================================================================
// Change Calculator
// =============================================================================

/// Computes change for one tender against a till snapshot.
///
/// Pure and deterministic: identical inputs produce identical outcomes, and
/// the caller's till is never mutated. Applying a CLOSED / OPEN breakdown to
/// the drawer is the caller's explicit follow-up via
/// [`Till::apply_breakdown`].
///
/// ## Errors
/// Only rejected input is an error: a non-positive price or a negative
/// tendered amount. Every valid input maps to exactly one [`TenderOutcome`].
///
/// ## Example
/// ```rust
/// use drawer_core::{calculate_change, Denomination, Money, Till};
///
/// let till = Till::from_amounts(&[
///     (Denomination::Dime, Money::from_cents(310)),
///     (Denomination::Penny, Money::from_cents(101)),
/// ]).unwrap();
///
/// let outcome = calculate_change(
///     Money::from_cents(187),
///     Money::from_cents(200),
///     &till,
/// ).unwrap();
///
/// assert_eq!(outcome.status(), "OPEN");
/// assert_eq!(outcome.breakdown().unwrap().total(), Money::from_cents(13));
/// ```
pub fn calculate_change(price: Money, tendered: Money, till: &Till) -> CoreResult<TenderOutcome> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        }
        .into());
    }
    if tendered.is_negative() {
        return Err(ValidationError::Negative {
            field: "cash tendered".to_string(),
        }
        .into());
    }

    if tendered < price {
        return Ok(TenderOutcome::InsufficientCash);
    }
    if tendered == price {
        return Ok(TenderOutcome::Exact);
    }

    let change_due = tendered - price;
    let total_till = till.total();

    // Aggregate guard: if the whole drawer is worth less than the change
    // owed, no denomination walk can succeed.
    if total_till < change_due {
        return Ok(TenderOutcome::InsufficientFunds);
    }

    // Greedy fill over working amounts, largest denomination first. The
    // caller's till is read, never written.
    let mut remaining = change_due;
    let mut entries = Vec::new();

    for &denomination in Denomination::CATALOG.iter().rev() {
        let unit = denomination.unit_cents();
        let available = till.available(denomination);

        // Units dispensed: as many as fit the remaining change, capped by
        // the drawer slot. Till invariants guarantee `available` is a whole
        // number of units, so this equals drawing one unit at a time until
        // the unit no longer fits or the slot runs dry.
        let units = (remaining.cents() / unit).min(available.cents() / unit);
        if units > 0 {
            let taken = Money::from_cents(units * unit);
            remaining -= taken;
            // Pushed in traversal order: breakdown ends up largest-first
            entries.push(Dispensed {
                denomination,
                amount: taken,
            });
        }
    }

    // Mix guard: aggregate value was sufficient, but the exact amount is
    // not representable with the denominations on hand (50¢ owed, only
    // $1 bills).
    if remaining.is_positive() {
        return Ok(TenderOutcome::InsufficientFunds);
    }

    let breakdown = ChangeBreakdown::from_entries(entries);
    if total_till == change_due {
        // The fill consumed the entire drawer
        Ok(TenderOutcome::Closed(breakdown))
    } else {
        Ok(TenderOutcome::Open(breakdown))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
