//! # drawer-core: Pure Business Logic for Drawer POS
//!
//! This crate is the **heart** of Drawer POS. It computes correct change for
//! a cash tender against a till of fixed denominations, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Drawer POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  drawer-terminal (apps/terminal)                │   │
//! │  │     config.toml ──► stdin tender lines ──► rendered receipt     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ drawer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌────────────┐ ┌──────────────┐ ┌──────────┐ ┌─────────────┐  │   │
//! │  │  │   money    │ │ denomination │ │   till   │ │   tender    │  │   │
//! │  │  │   Money    │ │   CATALOG    │ │   Till   │ │ greedy fill │  │   │
//! │  │  │  (cents)   │ │ PENNY..$100  │ │  slots   │ │  outcomes   │  │   │
//! │  │  └────────────┘ └──────────────┘ └──────────┘ └─────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO FILES • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer-cent arithmetic (no floating point!)
//! - [`denomination`] - The fixed, ordered denomination catalog
//! - [`till`] - Drawer contents and the explicit dispense-application step
//! - [`tender`] - THE CORE: greedy change calculation and outcome statuses
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and decimal parsing
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input =
//!    same output, and the caller's till is never mutated as a side effect
//! 2. **No I/O**: Terminal, file system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are cents (i64); decimal text
//!    exists only at the boundary
//! 4. **Outcomes over Errors**: "can't make change" is a result value;
//!    only malformed input is an error
//!
//! ## Example Usage
//!
//! ```rust
//! use drawer_core::{calculate_change, Denomination, Money, Till};
//!
//! let till = Till::from_amounts(&[
//!     (Denomination::Quarter, Money::from_cents(425)),
//!     (Denomination::One, Money::from_cents(9_000)),
//! ]).unwrap();
//!
//! let outcome = calculate_change(
//!     Money::from_cents(150),   // price $1.50
//!     Money::from_cents(200),   // customer hands over $2.00
//!     &till,
//! ).unwrap();
//!
//! assert_eq!(outcome.status(), "OPEN");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod denomination;
pub mod error;
pub mod money;
pub mod tender;
pub mod till;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use drawer_core::Money` instead of
// `use drawer_core::money::Money`

pub use denomination::Denomination;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use tender::{calculate_change, ChangeBreakdown, Dispensed, TenderOutcome};
pub use till::{Till, TillEntry};
