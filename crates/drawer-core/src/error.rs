//! # Error Types
//!
//! Domain-specific error types for drawer-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  drawer-core errors (this file)                                        │
//! │  ├── CoreError        - Till construction / dispense failures          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  terminal errors (in app)                                              │
//! │  └── TerminalError    - Config loading, stdin I/O                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → TerminalError → user message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (denomination, amounts)
//! 3. Errors are enum variants, never String
//! 4. Business outcomes are NOT errors: "insufficient funds", "exact cash"
//!    and friends are ordinary [`crate::tender::TenderOutcome`] values.
//!    Only malformed input and broken till invariants are errors.

use thiserror::Error;

use crate::denomination::Denomination;
use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent broken till invariants or rejected input.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The same denomination appears twice in a till definition.
    #[error("Duplicate till entry for {denomination}")]
    DuplicateTillEntry { denomination: Denomination },

    /// A till entry holds an amount that is not a whole number of
    /// physical coins or bills of its denomination.
    ///
    /// ## When This Occurs
    /// - Config declares `NICKEL = "0.03"` (3 cents cannot be nickels)
    /// - A caller constructs a till from corrupted data
    #[error("Till amount for {denomination} is not a whole number of units: {available}")]
    FractionalTillAmount {
        denomination: Denomination,
        available: Money,
    },

    /// A till entry holds a negative amount.
    #[error("Till amount for {denomination} is negative: {available}")]
    NegativeTillAmount {
        denomination: Denomination,
        available: Money,
    },

    /// Applying a change breakdown would overdraw a drawer slot.
    ///
    /// ## When This Occurs
    /// - A breakdown computed against one till snapshot is applied to a
    ///   till that has been drained in the meantime
    #[error("Cannot dispense {requested} of {denomination}: only {available} in drawer")]
    DispenseExceedsAvailable {
        denomination: Denomination,
        requested: Money,
        available: Money,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g., non-numeric cash input).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A denomination name that is not in the catalog.
    #[error("Unknown denomination: {name}")]
    UnknownDenomination { name: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::DispenseExceedsAvailable {
            denomination: Denomination::Quarter,
            requested: Money::from_cents(75),
            available: Money::from_cents(50),
        };
        assert_eq!(
            err.to_string(),
            "Cannot dispense $0.75 of QUARTER: only $0.50 in drawer"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "cash tendered".to_string(),
        };
        assert_eq!(err.to_string(), "cash tendered is required");

        let err = ValidationError::UnknownDenomination {
            name: "DOUBLOON".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown denomination: DOUBLOON");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
