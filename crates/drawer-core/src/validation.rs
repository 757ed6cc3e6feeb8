//! # Validation Module
//!
//! Input validation for Drawer POS, including the one place decimal text
//! becomes [`Money`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Terminal shell                                               │
//! │  ├── Reads raw text (stdin lines, config values)                       │
//! │  └── THIS MODULE: parse to integer cents, reject junk                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: calculate_change()                                           │
//! │  └── Defensive re-checks (positive price, non-negative tender)         │
//! │                                                                         │
//! │  Rejected input never reaches the greedy fill                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use drawer_core::validation::parse_cash_amount;
//!
//! assert_eq!(parse_cash_amount("20").unwrap().cents(), 2_000);
//! assert_eq!(parse_cash_amount("3.26").unwrap().cents(), 326);
//! assert!(parse_cash_amount("twenty").is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Decimal Parsing
// =============================================================================

/// Parses a decimal string into [`Money`].
///
/// ## Rules
/// - Accepts `"5"`, `"5."`, `"5.5"`, `"5.50"`, `".5"` and `"0"`
/// - No signs, no currency symbols, no exponents, no grouping separators
/// - A third fractional digit rounds half-up into cents, so the stored
///   amount is always exact in minor units
/// - `field` names the input in error messages
pub fn parse_money(field: &str, input: &str) -> ValidationResult<Money> {
    let raw = input.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if raw.starts_with('-') {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    let (whole, frac) = match raw.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (raw, ""),
    };

    // A second '.' stays inside `frac` and fails the digit check below
    if whole.is_empty() && frac.is_empty() {
        return Err(invalid_format(field, "not a number"));
    }
    if !whole.chars().all(|c| c.is_ascii_digit())
        || !frac.chars().all(|c| c.is_ascii_digit())
    {
        return Err(invalid_format(field, "must be a plain decimal number"));
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| invalid_format(field, "amount too large"))?
    };

    let mut frac_digits = frac.chars().map(|c| (c as u8 - b'0') as i64);
    let tens = frac_digits.next().unwrap_or(0);
    let ones = frac_digits.next().unwrap_or(0);
    let mut cents_frac = tens * 10 + ones;
    if let Some(third) = frac_digits.next() {
        if third >= 5 {
            cents_frac += 1;
        }
    }

    let cents = dollars
        .checked_mul(100)
        .and_then(|c| c.checked_add(cents_frac))
        .ok_or_else(|| invalid_format(field, "amount too large"))?;

    Ok(Money::from_cents(cents))
}

/// Parses raw cash-tendered input.
///
/// The shell surfaces any error here as the "Please enter a valid amount"
/// message and performs no further work on the tender.
pub fn parse_cash_amount(input: &str) -> ValidationResult<Money> {
    parse_money("cash tendered", input)
}

fn invalid_format(field: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates an item price.
///
/// ## Rules
/// - Must be positive (a sale always has a price; free items don't tender)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_amounts() {
        assert_eq!(parse_cash_amount("20").unwrap().cents(), 2_000);
        assert_eq!(parse_cash_amount("0").unwrap().cents(), 0);
        assert_eq!(parse_cash_amount(" 100 ").unwrap().cents(), 10_000);
    }

    #[test]
    fn test_parse_fractional_amounts() {
        assert_eq!(parse_cash_amount("3.26").unwrap().cents(), 326);
        assert_eq!(parse_cash_amount("19.5").unwrap().cents(), 1_950);
        assert_eq!(parse_cash_amount("5.").unwrap().cents(), 500);
        assert_eq!(parse_cash_amount(".5").unwrap().cents(), 50);
        assert_eq!(parse_cash_amount("0.05").unwrap().cents(), 5);
    }

    #[test]
    fn test_parse_rounds_third_digit_half_up() {
        assert_eq!(parse_cash_amount("1.994").unwrap().cents(), 199);
        assert_eq!(parse_cash_amount("1.995").unwrap().cents(), 200);
        assert_eq!(parse_cash_amount("1.999").unwrap().cents(), 200);
        // Digits past the third don't matter once the third decided
        assert_eq!(parse_cash_amount("1.99049").unwrap().cents(), 199);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!(parse_cash_amount("").is_err());
        assert!(parse_cash_amount("   ").is_err());
        assert!(parse_cash_amount(".").is_err());
        assert!(parse_cash_amount("twenty").is_err());
        assert!(parse_cash_amount("$5").is_err());
        assert!(parse_cash_amount("1.2.3").is_err());
        assert!(parse_cash_amount("1e5").is_err());
        assert!(parse_cash_amount("1,000").is_err());
        assert!(parse_cash_amount("+5").is_err());
    }

    #[test]
    fn test_parse_rejects_negative() {
        let err = parse_cash_amount("-5").unwrap_err();
        assert!(matches!(err, ValidationError::Negative { .. }));
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_cash_amount("99999999999999999999").is_err());
    }

    #[test]
    fn test_error_uses_field_name() {
        let err = parse_money("price", "oops").unwrap_err();
        assert_eq!(err.to_string(), "price has invalid format: must be a plain decimal number");
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(187)).is_ok());
        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-1)).is_err());
    }
}
