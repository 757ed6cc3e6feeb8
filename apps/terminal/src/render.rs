//! # Receipt Rendering
//!
//! Turns domain values into the text the cashier sees. All formatting rules
//! live here; drawer-core never renders anything.
//!
//! Two display formats coexist on purpose:
//! - Drawer displays use fixed two-decimal amounts ("$4.25", "$90.00")
//! - Status lines use bare decimals with trailing zeros dropped
//!   ("$0.5", "$20", "$96.74"), matching the receipt tape format

use drawer_core::{Money, TenderOutcome, Till};

use crate::config::OutputMode;
use crate::error::TerminalError;

/// Message shown when cash input fails to parse.
pub const INVALID_AMOUNT_MSG: &str = "Please enter a valid amount";

/// Message for a customer who tendered less than the price.
pub const INSUFFICIENT_CASH_MSG: &str =
    "Customer does not have enough money to purchase the item";

/// Message for an exact-cash payment.
pub const EXACT_CASH_MSG: &str = "No change due - customer paid with exact cash";

// =============================================================================
// Amount Formatting
// =============================================================================

/// Formats an amount for a status line: bare decimal, trailing zeros
/// dropped.
///
/// ## Example
/// ```text
/// 50¢    → "$0.5"
/// $20.00 → "$20"
/// $96.74 → "$96.74"
/// 4¢     → "$0.04"
/// ```
pub fn format_amount(amount: Money) -> String {
    let cents = amount.cents();
    let sign = if cents < 0 { "-" } else { "" };
    let dollars = amount.dollars().abs();
    let minor = amount.cents_part();

    if minor == 0 {
        format!("{}${}", sign, dollars)
    } else if minor % 10 == 0 {
        format!("{}${}.{}", sign, dollars, minor / 10)
    } else {
        format!("{}${}.{:02}", sign, dollars, minor)
    }
}

// =============================================================================
// Drawer Display
// =============================================================================

/// Renders the price screen and the drawer contents, one slot per line,
/// smallest denomination first.
pub fn drawer_display(price: Money, till: &Till) -> String {
    let mut out = format!("Price: {}\nCash in drawer:", price);
    for entry in till.entries() {
        out.push_str(&format!("\n  {}: {}", entry.denomination, entry.available));
    }
    out
}

// =============================================================================
// Outcome Rendering
// =============================================================================

/// Renders one tender outcome in the configured output mode.
pub fn render_outcome(
    outcome: &TenderOutcome,
    mode: OutputMode,
) -> Result<String, TerminalError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string(outcome)?),
        OutputMode::Text => Ok(render_text(outcome)),
    }
}

fn render_text(outcome: &TenderOutcome) -> String {
    match outcome {
        TenderOutcome::InsufficientCash => INSUFFICIENT_CASH_MSG.to_string(),
        TenderOutcome::Exact => EXACT_CASH_MSG.to_string(),
        TenderOutcome::InsufficientFunds => format!("Status: {}", outcome.status()),
        TenderOutcome::Closed(breakdown) | TenderOutcome::Open(breakdown) => {
            let change = breakdown
                .entries()
                .iter()
                .map(|d| format!("{}: {}", d.denomination, format_amount(d.amount)))
                .collect::<Vec<_>>()
                .join(" ");
            format!("Status: {} {}", outcome.status(), change)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_core::{calculate_change, Denomination, Till};

    fn stocked_till() -> Till {
        Till::from_amounts(&[
            (Denomination::Penny, Money::from_cents(101)),
            (Denomination::Nickel, Money::from_cents(205)),
            (Denomination::Dime, Money::from_cents(310)),
            (Denomination::Quarter, Money::from_cents(425)),
            (Denomination::One, Money::from_cents(9_000)),
            (Denomination::Five, Money::from_cents(5_500)),
            (Denomination::Ten, Money::from_cents(2_000)),
            (Denomination::Twenty, Money::from_cents(6_000)),
            (Denomination::OneHundred, Money::from_cents(10_000)),
        ])
        .unwrap()
    }

    #[test]
    fn test_format_amount_drops_trailing_zeros() {
        assert_eq!(format_amount(Money::from_cents(50)), "$0.5");
        assert_eq!(format_amount(Money::from_cents(2_000)), "$20");
        assert_eq!(format_amount(Money::from_cents(9_674)), "$96.74");
        assert_eq!(format_amount(Money::from_cents(4)), "$0.04");
        assert_eq!(format_amount(Money::from_cents(150)), "$1.5");
        assert_eq!(format_amount(Money::zero()), "$0");
    }

    #[test]
    fn test_status_line_for_open_tender() {
        let outcome = calculate_change(
            Money::from_cents(326),
            Money::from_cents(10_000),
            &stocked_till(),
        )
        .unwrap();

        assert_eq!(
            render_text(&outcome),
            "Status: OPEN TWENTY: $60 TEN: $20 FIVE: $15 ONE: $1 QUARTER: $0.5 DIME: $0.2 PENNY: $0.04"
        );
    }

    #[test]
    fn test_status_line_for_closed_tender() {
        let till = Till::from_amounts(&[(Denomination::Penny, Money::from_cents(50))]).unwrap();
        let outcome =
            calculate_change(Money::from_cents(1_950), Money::from_cents(2_000), &till).unwrap();

        assert_eq!(render_text(&outcome), "Status: CLOSED PENNY: $0.5");
    }

    #[test]
    fn test_plain_messages() {
        assert_eq!(
            render_text(&TenderOutcome::InsufficientCash),
            "Customer does not have enough money to purchase the item"
        );
        assert_eq!(
            render_text(&TenderOutcome::Exact),
            "No change due - customer paid with exact cash"
        );
        assert_eq!(
            render_text(&TenderOutcome::InsufficientFunds),
            "Status: INSUFFICIENT_FUNDS"
        );
    }

    #[test]
    fn test_drawer_display() {
        let till = Till::from_amounts(&[
            (Denomination::Penny, Money::from_cents(101)),
            (Denomination::OneHundred, Money::from_cents(10_000)),
        ])
        .unwrap();

        let display = drawer_display(Money::from_cents(187), &till);
        assert!(display.starts_with("Price: $1.87\nCash in drawer:\n  PENNY: $1.01"));
        assert!(display.ends_with("ONE HUNDRED: $100.00"));
    }

    #[test]
    fn test_json_output_mode() {
        let till = Till::from_amounts(&[(Denomination::Quarter, Money::from_cents(100))]).unwrap();
        let outcome =
            calculate_change(Money::from_cents(150), Money::from_cents(200), &till).unwrap();

        let json = render_outcome(&outcome, OutputMode::Json).unwrap();
        assert_eq!(
            json,
            r#"{"status":"OPEN","change":[{"denomination":"QUARTER","amount":50}]}"#
        );
    }
}
