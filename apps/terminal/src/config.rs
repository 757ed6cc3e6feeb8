//! # Register Configuration
//!
//! Configuration for one register session: the item price, the drawer
//! contents, and the output mode.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     DRAWER_PRICE=3.26                                                  │
//! │     DRAWER_OUTPUT=json                                                 │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ./drawer.toml (or the path given as the first CLI argument)        │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     price 1.87 and the standard opening drawer                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # drawer.toml
//! price = "1.87"
//! output = "text"  # text | json
//!
//! [[till]]
//! denomination = "PENNY"
//! amount = "1.01"
//!
//! [[till]]
//! denomination = "QUARTER"
//! amount = "4.25"
//! ```
//!
//! Amounts are decimal strings, not TOML floats: drawer-core parses them
//! into exact integer cents and rejects anything lossy.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use drawer_core::validation::{parse_money, validate_price};
use drawer_core::{CoreError, Denomination, Money, Till, ValidationError};

use crate::error::TerminalError;

// =============================================================================
// Output Mode
// =============================================================================

/// How tender outcomes are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Receipt-style text lines ("Status: OPEN QUARTER: $0.5").
    #[default]
    Text,

    /// One JSON document per tender, for integration consumers.
    Json,
}

// =============================================================================
// Terminal Config
// =============================================================================

/// One drawer slot as written in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TillSlot {
    /// Catalog name, e.g. "QUARTER" or "ONE HUNDRED".
    pub denomination: String,
    /// Total value held, as a decimal string.
    pub amount: String,
}

/// Raw register configuration, as read from disk / environment.
///
/// String-typed on purpose: resolution into domain types (and all the
/// validation that entails) happens in [`TerminalConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Item price as a decimal string.
    pub price: String,

    /// Output mode for tender outcomes.
    pub output: OutputMode,

    /// Drawer contents; denominations not listed start empty.
    pub till: Vec<TillSlot>,
}

impl Default for TerminalConfig {
    /// The standard opening register: a $1.87 item and a stocked drawer.
    fn default() -> Self {
        let slots = [
            ("PENNY", "1.01"),
            ("NICKEL", "2.05"),
            ("DIME", "3.10"),
            ("QUARTER", "4.25"),
            ("ONE", "90"),
            ("FIVE", "55"),
            ("TEN", "20"),
            ("TWENTY", "60"),
            ("ONE HUNDRED", "100"),
        ];

        TerminalConfig {
            price: "1.87".to_string(),
            output: OutputMode::Text,
            till: slots
                .into_iter()
                .map(|(denomination, amount)| TillSlot {
                    denomination: denomination.to_string(),
                    amount: amount.to_string(),
                })
                .collect(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file is not an error: the compiled defaults apply, with a
    /// warning so an operator notices a typo'd path.
    pub fn load(path: &Path) -> Result<TerminalConfig, TerminalError> {
        match fs::read_to_string(path) {
            Ok(text) => {
                toml::from_str(&text).map_err(|source| TerminalError::ConfigParse {
                    path: path.display().to_string(),
                    source,
                })
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(TerminalConfig::default())
            }
            Err(source) => Err(TerminalError::ConfigRead {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Applies `DRAWER_*` environment overrides.
    ///
    /// ## Environment Variables
    /// - `DRAWER_PRICE`: Override the item price (e.g. "3.26")
    /// - `DRAWER_OUTPUT`: Override the output mode ("text" or "json")
    pub fn apply_env(&mut self) {
        if let Ok(price) = std::env::var("DRAWER_PRICE") {
            self.price = price;
        }

        if let Ok(output) = std::env::var("DRAWER_OUTPUT") {
            match output.as_str() {
                "text" => self.output = OutputMode::Text,
                "json" => self.output = OutputMode::Json,
                other => warn!(value = other, "ignoring unknown DRAWER_OUTPUT"),
            }
        }
    }

    /// Resolves the raw config into validated domain values.
    pub fn resolve(&self) -> Result<Register, TerminalError> {
        let price = parse_money("price", &self.price).map_err(CoreError::from)?;
        validate_price(price).map_err(CoreError::from)?;

        let mut amounts: Vec<(Denomination, Money)> = Vec::with_capacity(self.till.len());
        for slot in &self.till {
            let denomination = Denomination::from_name(&slot.denomination).ok_or_else(|| {
                CoreError::from(ValidationError::UnknownDenomination {
                    name: slot.denomination.clone(),
                })
            })?;
            let amount = parse_money(&format!("till {}", slot.denomination), &slot.amount)
                .map_err(CoreError::from)?;
            amounts.push((denomination, amount));
        }

        Ok(Register {
            price,
            till: Till::from_amounts(&amounts)?,
            output: self.output,
        })
    }
}

// =============================================================================
// Resolved Register
// =============================================================================

/// A validated register session: the resolved price, the live session till,
/// and the output mode.
#[derive(Debug, Clone)]
pub struct Register {
    pub price: Money,
    pub till: Till,
    pub output: OutputMode,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve_to_standard_drawer() {
        let register = TerminalConfig::default().resolve().unwrap();

        assert_eq!(register.price, Money::from_cents(187));
        assert_eq!(register.output, OutputMode::Text);
        assert_eq!(register.till.total(), Money::from_cents(33_541));
        assert_eq!(
            register.till.available(Denomination::Quarter),
            Money::from_cents(425)
        );
    }

    #[test]
    fn test_parse_toml() {
        let config: TerminalConfig = toml::from_str(
            r#"
            price = "19.5"
            output = "json"

            [[till]]
            denomination = "PENNY"
            amount = "0.50"
            "#,
        )
        .unwrap();

        let register = config.resolve().unwrap();
        assert_eq!(register.price, Money::from_cents(1_950));
        assert_eq!(register.output, OutputMode::Json);
        assert_eq!(register.till.total(), Money::from_cents(50));
        assert_eq!(
            register.till.available(Denomination::Twenty),
            Money::zero()
        );
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TerminalConfig = toml::from_str(r#"price = "5.00""#).unwrap();
        let register = config.resolve().unwrap();

        assert_eq!(register.price, Money::from_cents(500));
        // till falls back to the standard drawer
        assert_eq!(register.till.total(), Money::from_cents(33_541));
    }

    #[test]
    fn test_unknown_denomination_rejected() {
        let config: TerminalConfig = toml::from_str(
            r#"
            [[till]]
            denomination = "DOUBLOON"
            amount = "4.25"
            "#,
        )
        .unwrap();

        let err = config.resolve().unwrap_err();
        assert!(err.to_string().contains("DOUBLOON"));
    }

    #[test]
    fn test_invalid_price_rejected() {
        let mut config = TerminalConfig::default();
        config.price = "free".to_string();
        assert!(config.resolve().is_err());

        config.price = "0".to_string();
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_fractional_slot_amount_rejected() {
        let config: TerminalConfig = toml::from_str(
            r#"
            [[till]]
            denomination = "NICKEL"
            amount = "0.03"
            "#,
        )
        .unwrap();

        let err = config.resolve().unwrap_err();
        assert!(matches!(
            err,
            TerminalError::Core(CoreError::FractionalTillAmount { .. })
        ));
    }
}
