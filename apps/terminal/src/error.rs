//! # Terminal Error Type
//!
//! Unified error type for the register terminal.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                   Error Flow in the Terminal                            │
//! │                                                                         │
//! │  Config file missing ─────────► warn + compiled defaults (not fatal)   │
//! │  Config file unreadable ──────► TerminalError::ConfigRead   (fatal)    │
//! │  Config file malformed ───────► TerminalError::ConfigParse  (fatal)    │
//! │  Config values invalid ───────► TerminalError::Core         (fatal)    │
//! │                                                                         │
//! │  Cash input unparseable ──────► "Please enter a valid amount",         │
//! │                                 session continues (never an error)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use drawer_core::CoreError;
use thiserror::Error;

/// Errors that end a terminal session.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for a register.
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON output mode failed to encode an outcome.
    #[error("Failed to encode outcome: {0}")]
    Encode(#[from] serde_json::Error),

    /// Reading stdin failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Domain error from drawer-core (bad config values, broken till).
    #[error(transparent)]
    Core(#[from] CoreError),
}
