//! # Drawer Terminal Entry Point
//!
//! A line-oriented register terminal over drawer-core.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Drawer Terminal                                  │
//! │                                                                         │
//! │  startup ──► load drawer.toml ──► apply DRAWER_* env ──► resolve       │
//! │                                                          │              │
//! │                                                          ▼              │
//! │                                            render price + drawer        │
//! │                                                          │              │
//! │  stdin line ─────────────────────────────────────────────┤              │
//! │      │                                                   │              │
//! │      ├── "quit" / "exit" / EOF ──► session ends          │              │
//! │      │                                                   │              │
//! │      ├── unparseable ──► "Please enter a valid amount"   │              │
//! │      │                                                   │              │
//! │      └── cash amount ──► calculate_change()              │              │
//! │                               │                          │              │
//! │                               ▼                          │              │
//! │                        render outcome                    │              │
//! │                               │                          │              │
//! │              OPEN / CLOSED:  apply breakdown to the      │              │
//! │              session till, re-render the drawer ─────────┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load configuration (file path from the first CLI argument)
//! 3. Resolve config into price + session till
//! 4. Render the opening drawer display
//! 5. Process tenders until EOF

mod config;
mod error;
mod render;

use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use drawer_core::validation::parse_cash_amount;
use drawer_core::calculate_change;

use crate::config::{Register, TerminalConfig};
use crate::error::TerminalError;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "terminal session failed");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=drawer=trace` - Show trace for drawer crates only
/// - Default: WARN level, so receipt output stays readable
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), TerminalError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "drawer.toml".to_string());

    let mut config = TerminalConfig::load(Path::new(&path))?;
    config.apply_env();
    let mut register = config.resolve()?;

    info!(
        price = register.price.cents(),
        till_total = register.till.total().cents(),
        "register ready"
    );
    println!("{}", render::drawer_display(register.price, &register.till));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        handle_tender(&mut register, input)?;
    }

    info!("session ended");
    Ok(())
}

/// Processes one cash-tender line against the session till.
fn handle_tender(register: &mut Register, input: &str) -> Result<(), TerminalError> {
    let tendered = match parse_cash_amount(input) {
        Ok(tendered) => tendered,
        Err(err) => {
            warn!(input, %err, "rejected cash input");
            println!("{}", render::INVALID_AMOUNT_MSG);
            return Ok(());
        }
    };

    let outcome = calculate_change(register.price, tendered, &register.till)?;
    info!(
        status = outcome.status(),
        tendered = tendered.cents(),
        "tender processed"
    );

    println!("{}", render::render_outcome(&outcome, register.output)?);

    // Dispensing outcomes mutate the session till; this is the explicit
    // caller-side step, the calculator itself never touches the drawer.
    if let Some(breakdown) = outcome.breakdown() {
        register.till.apply_breakdown(breakdown)?;
        if register.till.is_empty() {
            info!("drawer empty, register closed");
        }
        println!();
        println!("{}", render::drawer_display(register.price, &register.till));
    }

    Ok(())
}
