//! # Bookstore Terminal Library
//!
//! Core library for the terminal storefront. `run` wires logging,
//! configuration and the Shell to stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! bookstore_cli_lib/
//! ├── lib.rs          ◄─── You are here (setup & input loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── shell.rs    ◄─── Cart snapshot, view toggle, observers
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Input parsing and action dispatch
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── view.rs     ◄─── Toggle, JSON snapshot, help
//! ├── views/          ◄─── Header, catalog, book card, cart, cart line
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Event Loop
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  render ──► prompt ──► read line ──► parse ──► execute ──┐              │
//! │    ▲                                                     │              │
//! │    └──── cart changed (observer) / view changed / notice ┘              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! One line is one event, handled to completion before the next is read.

pub mod commands;
pub mod error;
pub mod state;
pub mod views;

use std::cell::Cell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use bookstore_core::Catalog;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::Outcome;
use error::ApiError;
use state::{ConfigState, Shell};

/// Runs the storefront on the process terminal.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr)
/// 2. Load configuration from the environment
/// 3. Build the Shell over the standard catalog
/// 4. Read commands from stdin until `quit` or end of input
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store = %config.store_name, "Starting bookstore");

    let mut shell = Shell::new(Catalog::standard());
    info!(books = shell.catalog().len(), "Catalog loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut shell, &config, stdin.lock(), stdout.lock())
}

/// Drives one interactive session over any reader and writer.
pub fn run_session<R, W>(
    shell: &mut Shell,
    config: &ConfigState,
    mut input: R,
    mut out: W,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    let cart_changed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&cart_changed);
    shell.subscribe(move |_| flag.set(true));

    let mut screen = views::render(shell, config);
    write!(out, "{}", screen)?;
    prompt(&mut out)?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Bytes that are not UTF-8 become U+FFFD and fail parsing like any
        // other bad input.
        let decoded = String::from_utf8_lossy(&buf);
        let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');
        let view_before = shell.view();

        let outcome = match commands::parse(line, &screen) {
            Ok(Some(command)) => commands::execute(shell, command),
            Ok(None) => {
                prompt(&mut out)?;
                continue;
            }
            Err(e) => Err(e),
        };

        let notice = match outcome {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Print(text)) => {
                writeln!(out, "{}", text)?;
                prompt(&mut out)?;
                continue;
            }
            Ok(Outcome::Render) => None,
            Ok(Outcome::Notice(message)) => Some(message),
            Err(e) => {
                warn!(code = ?e.code, "{}", e.message);
                Some(e.message)
            }
        };

        if cart_changed.replace(false) || shell.view() != view_before {
            screen = views::render(shell, config);
            writeln!(out)?;
            write!(out, "{}", screen)?;
        }
        if let Some(message) = notice {
            writeln!(out, "» {}", message)?;
        }
        prompt(&mut out)?;
    }

    out.flush()?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - Default: warnings, plus debug for the bookstore crates
///
/// Logs go to stderr so they never mix with the rendered screen.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,bookstore_cli_lib=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
