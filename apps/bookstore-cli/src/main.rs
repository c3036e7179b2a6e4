//! # Bookstore Entry Point
//!
//! Starts the terminal storefront. All setup lives in `lib.rs` so the
//! session loop can be tested without a terminal.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging to stderr)
//! 2. Load configuration from `BOOKSTORE_*` environment variables
//! 3. Build the Shell over the standard catalog
//! 4. Read commands from stdin and render to stdout

use std::process::ExitCode;

fn main() -> ExitCode {
    match bookstore_cli_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bookstore: {}", e);
            ExitCode::FAILURE
        }
    }
}
