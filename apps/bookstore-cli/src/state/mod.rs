//! # State Module
//!
//! Application state for the terminal storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │            Shell             │   │         ConfigState          │   │
//! │  │                              │   │                              │   │
//! │  │  catalog  (read-only)        │   │  store_name                  │   │
//! │  │  cart     (snapshot)         │   │  tagline                     │   │
//! │  │  view     (Catalog | Cart)   │   │  currency_symbol             │   │
//! │  │  observers                   │   │                              │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  • Shell: mutated only through its cart entry points and the toggle    │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod shell;

pub use config::ConfigState;
pub use shell::{Shell, ShellSnapshot};
