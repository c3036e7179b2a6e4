//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOOKSTORE_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization. The tax rate is not
//! configurable: the storefront charges a flat 10%.

use bookstore_core::Money;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Line under the store name
    pub tagline: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "BookStore"
    /// - Tagline: "Order Books Online"
    /// - Currency: `$`
    fn default() -> Self {
        ConfigState {
            store_name: "BookStore".to_string(),
            tagline: "Order Books Online".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOOKSTORE_STORE_NAME`: Override store name
    /// - `BOOKSTORE_TAGLINE`: Override tagline
    /// - `BOOKSTORE_CURRENCY_SYMBOL`: Override currency symbol
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values are
    /// ignored and the default is kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(store_name) = non_blank("BOOKSTORE_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(tagline) = non_blank("BOOKSTORE_TAGLINE") {
            config.tagline = tagline;
        }

        if let Some(symbol) = non_blank("BOOKSTORE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol.trim().to_string();
        }

        config
    }

    /// Formats money with the configured symbol and exactly two decimals.
    ///
    /// ## Example
    /// ```rust
    /// use bookstore_cli_lib::state::ConfigState;
    /// use bookstore_core::Money;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(3958)), "$39.58");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!(
            "{}{}{}.{:02}",
            if amount.is_negative() { "-" } else { "" },
            self.currency_symbol,
            amount.dollars().abs(),
            amount.cents_part()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1299)), "$12.99");
        assert_eq!(config.format_currency(Money::from_cents(100)), "$1.00");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::zero()), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let env: HashMap<&str, &str> = [
            ("BOOKSTORE_STORE_NAME", "Corner Books"),
            ("BOOKSTORE_CURRENCY_SYMBOL", " € "),
            ("BOOKSTORE_TAGLINE", "   "),
        ]
        .into_iter()
        .collect();

        let config = ConfigState::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.store_name, "Corner Books");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.tagline, "Order Books Online");
        assert_eq!(config.format_currency(Money::from_cents(1299)), "€12.99");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config, ConfigState::default());
    }
}
