//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `NP_CART_STORE_PATH` - JSON file backing the key-value store (default: .np-cart.json)
//! - `NP_CART_MAX_QUANTITY` - Highest quantity views offer per item (default: 99)
//! - `NP_CART_CURRENCY` - Display currency: USD, EUR, GBP, CAD or AUD (default: USD)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name (e.g., production, staging)

use std::path::PathBuf;

use naked_pineapple_core::CurrencyCode;
use thiserror::Error;

const DEFAULT_STORE_PATH: &str = ".np-cart.json";
const DEFAULT_MAX_QUANTITY: u32 = 99;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Path of the JSON key-value store file
    pub store_path: PathBuf,
    /// Settings consumed by the cart store itself
    pub cart: CartSettings,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
}

/// Settings the [`crate::CartStore`] reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSettings {
    /// Highest quantity views let a shopper pick. Not enforced by the store.
    pub max_display_quantity: u32,
    /// Currency used when formatting prices.
    pub currency: CurrencyCode,
}

impl Default for CartSettings {
    fn default() -> Self {
        Self {
            max_display_quantity: DEFAULT_MAX_QUANTITY,
            currency: CurrencyCode::default(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let store_path = PathBuf::from(
            lookup("NP_CART_STORE_PATH").unwrap_or_else(|| DEFAULT_STORE_PATH.to_string()),
        );

        let max_display_quantity = match lookup("NP_CART_MAX_QUANTITY") {
            Some(raw) => parse_max_quantity(&raw)?,
            None => DEFAULT_MAX_QUANTITY,
        };

        let currency = match lookup("NP_CART_CURRENCY") {
            Some(raw) => raw
                .parse::<CurrencyCode>()
                .map_err(|e| ConfigError::InvalidEnvVar("NP_CART_CURRENCY".to_string(), e))?,
            None => CurrencyCode::default(),
        };

        Ok(Self {
            store_path,
            cart: CartSettings {
                max_display_quantity,
                currency,
            },
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: lookup("SENTRY_ENVIRONMENT"),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_max_quantity(raw: &str) -> Result<u32, ConfigError> {
    let invalid =
        |msg: String| ConfigError::InvalidEnvVar("NP_CART_MAX_QUANTITY".to_string(), msg);
    let value = raw
        .trim()
        .parse::<u32>()
        .map_err(|e| invalid(e.to_string()))?;
    if value == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(value)
}
