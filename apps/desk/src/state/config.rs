//! # Configuration State
//!
//! Stores the configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`LOUNGE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use lounge_core::validation::validate_tariff;
use lounge_core::{CoreError, HourlyRate, Money, Tariff, ValidationError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

pub const ENV_STORE_NAME: &str = "LOUNGE_STORE_NAME";
pub const ENV_CURRENCY_CODE: &str = "LOUNGE_CURRENCY_CODE";
pub const ENV_CURRENCY_SYMBOL: &str = "LOUNGE_CURRENCY_SYMBOL";
pub const ENV_RATE_STANDARD: &str = "LOUNGE_RATE_STANDARD";
pub const ENV_RATE_PREMIUM: &str = "LOUNGE_RATE_PREMIUM";
pub const ENV_RATE_ADD_ON: &str = "LOUNGE_RATE_ADD_ON";

/// A configuration override that could not be applied.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    InvalidAmount {
        var: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    InvalidTariff(#[from] CoreError),
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (shown in the header)
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol, printed after the amount
    pub currency_symbol: String,

    /// Hourly prices for consoles and the extra controller
    pub tariff: Tariff,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Store: "Atlant"
    /// - Currency: AZN (₼)
    /// - Tariff: 1.00 / 1.50 per hour, extra controller 0.50 per hour
    fn default() -> Self {
        ConfigState {
            store_name: "Atlant".to_string(),
            currency_code: "AZN".to_string(),
            currency_symbol: "₼".to_string(),
            tariff: Tariff::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LOUNGE_STORE_NAME`: Override store name
    /// - `LOUNGE_CURRENCY_CODE`: Override currency code (e.g., "USD")
    /// - `LOUNGE_CURRENCY_SYMBOL`: Override currency symbol
    /// - `LOUNGE_RATE_STANDARD`, `LOUNGE_RATE_PREMIUM`, `LOUNGE_RATE_ADD_ON`:
    ///   hourly rates as decimals (e.g., "1.5")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    ///
    /// An override that does not parse, or a tariff that breaks the pricing
    /// rules, is logged and the default kept.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            config.store_name = store_name;
        }

        if let Some(code) = lookup(ENV_CURRENCY_CODE) {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        match tariff_overrides(&lookup, config.tariff) {
            Ok(tariff) => config.tariff = tariff,
            Err(e) => warn!(error = %e, "Ignoring tariff overrides, keeping defaults"),
        }

        config
    }

    /// Formats an amount with two decimals and the currency symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1175)), "11.75 ₼");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", amount, self.currency_symbol)
    }
}

fn tariff_overrides<F>(lookup: &F, defaults: Tariff) -> Result<Tariff, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let rate = |var: &'static str, default: HourlyRate| -> Result<HourlyRate, ConfigError> {
        match lookup(var) {
            Some(raw) => Money::parse_decimal(&raw)
                .map(HourlyRate::new)
                .map_err(|source| ConfigError::InvalidAmount { var, source }),
            None => Ok(default),
        }
    };

    let tariff = Tariff {
        standard: rate(ENV_RATE_STANDARD, defaults.standard)?,
        premium: rate(ENV_RATE_PREMIUM, defaults.premium)?,
        add_on: rate(ENV_RATE_ADD_ON, defaults.add_on)?,
    };
    validate_tariff(&tariff)?;

    Ok(tariff)
}
