//! CLI configuration module.
//!
//! The merchant identity is loaded from environment variables, with
//! command-line flags taking precedence.
//!
//! | Variable            | Required | Default |
//! |---------------------|----------|---------|
//! | `PIX_KEY`           | yes      |         |
//! | `PIX_MERCHANT_NAME` | yes      |         |
//! | `PIX_MERCHANT_CITY` | yes      |         |
//! | `PIX_TXID_PREFIX`   | no       | `STORE` |

use std::env;

use pix_core::txid::DEFAULT_TXID_PREFIX;
use pix_core::{MerchantProfile, TxidGenerator};

pub const ENV_PIX_KEY: &str = "PIX_KEY";
pub const ENV_MERCHANT_NAME: &str = "PIX_MERCHANT_NAME";
pub const ENV_MERCHANT_CITY: &str = "PIX_MERCHANT_CITY";
pub const ENV_TXID_PREFIX: &str = "PIX_TXID_PREFIX";

/// Values given on the command line, overriding the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub pix_key: Option<String>,
    pub merchant_name: Option<String>,
    pub merchant_city: Option<String>,
    pub txid_prefix: Option<String>,
}

impl Overrides {
    fn value_for(&self, key: &str) -> Option<String> {
        match key {
            ENV_PIX_KEY => self.pix_key.clone(),
            ENV_MERCHANT_NAME => self.merchant_name.clone(),
            ENV_MERCHANT_CITY => self.merchant_city.clone(),
            ENV_TXID_PREFIX => self.txid_prefix.clone(),
            _ => None,
        }
    }

    /// Looks a key up in the overrides, then in the process environment.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.value_for(key).or_else(|| env::var(key).ok())
    }
}

/// Everything `generate` needs besides the amount.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub merchant: MerchantProfile,
    pub txids: TxidGenerator,
}

impl AppConfig {
    /// Load configuration from flags and environment variables.
    pub fn load(overrides: &Overrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| overrides.lookup(key))
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingRequired(key.to_string()))
        };

        let merchant = MerchantProfile::new(
            required(ENV_PIX_KEY)?,
            required(ENV_MERCHANT_NAME)?,
            required(ENV_MERCHANT_CITY)?,
        );

        Ok(AppConfig {
            merchant,
            txids: txid_generator_from_lookup(&lookup)?,
        })
    }
}

/// Builds the txid generator from `PIX_TXID_PREFIX`, defaulting to `STORE`.
pub fn txid_generator_from_lookup<F>(lookup: F) -> Result<TxidGenerator, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let prefix = lookup(ENV_TXID_PREFIX)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_TXID_PREFIX.to_string());

    TxidGenerator::new(prefix).map_err(|e| ConfigError::InvalidValue {
        key: ENV_TXID_PREFIX.to_string(),
        reason: e.to_string(),
    })
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}
