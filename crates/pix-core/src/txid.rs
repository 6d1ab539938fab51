//! # Transaction IDs
//!
//! Short ids that tie a displayed QR code to a later "I have paid" click.
//!
//! ## Format
//! ```text
//!   STORE  +  MJUOHS00           → "STOREMJUOHS00"
//!   prefix    epoch millis,
//!             base-36, uppercase
//! ```
//!
//! Ids from different milliseconds differ. Two calls within the same
//! millisecond collide; these are correlation handles, not secrets.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};

/// Prefix used by the storefront.
pub const DEFAULT_TXID_PREFIX: &str = "STORE";

/// Longest txid the Pix additional-data field accepts.
pub const MAX_TXID_LEN: usize = 25;

/// Longest prefix that still leaves room for nine base-36 digits of clock
/// (enough until the year 5188).
pub const MAX_TXID_PREFIX_LEN: usize = MAX_TXID_LEN - 9;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

/// Produces timestamp-based transaction ids with a fixed prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxidGenerator {
    prefix: String,
}

impl TxidGenerator {
    /// Creates a generator with a custom prefix.
    ///
    /// ## Rules
    /// - ASCII letters and digits only (Pix txids are alphanumeric)
    /// - 1 to 16 characters
    pub fn new(prefix: impl Into<String>) -> CoreResult<Self> {
        let prefix = prefix.into();
        let invalid = |reason: &str| CoreError::InvalidTxidPrefix {
            prefix: prefix.clone(),
            reason: reason.to_string(),
        };

        if prefix.is_empty() {
            return Err(invalid("prefix is empty"));
        }
        if !prefix.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(invalid("prefix must contain only ASCII letters and digits"));
        }
        if prefix.len() > MAX_TXID_PREFIX_LEN {
            return Err(invalid("prefix is longer than 16 characters"));
        }

        Ok(Self { prefix })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Builds the id for a given instant. Instants before 1970 clamp to 0.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use pix_core::txid::TxidGenerator;
    ///
    /// let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(TxidGenerator::default().generate_at(at), "STOREMJUOHS00");
    /// ```
    pub fn generate_at(&self, at: DateTime<Utc>) -> String {
        let millis = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        format!("{}{}", self.prefix, to_base36(millis))
            .chars()
            .take(MAX_TXID_LEN)
            .collect()
    }

    /// Builds the id for the current wall-clock time.
    pub fn generate_now(&self) -> String {
        self.generate_at(Utc::now())
    }
}

impl Default for TxidGenerator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_TXID_PREFIX.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
