//! # Charge Preparation
//!
//! One payment attempt, end to end:
//!
//! ```text
//! MerchantProfile + amount + description
//!      │
//!      ▼
//! TxidGenerator::generate_at(now)
//!      │
//!      ▼
//! validate_pix_config ──► Err(PixConfigError) → show message, stop
//!      │
//!      ▼
//! build_brcode ──► PixCharge { txid, amount, payload }
//! ```

use chrono::{DateTime, Utc};

use crate::brcode::build_brcode;
use crate::error::PixConfigError;
use crate::money::Money;
use crate::tlv::truncate_chars;
use crate::txid::{TxidGenerator, MAX_TXID_LEN};
use crate::types::{MerchantProfile, PixCharge, PixPaymentConfig};
use crate::validation::validate_pix_config;

impl PixCharge {
    /// Generates a txid for `now`, validates and encodes.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use pix_core::{MerchantProfile, Money, PixCharge, TxidGenerator};
    ///
    /// let merchant = MerchantProfile::new("user@example.com", "Maria Silva", "Fortaleza");
    /// let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    ///
    /// let charge = PixCharge::prepare(
    ///     &merchant,
    ///     &TxidGenerator::default(),
    ///     Money::from_centavos(2590),
    ///     Some("Chá de bebê"),
    ///     now,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(charge.txid, "STOREMJUOHS00");
    /// assert!(charge.payload.contains("62170513STOREMJUOHS00"));
    /// ```
    pub fn prepare(
        merchant: &MerchantProfile,
        txids: &TxidGenerator,
        amount: Money,
        description: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Self, PixConfigError> {
        let config = merchant.payment_config(amount, description, txids.generate_at(now));
        Self::from_config(config)
    }

    /// Validates and encodes an already assembled configuration.
    ///
    /// The returned txid is the one actually embedded in the payload, which
    /// is at most 25 characters.
    pub fn from_config(config: PixPaymentConfig) -> Result<Self, PixConfigError> {
        validate_pix_config(&config)?;
        let payload = build_brcode(&config);
        Ok(PixCharge {
            txid: truncate_chars(&config.txid, MAX_TXID_LEN).to_string(),
            amount: config.amount,
            payload,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brcode::decode;
    use chrono::TimeZone;

    fn merchant() -> MerchantProfile {
        MerchantProfile::new("user@example.com", "Maria Silva", "Fortaleza")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_prepare_embeds_generated_txid() {
        let charge = PixCharge::prepare(
            &merchant(),
            &TxidGenerator::default(),
            Money::from_centavos(2590),
            None,
            now(),
        )
        .unwrap();

        let decoded = decode(&charge.payload).unwrap();
        assert_eq!(decoded.txid.as_deref(), Some(charge.txid.as_str()));
        assert_eq!(decoded.amount, Some(charge.amount));
    }

    #[test]
    fn test_prepare_stops_on_invalid_amount() {
        let result = PixCharge::prepare(
            &merchant(),
            &TxidGenerator::default(),
            Money::zero(),
            None,
            now(),
        );
        assert_eq!(result, Err(PixConfigError::InvalidAmount));
    }

    #[test]
    fn test_prepare_stops_on_blank_merchant() {
        let blank = MerchantProfile::new("user@example.com", "  ", "Fortaleza");
        let result = PixCharge::prepare(
            &blank,
            &TxidGenerator::default(),
            Money::from_centavos(100),
            None,
            now(),
        );
        assert_eq!(result, Err(PixConfigError::MissingMerchantName));
    }

    #[test]
    fn test_from_config_with_explicit_txid() {
        let config = merchant().payment_config(Money::from_centavos(2590), None, "STOREABC123");
        let charge = PixCharge::from_config(config).unwrap();
        assert!(charge.payload.ends_with("6304E06F"));
    }

    #[test]
    fn test_oversized_key_and_txid_still_encode() {
        let long_key = MerchantProfile::new("k".repeat(90), "Maria Silva", "Fortaleza");
        let config = long_key.payment_config(Money::from_centavos(100), None, "T".repeat(100));
        assert_eq!(validate_pix_config(&config), Ok(()));

        let charge = PixCharge::from_config(config).unwrap();
        let decoded = decode(&charge.payload).unwrap();
        assert_eq!(decoded.pix_key.len(), 77);
        assert_eq!(decoded.txid.as_deref(), Some("T".repeat(25).as_str()));
    }

    #[test]
    fn test_from_config_reports_embedded_txid() {
        let config = merchant().payment_config(
            Money::from_centavos(2590),
            None,
            "PEDIDO2026REGISTRYGIFT0001XYZ",
        );
        let charge = PixCharge::from_config(config).unwrap();

        assert_eq!(charge.txid, "PEDIDO2026REGISTRYGIFT000");
        let decoded = decode(&charge.payload).unwrap();
        assert_eq!(decoded.txid.as_deref(), Some(charge.txid.as_str()));
    }
}
