//! # Domain Types
//!
//! Data that flows into and out of the BR Code encoder.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ MerchantProfile │   │PixPaymentConfig │   │   PixCharge     │       │
//! │  │  ─────────────  │──►│  ─────────────  │──►│  ─────────────  │       │
//! │  │  pix_key        │   │  pix_key        │   │  txid           │       │
//! │  │  merchant_name  │   │  amount         │   │  amount         │       │
//! │  │  merchant_city  │   │  merchant_name  │   │  payload        │       │
//! │  └─────────────────┘   │  merchant_city  │   └─────────────────┘       │
//! │   injected config      │  description    │    to QR renderer and       │
//! │                        │  txid           │    confirmation backend     │
//! │                        └─────────────────┘                              │
//! │                         built per attempt,                              │
//! │                         used once                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Merchant Profile
// =============================================================================

/// Who receives the payment.
///
/// The storefront used to hardcode these; they are now loaded by the caller
/// and passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MerchantProfile {
    /// Registered Pix key (email, phone, EVP or tax id). Passed through
    /// verbatim.
    pub pix_key: String,

    /// Display name of the recipient.
    pub merchant_name: String,

    /// City of the recipient.
    pub merchant_city: String,
}

impl MerchantProfile {
    pub fn new(
        pix_key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
        }
    }

    /// Builds the configuration for one payment attempt.
    ///
    /// ## Example
    /// ```rust
    /// use pix_core::{MerchantProfile, Money};
    ///
    /// let merchant = MerchantProfile::new("user@example.com", "Maria Silva", "Fortaleza");
    /// let config = merchant.payment_config(Money::from_centavos(2590), None, "STOREABC123");
    /// assert_eq!(config.txid, "STOREABC123");
    /// ```
    pub fn payment_config(
        &self,
        amount: Money,
        description: Option<&str>,
        txid: impl Into<String>,
    ) -> PixPaymentConfig {
        PixPaymentConfig {
            pix_key: self.pix_key.clone(),
            amount,
            merchant_name: self.merchant_name.clone(),
            merchant_city: self.merchant_city.clone(),
            description: description.map(str::to_string),
            txid: txid.into(),
        }
    }
}

// =============================================================================
// Payment Configuration
// =============================================================================

/// Everything the encoder needs for one static BR Code.
///
/// On the wire this is the storefront's record:
/// `{ pixKey, amount, name, city, description?, txid }`, with `amount` in
/// reais (`25.9` or `"25.90"`).
///
/// Missing fields deserialize to empty values so a partial JSON object can
/// still be handed to the validator, which names the first problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PixPaymentConfig {
    pub pix_key: String,

    /// Must be positive.
    #[serde(with = "crate::money::reais")]
    #[ts(type = "number")]
    pub amount: Money,

    /// Free text; sanitized and cut to 25 characters when encoded.
    #[serde(rename = "name")]
    pub merchant_name: String,

    /// Free text; sanitized and cut to 15 characters when encoded.
    #[serde(rename = "city")]
    pub merchant_city: String,

    /// Optional note; sanitized and cut to 40 characters when encoded.
    pub description: Option<String>,

    /// Correlates this QR code with a later confirmation.
    pub txid: String,
}

// =============================================================================
// Charge
// =============================================================================

/// A generated payment, ready to render as a QR code or copy-and-paste text.
///
/// `txid` and `amount` are what the confirmation backend needs to match a
/// guest's "I have paid" click against a ledger entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PixCharge {
    pub txid: String,
    pub amount: Money,
    pub payload: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
