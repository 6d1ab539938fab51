//! # pix-core: Pix BR Code Generation
//!
//! Builds the static Pix payload that guests scan (or paste) to pay for a
//! registry item. Pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │           Storefront (catalog, cart, Pix modal)                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ MerchantProfile + amount               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pix-core (THIS CRATE) ★                         │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    tlv    │  │ sanitize  │  │    crc    │  │  brcode   │  │   │
//! │  │   │ ID+LEN+V  │  │ NFD→ASCII │  │ CCITT-F   │  │ assemble  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │validation │  │   txid    │  │  charge   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO QR RENDERING                         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ PixCharge { txid, amount, payload }    │
//! │                 ┌──────────────┴──────────────┐                         │
//! │                 ▼                             ▼                         │
//! │         QR code renderer            Confirmation backend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`tlv`] - Tag-length-value encoding and scanning
//! - [`sanitize`] - Free text to uppercase printable ASCII
//! - [`crc`] - CRC-16/CCITT-FALSE checksum
//! - [`brcode`] - Payload assembly and decoding
//! - [`validation`] - First-fail configuration checks
//! - [`txid`] - Timestamp-based transaction ids
//! - [`charge`] - The validate → generate-id → assemble flow
//! - [`money`] - Integer centavos
//! - [`types`] - Configuration and result types
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use pix_core::{build_brcode, validate_pix_config, Money, MerchantProfile};
//!
//! let merchant = MerchantProfile::new("user@example.com", "Maria Silva", "São Paulo");
//! let config = merchant.payment_config(Money::from_reais(25.90), None, "STOREABC123");
//!
//! validate_pix_config(&config).unwrap();
//! let payload = build_brcode(&config);
//!
//! assert!(payload.contains("6009SAO PAULO"));
//! assert!(pix_core::crc::verify(&payload));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod brcode;
pub mod charge;
pub mod crc;
pub mod error;
pub mod money;
pub mod sanitize;
pub mod tlv;
pub mod txid;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use brcode::{build_brcode, decode, DecodedBrCode};
pub use error::{CoreError, CoreResult, PixConfigError};
pub use money::Money;
pub use txid::TxidGenerator;
pub use types::*;
pub use validation::validate_pix_config;
