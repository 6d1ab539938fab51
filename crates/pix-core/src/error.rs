//! # Error Types
//!
//! Domain-specific error types for pix-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pix-core errors (this file)                                           │
//! │  ├── PixConfigError  - Configuration problems caught before encoding   │
//! │  └── CoreError       - Amount parsing, txid prefixes, payload decoding │
//! │                                                                         │
//! │  pix-cli errors (separate crate)                                       │
//! │  └── ConfigError     - Missing/invalid environment variables           │
//! │                                                                         │
//! │  Both surface in the CLI as an exit code + stderr message              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. `PixConfigError` messages are shown to the guest as-is (pt-BR)

use thiserror::Error;

// =============================================================================
// Configuration Error
// =============================================================================

/// A problem with a payment configuration, reported one at a time.
///
/// ## When This Occurs
/// The validator checks fields in a fixed order and stops at the first
/// failure:
/// ```text
/// pix_key ──► amount ──► merchant_name ──► merchant_city ──► txid
/// ```
/// The caller shows the message and does not attempt encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PixConfigError {
    /// Pix key is empty or whitespace.
    #[error("Chave Pix não configurada")]
    MissingPixKey,

    /// Amount is zero or negative.
    #[error("Valor inválido para pagamento")]
    InvalidAmount,

    /// Merchant name is empty or whitespace.
    #[error("Nome do comerciante não configurado")]
    MissingMerchantName,

    /// Merchant city is empty or whitespace.
    #[error("Cidade não configurada")]
    MissingMerchantCity,

    /// Transaction id is empty or whitespace.
    #[error("ID da transação não gerado")]
    MissingTxid,
}

// =============================================================================
// Core Error
// =============================================================================

/// Everything else that can go wrong in pix-core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Amount text could not be read as a non-negative decimal.
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Txid prefix is not usable.
    #[error("Invalid txid prefix '{prefix}': {reason}")]
    InvalidTxidPrefix { prefix: String, reason: String },

    /// Payload does not follow the tag-length-value layout.
    ///
    /// `position` is the character offset where scanning stopped.
    #[error("Malformed payload at position {position}: {reason}")]
    MalformedPayload { position: usize, reason: String },

    /// Trailing checksum does not match the payload.
    #[error("Checksum mismatch: payload declares {declared}, computed {computed}")]
    ChecksumMismatch { declared: String, computed: String },

    /// A field required by the BR Code layout is absent.
    #[error("Missing field {tag} in payload")]
    MissingField { tag: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            PixConfigError::MissingPixKey.to_string(),
            "Chave Pix não configurada"
        );
        assert_eq!(
            PixConfigError::InvalidAmount.to_string(),
            "Valor inválido para pagamento"
        );
        assert_eq!(
            PixConfigError::MissingTxid.to_string(),
            "ID da transação não gerado"
        );
    }

    #[test]
    fn test_core_error_messages() {
        let err = CoreError::ChecksumMismatch {
            declared: "ABCD".to_string(),
            computed: "1234".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Checksum mismatch: payload declares ABCD, computed 1234"
        );

        let err = CoreError::MalformedPayload {
            position: 12,
            reason: "length is not numeric".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed payload at position 12: length is not numeric"
        );
    }
}
