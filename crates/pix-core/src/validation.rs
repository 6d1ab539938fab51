//! # Validation Module
//!
//! Catches configuration mistakes before the encoder runs.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  validate_pix_config(config)                                            │
//! │       │                                                                 │
//! │       ├── pix_key blank?        → "Chave Pix não configurada"           │
//! │       ├── amount <= 0?          → "Valor inválido para pagamento"       │
//! │       ├── merchant_name blank?  → "Nome do comerciante não configurado" │
//! │       ├── merchant_city blank?  → "Cidade não configurada"              │
//! │       ├── txid blank?           → "ID da transação não gerado"          │
//! │       │                                                                 │
//! │       └── OK → build_brcode(config)                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! First failure wins; problems are never aggregated. Length overflow and
//! non-ASCII text are not errors here: the encoder truncates and sanitizes.

use crate::error::PixConfigError;
use crate::types::PixPaymentConfig;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, PixConfigError>;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Checks a configuration and reports the first problem found.
///
/// ## Example
/// ```rust
/// use pix_core::{validate_pix_config, Money, PixConfigError, PixPaymentConfig};
///
/// let config = PixPaymentConfig {
///     pix_key: "user@example.com".to_string(),
///     amount: Money::from_centavos(0),
///     ..Default::default()
/// };
/// assert_eq!(validate_pix_config(&config), Err(PixConfigError::InvalidAmount));
/// ```
pub fn validate_pix_config(config: &PixPaymentConfig) -> ValidationResult<()> {
    if is_blank(&config.pix_key) {
        return Err(PixConfigError::MissingPixKey);
    }

    if !config.amount.is_positive() {
        return Err(PixConfigError::InvalidAmount);
    }

    if is_blank(&config.merchant_name) {
        return Err(PixConfigError::MissingMerchantName);
    }

    if is_blank(&config.merchant_city) {
        return Err(PixConfigError::MissingMerchantCity);
    }

    if is_blank(&config.txid) {
        return Err(PixConfigError::MissingTxid);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn valid_config() -> PixPaymentConfig {
        PixPaymentConfig {
            pix_key: "user@example.com".to_string(),
            amount: Money::from_centavos(2590),
            merchant_name: "Maria Silva".to_string(),
            merchant_city: "Fortaleza".to_string(),
            description: None,
            txid: "STOREABC123".to_string(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert_eq!(validate_pix_config(&valid_config()), Ok(()));
    }

    #[test]
    fn test_each_field_reports_its_error() {
        let mut config = valid_config();
        config.pix_key = "   ".to_string();
        assert_eq!(validate_pix_config(&config), Err(PixConfigError::MissingPixKey));

        let mut config = valid_config();
        config.amount = Money::from_centavos(-100);
        assert_eq!(validate_pix_config(&config), Err(PixConfigError::InvalidAmount));

        let mut config = valid_config();
        config.merchant_name = String::new();
        assert_eq!(
            validate_pix_config(&config),
            Err(PixConfigError::MissingMerchantName)
        );

        let mut config = valid_config();
        config.merchant_city = "\t".to_string();
        assert_eq!(
            validate_pix_config(&config),
            Err(PixConfigError::MissingMerchantCity)
        );

        let mut config = valid_config();
        config.txid = " ".to_string();
        assert_eq!(validate_pix_config(&config), Err(PixConfigError::MissingTxid));
    }

    #[test]
    fn test_first_failure_wins() {
        let mut config = valid_config();
        config.pix_key = String::new();
        config.amount = Money::zero();
        assert_eq!(validate_pix_config(&config), Err(PixConfigError::MissingPixKey));

        // Empty default config trips the very first check
        assert_eq!(
            validate_pix_config(&PixPaymentConfig::default()),
            Err(PixConfigError::MissingPixKey)
        );
    }

    #[test]
    fn test_oversized_and_non_ascii_text_is_not_an_error() {
        let mut config = valid_config();
        config.merchant_name = "N".repeat(80);
        config.merchant_city = "São José dos Campos".to_string();
        config.description = Some("🎁".repeat(60));
        assert_eq!(validate_pix_config(&config), Ok(()));
    }
}
