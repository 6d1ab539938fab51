//! # BR Code Assembler
//!
//! Builds the static Pix payload that banking apps read from a QR code or a
//! "Pix Copia e Cola" text box, and reads it back.
//!
//! ## Payload Layout
//! ```text
//! ┌─────┬──────────────────────────────┬───────────────────────────────────┐
//! │ Tag │ Field                        │ Value                             │
//! ├─────┼──────────────────────────────┼───────────────────────────────────┤
//! │ 00  │ Payload Format Indicator     │ "01"                              │
//! │ 01  │ Point of Initiation Method   │ "11" (static)                     │
//! │ 26  │ Merchant Account Information │ 00 GUI, 01 key, 02 description    │
//! │ 52  │ Merchant Category Code       │ "0000"                            │
//! │ 53  │ Transaction Currency         │ "986" (BRL)                       │
//! │ 54  │ Transaction Amount           │ "25.90"                           │
//! │ 58  │ Country Code                 │ "BR"                              │
//! │ 59  │ Merchant Name                │ ≤ 25 ASCII                        │
//! │ 60  │ Merchant City                │ ≤ 15 ASCII                        │
//! │ 62  │ Additional Data              │ 05 txid                           │
//! │ 63  │ CRC-16                       │ 4 hex digits over all of the above│
//! │     │                              │ plus "6304"                       │
//! └─────┴──────────────────────────────┴───────────────────────────────────┘
//! ```
//!
//! The wire format is fixed by the Central Bank; none of these values are
//! choices.

use serde::{Deserialize, Serialize};

use crate::crc::{checksum_hex, split_checksum};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::sanitize::{sanitize_ascii, DESCRIPTION_MAX, MERCHANT_CITY_MAX, MERCHANT_NAME_MAX};
use crate::tlv::{parse_fields, truncate_chars, TlvField, TlvWriter, MAX_VALUE_LEN};
use crate::txid::MAX_TXID_LEN;
use crate::types::PixPaymentConfig;

// =============================================================================
// Tags and Fixed Values
// =============================================================================

pub const TAG_PAYLOAD_FORMAT: &str = "00";
pub const TAG_INITIATION_METHOD: &str = "01";
pub const TAG_MERCHANT_ACCOUNT: &str = "26";
pub const TAG_CATEGORY_CODE: &str = "52";
pub const TAG_CURRENCY: &str = "53";
pub const TAG_AMOUNT: &str = "54";
pub const TAG_COUNTRY: &str = "58";
pub const TAG_MERCHANT_NAME: &str = "59";
pub const TAG_MERCHANT_CITY: &str = "60";
pub const TAG_ADDITIONAL_DATA: &str = "62";
pub const TAG_CRC: &str = "63";

/// Sub-tags inside tag 26.
pub const SUB_TAG_GUI: &str = "00";
pub const SUB_TAG_PIX_KEY: &str = "01";
pub const SUB_TAG_DESCRIPTION: &str = "02";

/// Sub-tag inside tag 62.
pub const SUB_TAG_TXID: &str = "05";

pub const PAYLOAD_FORMAT: &str = "01";
pub const STATIC_INITIATION: &str = "11";
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";
pub const CATEGORY_UNCLASSIFIED: &str = "0000";
pub const CURRENCY_BRL: &str = "986";
pub const COUNTRY_BR: &str = "BR";

/// Tag 63 with its declared length, included in the checksummed text.
pub const CRC_HEADER: &str = "6304";

/// Longest Pix key that fits in tag 26 next to the GUI sub-field.
pub const MAX_PIX_KEY_LEN: usize = MAX_VALUE_LEN - (4 + PIX_GUI.len()) - 4;

// =============================================================================
// Encoding
// =============================================================================

/// Builds the complete, checksummed payload.
///
/// Assumes `config` already passed [`validate_pix_config`]; there is no
/// error path here. A blank txid still yields a well-formed payload, just
/// one no bank will match.
///
/// Name, city and description go through [`sanitize_ascii`]. The Pix key
/// and txid are copied verbatim, cut to 77 and 25 characters so no field
/// outgrows its two-digit length. The description is cut to 40 characters,
/// or shorter when a long Pix key leaves less room in tag 26.
///
/// ## Example
/// ```rust
/// use pix_core::{build_brcode, crc, Money, PixPaymentConfig};
///
/// let config = PixPaymentConfig {
///     pix_key: "user@example.com".to_string(),
///     amount: Money::from_reais(25.90),
///     merchant_name: "Maria Silva".to_string(),
///     merchant_city: "Fortaleza".to_string(),
///     description: None,
///     txid: "STOREABC123".to_string(),
/// };
/// let payload = build_brcode(&config);
///
/// assert!(payload.starts_with("000201010211"));
/// assert!(payload.contains("540525.90"));
/// assert!(crc::verify(&payload));
/// ```
///
/// [`validate_pix_config`]: crate::validation::validate_pix_config
pub fn build_brcode(config: &PixPaymentConfig) -> String {
    let name = sanitize_ascii(&config.merchant_name, MERCHANT_NAME_MAX);
    let city = sanitize_ascii(&config.merchant_city, MERCHANT_CITY_MAX);

    let account_head = TlvWriter::new()
        .field(SUB_TAG_GUI, PIX_GUI)
        .field(SUB_TAG_PIX_KEY, truncate_chars(&config.pix_key, MAX_PIX_KEY_LEN));

    // Tag 26 must itself fit in 99 characters; a long key eats into the
    // description first.
    let description_max = MAX_VALUE_LEN
        .saturating_sub(account_head.len() + 4)
        .min(DESCRIPTION_MAX);
    let description = config
        .description
        .as_deref()
        .map(|d| sanitize_ascii(d, description_max))
        .filter(|d| !d.is_empty());

    let merchant_account = account_head
        .optional_field(SUB_TAG_DESCRIPTION, description.as_deref())
        .finish();

    let additional_data = TlvWriter::new()
        .field(SUB_TAG_TXID, truncate_chars(&config.txid, MAX_TXID_LEN))
        .finish();

    let body = TlvWriter::new()
        .field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT)
        .field(TAG_INITIATION_METHOD, STATIC_INITIATION)
        .field(TAG_MERCHANT_ACCOUNT, &merchant_account)
        .field(TAG_CATEGORY_CODE, CATEGORY_UNCLASSIFIED)
        .field(TAG_CURRENCY, CURRENCY_BRL)
        .field(TAG_AMOUNT, &config.amount.to_decimal_string())
        .field(TAG_COUNTRY, COUNTRY_BR)
        .field(TAG_MERCHANT_NAME, &name)
        .field(TAG_MERCHANT_CITY, &city)
        .field(TAG_ADDITIONAL_DATA, &additional_data)
        .raw(CRC_HEADER)
        .finish();

    let crc = checksum_hex(&body);
    body + &crc
}

// =============================================================================
// Decoding
// =============================================================================

/// A payload read back into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodedBrCode {
    pub pix_key: String,
    pub description: Option<String>,
    /// Absent when the payer chooses the amount.
    pub amount: Option<Money>,
    pub merchant_name: String,
    pub merchant_city: String,
    pub txid: Option<String>,
    pub crc: String,
    /// Top-level fields in payload order.
    pub fields: Vec<TlvField>,
}

fn find<'a>(fields: &'a [TlvField], tag: &str) -> Option<&'a TlvField> {
    fields.iter().find(|f| f.tag == tag)
}

fn require<'a>(fields: &'a [TlvField], tag: &str) -> CoreResult<&'a TlvField> {
    find(fields, tag).ok_or_else(|| CoreError::MissingField {
        tag: tag.to_string(),
    })
}

/// Verifies the checksum and extracts the Pix fields from a payload.
///
/// ## Errors
/// - `ChecksumMismatch` when the trailing four characters do not match
/// - `MalformedPayload` when the TLV layout is broken, tag 00 is not first,
///   tag 63 is not last, or tag 26 is not a Pix account
/// - `MissingField` when the key, name or city is absent
pub fn decode(payload: &str) -> CoreResult<DecodedBrCode> {
    let (body, declared) = split_checksum(payload).ok_or_else(|| CoreError::MalformedPayload {
        position: 0,
        reason: "payload is shorter than its checksum".to_string(),
    })?;

    let computed = checksum_hex(body);
    if !declared.eq_ignore_ascii_case(&computed) {
        return Err(CoreError::ChecksumMismatch {
            declared: declared.to_string(),
            computed,
        });
    }

    let fields = parse_fields(payload)?;

    match fields.first() {
        Some(first) if first.tag == TAG_PAYLOAD_FORMAT && first.value == PAYLOAD_FORMAT => {}
        _ => {
            return Err(CoreError::MalformedPayload {
                position: 0,
                reason: "payload must start with format indicator 01".to_string(),
            })
        }
    }
    match fields.last() {
        Some(last) if last.tag == TAG_CRC && last.len() == 4 => {}
        _ => {
            return Err(CoreError::MalformedPayload {
                position: body.chars().count(),
                reason: "payload must end with the CRC field".to_string(),
            })
        }
    }

    let account = require(&fields, TAG_MERCHANT_ACCOUNT)?.children()?;
    match find(&account, SUB_TAG_GUI) {
        Some(gui) if gui.value.eq_ignore_ascii_case(PIX_GUI) => {}
        _ => {
            return Err(CoreError::MalformedPayload {
                position: 0,
                reason: "merchant account is not a Pix account".to_string(),
            })
        }
    }
    let pix_key = require(&account, SUB_TAG_PIX_KEY)?.value.clone();
    let description = find(&account, SUB_TAG_DESCRIPTION).map(|f| f.value.clone());

    let amount = find(&fields, TAG_AMOUNT)
        .map(|f| f.value.parse::<Money>())
        .transpose()?;

    let txid = match find(&fields, TAG_ADDITIONAL_DATA) {
        Some(field) => find(&field.children()?, SUB_TAG_TXID).map(|f| f.value.clone()),
        None => None,
    };

    Ok(DecodedBrCode {
        pix_key,
        description,
        amount,
        merchant_name: require(&fields, TAG_MERCHANT_NAME)?.value.clone(),
        merchant_city: require(&fields, TAG_MERCHANT_CITY)?.value.clone(),
        txid,
        crc: declared.to_uppercase(),
        fields,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc;

    const EXPECTED: &str = "00020101021126380014BR.GOV.BCB.PIX0116user@example.com\
        520400005303986540525.905802BR5911MARIA SILVA6009FORTALEZA\
        62150511STOREABC1236304E06F";

    fn sample_config() -> PixPaymentConfig {
        PixPaymentConfig {
            pix_key: "user@example.com".to_string(),
            amount: Money::from_reais(25.90),
            merchant_name: "Maria Silva".to_string(),
            merchant_city: "Fortaleza".to_string(),
            description: None,
            txid: "STOREABC123".to_string(),
        }
    }

    #[test]
    fn test_end_to_end_payload() {
        let payload = build_brcode(&sample_config());
        assert_eq!(payload, EXPECTED);
        assert!(payload.starts_with("000201010211"));
        assert!(payload.contains("BR.GOV.BCB.PIX"));
        assert!(payload.contains("540525.90"));
    }

    #[test]
    fn test_payload_with_description() {
        let mut config = sample_config();
        config.description = Some("Chá de bebê".to_string());
        let payload = build_brcode(&config);
        assert_eq!(
            payload,
            "00020101021126530014BR.GOV.BCB.PIX0116user@example.com0211CHA DE BEBE\
             520400005303986540525.905802BR5911MARIA SILVA6009FORTALEZA\
             62150511STOREABC12363045A51"
        );
    }

    #[test]
    fn test_checksum_verifies() {
        let mut config = sample_config();
        for (amount, name) in [(1, "A"), (999_999, "Loja Presentes"), (50, "Zé")] {
            config.amount = Money::from_centavos(amount);
            config.merchant_name = name.to_string();
            let payload = build_brcode(&config);
            let (body, tail) = payload.split_at(payload.len() - 4);
            assert_eq!(crc::checksum_hex(body), tail);
            assert!(tail.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_tlv_scan_recovers_tags_in_order() {
        let mut config = sample_config();
        config.description = Some("Enxoval".to_string());
        let fields = parse_fields(&build_brcode(&config)).unwrap();
        let tags: Vec<&str> = fields.iter().map(|f| f.tag.as_str()).collect();
        assert_eq!(
            tags,
            ["00", "01", "26", "52", "53", "54", "58", "59", "60", "62", "63"]
        );
    }

    #[test]
    fn test_amount_formatting() {
        let mut config = sample_config();

        config.amount = Money::from_reais(10.0);
        assert!(build_brcode(&config).contains("540510.00"));

        config.amount = Money::from_reais(9.5);
        assert!(build_brcode(&config).contains("54049.50"));

        config.amount = Money::from_reais(123.456);
        assert!(build_brcode(&config).contains("5406123.46"));
    }

    #[test]
    fn test_long_name_truncated_to_25() {
        let mut config = sample_config();
        config.merchant_name = "Maria Aparecida dos Santos Oliveira Pereira".to_string();
        let decoded = decode(&build_brcode(&config)).unwrap();
        let name = decoded.fields.iter().find(|f| f.tag == "59").unwrap();
        assert_eq!(name.len(), 25);
        assert_eq!(name.value, "MARIA APARECIDA DOS SANTO");
    }

    #[test]
    fn test_city_and_description_sanitized() {
        let mut config = sample_config();
        config.merchant_city = "São José dos Campos".to_string();
        config.description = Some(format!("Presente {}", "ç".repeat(50)));
        let decoded = decode(&build_brcode(&config)).unwrap();
        assert_eq!(decoded.merchant_city, "SAO JOSE DOS CA");
        let description = decoded.description.unwrap();
        assert_eq!(description.len(), 40);
        assert!(description.starts_with("PRESENTE C"));
    }

    #[test]
    fn test_long_key_shrinks_description() {
        let mut config = sample_config();
        config.pix_key = format!("{}@example.com", "a".repeat(60));
        config.description = Some("Lembrancinha para a festa".to_string());
        let decoded = decode(&build_brcode(&config)).unwrap();

        let account = decoded.fields.iter().find(|f| f.tag == "26").unwrap();
        assert_eq!(account.len(), 99);
        assert_eq!(decoded.description.as_deref(), Some("L"));
        assert_eq!(decoded.pix_key, config.pix_key);
    }

    #[test]
    fn test_oversized_key_is_cut_to_fit_tag_26() {
        let mut config = sample_config();
        config.pix_key = "k".repeat(90);
        config.description = Some("Enxoval".to_string());
        let payload = build_brcode(&config);
        assert!(crc::verify(&payload));

        let decoded = decode(&payload).unwrap();
        let account = decoded.fields.iter().find(|f| f.tag == "26").unwrap();
        assert_eq!(account.len(), 99);
        assert_eq!(decoded.pix_key, "k".repeat(MAX_PIX_KEY_LEN));
        // No room left for a description
        assert_eq!(decoded.description, None);
    }

    #[test]
    fn test_oversized_txid_is_cut_to_25() {
        let mut config = sample_config();
        config.txid = "T".repeat(100);
        let payload = build_brcode(&config);
        assert!(payload.contains(&format!("62290525{}6304", "T".repeat(25))));

        let decoded = decode(&payload).unwrap();
        assert_eq!(decoded.txid, Some("T".repeat(25)));
    }

    #[test]
    fn test_name_length_field_reads_25() {
        let mut config = sample_config();
        config.merchant_name = "Maria Aparecida dos Santos Oliveira Pereira".to_string();
        let payload = build_brcode(&config);
        assert!(payload.contains("5925MARIA APARECIDA DOS SANTO6009FORTALEZA"));
    }

    #[test]
    fn test_blank_description_omitted() {
        let mut config = sample_config();
        config.description = Some(String::new());
        assert_eq!(build_brcode(&config), EXPECTED);

        config.description = Some("🎁".to_string());
        assert_eq!(build_brcode(&config), EXPECTED);
    }

    #[test]
    fn test_idempotent() {
        let config = sample_config();
        assert_eq!(build_brcode(&config), build_brcode(&config));
    }

    #[test]
    fn test_decode_round_trip() {
        let decoded = decode(EXPECTED).unwrap();
        assert_eq!(decoded.pix_key, "user@example.com");
        assert_eq!(decoded.amount, Some(Money::from_centavos(2590)));
        assert_eq!(decoded.merchant_name, "MARIA SILVA");
        assert_eq!(decoded.merchant_city, "FORTALEZA");
        assert_eq!(decoded.txid.as_deref(), Some("STOREABC123"));
        assert_eq!(decoded.description, None);
        assert_eq!(decoded.crc, "E06F");
    }

    #[test]
    fn test_decode_accepts_lowercase_crc() {
        let lower = format!("{}e06f", &EXPECTED[..EXPECTED.len() - 4]);
        assert!(decode(&lower).is_ok());
    }

    #[test]
    fn test_decode_rejects_bad_checksum() {
        let tampered = EXPECTED.replace("25.90", "95.90");
        let err = decode(&tampered).unwrap_err();
        assert!(matches!(err, CoreError::ChecksumMismatch { .. }));
    }

    #[test]
    fn test_decode_rejects_non_pix_account() {
        let body = TlvWriter::new()
            .field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT)
            .field(TAG_MERCHANT_ACCOUNT, "0006BR.FOO0101k")
            .field(TAG_MERCHANT_NAME, "A")
            .field(TAG_MERCHANT_CITY, "B")
            .raw(CRC_HEADER)
            .finish();
        let payload = format!("{}{}", body, checksum_hex(&body));
        assert!(matches!(
            decode(&payload),
            Err(CoreError::MalformedPayload { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_short_input() {
        assert!(decode("").is_err());
        assert!(decode("63").is_err());
    }
}
