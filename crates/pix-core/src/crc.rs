//! # CRC-16/CCITT-FALSE
//!
//! The BR Code's integrity check (tag 63).
//!
//! | Parameter  | Value    |
//! |------------|----------|
//! | Width      | 16       |
//! | Polynomial | `0x1021` |
//! | Init       | `0xFFFF` |
//! | Reflect    | no       |
//! | XorOut     | `0x0000` |
//!
//! Not to be confused with the reflected CRC-16/KERMIT that also goes by
//! "CCITT". The check value for `"123456789"` is `0x29B1`.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Length of the hex checksum that closes a payload.
pub const CHECKSUM_LEN: usize = 4;

/// Computes the checksum over raw bytes.
pub fn crc16_ccitt_false(data: &[u8]) -> u16 {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Checksum of `text` as four uppercase hex digits.
///
/// ## Example
/// ```rust
/// use pix_core::crc::checksum_hex;
///
/// assert_eq!(checksum_hex("123456789"), "29B1");
/// ```
pub fn checksum_hex(text: &str) -> String {
    format!("{:04X}", crc16_ccitt_false(text.as_bytes()))
}

/// Splits a payload into its checksummed body and the trailing four
/// characters. Returns `None` when the payload is too short or the tail is
/// not on a character boundary.
pub fn split_checksum(payload: &str) -> Option<(&str, &str)> {
    let cut = payload.len().checked_sub(CHECKSUM_LEN)?;
    if !payload.is_char_boundary(cut) {
        return None;
    }
    Some(payload.split_at(cut))
}

/// Recomputes the checksum over everything but the last four characters
/// and compares it with them. Hex case is ignored.
///
/// ## Example
/// ```rust
/// use pix_core::crc::verify;
///
/// assert!(verify("12345678929B1"));
/// assert!(verify("12345678929b1"));
/// assert!(!verify("12345678929B2"));
/// ```
pub fn verify(payload: &str) -> bool {
    match split_checksum(payload) {
        Some((body, declared)) => declared.eq_ignore_ascii_case(&checksum_hex(body)),
        None => false,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc16_ccitt_false(b"123456789"), 0x29B1);
    }

    #[test]
    fn test_empty_input_is_initial_value() {
        assert_eq!(crc16_ccitt_false(b""), 0xFFFF);
        assert_eq!(checksum_hex(""), "FFFF");
    }

    #[test]
    fn test_hex_is_padded_and_uppercase() {
        let hex = checksum_hex("000201");
        assert_eq!(hex.len(), 4);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn test_sensitive_to_whitespace() {
        assert_ne!(checksum_hex("5802BR"), checksum_hex("5802BR "));
    }

    #[test]
    fn test_verify_rejects_short_input() {
        assert!(!verify(""));
        assert!(!verify("ABC"));
        assert!(verify("FFFF"));
    }

    #[test]
    fn test_split_checksum() {
        assert_eq!(split_checksum("bodyABCD"), Some(("body", "ABCD")));
        assert_eq!(split_checksum("ABC"), None);
    }
}
