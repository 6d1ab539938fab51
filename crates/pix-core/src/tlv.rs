//! # TLV Module
//!
//! Tag-length-value fields, the building block of every BR Code.
//!
//! ## Field Layout
//! ```text
//! ┌──────┬──────┬──────────────────────────┐
//! │ ID   │ LEN  │ VALUE                    │
//! │ 2 ch │ 2 ch │ LEN characters           │
//! └──────┴──────┴──────────────────────────┘
//!   "59"   "11"   "MARIA SILVA"      →  "5911MARIA SILVA"
//! ```
//!
//! `LEN` is the value's character count, zero-padded to two digits. Callers
//! keep values at or below 99 characters; the sanitizer truncates free text
//! before it gets here.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Largest value length two decimal digits can declare.
pub const MAX_VALUE_LEN: usize = 99;

/// Encodes a single field as `ID ++ LEN ++ VALUE`.
///
/// ## Example
/// ```rust
/// use pix_core::tlv::encode_field;
///
/// assert_eq!(encode_field("00", "01"), "000201");
/// assert_eq!(encode_field("58", "BR"), "5802BR");
/// assert_eq!(encode_field("02", ""), "0200");
/// ```
pub fn encode_field(tag: &str, value: &str) -> String {
    debug_assert_eq!(tag.len(), 2, "TLV tags are two characters");
    let len = value.chars().count();
    debug_assert!(len <= MAX_VALUE_LEN, "TLV value longer than 99 characters");
    format!("{}{:02}{}", tag, len, value)
}

/// Cuts `value` to at most `max` characters, never splitting a character.
///
/// ## Example
/// ```rust
/// use pix_core::tlv::truncate_chars;
///
/// assert_eq!(truncate_chars("STOREABC123", 5), "STORE");
/// assert_eq!(truncate_chars("ação", 2), "aç");
/// assert_eq!(truncate_chars("BR", 25), "BR");
/// ```
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

// =============================================================================
// Writer
// =============================================================================

/// Accumulates fields in order.
///
/// Used both for the top-level payload and for composite fields such as
/// tag 26, whose value is itself a run of TLV fields.
#[derive(Debug, Default, Clone)]
pub struct TlvWriter {
    buf: String,
}

impl TlvWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one field.
    pub fn field(mut self, tag: &str, value: &str) -> Self {
        self.buf.push_str(&encode_field(tag, value));
        self
    }

    /// Appends a field only when a value is present.
    pub fn optional_field(self, tag: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(tag, value),
            None => self,
        }
    }

    /// Appends text verbatim (used for the `6304` checksum header).
    pub fn raw(mut self, text: &str) -> Self {
        self.buf.push_str(text);
        self
    }

    /// Characters written so far.
    pub fn len(&self) -> usize {
        self.buf.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

// =============================================================================
// Reader
// =============================================================================

/// One decoded field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvField {
    pub tag: String,
    pub value: String,
}

impl TlvField {
    /// Declared length, in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Parses the value as nested fields (tags 26 and 62).
    pub fn children(&self) -> CoreResult<Vec<TlvField>> {
        parse_fields(&self.value)
    }
}

/// Scans `input` field by field until it is fully consumed.
///
/// ## Errors
/// `CoreError::MalformedPayload` when a header is truncated, a tag or length
/// is not numeric, or a value runs past the end of the input.
///
/// ## Example
/// ```rust
/// use pix_core::tlv::parse_fields;
///
/// let fields = parse_fields("0002015802BR").unwrap();
/// assert_eq!(fields.len(), 2);
/// assert_eq!(fields[1].tag, "58");
/// assert_eq!(fields[1].value, "BR");
/// ```
pub fn parse_fields(input: &str) -> CoreResult<Vec<TlvField>> {
    let chars: Vec<char> = input.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        let malformed = |reason: &str| CoreError::MalformedPayload {
            position: pos,
            reason: reason.to_string(),
        };

        if pos + 4 > chars.len() {
            return Err(malformed("truncated field header"));
        }

        let tag = &chars[pos..pos + 2];
        if !tag.iter().all(char::is_ascii_digit) {
            return Err(malformed("tag is not numeric"));
        }

        let len_digits = &chars[pos + 2..pos + 4];
        if !len_digits.iter().all(char::is_ascii_digit) {
            return Err(malformed("length is not numeric"));
        }
        let len = len_digits
            .iter()
            .filter_map(|c| c.to_digit(10))
            .fold(0usize, |acc, d| acc * 10 + d as usize);

        let start = pos + 4;
        let end = start + len;
        if end > chars.len() {
            return Err(malformed("value runs past end of input"));
        }

        fields.push(TlvField {
            tag: tag.iter().collect(),
            value: chars[start..end].iter().collect(),
        });
        pos = end;
    }

    Ok(fields)
}

// =============================================================================
// Unit Tests
// =============================================================================
