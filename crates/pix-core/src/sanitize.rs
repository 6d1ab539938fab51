//! # ASCII Sanitizer
//!
//! Banking apps only accept printable ASCII in the BR Code's free-text
//! fields, and cap their length.
//!
//! ## Pipeline
//! ```text
//! "São Paulo"
//!      │  NFD decomposition       "Sa\u{303}o Paulo"
//!      │  strip combining marks   "Sao Paulo"
//!      │  keep 0x20..=0x7E        "Sao Paulo"
//!      │  uppercase               "SAO PAULO"
//!      │  trim                    "SAO PAULO"
//!      ▼  truncate to max         "SAO PAULO"
//! ```
//!
//! Decomposing first matters: deleting non-ASCII outright would turn
//! "São Paulo" into "SO PAULO".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Maximum length of the merchant name (tag 59).
pub const MERCHANT_NAME_MAX: usize = 25;

/// Maximum length of the merchant city (tag 60).
pub const MERCHANT_CITY_MAX: usize = 15;

/// Maximum length of the description (tag 26, sub-tag 02).
pub const DESCRIPTION_MAX: usize = 40;

/// Reduces free text to uppercase printable ASCII of at most `max` characters.
///
/// Text made only of non-ASCII characters collapses to an empty string.
///
/// ## Example
/// ```rust
/// use pix_core::sanitize::sanitize_ascii;
///
/// assert_eq!(sanitize_ascii("São Paulo", 15), "SAO PAULO");
/// assert_eq!(sanitize_ascii("café, 日本語", 10), "CAFE,");
/// assert_eq!(sanitize_ascii("日本語", 10), "");
/// ```
pub fn sanitize_ascii(text: &str, max: usize) -> String {
    let ascii: String = text
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| matches!(*c, ' '..='~'))
        .map(|c| c.to_ascii_uppercase())
        .collect();

    ascii.trim().chars().take(max).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
