//! # Money Module
//!
//! Provides the `Money` type for the transaction amount (tag 54).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  A registry item priced at 25.90 is stored by a float as               │
//! │    25.899999999999998578914528479799628257751464843750                 │
//! │                                                                         │
//! │  Banking apps compare the amount field byte for byte, so "25.89"       │
//! │  instead of "25.90" is a different payment.                            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    2590 centavos → "25.90", always                                     │
//! │    Rounding happens ONCE, at the boundary where the amount enters      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pix_core::money::Money;
//!
//! let price: Money = "25.90".parse().unwrap();
//! assert_eq!(price.centavos(), 2590);
//! assert_eq!(price.to_decimal_string(), "25.90");
//!
//! // Floats are accepted at the edge and rounded like the same text would be
//! assert_eq!(Money::from_reais(123.456).to_decimal_string(), "123.46");
//! assert_eq!(Money::from_reais(1.005).to_decimal_string(), "1.01");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in centavos (1/100 of a Brazilian Real).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative amount can be represented so the
///   validator can reject it with a proper message
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos.
    ///
    /// ## Example
    /// ```rust
    /// use pix_core::money::Money;
    ///
    /// let price = Money::from_centavos(1099); // R$ 10,99
    /// assert_eq!(price.centavos(), 1099);
    /// ```
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from a float amount in reais.
    ///
    /// The float is read back through its shortest decimal text and parsed
    /// with [`FromStr`], so `1.005` rounds to `1.01` even though the nearest
    /// f64 sits just below it. Non-finite input becomes zero, which the
    /// validator then rejects. Amounts beyond the i64 range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use pix_core::money::Money;
    ///
    /// assert_eq!(Money::from_reais(10.0).centavos(), 1000);
    /// assert_eq!(Money::from_reais(9.5).centavos(), 950);
    /// assert_eq!(Money::from_reais(0.125).centavos(), 13);
    /// ```
    pub fn from_reais(reais: f64) -> Self {
        if !reais.is_finite() {
            return Money::zero();
        }
        let magnitude = reais
            .abs()
            .to_string()
            .parse::<Money>()
            .unwrap_or(Money(i64::MAX));
        if reais < 0.0 {
            Money(-magnitude.0)
        } else {
            magnitude
        }
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Renders the amount the way tag 54 carries it.
    ///
    /// Exactly two decimal digits, a period as separator, no grouping and
    /// no currency symbol, regardless of locale.
    ///
    /// ## Example
    /// ```rust
    /// use pix_core::money::Money;
    ///
    /// assert_eq!(Money::from_centavos(2590).to_decimal_string(), "25.90");
    /// assert_eq!(Money::from_centavos(5).to_decimal_string(), "0.05");
    /// assert_eq!(Money::from_centavos(100_000).to_decimal_string(), "1000.00");
    /// ```
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text such as `"25.90"`, `"10"`, `"9.5"` or `"1,50"`.
///
/// ## Rules
/// - One decimal separator, `.` or `,`
/// - Digits beyond the second decimal place round half-up on the third
/// - Negative, empty and non-numeric text is rejected
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let input = s.trim();
        let invalid = |reason: &str| CoreError::InvalidAmount {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        if input.is_empty() {
            return Err(invalid("amount is empty"));
        }
        if input.starts_with('-') {
            return Err(invalid("amount must not be negative"));
        }

        let (whole, fraction) = input
            .split_once(|c: char| c == '.' || c == ',')
            .unwrap_or((input, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid("amount has no digits"));
        }
        if !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid(
                "amount must contain only digits and one decimal separator",
            ));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("amount is too large"))?
        };

        let digits: Vec<i64> = fraction
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .collect();
        let tenths = digits.first().copied().unwrap_or(0);
        let hundredths = digits.get(1).copied().unwrap_or(0);
        let round_up = matches!(digits.get(2), Some(d) if *d >= 5);

        whole_value
            .checked_mul(100)
            .and_then(|c| c.checked_add(tenths * 10 + hundredths + i64::from(round_up)))
            .map(Money)
            .ok_or_else(|| invalid("amount is too large"))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the wire representation, e.g. `25.90`.
///
/// ## Note
/// Guest-facing "R$ 25,90" formatting belongs to the storefront UI.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Reais Representation
// =============================================================================

/// Serde adapter that carries `Money` as a number of reais (`25.9`) rather
/// than centavos, for records that arrive from the storefront.
///
/// Decimal text such as `"25.90"` is accepted too.
///
/// ```rust
/// use pix_core::money::{self, Money};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Item {
///     #[serde(with = "money::reais")]
///     price: Money,
/// }
///
/// let item: Item = serde_json::from_str(r#"{"price": 25.9}"#).unwrap();
/// assert_eq!(item.price.centavos(), 2590);
/// ```
pub mod reais {
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Money;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(money.0 as f64 / 100.0)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Money, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(reais) => Ok(Money::from_reais(reais)),
            Repr::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
