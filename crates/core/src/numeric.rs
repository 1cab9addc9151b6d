//! Lenient numeric parsing for form-entered values.
//!
//! Quantities, prices and discounts arrive as whatever the operator has typed
//! so far: blank, half-typed (`"12."`, `"-"`), or plain garbage. Totals are
//! rendered continuously while typing, so a value that does not parse is
//! treated as zero instead of being reported. This is a contract, not an
//! accident: callers that need strictness validate separately before saving.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::de::{self, Deserializer, Visitor};

/// Parse a decimal amount, yielding zero for blank or unparseable text.
///
/// Accepts plain (`"49.50"`) and scientific (`"1e3"`) notation, with
/// surrounding whitespace.
pub fn decimal_or_zero(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Parse a whole, non-negative count, yielding zero otherwise.
///
/// `"3"` and `"3.0"` are three; `"-3"`, `"2.5"` and anything past `u32::MAX`
/// count as unparseable.
pub fn count_or_zero(raw: &str) -> u32 {
    count_from_decimal(decimal_or_zero(raw))
}

fn count_from_decimal(value: Decimal) -> u32 {
    if value.is_sign_negative() || !value.fract().is_zero() {
        return 0;
    }
    value.to_u32().unwrap_or(0)
}

/// Serde adapters implementing the silent-zero policy.
///
/// Use with `#[serde(default, deserialize_with = "...")]` so that absent,
/// `null`, blank-string and malformed values all land on zero, while JSON
/// numbers and numeric strings are read exactly.
pub mod lenient {
    use super::*;

    /// Deserialize a [`Decimal`] from a number, numeric string or null.
    pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientDecimal)
    }

    /// Deserialize a whole non-negative count from a number, numeric string or null.
    pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer
            .deserialize_any(LenientDecimal)
            .map(count_from_decimal)
    }

    struct LenientDecimal;

    impl<'de> Visitor<'de> for LenientDecimal {
        type Value = Decimal;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number, a numeric string, or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Decimal, E> {
            Ok(decimal_or_zero(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Decimal, E> {
            Ok(Decimal::from(v))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Decimal, E> {
            Ok(Decimal::try_from(v).unwrap_or(Decimal::ZERO))
        }

        fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_none<E: de::Error>(self) -> Result<Decimal, E> {
            Ok(Decimal::ZERO)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Decimal, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "lenient::count")]
        pieces: u32,
        #[serde(default, deserialize_with = "lenient::decimal")]
        price: Decimal,
    }

    #[test]
    fn blank_and_garbage_parse_to_zero() {
        assert_eq!(decimal_or_zero(""), Decimal::ZERO);
        assert_eq!(decimal_or_zero("   "), Decimal::ZERO);
        assert_eq!(decimal_or_zero("-"), Decimal::ZERO);
        assert_eq!(decimal_or_zero("abc"), Decimal::ZERO);
        assert_eq!(count_or_zero(""), 0);
        assert_eq!(count_or_zero("x2"), 0);
    }

    #[test]
    fn well_formed_values_parse_exactly() {
        assert_eq!(decimal_or_zero(" 49.50 "), dec!(49.50));
        assert_eq!(decimal_or_zero("1e3"), dec!(1000));
        assert_eq!(count_or_zero("12"), 12);
        assert_eq!(count_or_zero("3.0"), 3);
    }

    #[test]
    fn negative_or_fractional_counts_are_zero() {
        assert_eq!(count_or_zero("-3"), 0);
        assert_eq!(count_or_zero("2.5"), 0);
        assert_eq!(count_or_zero("99999999999"), 0);
    }

    #[test]
    fn deserializes_numbers_strings_and_nulls() {
        let row: Row = serde_json::from_str(r#"{"pieces": 2, "price": 50000}"#).unwrap();
        assert_eq!(row.pieces, 2);
        assert_eq!(row.price, dec!(50000));

        let row: Row = serde_json::from_str(r#"{"pieces": "3", "price": "19.99"}"#).unwrap();
        assert_eq!(row.pieces, 3);
        assert_eq!(row.price, dec!(19.99));

        let row: Row = serde_json::from_str(r#"{"pieces": "", "price": null}"#).unwrap();
        assert_eq!(row.pieces, 0);
        assert_eq!(row.price, Decimal::ZERO);

        let row: Row = serde_json::from_str("{}").unwrap();
        assert_eq!(row.pieces, 0);
        assert_eq!(row.price, Decimal::ZERO);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 512,
            ..ProptestConfig::default()
        })]

        /// Property: arbitrary text never panics and counts are never negative.
        #[test]
        fn arbitrary_text_never_panics(raw in ".{0,40}") {
            let _ = decimal_or_zero(&raw);
            let _ = count_or_zero(&raw);
        }

        /// Property: any u32 rendered as text parses back to itself.
        #[test]
        fn whole_numbers_round_trip(n in any::<u32>()) {
            prop_assert_eq!(count_or_zero(&n.to_string()), n);
        }
    }
}
