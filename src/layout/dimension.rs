//! Dimension classification
//!
//! Raw constraint values arrive either as plain numbers or as strings such as
//! `"50%"`, `"auto"` or `"2fr"`. This module lexes them with logos and turns
//! them into a [`Dimension`] the resolver can compute with. Anything that does
//! not lex cleanly falls back to `FixedNumber(0)`.

use logos::Logos;
use serde::Deserialize;

/// A raw, unclassified width/height/position value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DimensionValue {
    Number(f64),
    Text(String),
}

impl From<f64> for DimensionValue {
    fn from(value: f64) -> Self {
        DimensionValue::Number(value)
    }
}

impl From<i32> for DimensionValue {
    fn from(value: i32) -> Self {
        DimensionValue::Number(f64::from(value))
    }
}

impl From<&str> for DimensionValue {
    fn from(value: &str) -> Self {
        DimensionValue::Text(value.to_string())
    }
}

impl From<String> for DimensionValue {
    fn from(value: String) -> Self {
        DimensionValue::Text(value)
    }
}

/// Classification of a single dimension value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimensionType {
    FixedNumber,
    Percentage,
    Auto,
    FractionOfFreeSpace,
}

/// A classified dimension carrying the number it was parsed from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Literal pixels
    FixedNumber(f64),
    /// Fraction of the parent dimension (`"50%"` is stored as `0.5`)
    Percentage(f64),
    /// Externally measured
    Auto,
    /// Share units of the sibling group's free space (`"2fr"` is `2.0`)
    FractionOfFreeSpace(f64),
}

#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\n\r]+")]
enum DimensionToken {
    #[regex(r"-?[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"-?\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("%")]
    Percent,

    #[token("fr")]
    Fraction,

    #[token("px")]
    Pixels,

    #[token("auto")]
    Auto,
}

impl Dimension {
    /// Classify a possibly missing raw value
    pub fn parse(raw: Option<&DimensionValue>) -> Self {
        match raw {
            Some(value) => Self::from_value(value),
            None => Dimension::FixedNumber(0.0),
        }
    }

    pub fn from_value(raw: &DimensionValue) -> Self {
        match raw {
            DimensionValue::Number(n) if n.is_finite() => Dimension::FixedNumber(*n),
            DimensionValue::Number(n) => {
                tracing::debug!(value = %n, "non-finite dimension, using 0");
                Dimension::FixedNumber(0.0)
            }
            DimensionValue::Text(text) => Self::from_str_lossy(text),
        }
    }

    fn from_str_lossy(text: &str) -> Self {
        let tokens: Result<Vec<DimensionToken>, ()> = DimensionToken::lexer(text).collect();
        let parsed = match tokens.as_deref() {
            Ok([DimensionToken::Number(n)]) | Ok([DimensionToken::Number(n), DimensionToken::Pixels]) => {
                Some(Dimension::FixedNumber(*n))
            }
            Ok([DimensionToken::Number(n), DimensionToken::Percent]) => {
                Some(Dimension::Percentage(n / 100.0))
            }
            Ok([DimensionToken::Number(n), DimensionToken::Fraction]) if *n >= 0.0 => {
                Some(Dimension::FractionOfFreeSpace(*n))
            }
            Ok([DimensionToken::Auto]) => Some(Dimension::Auto),
            _ => None,
        };

        parsed.unwrap_or_else(|| {
            tracing::debug!(value = text, "unparseable dimension, using 0");
            Dimension::FixedNumber(0.0)
        })
    }

    pub fn kind(&self) -> DimensionType {
        match self {
            Dimension::FixedNumber(_) => DimensionType::FixedNumber,
            Dimension::Percentage(_) => DimensionType::Percentage,
            Dimension::Auto => DimensionType::Auto,
            Dimension::FractionOfFreeSpace(_) => DimensionType::FractionOfFreeSpace,
        }
    }

    /// Resolve this value as an offset (inset, anchor or clamp bound) along
    /// a parent dimension.
    ///
    /// Returns `None` only when a percentage meets an unknown parent. `auto`
    /// and fractions have no meaning as offsets and read as 0.
    pub fn offset(&self, parent: Option<f64>) -> Option<f64> {
        match self {
            Dimension::FixedNumber(px) => Some(*px),
            Dimension::Percentage(p) => parent.map(|d| p * d),
            Dimension::Auto | Dimension::FractionOfFreeSpace(_) => {
                tracing::debug!(dimension = ?self, "not usable as an offset, using 0");
                Some(0.0)
            }
        }
    }
}

/// Classify a raw dimension value
pub fn classify(raw: Option<&DimensionValue>) -> DimensionType {
    Dimension::parse(raw).kind()
}

/// Whether a raw value is a fraction-of-free-space dimension such as `"1fr"`
pub fn is_fraction_dimension(raw: &DimensionValue) -> bool {
    classify(Some(raw)) == DimensionType::FractionOfFreeSpace
}

/// Fraction units of a raw value, 0 for anything that is not a fraction
pub fn fraction(raw: &DimensionValue) -> f64 {
    match Dimension::from_value(raw) {
        Dimension::FractionOfFreeSpace(units) => units,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(value: impl Into<DimensionValue>) -> Dimension {
        Dimension::from_value(&value.into())
    }

    #[test]
    fn test_number_is_fixed() {
        assert_eq!(parse(120.0), Dimension::FixedNumber(120.0));
        assert_eq!(parse(-4), Dimension::FixedNumber(-4.0));
    }

    #[test]
    fn test_percentage() {
        assert_eq!(parse("50%"), Dimension::Percentage(0.5));
        assert_eq!(parse("12.5 %"), Dimension::Percentage(0.125));
        assert_eq!(classify(Some(&"100%".into())), DimensionType::Percentage);
    }

    #[test]
    fn test_auto() {
        assert_eq!(parse("auto"), Dimension::Auto);
        assert_eq!(classify(Some(&"auto".into())), DimensionType::Auto);
    }

    #[test]
    fn test_fraction() {
        assert_eq!(parse("1fr"), Dimension::FractionOfFreeSpace(1.0));
        assert_eq!(parse("0.5fr"), Dimension::FractionOfFreeSpace(0.5));
        assert!(is_fraction_dimension(&"3fr".into()));
        assert!(!is_fraction_dimension(&"3%".into()));
        assert_eq!(fraction(&"2.5fr".into()), 2.5);
        assert_eq!(fraction(&"40".into()), 0.0);
    }

    #[test]
    fn test_numeric_strings_are_fixed() {
        assert_eq!(parse("40"), Dimension::FixedNumber(40.0));
        assert_eq!(parse("40px"), Dimension::FixedNumber(40.0));
        assert_eq!(parse(".5"), Dimension::FixedNumber(0.5));
    }

    #[test]
    fn test_fallback_to_zero() {
        assert_eq!(Dimension::parse(None), Dimension::FixedNumber(0.0));
        assert_eq!(parse("wide"), Dimension::FixedNumber(0.0));
        assert_eq!(parse("50%%"), Dimension::FixedNumber(0.0));
        assert_eq!(parse("-1fr"), Dimension::FixedNumber(0.0));
        assert_eq!(parse(""), Dimension::FixedNumber(0.0));
        assert_eq!(parse(f64::NAN), Dimension::FixedNumber(0.0));
        assert_eq!(parse(f64::INFINITY), Dimension::FixedNumber(0.0));
    }

    #[test]
    fn test_offset() {
        assert_eq!(Dimension::FixedNumber(10.0).offset(None), Some(10.0));
        assert_eq!(Dimension::Percentage(0.25).offset(Some(200.0)), Some(50.0));
        assert_eq!(Dimension::Percentage(0.25).offset(None), None);
        assert_eq!(Dimension::Auto.offset(Some(200.0)), Some(0.0));
    }
}
