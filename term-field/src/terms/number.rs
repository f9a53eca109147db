//! Culture-aware number formatting and parsing.

use super::format::TermFormat;
use super::{Culture, TermOptions};
use crate::error::{FieldError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::warn;

/// Numeric value specs, modelled on the standard numeric format strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberSpec {
    /// Shortest representation, no grouping
    General,
    /// `N[d]`: grouped, `d` decimals (default 2)
    Number(usize),
    /// `F[d]`: fixed `d` decimals (default 2), no grouping
    Fixed(usize),
    /// `D[w]`: integer zero-padded to at least `w` digits
    Digits(usize),
}

impl NumberSpec {
    /// The number of decimals the spec renders, if it fixes one.
    fn decimals(self) -> Option<usize> {
        match self {
            NumberSpec::Number(d) | NumberSpec::Fixed(d) => Some(d),
            NumberSpec::General | NumberSpec::Digits(_) => None,
        }
    }

    pub(crate) fn parse(spec: Option<&str>) -> Option<Self> {
        let Some(spec) = spec else {
            return Some(NumberSpec::General);
        };
        let mut chars = spec.chars();
        let kind = chars.next()?.to_ascii_uppercase();
        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            Some(digits.parse::<usize>().ok()?)
        };
        match kind {
            'G' => Some(NumberSpec::General),
            'N' => Some(NumberSpec::Number(precision.unwrap_or(2))),
            'F' => Some(NumberSpec::Fixed(precision.unwrap_or(2))),
            'D' => Some(NumberSpec::Digits(precision.unwrap_or(0))),
            _ => None,
        }
    }
}

/// A numeric type that can be rendered to and parsed from canonical text
/// (ASCII digits, optional leading `-`, `.` as decimal point).
pub(crate) trait NumberTerm: Sized {
    const INTEGRAL: bool;

    /// Renders the value, rounding to `decimals` places when given.
    fn canonical(&self, decimals: Option<usize>) -> String;

    fn parse_canonical(text: &str) -> std::result::Result<Self, String>;
}

macro_rules! impl_integer_term {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumberTerm for $ty {
                const INTEGRAL: bool = true;

                fn canonical(&self, decimals: Option<usize>) -> String {
                    match decimals {
                        Some(d) if d > 0 => format!("{self}.{}", "0".repeat(d)),
                        _ => self.to_string(),
                    }
                }

                fn parse_canonical(text: &str) -> std::result::Result<Self, String> {
                    text.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_integer_term!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_term {
    ($($ty:ty),* $(,)?) => {
        $(
            impl NumberTerm for $ty {
                const INTEGRAL: bool = false;

                fn canonical(&self, decimals: Option<usize>) -> String {
                    match decimals {
                        Some(d) => format!("{self:.d$}"),
                        None => self.to_string(),
                    }
                }

                fn parse_canonical(text: &str) -> std::result::Result<Self, String> {
                    text.parse::<$ty>().map_err(|e| e.to_string())
                }
            }
        )*
    };
}

impl_float_term!(f32, f64);

impl NumberTerm for Decimal {
    const INTEGRAL: bool = false;

    fn canonical(&self, decimals: Option<usize>) -> String {
        match decimals {
            Some(d) => {
                let rounded = self.round_dp_with_strategy(
                    u32::try_from(d).unwrap_or(u32::MAX),
                    RoundingStrategy::MidpointAwayFromZero,
                );
                format!("{rounded:.d$}")
            }
            None => self.to_string(),
        }
    }

    fn parse_canonical(text: &str) -> std::result::Result<Self, String> {
        Decimal::from_str(text).map_err(|e| e.to_string())
    }
}

/// Formats a number under the given options.
pub(crate) fn format_number<T: NumberTerm>(value: &T, options: &TermOptions) -> String {
    let format = TermFormat::parse(options.format());
    let spec = NumberSpec::parse(format.spec()).unwrap_or_else(|| {
        warn!(
            spec = format.spec().unwrap_or_default(),
            "Unrecognized numeric format spec, using general formatting"
        );
        NumberSpec::General
    });

    let culture = options.culture();
    let formatted = match spec {
        NumberSpec::General => localize(&value.canonical(None), false, culture),
        NumberSpec::Number(d) => localize(&value.canonical(Some(d)), true, culture),
        NumberSpec::Fixed(d) => localize(&value.canonical(Some(d)), false, culture),
        NumberSpec::Digits(width) if T::INTEGRAL => pad_digits(&value.canonical(None), width),
        NumberSpec::Digits(_) => localize(&value.canonical(None), false, culture),
    };
    format.wrap(&formatted)
}

/// Parses a number under the given options.
///
/// Under `N[d]` and `F[d]` the text may carry at most `d` decimals, so every
/// accepted value renders back to the same number.
pub(crate) fn parse_number<T: NumberTerm>(text: &str, options: &TermOptions) -> Result<T> {
    let format = TermFormat::parse(options.format());
    let inner = format.unwrap::<T>(text)?;
    let mut canonical = delocalize(inner, options.culture());

    if canonical.is_empty() {
        return Err(FieldError::conversion::<T>(text, "no number found"));
    }

    let decimals = NumberSpec::parse(format.spec()).and_then(NumberSpec::decimals);
    if let (Some(allowed), Some((_, fraction))) = (decimals, canonical.split_once('.')) {
        if fraction.len() > allowed {
            return Err(FieldError::conversion::<T>(
                text,
                format!("expected at most {allowed} decimal places"),
            ));
        }
    }

    if T::INTEGRAL {
        if let Some((integer, fraction)) = canonical.split_once('.') {
            if !fraction.chars().all(|c| c == '0') {
                return Err(FieldError::conversion::<T>(
                    text,
                    "fractional part is not allowed for an integer",
                ));
            }
            canonical = integer.to_string();
        }
    }

    T::parse_canonical(&canonical).map_err(|reason| FieldError::conversion::<T>(text, reason))
}

/// Replaces the decimal point and, when `grouping` is set, inserts group
/// separators into the integer part. Non-numeric canonical forms such as
/// `NaN` or `inf` are returned unchanged.
fn localize(canonical: &str, grouping: bool, culture: &Culture) -> String {
    let (sign, unsigned) = match canonical.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", canonical),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };
    if integer.is_empty() || !integer.chars().all(|c| c.is_ascii_digit()) {
        return canonical.to_string();
    }

    let mut out = String::with_capacity(canonical.len() + integer.len() / 3);
    out.push_str(sign);
    if grouping {
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.push(culture.group_separator());
            }
            out.push(digit);
        }
    } else {
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push(culture.decimal_separator());
        out.push_str(fraction);
    }
    out
}

/// Converts culture-formatted text back to canonical form: group separators
/// are removed and the decimal separator becomes `.`.
fn delocalize(text: &str, culture: &Culture) -> String {
    let group = culture.group_separator();
    let group_is_space = group.is_whitespace();
    text.trim()
        .chars()
        .filter(|&c| c != group && !(group_is_space && c.is_whitespace()))
        .map(|c| if c == culture.decimal_separator() { '.' } else { c })
        .collect()
}

fn pad_digits(canonical: &str, width: usize) -> String {
    match canonical.strip_prefix('-') {
        Some(digits) => format!("-{digits:0>width$}"),
        None => format!("{canonical:0>width$}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(culture: &str, format: Option<&str>) -> TermOptions {
        let options = TermOptions::new().with_culture_name(culture).unwrap();
        match format {
            Some(format) => options.with_format(format),
            None => options,
        }
    }

    #[test]
    fn test_spec_parsing() {
        assert_eq!(NumberSpec::parse(None), Some(NumberSpec::General));
        assert_eq!(NumberSpec::parse(Some("N")), Some(NumberSpec::Number(2)));
        assert_eq!(NumberSpec::parse(Some("f3")), Some(NumberSpec::Fixed(3)));
        assert_eq!(NumberSpec::parse(Some("D5")), Some(NumberSpec::Digits(5)));
        assert_eq!(NumberSpec::parse(Some("X")), None);
        assert_eq!(NumberSpec::parse(Some("Nx")), None);
    }

    #[test]
    fn test_grouping() {
        let us = options("en-US", Some("N2"));
        assert_eq!(format_number(&1234567.891_f64, &us), "1,234,567.89");
        assert_eq!(format_number(&-999_i32, &us), "-999.00");
        assert_eq!(format_number(&-1000_i32, &us), "-1,000.00");

        let de = options("de-DE", Some("N0"));
        assert_eq!(format_number(&1234567_i64, &de), "1.234.567");
    }

    #[test]
    fn test_fixed_and_general() {
        let de = options("de-DE", Some("F1"));
        assert_eq!(format_number(&2.26_f64, &de), "2,3");
        let invariant = options("", None);
        assert_eq!(format_number(&Decimal::new(12300, 2), &invariant), "123.00");
        assert_eq!(format_number(&0.1_f64, &invariant), "0.1");
    }

    #[test]
    fn test_decimal_rounds_half_away_from_zero() {
        let fixed = options("", Some("F1"));
        assert_eq!(format_number(&Decimal::new(199, 2), &fixed), "2.0");
        assert_eq!(format_number(&Decimal::new(225, 2), &fixed), "2.3");
        assert_eq!(format_number(&Decimal::new(-225, 2), &fixed), "-2.3");

        let us = options("en-US", Some("N0"));
        assert_eq!(format_number(&Decimal::new(123456, 2), &us), "1,235");
    }

    #[test]
    fn test_excess_decimals_are_rejected() {
        let kg = options("", Some("{0:F1} kg"));
        let err = parse_number::<f64>("2.25 kg", &kg).unwrap_err();
        assert!(err.is_conversion());
        assert!(err.to_string().contains("at most 1 decimal places"));
        assert_eq!(parse_number::<f64>("2.2 kg", &kg).unwrap(), 2.2);

        let us = options("en-US", Some("N0"));
        assert!(parse_number::<Decimal>("1,234.56", &us).is_err());
        assert_eq!(parse_number::<Decimal>("1,234", &us).unwrap(), Decimal::new(1234, 0));

        let general = options("", None);
        assert_eq!(parse_number::<f64>("2.25", &general).unwrap(), 2.25);
    }

    #[test]
    fn test_digits_padding() {
        let padded = options("", Some("D5"));
        assert_eq!(format_number(&42_u32, &padded), "00042");
        assert_eq!(format_number(&-42_i32, &padded), "-00042");
    }

    #[test]
    fn test_unknown_spec_falls_back_to_general() {
        let odd = options("", Some("Q9"));
        assert_eq!(format_number(&7_i32, &odd), "7");
    }

    #[test]
    fn test_parse_with_culture() {
        let de = options("de-DE", None);
        assert_eq!(parse_number::<f64>("1.234,5", &de).unwrap(), 1234.5);
        let fr = options("fr-FR", None);
        assert_eq!(parse_number::<i32>("1 234", &fr).unwrap(), 1234);
        assert_eq!(parse_number::<i32>("1\u{202f}234", &fr).unwrap(), 1234);
    }

    #[test]
    fn test_parse_integer_with_zero_fraction() {
        let us = options("en-US", Some("N2"));
        assert_eq!(parse_number::<i32>("1,234.00", &us).unwrap(), 1234);
        let err = parse_number::<i32>("1,234.50", &us).unwrap_err();
        assert!(err.to_string().contains("fractional part"));
    }

    #[test]
    fn test_parse_failures() {
        let invariant = options("", None);
        assert!(parse_number::<i32>("twelve", &invariant).unwrap_err().is_conversion());
        assert!(parse_number::<u8>("300", &invariant).is_err());
        assert!(parse_number::<f64>("   ", &invariant).is_err());
    }

    #[test]
    fn test_non_numeric_canonical_is_untouched() {
        assert_eq!(localize("NaN", true, Culture::invariant()), "NaN");
        assert_eq!(localize("-inf", true, Culture::invariant()), "-inf");
    }
}
