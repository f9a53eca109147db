//! The [`TermConvert`] trait and its implementations for common value types.

use super::format::TermFormat;
use super::number::{format_number, parse_number};
use super::TermOptions;
use crate::error::{FieldError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::fmt::Write;
use tracing::warn;

/// A value that has a textual term representation.
///
/// `from_term` followed by `to_term` under the same options yields text that
/// converts back to an equal value. The text itself may be normalized
/// (surrounding whitespace, letter case of enum terms, group separators).
pub trait TermConvert: Sized {
    /// Renders the value as a term.
    fn to_term(&self, options: &TermOptions) -> String;

    /// Parses a term into a value.
    fn from_term(text: &str, options: &TermOptions) -> Result<Self>;
}

macro_rules! impl_number_convert {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TermConvert for $ty {
                fn to_term(&self, options: &TermOptions) -> String {
                    format_number(self, options)
                }

                fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
                    parse_number(text, options)
                }
            }
        )*
    };
}

impl_number_convert!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, Decimal
);

impl TermConvert for String {
    fn to_term(&self, options: &TermOptions) -> String {
        TermFormat::parse(options.format()).wrap(self)
    }

    fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
        let format = TermFormat::parse(options.format());
        if format == TermFormat::default() {
            return Ok(text.to_string());
        }
        format.unwrap::<String>(text).map(str::to_string)
    }
}

impl TermConvert for bool {
    fn to_term(&self, options: &TermOptions) -> String {
        TermFormat::parse(options.format()).wrap(if *self { "true" } else { "false" })
    }

    fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
        let inner = TermFormat::parse(options.format()).unwrap::<bool>(text)?;
        let inner = inner.trim();
        if inner.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if inner.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(FieldError::conversion::<bool>(
                text,
                "expected \"true\" or \"false\"",
            ))
        }
    }
}

/// Shared handling for chrono types: the value spec is a strftime pattern
/// and defaults to the culture's pattern.
macro_rules! impl_chrono_convert {
    ($ty:ty, $default_pattern:ident) => {
        impl TermConvert for $ty {
            fn to_term(&self, options: &TermOptions) -> String {
                let format = TermFormat::parse(options.format());
                let default = options.culture().$default_pattern();
                let pattern = format.spec().unwrap_or(default);

                let mut out = String::new();
                if write!(out, "{}", self.format(pattern)).is_err() {
                    warn!(pattern, "Invalid date/time pattern, using culture default");
                    out.clear();
                    let _ = write!(out, "{}", self.format(default));
                }
                format.wrap(&out)
            }

            fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
                let format = TermFormat::parse(options.format());
                let pattern = format
                    .spec()
                    .unwrap_or(options.culture().$default_pattern());
                let inner = format.unwrap::<$ty>(text)?;
                <$ty>::parse_from_str(inner.trim(), pattern).map_err(|e| {
                    FieldError::conversion::<$ty>(text, format!("{e} (pattern \"{pattern}\")"))
                })
            }
        }
    };
}

impl_chrono_convert!(NaiveDate, date_pattern);
impl_chrono_convert!(NaiveTime, time_pattern);
impl_chrono_convert!(NaiveDateTime, date_time_pattern);

/// `None` is the empty term; any blank text parses to `None`.
impl<T: TermConvert> TermConvert for Option<T> {
    fn to_term(&self, options: &TermOptions) -> String {
        match self {
            Some(value) => value.to_term(options),
            None => String::new(),
        }
    }

    fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
        if text.trim().is_empty() {
            Ok(None)
        } else {
            T::from_term(text, options).map(Some)
        }
    }
}

/// An enum-like type whose variants have terms.
///
/// Each variant is rendered either by its first explicit term or by its
/// identifier in the options' [`TermCase`](super::TermCase). Parsing accepts
/// any explicit term, the cased identifier, or the raw identifier, ignoring
/// letter case.
///
/// Implement [`TermConvert`] by delegating to [`enum_to_term`] and
/// [`enum_from_term`]:
///
/// ```rust
/// use term_field::error::Result;
/// use term_field::terms::{enum_from_term, enum_to_term, TermConvert, TermEnum, TermOptions};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// enum Status { Open, InProgress, Done }
///
/// impl TermEnum for Status {
///     fn variants() -> &'static [Self] {
///         &[Status::Open, Status::InProgress, Status::Done]
///     }
///     fn name(self) -> &'static str {
///         match self {
///             Status::Open => "Open",
///             Status::InProgress => "InProgress",
///             Status::Done => "Done",
///         }
///     }
///     fn terms(self) -> &'static [&'static str] {
///         match self {
///             Status::Done => &["Completed", "Closed"],
///             _ => &[],
///         }
///     }
/// }
///
/// impl TermConvert for Status {
///     fn to_term(&self, options: &TermOptions) -> String {
///         enum_to_term(*self, options)
///     }
///     fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
///         enum_from_term(text, options)
///     }
/// }
///
/// let options = TermOptions::new();
/// assert_eq!(Status::InProgress.to_term(&options), "In Progress");
/// assert_eq!(Status::Done.to_term(&options), "Completed");
/// assert_eq!(Status::from_term("closed", &options).unwrap(), Status::Done);
/// ```
pub trait TermEnum: Sized + Copy + 'static {
    /// All variants, in declaration order.
    fn variants() -> &'static [Self];

    /// The identifier of the variant.
    fn name(self) -> &'static str;

    /// Explicit terms for the variant; the first one is used for rendering.
    fn terms(self) -> &'static [&'static str] {
        &[]
    }
}

/// Renders an enum variant as a term.
pub fn enum_to_term<E: TermEnum>(value: E, options: &TermOptions) -> String {
    let format = TermFormat::parse(options.format());
    let term = match value.terms().first() {
        Some(term) => (*term).to_string(),
        None => options.case().apply(value.name()),
    };
    format.wrap(&term)
}

/// Parses a term into an enum variant.
pub fn enum_from_term<E: TermEnum>(text: &str, options: &TermOptions) -> Result<E> {
    let inner = TermFormat::parse(options.format()).unwrap::<E>(text)?;
    let needle = inner.trim();
    let case = options.case();

    for &variant in E::variants() {
        let matches_term = variant.terms().iter().any(|t| t.eq_ignore_ascii_case(needle));
        let matches_name = case.apply(variant.name()).eq_ignore_ascii_case(needle)
            || variant.name().eq_ignore_ascii_case(needle);
        if matches_term || matches_name {
            return Ok(variant);
        }
    }

    let expected = E::variants()
        .iter()
        .map(|&v| match v.terms().first() {
            Some(term) => format!("\"{term}\""),
            None => format!("\"{}\"", case.apply(v.name())),
        })
        .collect::<Vec<_>>()
        .join(", ");
    Err(FieldError::conversion::<E>(
        text,
        format!("no matching term; expected one of {expected}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terms::TermCase;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Priority {
        Low,
        VeryHigh,
    }

    impl TermEnum for Priority {
        fn variants() -> &'static [Self] {
            &[Priority::Low, Priority::VeryHigh]
        }

        fn name(self) -> &'static str {
            match self {
                Priority::Low => "Low",
                Priority::VeryHigh => "VeryHigh",
            }
        }
    }

    impl TermConvert for Priority {
        fn to_term(&self, options: &TermOptions) -> String {
            enum_to_term(*self, options)
        }

        fn from_term(text: &str, options: &TermOptions) -> Result<Self> {
            enum_from_term(text, options)
        }
    }

    #[test]
    fn test_string_passthrough_and_template() {
        let plain = TermOptions::new();
        assert_eq!(String::from_term("  keep  ", &plain).unwrap(), "  keep  ");

        let quoted = TermOptions::new().with_format("«{0}»");
        assert_eq!("hi".to_string().to_term(&quoted), "«hi»");
        assert_eq!(String::from_term("«hi»", &quoted).unwrap(), "hi");
        assert!(String::from_term("hi", &quoted).is_err());
    }

    #[test]
    fn test_bool() {
        let options = TermOptions::new();
        assert_eq!(true.to_term(&options), "true");
        assert!(bool::from_term(" TRUE ", &options).unwrap());
        assert!(!bool::from_term("false", &options).unwrap());
        assert!(bool::from_term("yes", &options).unwrap_err().is_conversion());
    }

    #[test]
    fn test_dates_follow_culture() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let de = TermOptions::new().with_culture_name("de-DE").unwrap();
        assert_eq!(date.to_term(&de), "09.03.2024");
        assert_eq!(NaiveDate::from_term("09.03.2024", &de).unwrap(), date);

        let us = TermOptions::new().with_culture_name("en-US").unwrap();
        assert_eq!(date.to_term(&us), "03/09/2024");
    }

    #[test]
    fn test_date_with_explicit_pattern() {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let options = TermOptions::new().with_format("Due {0:%Y%m%d}");
        assert_eq!(date.to_term(&options), "Due 20241201");
        assert_eq!(NaiveDate::from_term("Due 20241201", &options).unwrap(), date);
    }

    #[test]
    fn test_time_and_date_time() {
        let options = TermOptions::new();
        let time = NaiveTime::from_hms_opt(14, 5, 0).unwrap();
        assert_eq!(time.to_term(&options), "14:05:00");

        let us = TermOptions::new().with_culture_name("en-US").unwrap();
        assert_eq!(time.to_term(&us), "02:05:00 PM");
        assert_eq!(NaiveTime::from_term("02:05:00 PM", &us).unwrap(), time);

        let moment = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(3, 4, 5)
            .unwrap();
        assert_eq!(moment.to_term(&options), "2024-01-02 03:04:05");
        assert_eq!(
            NaiveDateTime::from_term("2024-01-02 03:04:05", &options).unwrap(),
            moment
        );
    }

    #[test]
    fn test_invalid_date_text() {
        let err = NaiveDate::from_term("31.02.2024", &TermOptions::new()).unwrap_err();
        assert!(err.to_string().contains("NaiveDate"));
    }

    #[test]
    fn test_option_blank_is_none() {
        let options = TermOptions::new();
        assert_eq!(Option::<i32>::from_term("  ", &options).unwrap(), None);
        assert_eq!(Option::<i32>::from_term("7", &options).unwrap(), Some(7));
        assert_eq!(None::<i32>.to_term(&options), "");
        assert!(Option::<i32>::from_term("x", &options).is_err());
    }

    #[test]
    fn test_enum_case_and_lookup() {
        let kebab = TermOptions::new().with_case(TermCase::Kebab);
        assert_eq!(Priority::VeryHigh.to_term(&kebab), "very-high");
        assert_eq!(
            Priority::from_term("very-high", &kebab).unwrap(),
            Priority::VeryHigh
        );
        assert_eq!(
            Priority::from_term("VeryHigh", &kebab).unwrap(),
            Priority::VeryHigh
        );
    }

    #[test]
    fn test_enum_lookup_miss_lists_terms() {
        let err = Priority::from_term("Urgent", &TermOptions::new()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Priority"));
        assert!(message.contains("\"Low\", \"Very High\""));
    }
}
