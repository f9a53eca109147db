//! Format string handling shared by all term conversions.
//!
//! A format is either a *template* embedding the value (`"{0} USD"`,
//! `"Total: {0:N2}"`) or a bare *value spec* (`"N2"`, `"%d.%m.%Y"`).

use crate::error::{FieldError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{0(?::([^}]*))?\}").expect("placeholder pattern is valid")
});

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TermFormat<'a> {
    prefix: &'a str,
    suffix: &'a str,
    spec: Option<&'a str>,
}

impl<'a> TermFormat<'a> {
    /// Parses an optional format string.
    pub(crate) fn parse(format: Option<&'a str>) -> Self {
        let Some(format) = format else {
            return Self::default();
        };

        match PLACEHOLDER.captures(format) {
            Some(captures) => {
                let whole = captures.get(0).expect("group 0 always matches");
                Self {
                    prefix: &format[..whole.start()],
                    suffix: &format[whole.end()..],
                    spec: captures
                        .get(1)
                        .map(|m| m.as_str())
                        .filter(|spec| !spec.is_empty()),
                }
            }
            None if format.is_empty() => Self::default(),
            None => Self {
                prefix: "",
                suffix: "",
                spec: Some(format),
            },
        }
    }

    /// The value spec, if any.
    pub(crate) fn spec(&self) -> Option<&'a str> {
        self.spec
    }

    /// Surrounds an already formatted value with the template text.
    pub(crate) fn wrap(&self, formatted: &str) -> String {
        format!("{}{}{}", self.prefix, formatted, self.suffix)
    }

    /// Strips the template text from `text`, returning the embedded value.
    ///
    /// Surrounding whitespace of the template text is not significant.
    pub(crate) fn unwrap<'t, T: ?Sized>(&self, text: &'t str) -> Result<&'t str> {
        let prefix = self.prefix.trim_start();
        let suffix = self.suffix.trim_end();
        let trimmed = text.trim();

        let rest = trimmed.strip_prefix(prefix).ok_or_else(|| {
            FieldError::conversion::<T>(text, format!("expected text to start with \"{prefix}\""))
        })?;
        let inner = rest.strip_suffix(suffix).ok_or_else(|| {
            FieldError::conversion::<T>(text, format!("expected text to end with \"{suffix}\""))
        })?;
        Ok(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_none_and_empty() {
        assert_eq!(TermFormat::parse(None), TermFormat::default());
        assert_eq!(TermFormat::parse(Some("")), TermFormat::default());
    }

    #[test]
    fn test_parse_bare_spec() {
        let format = TermFormat::parse(Some("N2"));
        assert_eq!(format.spec(), Some("N2"));
        assert_eq!(format.wrap("1.00"), "1.00");
    }

    #[test]
    fn test_parse_template_with_spec() {
        let format = TermFormat::parse(Some("Total: {0:F1} USD"));
        assert_eq!(format.spec(), Some("F1"));
        assert_eq!(format.wrap("3.5"), "Total: 3.5 USD");
        assert_eq!(format.unwrap::<f64>(" Total: 3.5 USD ").unwrap(), "3.5");
    }

    #[test]
    fn test_parse_template_without_spec() {
        let format = TermFormat::parse(Some("#{0}"));
        assert_eq!(format.spec(), None);
        assert_eq!(format.unwrap::<i32>("#42").unwrap(), "42");
    }

    #[test]
    fn test_unwrap_mismatch() {
        let format = TermFormat::parse(Some("{0} USD"));
        let err = format.unwrap::<i32>("42 EUR").unwrap_err();
        assert!(err.to_string().contains("expected text to end with \" USD\""));
    }
}
