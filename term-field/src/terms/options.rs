//! Term conversion options.

use super::{Culture, TermCase};
use crate::component::UIComponentMetadata;
use std::fmt;

/// Culture and format configuration governing text-to-value conversion.
///
/// Options are assembled once, when a field is constructed from its
/// metadata, and are immutable afterwards. Fields keep them behind an `Arc`
/// and hand out `&TermOptions` to every conversion call.
///
/// # Examples
///
/// ```rust
/// use term_field::terms::{TermOptions, TermResolver};
/// use rust_decimal::Decimal;
///
/// let options = TermOptions::new()
///     .with_culture_name("de-DE")
///     .unwrap()
///     .with_format("{0:N2} EUR");
///
/// let text = TermResolver::to_string(&Decimal::new(123456, 2), &options);
/// assert_eq!(text, "1.234,56 EUR");
///
/// let value: Decimal = TermResolver::from_string("1.234,56 EUR", &options).unwrap();
/// assert_eq!(value, Decimal::new(123456, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermOptions {
    culture: &'static Culture,
    format: Option<String>,
    case: TermCase,
}

impl TermOptions {
    /// Creates options with the invariant culture, no format and title case.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives options from component metadata: culture, format and case are
    /// looked up through the member, page and global levels.
    pub fn from_metadata(metadata: &UIComponentMetadata) -> Self {
        Self {
            culture: metadata.get_culture(),
            format: metadata.get_format().map(str::to_string),
            case: metadata.get_case(),
        }
    }

    /// Sets the culture.
    pub fn with_culture(mut self, culture: &'static Culture) -> Self {
        self.culture = culture;
        self
    }

    /// Sets the culture by name.
    pub fn with_culture_name(self, name: &str) -> crate::error::Result<Self> {
        Ok(self.with_culture(Culture::find(name)?))
    }

    /// Sets the format string.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Clears the format string.
    pub fn without_format(mut self) -> Self {
        self.format = None;
        self
    }

    /// Sets the case used for identifier-derived terms.
    pub fn with_case(mut self, case: TermCase) -> Self {
        self.case = case;
        self
    }

    pub fn culture(&self) -> &'static Culture {
        self.culture
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn case(&self) -> TermCase {
        self.case
    }
}

impl fmt::Display for TermOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "culture={}", self.culture)?;
        if let Some(format) = &self.format {
            write!(f, ", format={format:?}")?;
        }
        write!(f, ", case={}", self.case)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = TermOptions::new();
        assert!(options.culture().is_invariant());
        assert_eq!(options.format(), None);
        assert_eq!(options.case(), TermCase::Title);
    }

    #[test]
    fn test_builder() {
        let options = TermOptions::new()
            .with_culture_name("fr-FR")
            .unwrap()
            .with_format("F1")
            .with_case(TermCase::Upper);
        assert_eq!(options.culture().name(), "fr-FR");
        assert_eq!(options.format(), Some("F1"));
        assert_eq!(options.case(), TermCase::Upper);
        assert_eq!(
            options.to_string(),
            "culture=fr-FR, format=\"F1\", case=upper"
        );
        assert_eq!(options.without_format().format(), None);
    }

    #[test]
    fn test_unknown_culture_name() {
        assert!(TermOptions::new().with_culture_name("zz").is_err());
    }
}
