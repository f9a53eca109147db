//! Cultures used for culture-sensitive term conversion.

use crate::error::{FieldError, Result};
use once_cell::sync::Lazy;
use std::fmt;

/// Number and date conventions of a named culture.
///
/// Cultures are static: [`Culture::find`] hands out `&'static` references
/// from a built-in table, so term options can share them freely.
#[derive(Debug, PartialEq, Eq)]
pub struct Culture {
    name: &'static str,
    decimal_separator: char,
    group_separator: char,
    date_pattern: &'static str,
    time_pattern: &'static str,
    date_time_pattern: &'static str,
}

static CULTURES: Lazy<Vec<Culture>> = Lazy::new(|| {
    vec![
        Culture {
            name: "",
            decimal_separator: '.',
            group_separator: ',',
            date_pattern: "%Y-%m-%d",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%Y-%m-%d %H:%M:%S",
        },
        Culture {
            name: "en-US",
            decimal_separator: '.',
            group_separator: ',',
            date_pattern: "%m/%d/%Y",
            time_pattern: "%I:%M:%S %p",
            date_time_pattern: "%m/%d/%Y %I:%M:%S %p",
        },
        Culture {
            name: "en-GB",
            decimal_separator: '.',
            group_separator: ',',
            date_pattern: "%d/%m/%Y",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%d/%m/%Y %H:%M:%S",
        },
        Culture {
            name: "de-DE",
            decimal_separator: ',',
            group_separator: '.',
            date_pattern: "%d.%m.%Y",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%d.%m.%Y %H:%M:%S",
        },
        Culture {
            name: "fr-FR",
            decimal_separator: ',',
            group_separator: '\u{202f}',
            date_pattern: "%d/%m/%Y",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%d/%m/%Y %H:%M:%S",
        },
        Culture {
            name: "ru-RU",
            decimal_separator: ',',
            group_separator: '\u{a0}',
            date_pattern: "%d.%m.%Y",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%d.%m.%Y %H:%M:%S",
        },
        Culture {
            name: "ja-JP",
            decimal_separator: '.',
            group_separator: ',',
            date_pattern: "%Y/%m/%d",
            time_pattern: "%H:%M:%S",
            date_time_pattern: "%Y/%m/%d %H:%M:%S",
        },
    ]
});

impl Culture {
    /// Returns the invariant culture.
    pub fn invariant() -> &'static Culture {
        &CULTURES[0]
    }

    /// Looks up a culture by name, ignoring ASCII case.
    ///
    /// The empty name and `"invariant"` both resolve to the invariant culture.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use term_field::terms::Culture;
    ///
    /// let culture = Culture::find("de-de").unwrap();
    /// assert_eq!(culture.name(), "de-DE");
    /// assert_eq!(culture.decimal_separator(), ',');
    /// assert!(Culture::find("xx-XX").is_err());
    /// ```
    pub fn find(name: &str) -> Result<&'static Culture> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("invariant") {
            return Ok(Self::invariant());
        }
        CULTURES
            .iter()
            .find(|culture| culture.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                FieldError::Configuration(format!(
                    "unknown culture '{name}'; supported: {}",
                    Self::supported_names().join(", ")
                ))
            })
    }

    /// Names of all built-in cultures, excluding the invariant one.
    pub fn supported_names() -> Vec<&'static str> {
        CULTURES.iter().skip(1).map(|c| c.name).collect()
    }

    /// The culture name (empty for invariant).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true for the invariant culture.
    pub fn is_invariant(&self) -> bool {
        self.name.is_empty()
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Default strftime pattern for dates.
    pub fn date_pattern(&self) -> &'static str {
        self.date_pattern
    }

    /// Default strftime pattern for times of day.
    pub fn time_pattern(&self) -> &'static str {
        self.time_pattern
    }

    /// Default strftime pattern for date-times.
    pub fn date_time_pattern(&self) -> &'static str {
        self.date_time_pattern
    }
}

impl Default for &'static Culture {
    fn default() -> Self {
        Culture::invariant()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            write!(f, "invariant")
        } else {
            write!(f, "{}", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(Culture::find("EN-us").unwrap().name(), "en-US");
        assert_eq!(Culture::find(" fr-FR ").unwrap().name(), "fr-FR");
    }

    #[test]
    fn test_invariant_aliases() {
        assert!(Culture::find("").unwrap().is_invariant());
        assert!(Culture::find("Invariant").unwrap().is_invariant());
        assert_eq!(Culture::invariant().to_string(), "invariant");
    }

    #[test]
    fn test_unknown_culture_lists_supported() {
        let err = Culture::find("tlh-KX").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("tlh-KX"));
        assert!(message.contains("de-DE"));
    }

    #[test]
    fn test_separators_differ_per_culture() {
        let de = Culture::find("de-DE").unwrap();
        assert_eq!(de.decimal_separator(), ',');
        assert_eq!(de.group_separator(), '.');
        let us = Culture::find("en-US").unwrap();
        assert_eq!(us.decimal_separator(), '.');
        assert_eq!(us.group_separator(), ',');
    }
}
