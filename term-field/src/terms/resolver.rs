//! Entry points of the term conversion service.

use super::{TermConvert, TermOptions};
use crate::error::Result;
use tracing::trace;

/// Converts values to and from their term (string) representation.
///
/// Both operations are pure functions of their inputs and the options.
///
/// # Examples
///
/// ```rust
/// use term_field::terms::{TermOptions, TermResolver};
///
/// let options = TermOptions::new().with_format("{0} items");
/// assert_eq!(TermResolver::to_string(&12_u32, &options), "12 items");
/// assert_eq!(TermResolver::from_string::<u32>("12 items", &options).unwrap(), 12);
/// assert!(TermResolver::from_string::<u32>("twelve items", &options).is_err());
/// ```
pub struct TermResolver;

impl TermResolver {
    /// Renders `value` under `options`.
    pub fn to_string<T: TermConvert>(value: &T, options: &TermOptions) -> String {
        let text = value.to_term(options);
        trace!(%options, text = %text, "Converted value to term");
        text
    }

    /// Parses `text` into a `T` under `options`.
    ///
    /// Fails with [`FieldError::Conversion`](crate::error::FieldError::Conversion)
    /// when the text does not represent a `T`.
    pub fn from_string<T: TermConvert>(text: &str, options: &TermOptions) -> Result<T> {
        let value = T::from_term(text, options);
        trace!(%options, text, ok = value.is_ok(), "Converted term to value");
        value
    }
}
