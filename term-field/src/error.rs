//! Error types for the Term field library.
//!
//! All errors raised while reading, writing, converting or verifying field
//! values are represented by the [`FieldError`] enum. None of them are
//! recovered inside the library: a failing trigger, conversion or narrowing
//! aborts the operation in progress and surfaces to the caller.

use thiserror::Error;

/// The main error type for the Term field library.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Text could not be converted into the requested type under the active
    /// term options.
    #[error("Cannot convert \"{text}\" to {target}: {reason}")]
    Conversion {
        /// The text that failed to convert
        text: String,
        /// Name of the target type
        target: String,
        /// Why the conversion failed
        reason: String,
    },

    /// A content verification trigger found expected values missing.
    #[error("Content of {component} is missing expected values: {}", format_missing(.missing))]
    Verification {
        /// Name of the component whose content was verified
        component: String,
        /// Every expected value that was not found
        missing: Vec<String>,
    },

    /// A generated value could not be represented in the requested type.
    #[error("Cannot narrow {value} to {target}")]
    Narrowing {
        /// The source value, rendered for diagnostics
        value: String,
        /// Name of the requested type
        target: String,
    },

    /// A verification provider assertion did not hold.
    #[error("Assertion failed for {component}: {message}")]
    AssertionFailed {
        /// Name of the component under verification
        component: String,
        /// Description of the expectation and the actual value
        message: String,
    },

    /// The document has no element at the given locator.
    #[error("Element not found: {locator}")]
    ElementNotFound { locator: String },

    /// The page object owning a component has already been dropped.
    #[error("Owner of {component} is no longer available")]
    OwnerDropped { component: String },

    /// Error related to configuration or declarations.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error from I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from serialization/deserialization operations.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic internal error for unexpected conditions.
    #[error("Internal error: {0}")]
    Internal(String),
}

fn format_missing(missing: &[String]) -> String {
    missing
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// A type alias for `Result<T, FieldError>`.
pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    /// Creates a conversion error for the target type `T`.
    pub fn conversion<T: ?Sized>(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Conversion {
            text: text.into(),
            target: short_type_name::<T>(),
            reason: reason.into(),
        }
    }

    /// Creates a verification error listing the missing values.
    pub fn verification(component: impl Into<String>, missing: Vec<String>) -> Self {
        Self::Verification {
            component: component.into(),
            missing,
        }
    }

    /// Creates a narrowing error for the target type `T`.
    pub fn narrowing<T: ?Sized>(value: impl Into<String>) -> Self {
        Self::Narrowing {
            value: value.into(),
            target: short_type_name::<T>(),
        }
    }

    /// Creates an assertion failure for a component.
    pub fn assertion_failed(component: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Creates an element-not-found error.
    pub fn element_not_found(locator: impl Into<String>) -> Self {
        Self::ElementNotFound {
            locator: locator.into(),
        }
    }

    /// Returns the missing values when this is a verification error.
    pub fn missing_values(&self) -> Option<&[String]> {
        match self {
            Self::Verification { missing, .. } => Some(missing),
            _ => None,
        }
    }

    /// Returns true for errors produced by term conversion.
    pub fn is_conversion(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }
}

impl From<serde_json::Error> for FieldError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Renders a type name without its module path (`core::option::Option<i32>`
/// becomes `Option<i32>`).
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    for ch in full.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == ':' {
            segment.push(ch);
        } else {
            out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
            segment.clear();
            out.push(ch);
        }
    }
    out.push_str(segment.rsplit("::").next().unwrap_or(&segment));
    out
}

/// Extension trait for adding context to errors.
pub trait ErrorContext<T> {
    /// Adds context to an error.
    fn context(self, msg: &str) -> Result<T>;

    /// Adds context with a lazy message.
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FieldError>,
{
    fn context(self, msg: &str) -> Result<T> {
        self.with_context(|| msg.to_string())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| match e.into() {
            FieldError::Internal(inner) => FieldError::Internal(format!("{}: {}", f(), inner)),
            FieldError::Configuration(inner) => {
                FieldError::Configuration(format!("{}: {}", f(), inner))
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_names_target_type() {
        let err = FieldError::conversion::<i32>("abc", "invalid digit");
        assert_eq!(err.to_string(), "Cannot convert \"abc\" to i32: invalid digit");
        assert!(err.is_conversion());
    }

    #[test]
    fn test_verification_error_lists_every_missing_value() {
        let err = FieldError::verification(
            "\"Home\" page",
            vec!["Dashboard".to_string(), "Logout".to_string()],
        );
        assert_eq!(
            err.to_string(),
            "Content of \"Home\" page is missing expected values: \"Dashboard\", \"Logout\""
        );
        assert_eq!(
            err.missing_values(),
            Some(&["Dashboard".to_string(), "Logout".to_string()][..])
        );
    }

    #[test]
    fn test_narrowing_error() {
        let err = FieldError::narrowing::<i32>("99999999999.00");
        assert_eq!(err.to_string(), "Cannot narrow 99999999999.00 to i32");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<Option<i32>>(), "Option<i32>");
        assert_eq!(short_type_name::<String>(), "String");
        assert_eq!(short_type_name::<rust_decimal::Decimal>(), "Decimal");
    }

    #[test]
    fn test_error_context() {
        fn failing_operation() -> Result<()> {
            Err(FieldError::Configuration("unknown culture".to_string()))
        }

        let err = failing_operation()
            .context("While loading field config")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: While loading field config: unknown culture"
        );
    }

    #[test]
    fn test_context_keeps_domain_errors() {
        let result: Result<()> = Err(FieldError::narrowing::<u8>("300"));
        let err = result.context("ignored").unwrap_err();
        assert!(matches!(err, FieldError::Narrowing { .. }));
    }
}
