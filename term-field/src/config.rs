//! Global field configuration.

use crate::error::{ErrorContext, Result};
use crate::field::RandomizeSettings;
use crate::logging::LogConfig;
use crate::terms::{Culture, TermCase};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Defaults applied to every page and component unless their declarations
/// say otherwise.
///
/// Loadable from JSON; the logging configuration is set in code only.
///
/// # Examples
///
/// ```rust
/// use term_field::config::FieldConfig;
/// use term_field::terms::TermCase;
///
/// let config = FieldConfig::from_json_str(r#"{
///     "culture": "en-GB",
///     "case": "kebab",
///     "randomize": { "min": 1, "max": 10 }
/// }"#).unwrap();
///
/// assert_eq!(config.culture(), Some("en-GB"));
/// assert_eq!(config.case(), Some(TermCase::Kebab));
/// assert_eq!(config.randomize().max, 10);
/// assert_eq!(config.randomize().string_length, 15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    case: Option<TermCase>,
    randomize: RandomizeSettings,
    #[serde(skip)]
    log: LogConfig,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("Invalid field config {}", path.display()))?;
        debug!(path = %path.display(), "Loaded field config");
        Ok(config)
    }

    /// Serializes the configuration to pretty JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks culture names and randomization settings.
    pub fn validate(&self) -> Result<()> {
        if let Some(culture) = &self.culture {
            Culture::find(culture)?;
        }
        self.randomize.validate()
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_case(mut self, case: TermCase) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_randomize(mut self, settings: RandomizeSettings) -> Self {
        self.randomize = settings;
        self
    }

    pub fn with_log_config(mut self, log: LogConfig) -> Self {
        self.log = log;
        self
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn case(&self) -> Option<TermCase> {
        self.case
    }

    pub fn randomize(&self) -> &RandomizeSettings {
        &self.randomize
    }

    pub fn log_config(&self) -> &LogConfig {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FieldConfig::default();
        assert_eq!(config.culture(), None);
        assert_eq!(config.format(), None);
        assert_eq!(config.case(), None);
        assert_eq!(config.randomize(), &RandomizeSettings::default());
        assert_eq!(config.log_config(), &LogConfig::default());
    }

    #[test]
    fn test_builder() {
        let config = FieldConfig::new()
            .with_culture("de-DE")
            .with_format("N2")
            .with_case(TermCase::Upper)
            .with_randomize(RandomizeSettings::range(1, 5))
            .with_log_config(LogConfig::verbose());
        assert_eq!(config.culture(), Some("de-DE"));
        assert_eq!(config.format(), Some("N2"));
        assert_eq!(config.randomize().max, 5);
        assert!(config.log_config().log_trigger_details);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip_skips_log_config() {
        let config = FieldConfig::new()
            .with_culture("fr-FR")
            .with_log_config(LogConfig::production());
        let json = config.to_json_string().unwrap();
        assert!(!json.contains("log"));
        assert!(!json.contains("format"));

        let parsed = FieldConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed.culture(), Some("fr-FR"));
        assert_eq!(parsed.log_config(), &LogConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = FieldConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, FieldError::Serialization(_)));
    }

    #[test]
    fn test_validation_failures() {
        assert!(FieldConfig::from_json_str(r#"{"culture": "xx-YY"}"#).is_err());
        assert!(FieldConfig::from_json_str(r#"{"randomize": {"min": 5, "max": 1}}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"culture": "ja-JP", "format": "N0"}}"#).unwrap();

        let config = FieldConfig::from_file(file.path()).unwrap();
        assert_eq!(config.culture(), Some("ja-JP"));
        assert_eq!(config.format(), Some("N0"));
    }

    #[test]
    fn test_missing_file() {
        let err = FieldConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, FieldError::Io(_)));
    }
}
