//! Logging utilities and configuration for Term fields.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application or test harness. [`setup::init_logging`] is provided for
//! the common case.

use tracing::Level;

/// Logging configuration carried by every component's metadata.
///
/// Controls how much detail field access and trigger dispatch emit, so that
/// large page trees stay quiet unless debugging is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Base log level for Term field components
    pub base_level: Level,
    /// Whether to log each trigger as it executes
    pub log_trigger_details: bool,
    /// Whether to log values read from and written to fields
    pub log_values: bool,
    /// Maximum length for logged values and content (to prevent huge logs)
    pub max_field_length: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            base_level: Level::INFO,
            log_trigger_details: false,
            log_values: true,
            max_field_length: 256,
        }
    }
}

impl LogConfig {
    /// Creates a verbose configuration suitable for debugging page objects.
    pub fn verbose() -> Self {
        Self {
            base_level: Level::DEBUG,
            log_trigger_details: true,
            log_values: true,
            max_field_length: 1024,
        }
    }

    /// Creates a minimal configuration with the lowest overhead.
    pub fn production() -> Self {
        Self {
            base_level: Level::WARN,
            log_trigger_details: false,
            log_values: false,
            max_field_length: 128,
        }
    }

    /// Creates a balanced configuration suitable for most use cases.
    pub fn balanced() -> Self {
        Self::default()
    }
}

/// Macro for performance-sensitive debug logging.
///
/// Arguments are only evaluated if the configured base level admits debug
/// output.
#[macro_export]
macro_rules! perf_debug {
    ($config:expr, $($arg:tt)*) => {
        if $config.base_level >= tracing::Level::DEBUG {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional trigger logging.
#[macro_export]
macro_rules! log_trigger {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_trigger_details {
            tracing::debug!($($arg)*);
        }
    };
}

/// Macro for conditional field value logging.
#[macro_export]
macro_rules! log_value {
    ($config:expr, $($arg:tt)*) => {
        if $config.log_values {
            tracing::debug!($($arg)*);
        }
    };
}

/// Truncates a string to the maximum field length if needed.
///
/// Truncation happens on a character boundary at or below `max_length` bytes.
pub fn truncate_field(value: &str, max_length: usize) -> String {
    if value.len() <= max_length {
        value.to_string()
    } else {
        let mut end = max_length;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        let truncated = &value[..end];
        format!("{truncated}...(truncated)")
    }
}

/// Utilities for setting up structured logging.
pub mod setup {
    use tracing::Level;

    /// Configuration for installing a `tracing` subscriber.
    #[derive(Debug, Clone)]
    pub struct LoggingConfig {
        /// Log level for the application
        pub level: Level,
        /// Log level for Term field components specifically
        pub field_level: Level,
        /// Whether to use JSON output format
        pub json_format: bool,
        /// Environment filter override
        pub env_filter: Option<String>,
    }

    impl Default for LoggingConfig {
        fn default() -> Self {
            Self {
                level: Level::INFO,
                field_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }
    }

    impl LoggingConfig {
        /// Creates a configuration for CI runs: quiet, structured output.
        pub fn ci() -> Self {
            Self {
                level: Level::WARN,
                field_level: Level::INFO,
                json_format: true,
                env_filter: None,
            }
        }

        /// Creates a configuration for local test development.
        pub fn development() -> Self {
            Self {
                level: Level::DEBUG,
                field_level: Level::DEBUG,
                json_format: false,
                env_filter: None,
            }
        }

        /// Sets the log level for the application.
        pub fn with_level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Sets the log level for Term field components.
        pub fn with_field_level(mut self, level: Level) -> Self {
            self.field_level = level;
            self
        }

        /// Sets whether to use JSON output format.
        pub fn with_json_format(mut self, enabled: bool) -> Self {
            self.json_format = enabled;
            self
        }

        /// Sets a custom environment filter.
        pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
            self.env_filter = Some(filter.into());
            self
        }

        /// Builds the environment filter string.
        pub fn env_filter(&self) -> String {
            if let Some(ref filter) = self.env_filter {
                filter.clone()
            } else {
                format!(
                    "{},term_field={}",
                    self.level.as_str().to_lowercase(),
                    self.field_level.as_str().to_lowercase()
                )
            }
        }
    }

    /// Installs a global subscriber with an env filter and a fmt layer.
    ///
    /// `RUST_LOG` takes precedence over the configured filter.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use term_field::logging::setup::{LoggingConfig, init_logging};
    ///
    /// init_logging(LoggingConfig::development().with_json_format(true)).unwrap();
    /// ```
    pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.env_filter()));

        let fmt_layer = if config.json_format {
            tracing_subscriber::fmt::layer().json().boxed()
        } else {
            tracing_subscriber::fmt::layer().boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;

        Ok(())
    }
}
