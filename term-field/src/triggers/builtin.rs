//! Triggers shipped with the library.

use super::{Trigger, TriggerContext, TriggerEvents};
use crate::error::{FieldError, Result};
use crate::logging::truncate_field;
use tracing::{debug, info};

/// Verifies that the component content contains every configured value.
///
/// Registered for [`TriggerEvents::ON_PAGE_OBJECT_INIT`] unless overridden
/// with [`with_events`](Self::with_events). When values are missing, fails
/// with [`FieldError::Verification`] listing all of them in configured order.
///
/// # Examples
///
/// ```rust
/// use term_field::triggers::{Trigger, TriggerEvents, VerifyContentContainsAll};
///
/// let trigger = VerifyContentContainsAll::new(["Welcome", "Dashboard"]);
/// assert_eq!(trigger.on(), TriggerEvents::ON_PAGE_OBJECT_INIT);
/// assert_eq!(trigger.values(), ["Welcome", "Dashboard"]);
///
/// let trigger = trigger.with_events(TriggerEvents::AFTER_GET);
/// assert_eq!(trigger.on(), TriggerEvents::AFTER_GET);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VerifyContentContainsAll {
    values: Vec<String>,
    on: TriggerEvents,
}

impl VerifyContentContainsAll {
    /// Creates a verification trigger for the given expected values.
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            on: TriggerEvents::ON_PAGE_OBJECT_INIT,
        }
    }

    /// Registers the trigger for different events.
    pub fn with_events(mut self, events: TriggerEvents) -> Self {
        self.on = events;
        self
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Returns the configured values absent from `content`.
    pub fn missing_from(&self, content: &str) -> Vec<String> {
        self.values
            .iter()
            .filter(|value| !content.contains(value.as_str()))
            .cloned()
            .collect()
    }
}

impl Trigger for VerifyContentContainsAll {
    fn on(&self) -> TriggerEvents {
        self.on
    }

    fn name(&self) -> &str {
        "verify_content_contains_all"
    }

    fn run(&self, context: &TriggerContext<'_>) -> Result<()> {
        let component = context.component();
        let content = component.content()?;
        let missing = self.missing_from(&content);

        if missing.is_empty() {
            debug!(
                component.id = %component.id(),
                expected = self.values.len(),
                "Content contains all expected values"
            );
            return Ok(());
        }

        debug!(
            component.id = %component.id(),
            content = %truncate_field(&content, component.metadata().log_config().max_field_length),
            missing = ?missing,
            "Content is missing expected values"
        );
        Err(FieldError::verification(component.full_name(), missing))
    }
}

/// Emits an info event with a fixed message whenever it fires.
#[derive(Debug, Clone, PartialEq)]
pub struct LogInfo {
    message: String,
    on: TriggerEvents,
}

impl LogInfo {
    pub fn new(message: impl Into<String>, on: TriggerEvents) -> Self {
        Self {
            message: message.into(),
            on,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Trigger for LogInfo {
    fn on(&self) -> TriggerEvents {
        self.on
    }

    fn name(&self) -> &str {
        "log_info"
    }

    fn run(&self, context: &TriggerContext<'_>) -> Result<()> {
        info!(
            component.id = %context.component().id(),
            trigger.event = %context.event(),
            "{}",
            self.message
        );
        Ok(())
    }
}
