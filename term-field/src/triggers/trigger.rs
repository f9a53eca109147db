//! The trigger trait and closure-backed triggers.

use super::{TriggerContext, TriggerEvents};
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// A declarative rule: when one of the registered lifecycle events occurs on
/// a component, run an action.
///
/// Triggers are constructed once from declarations and shared between the
/// components they are attached to. `run` may be invoked any number of times
/// and must tolerate repeated invocation for the same event.
///
/// # Examples
///
/// ```rust
/// use term_field::error::Result;
/// use term_field::triggers::{Trigger, TriggerContext, TriggerEvents};
///
/// #[derive(Debug)]
/// struct RequireNonEmpty;
///
/// impl Trigger for RequireNonEmpty {
///     fn on(&self) -> TriggerEvents {
///         TriggerEvents::BEFORE_GET
///     }
///
///     fn name(&self) -> &str {
///         "require_non_empty"
///     }
///
///     fn run(&self, context: &TriggerContext<'_>) -> Result<()> {
///         let content = context.component().content()?;
///         if content.trim().is_empty() {
///             return Err(term_field::error::FieldError::verification(
///                 context.component().full_name(),
///                 vec!["<any text>".to_string()],
///             ));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Trigger: fmt::Debug + Send + Sync {
    /// The events this trigger is registered for.
    fn on(&self) -> TriggerEvents;

    /// Returns the name of the trigger, used in logs.
    fn name(&self) -> &str;

    /// Executes the trigger action.
    fn run(&self, context: &TriggerContext<'_>) -> Result<()>;
}

/// A shared trigger for use in declarations and metadata.
pub type BoxedTrigger = Arc<dyn Trigger>;

type TriggerAction = dyn Fn(&TriggerContext<'_>) -> Result<()> + Send + Sync;

/// A trigger whose action is a closure.
///
/// # Examples
///
/// ```rust
/// use term_field::triggers::{FnTrigger, Trigger, TriggerEvents};
///
/// let trigger = FnTrigger::new("announce", TriggerEvents::AFTER_SET, |context| {
///     println!("{} was set", context.component().name());
///     Ok(())
/// });
/// assert_eq!(trigger.name(), "announce");
/// ```
#[derive(Clone)]
pub struct FnTrigger {
    name: String,
    on: TriggerEvents,
    action: Arc<TriggerAction>,
}

impl FnTrigger {
    pub fn new<F>(name: impl Into<String>, on: TriggerEvents, action: F) -> Self
    where
        F: Fn(&TriggerContext<'_>) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            on,
            action: Arc::new(action),
        }
    }
}

impl fmt::Debug for FnTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTrigger")
            .field("name", &self.name)
            .field("on", &self.on)
            .finish_non_exhaustive()
    }
}

impl Trigger for FnTrigger {
    fn on(&self) -> TriggerEvents {
        self.on
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn run(&self, context: &TriggerContext<'_>) -> Result<()> {
        (self.action)(context)
    }
}
