//! Context passed to a firing trigger.

use super::TriggerEvents;
use crate::component::Component;
use std::fmt;

/// Describes a single trigger firing: which event fired and on which
/// component.
///
/// A fresh context is built for every trigger invocation and dropped when the
/// trigger returns.
#[derive(Clone, Copy)]
pub struct TriggerContext<'a> {
    event: TriggerEvents,
    component: &'a dyn Component,
}

impl<'a> TriggerContext<'a> {
    pub fn new(event: TriggerEvents, component: &'a dyn Component) -> Self {
        Self { event, component }
    }

    /// The event that fired.
    pub fn event(&self) -> TriggerEvents {
        self.event
    }

    /// The component the event fired on.
    pub fn component(&self) -> &'a dyn Component {
        self.component
    }
}

impl fmt::Debug for TriggerContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriggerContext")
            .field("event", &self.event)
            .field("component", &self.component.id())
            .finish()
    }
}
