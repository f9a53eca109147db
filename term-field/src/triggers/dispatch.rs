//! Executes the triggers attached to a component.

use super::{TriggerContext, TriggerEvents};
use crate::component::Component;
use crate::error::Result;
use crate::log_trigger;
use tracing::{instrument, warn};

/// Runs every trigger of `component` registered for `event`.
///
/// Triggers run sequentially in declaration order, each with a fresh
/// [`TriggerContext`]. The first failing trigger aborts the firing: its error
/// is returned and the remaining triggers are not run.
#[instrument(level = "trace", skip(component, event), fields(component.id = %component.id(), event = %event))]
pub fn execute_triggers(component: &dyn Component, event: TriggerEvents) -> Result<()> {
    let metadata = component.metadata();
    let log_config = metadata.log_config();

    for trigger in metadata
        .triggers()
        .iter()
        .filter(|trigger| trigger.on().contains(event))
    {
        log_trigger!(
            log_config,
            trigger.name = %trigger.name(),
            trigger.event = %event,
            component.id = %component.id(),
            "Executing trigger"
        );

        let context = TriggerContext::new(event, component);
        if let Err(err) = trigger.run(&context) {
            warn!(
                trigger.name = %trigger.name(),
                trigger.event = %event,
                component.id = %component.id(),
                error = %err,
                "Trigger failed"
            );
            return Err(err);
        }
    }

    Ok(())
}
