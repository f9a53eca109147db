//! Trigger dispatch.
//!
//! Triggers are declared on pages and components (see
//! [`ComponentDeclaration`](crate::component::ComponentDeclaration)), resolved
//! into component metadata once per page construction and fired by
//! [`execute_triggers`] at lifecycle events.
//!
//! Each event is dispatched independently. Within one firing, triggers run in
//! declaration order and the first failure aborts the rest.

mod builtin;
mod context;
mod dispatch;
mod events;
mod trigger;

pub use builtin::{LogInfo, VerifyContentContainsAll};
pub use context::TriggerContext;
pub use dispatch::execute_triggers;
pub use events::TriggerEvents;
pub use trigger::{BoxedTrigger, FnTrigger, Trigger};
