//! Prelude for commonly used types and traits in term-field.

pub use crate::component::{
    Component, ComponentCore, ComponentDeclaration, PageDeclaration, UIComponentMetadata,
};
pub use crate::config::FieldConfig;
pub use crate::document::{Document, InMemoryDocument};
pub use crate::error::{ErrorContext, FieldError, Result};
pub use crate::extensions::{EditableFieldExt, NarrowFrom};
pub use crate::field::{ContentField, EditableField, Field, InputField, RandomizeSettings};
pub use crate::logging::LogConfig;
pub use crate::page::{PageContext, PageObject, PageScope};
pub use crate::terms::{TermCase, TermConvert, TermOptions, TermResolver};
pub use crate::triggers::{FnTrigger, Trigger, TriggerEvents, VerifyContentContainsAll};
