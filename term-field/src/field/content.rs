//! Fields whose value is the element's text content.

use super::Field;
use crate::component::{Component, ComponentCore, ComponentId, UIComponentMetadata};
use crate::error::{FieldError, Result};
use crate::page::PageObject;
use crate::terms::{TermConvert, TermOptions, TermResolver};
use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Weak};

/// A read-only field whose value is parsed from the element's content, such
/// as a heading, label or table cell.
///
/// Fields are normally created by
/// [`PageScope::content_field`](crate::page::PageScope::content_field) while
/// a page is built.
pub struct ContentField<T, O> {
    core: ComponentCore,
    owner: Weak<O>,
    value_term_options: Arc<TermOptions>,
    _value: PhantomData<fn() -> T>,
}

impl<T, O> ContentField<T, O> {
    /// Creates a field with term options derived from its metadata.
    pub fn new(core: ComponentCore, owner: Weak<O>) -> Self {
        Self {
            value_term_options: Arc::new(TermOptions::from_metadata(core.metadata())),
            core,
            owner,
            _value: PhantomData,
        }
    }

    /// Adjusts the term options derived from metadata, e.g. to force a
    /// format the declaration does not carry.
    ///
    /// Applied while the field is being built, before it is shared.
    pub fn map_term_options<F>(mut self, init: F) -> Self
    where
        F: FnOnce(TermOptions, &UIComponentMetadata) -> TermOptions,
    {
        let current = (*self.value_term_options).clone();
        self.value_term_options = Arc::new(init(current, self.core.metadata()));
        self
    }

    pub fn core(&self) -> &ComponentCore {
        &self.core
    }
}

impl<T, O> Component for ContentField<T, O>
where
    O: Send + Sync,
{
    fn id(&self) -> &ComponentId {
        self.core.id()
    }

    fn name(&self) -> &str {
        self.core.name()
    }

    fn metadata(&self) -> &UIComponentMetadata {
        self.core.metadata()
    }

    fn content(&self) -> Result<String> {
        self.core.content()
    }

    fn kind(&self) -> &str {
        self.core.kind()
    }
}

impl<T, O> Field for ContentField<T, O>
where
    T: TermConvert + PartialEq + fmt::Debug,
    O: PageObject,
{
    type Value = T;
    type Owner = O;

    fn get_value(&self) -> Result<T> {
        let content = self.core.content()?;
        TermResolver::from_string(&content, &self.value_term_options)
    }

    fn value_term_options(&self) -> &TermOptions {
        &self.value_term_options
    }

    fn owner(&self) -> Result<Arc<O>> {
        self.owner.upgrade().ok_or_else(|| FieldError::OwnerDropped {
            component: self.full_name(),
        })
    }
}

impl<T, O> PartialEq for ContentField<T, O> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<T, O> Eq for ContentField<T, O> {}

impl<T, O> fmt::Debug for ContentField<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentField")
            .field("id", self.core.id())
            .field("value_term_options", &self.value_term_options)
            .finish_non_exhaustive()
    }
}
