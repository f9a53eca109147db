//! In-memory implementation of [`Document`] for testing and development.

use super::Document;
use crate::component::Locator;
use crate::error::{FieldError, Result};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use tracing::{instrument, trace};

#[derive(Debug, Default)]
struct Element {
    content: String,
    value: Option<String>,
}

impl Element {
    fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            value: None,
        }
    }

    fn input(value: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            value: Some(value.into()),
        }
    }
}

/// A document held entirely in memory.
///
/// Elements are keyed by locator. Clones share the same storage, so a test
/// can keep a handle and observe writes made through fields.
///
/// For elements without text content, such as inputs, the content is the
/// current value.
///
/// # Example
///
/// ```rust
/// use term_field::component::Locator;
/// use term_field::document::{Document, InMemoryDocument};
///
/// let document = InMemoryDocument::new()
///     .with_body("Welcome to the Dashboard")
///     .with_input("#amount", "12.50");
///
/// assert_eq!(document.content(&Locator::root()).unwrap(), "Welcome to the Dashboard");
/// document.set_value(&Locator::from("#amount"), "13.00").unwrap();
/// assert_eq!(document.value(&Locator::from("#amount")).unwrap(), "13.00");
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    elements: Arc<RwLock<HashMap<Locator, Element>>>,
}

impl InMemoryDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the document body content.
    pub fn with_body(self, content: impl Into<String>) -> Self {
        self.with(Locator::root(), Element::text(content))
    }

    /// Adds an element with text content.
    pub fn with_element(self, locator: impl Into<Locator>, content: impl Into<String>) -> Self {
        self.with(locator.into(), Element::text(content))
    }

    /// Adds an input element with a value.
    pub fn with_input(self, locator: impl Into<Locator>, value: impl Into<String>) -> Self {
        self.with(locator.into(), Element::input(value))
    }

    /// Inserts or replaces an element with text content.
    pub fn insert_element(
        &self,
        locator: impl Into<Locator>,
        content: impl Into<String>,
    ) -> Result<()> {
        self.write()?.insert(locator.into(), Element::text(content));
        Ok(())
    }

    /// Inserts or replaces an input element with a value.
    pub fn insert_input(&self, locator: impl Into<Locator>, value: impl Into<String>) -> Result<()> {
        self.write()?.insert(locator.into(), Element::input(value));
        Ok(())
    }

    /// Removes an element, returning whether it existed.
    pub fn remove(&self, locator: &Locator) -> Result<bool> {
        Ok(self.write()?.remove(locator).is_some())
    }

    /// Number of elements, including the body when set.
    pub fn len(&self) -> usize {
        match self.elements.read() {
            Ok(elements) => elements.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Builder insert. The document is still being assembled, so a poisoned
    /// lock is taken over rather than reported.
    fn with(self, locator: Locator, element: Element) -> Self {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(locator, element);
        self
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, HashMap<Locator, Element>>> {
        self.elements
            .write()
            .map_err(|_| FieldError::Internal("document lock poisoned".to_string()))
    }

    fn read<T>(&self, locator: &Locator, f: impl FnOnce(&Element) -> T) -> Result<T> {
        let elements = self
            .elements
            .read()
            .map_err(|_| FieldError::Internal("document lock poisoned".to_string()))?;
        elements
            .get(locator)
            .map(f)
            .ok_or_else(|| FieldError::element_not_found(locator.as_str()))
    }
}

impl Document for InMemoryDocument {
    fn content(&self, locator: &Locator) -> Result<String> {
        self.read(locator, |element| match &element.value {
            Some(value) if element.content.is_empty() => value.clone(),
            _ => element.content.clone(),
        })
    }

    fn value(&self, locator: &Locator) -> Result<String> {
        self.read(locator, |element| element.value.clone().unwrap_or_default())
    }

    #[instrument(level = "trace", skip(self, value), fields(locator = %locator))]
    fn set_value(&self, locator: &Locator, value: &str) -> Result<()> {
        let mut elements = self
            .elements
            .write()
            .map_err(|_| FieldError::Internal("document lock poisoned".to_string()))?;
        let element = elements
            .get_mut(locator)
            .ok_or_else(|| FieldError::element_not_found(locator.as_str()))?;
        element.value = Some(value.to_string());
        trace!(len = value.len(), "Wrote element value");
        Ok(())
    }
}
