//! The document a page is rendered in.
//!
//! Browser drivers and DOM queries live outside this crate. A [`Document`]
//! is the narrow capability components need from them: read an element's
//! content, read its value and write its value.

mod in_memory;

pub use in_memory::InMemoryDocument;

use crate::component::Locator;
use crate::error::Result;

/// Access to elements of a rendered document.
pub trait Document: Send + Sync {
    /// Returns the textual content of the element at `locator`.
    ///
    /// The [root](Locator::root) locator yields the whole document content.
    fn content(&self, locator: &Locator) -> Result<String>;

    /// Returns the value of the (input) element at `locator`.
    fn value(&self, locator: &Locator) -> Result<String>;

    /// Writes the value of the (input) element at `locator`.
    fn set_value(&self, locator: &Locator, value: &str) -> Result<()>;
}
