//! The component capability and its shared core.

use super::UIComponentMetadata;
use crate::document::Document;
use crate::error::Result;
use std::fmt;
use std::sync::Arc;

/// Identifies a component within a page tree, e.g. `LoginPage.title`.
///
/// The page itself is identified by its bare name.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(Arc<str>);

impl ComponentId {
    /// Identifier of a page.
    pub fn page(page: &str) -> Self {
        Self(Arc::from(page))
    }

    /// Identifier of a component declared on `page`.
    pub fn member(page: &str, name: &str) -> Self {
        Self(Arc::from(format!("{page}.{name}")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentId({})", self.0)
    }
}

/// Where a component's element lives in the document.
///
/// Locators are opaque to this crate; the [`Document`] implementation decides
/// how to resolve them. The [root](Locator::root) locator addresses the
/// whole document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator(String);

impl Locator {
    const ROOT: &'static str = ":root";

    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    /// The locator of the document root.
    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locator {
    fn from(locator: &str) -> Self {
        Self::new(locator)
    }
}

impl From<String> for Locator {
    fn from(locator: String) -> Self {
        Self(locator)
    }
}

/// A UI component bound to a location in a rendered document.
///
/// This is the capability triggers act on: they receive a `&dyn Component`
/// and may read its content and metadata.
pub trait Component: Send + Sync {
    /// The component identifier within its page tree.
    fn id(&self) -> &ComponentId;

    /// The declared name of the component.
    fn name(&self) -> &str;

    /// Metadata resolved from the component's declaration.
    fn metadata(&self) -> &UIComponentMetadata;

    /// Reads the current textual content of the component.
    fn content(&self) -> Result<String>;

    /// A short noun describing the component, used in messages.
    fn kind(&self) -> &str {
        "component"
    }

    /// The name used in error messages, e.g. `"Amount" input`.
    fn full_name(&self) -> String {
        format!("\"{}\" {}", self.name(), self.kind())
    }
}

/// The state every concrete component is built around: identity, location,
/// metadata and the document it reads from.
#[derive(Clone)]
pub struct ComponentCore {
    id: ComponentId,
    name: String,
    kind: &'static str,
    locator: Locator,
    metadata: Arc<UIComponentMetadata>,
    document: Arc<dyn Document>,
}

impl ComponentCore {
    pub fn new(
        id: ComponentId,
        kind: &'static str,
        locator: Locator,
        metadata: Arc<UIComponentMetadata>,
        document: Arc<dyn Document>,
    ) -> Self {
        Self {
            id,
            name: metadata.name().to_string(),
            kind,
            locator,
            metadata,
            document,
        }
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    /// Reads the element's value (as opposed to its content).
    pub fn value(&self) -> Result<String> {
        self.document.value(&self.locator)
    }

    /// Writes the element's value.
    pub fn set_value(&self, value: &str) -> Result<()> {
        self.document.set_value(&self.locator, value)
    }
}

impl Component for ComponentCore {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &UIComponentMetadata {
        &self.metadata
    }

    fn content(&self) -> Result<String> {
        self.document.content(&self.locator)
    }

    fn kind(&self) -> &str {
        self.kind
    }
}

impl fmt::Debug for ComponentCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentCore")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("locator", &self.locator)
            .finish_non_exhaustive()
    }
}
