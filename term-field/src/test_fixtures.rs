//! Common fixtures for component, trigger and field tests.
//!
//! Provides a standalone component with fixed content and a small order page
//! backed by an in-memory document.

use crate::component::{
    Component, ComponentCore, ComponentDeclaration, ComponentId, PageDeclaration,
    UIComponentMetadata,
};
use crate::document::InMemoryDocument;
use crate::error::Result;
use crate::field::{ContentField, InputField};
use crate::page::{PageObject, PageScope};
use rust_decimal::Decimal;

/// A component with fixed content and no document behind it.
#[derive(Debug)]
pub struct StaticComponent {
    id: ComponentId,
    content: String,
    metadata: UIComponentMetadata,
}

impl StaticComponent {
    pub fn new(name: &str, content: &str) -> Self {
        Self::with_metadata(name, content, UIComponentMetadata::builder(name).build())
    }

    pub fn with_metadata(name: &str, content: &str, metadata: UIComponentMetadata) -> Self {
        Self {
            id: ComponentId::member("StaticPage", name),
            content: content.to_string(),
            metadata,
        }
    }
}

impl Component for StaticComponent {
    fn id(&self) -> &ComponentId {
        &self.id
    }

    fn name(&self) -> &str {
        self.metadata.name()
    }

    fn metadata(&self) -> &UIComponentMetadata {
        &self.metadata
    }

    fn content(&self) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// An order form: a heading, a decimal amount input and a quantity input.
#[derive(Debug)]
pub struct OrderPage {
    pub page: ComponentCore,
    pub heading: ContentField<String, OrderPage>,
    pub amount: InputField<Option<Decimal>, OrderPage>,
    pub quantity: InputField<i32, OrderPage>,
}

impl PageObject for OrderPage {
    fn declare() -> PageDeclaration {
        PageDeclaration::new("OrderPage")
            .with_culture("en-US")
            .with_component(ComponentDeclaration::new("heading").with_locator("h1"))
            .with_component(
                ComponentDeclaration::new("amount")
                    .with_locator("#amount")
                    .with_format("N2"),
            )
            .with_component(ComponentDeclaration::new("quantity").with_locator("#quantity"))
    }

    fn build(scope: &PageScope<'_, Self>) -> Self {
        Self {
            page: scope.page_core(),
            heading: scope.content_field("heading"),
            amount: scope.input_field("amount"),
            quantity: scope.input_field("quantity"),
        }
    }

    fn page(&self) -> &ComponentCore {
        &self.page
    }

    fn components(&self) -> Vec<&dyn Component> {
        vec![&self.heading, &self.amount, &self.quantity]
    }
}

/// A document matching [`OrderPage`].
pub fn order_document() -> InMemoryDocument {
    InMemoryDocument::new()
        .with_body("New order")
        .with_element("h1", "New order")
        .with_input("#amount", "1,250.00")
        .with_input("#quantity", "3")
}
