//! # Term Field - typed page-object fields for Rust
//!
//! Term Field models the values a UI test reads from and writes to a rendered
//! page. A field is bound to an element of a document, yields a value of a
//! declared type, and fires declarative triggers around every access.
//!
//! ## Overview
//!
//! - **Terms** ([`terms`]): conversion between values and their textual,
//!   culture-formatted representation.
//! - **Triggers** ([`triggers`]): rules attached to declarations that run at
//!   lifecycle events such as page initialization or before a value is read.
//! - **Fields** ([`field`]): the generic [`Field`](field::Field) accessor,
//!   its editable variant, and random value generation.
//! - **Pages** ([`page`]): page objects built from plain declarations.
//!
//! ## Quick Start
//!
//! ```rust
//! use term_field::prelude::*;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! #[derive(Debug)]
//! struct CartPage {
//!     page: ComponentCore,
//!     quantity: InputField<i32, CartPage>,
//!     total: ContentField<Decimal, CartPage>,
//! }
//!
//! impl PageObject for CartPage {
//!     fn declare() -> PageDeclaration {
//!         PageDeclaration::new("CartPage")
//!             .with_culture("de-DE")
//!             .with_trigger(VerifyContentContainsAll::new(["Warenkorb"]))
//!             .with_component(ComponentDeclaration::new("quantity").with_locator("#qty"))
//!             .with_component(
//!                 ComponentDeclaration::new("total")
//!                     .with_locator("#total")
//!                     .with_format("{0:N2} €"),
//!             )
//!     }
//!
//!     fn build(scope: &PageScope<'_, Self>) -> Self {
//!         Self {
//!             page: scope.page_core(),
//!             quantity: scope.input_field("quantity"),
//!             total: scope.content_field("total"),
//!         }
//!     }
//!
//!     fn page(&self) -> &ComponentCore {
//!         &self.page
//!     }
//! }
//!
//! # fn main() -> term_field::error::Result<()> {
//! let document = InMemoryDocument::new()
//!     .with_body("Warenkorb")
//!     .with_input("#qty", "2")
//!     .with_element("#total", "1.234,50 €");
//!
//! let cart = PageContext::new(Arc::new(document)).go_to::<CartPage>()?;
//!
//! assert_eq!(cart.total.get()?, Decimal::new(123450, 2));
//! cart.quantity.set(&5)?;
//! cart.quantity.should().equal(&5)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Equality
//!
//! Comparing a field with a value reads the field; comparing two fields
//! compares identity. See [`Field`](field::Field) for details.
//!
//! ## Logging
//!
//! The crate emits `tracing` events and never installs a subscriber itself.
//! Use [`logging::setup::init_logging`] or your own subscriber.

pub mod component;
pub mod config;
pub mod document;
pub mod error;
pub mod extensions;
pub mod field;
pub mod logging;
pub mod page;
pub mod prelude;
pub mod terms;
pub mod triggers;
pub mod verification;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_fixtures;
