//! Components, their declarations and resolved metadata.

mod component;
mod declaration;
mod metadata;
mod registry;

pub use component::{Component, ComponentCore, ComponentId, Locator};
pub use declaration::{ComponentDeclaration, PageDeclaration};
pub use metadata::{MetadataLevel, UIComponentMetadata, UIComponentMetadataBuilder};
pub use registry::MetadataRegistry;
