//! Resolves page declarations into per-component metadata.

use super::{ComponentDeclaration, Locator, MetadataLevel, PageDeclaration, UIComponentMetadata};
use crate::config::FieldConfig;
use crate::error::{ErrorContext, FieldError, Result};
use crate::perf_debug;
use crate::terms::Culture;
use std::collections::HashMap;
use std::sync::Arc;

/// Component metadata for one page, keyed by component name.
///
/// Built once per page construction by walking the page declaration. Lookups
/// of undeclared names yield metadata that inherits the page and global
/// levels and has no triggers.
#[derive(Debug, Clone)]
pub struct MetadataRegistry {
    page: Arc<UIComponentMetadata>,
    page_level: MetadataLevel,
    global_level: MetadataLevel,
    config: FieldConfig,
    components: HashMap<String, Arc<UIComponentMetadata>>,
    locators: HashMap<String, Locator>,
    order: Vec<String>,
}

impl MetadataRegistry {
    /// Builds the registry for `declaration` under the global `config`.
    ///
    /// Fails with a configuration error on unknown culture names, duplicate
    /// component names or invalid randomization settings.
    pub fn build(declaration: &PageDeclaration, config: &FieldConfig) -> Result<Self> {
        let global_level = MetadataLevel {
            culture: resolve_culture(config.culture())
                .context("Invalid global culture")?,
            format: config.format().map(str::to_string),
            case: config.case(),
        };
        config
            .randomize()
            .validate()
            .context("Invalid global randomize settings")?;

        let page_level = MetadataLevel {
            culture: resolve_culture(declaration.culture())
                .with_context(|| format!("Invalid culture on page {}", declaration.name()))?,
            format: declaration.format().map(str::to_string),
            case: declaration.case(),
        };

        let page = UIComponentMetadata::builder(declaration.name())
            .page(page_level.clone())
            .global(global_level.clone())
            .randomize(config.randomize().clone())
            .log_config(config.log_config().clone())
            .triggers(declaration.triggers().iter().cloned())
            .build();

        let mut registry = Self {
            page: Arc::new(page),
            page_level,
            global_level,
            config: config.clone(),
            components: HashMap::with_capacity(declaration.components().len()),
            locators: HashMap::with_capacity(declaration.components().len()),
            order: Vec::with_capacity(declaration.components().len()),
        };

        for component in declaration.components() {
            registry.register(component).with_context(|| {
                format!(
                    "Invalid declaration of {}.{}",
                    declaration.name(),
                    component.name()
                )
            })?;
        }

        perf_debug!(
            config.log_config(),
            page = declaration.name(),
            components = registry.order.len(),
            "Built component metadata registry"
        );
        Ok(registry)
    }

    fn register(&mut self, declaration: &ComponentDeclaration) -> Result<()> {
        let name = declaration.name();
        if self.components.contains_key(name) {
            return Err(FieldError::Configuration(format!(
                "component '{name}' is declared more than once"
            )));
        }

        let randomize = declaration
            .randomize()
            .unwrap_or_else(|| self.config.randomize())
            .clone();
        randomize.validate()?;

        let member = MetadataLevel {
            culture: resolve_culture(declaration.culture())?,
            format: declaration.format().map(str::to_string),
            case: declaration.case(),
        };

        let metadata = UIComponentMetadata::builder(name)
            .member(member)
            .page(self.page_level.clone())
            .global(self.global_level.clone())
            .randomize(randomize)
            .log_config(self.config.log_config().clone())
            .triggers(declaration.triggers().iter().cloned())
            .build();

        let locator = declaration.locator().unwrap_or(name);
        self.locators.insert(name.to_string(), Locator::new(locator));
        self.components.insert(name.to_string(), Arc::new(metadata));
        self.order.push(name.to_string());
        Ok(())
    }

    /// Metadata of the page component.
    pub fn page(&self) -> &Arc<UIComponentMetadata> {
        &self.page
    }

    /// Metadata of a declared component.
    pub fn get(&self, name: &str) -> Option<&Arc<UIComponentMetadata>> {
        self.components.get(name)
    }

    /// Metadata of `name`, inherited from the page when undeclared.
    pub fn resolve(&self, name: &str) -> Arc<UIComponentMetadata> {
        match self.components.get(name) {
            Some(metadata) => Arc::clone(metadata),
            None => Arc::new(
                UIComponentMetadata::builder(name)
                    .page(self.page_level.clone())
                    .global(self.global_level.clone())
                    .randomize(self.config.randomize().clone())
                    .log_config(self.config.log_config().clone())
                    .build(),
            ),
        }
    }

    /// The declared locator of `name`, or the name itself.
    pub fn locator(&self, name: &str) -> Locator {
        self.locators
            .get(name)
            .cloned()
            .unwrap_or_else(|| Locator::new(name))
    }

    /// Declared component names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn resolve_culture(name: Option<&str>) -> Result<Option<&'static Culture>> {
    name.map(Culture::find).transpose()
}
