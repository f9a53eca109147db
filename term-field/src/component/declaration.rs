//! Plain-data declarations of pages and their components.
//!
//! Declarations say what a page contains and how its members are configured.
//! They are turned into [`UIComponentMetadata`](super::UIComponentMetadata)
//! by the [`MetadataRegistry`](super::MetadataRegistry) each time a page is
//! constructed.

use crate::field::RandomizeSettings;
use crate::terms::TermCase;
use crate::triggers::BoxedTrigger;
use std::sync::Arc;

/// Declaration of a single component on a page.
///
/// # Examples
///
/// ```rust
/// use term_field::component::ComponentDeclaration;
/// use term_field::triggers::{TriggerEvents, VerifyContentContainsAll};
///
/// let amount = ComponentDeclaration::new("amount")
///     .with_locator("#amount")
///     .with_culture("de-DE")
///     .with_format("N2")
///     .with_trigger(
///         VerifyContentContainsAll::new(["EUR"]).with_events(TriggerEvents::AFTER_GET),
///     );
///
/// assert_eq!(amount.name(), "amount");
/// assert_eq!(amount.locator(), Some("#amount"));
/// assert_eq!(amount.triggers().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ComponentDeclaration {
    name: String,
    locator: Option<String>,
    culture: Option<String>,
    format: Option<String>,
    case: Option<TermCase>,
    randomize: Option<RandomizeSettings>,
    triggers: Vec<BoxedTrigger>,
}

impl ComponentDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: None,
            culture: None,
            format: None,
            case: None,
            randomize: None,
            triggers: Vec::new(),
        }
    }

    /// Sets the locator. Defaults to the component name.
    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }

    /// Sets the culture by name; resolved when the page is built.
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_case(mut self, case: TermCase) -> Self {
        self.case = Some(case);
        self
    }

    /// Overrides the global randomization settings for this component.
    pub fn with_randomize(mut self, settings: RandomizeSettings) -> Self {
        self.randomize = Some(settings);
        self
    }

    /// Appends a trigger. Triggers fire in the order they are added.
    pub fn with_trigger<T: crate::triggers::Trigger + 'static>(mut self, trigger: T) -> Self {
        self.triggers.push(Arc::new(trigger));
        self
    }

    /// Appends an already shared trigger.
    pub fn with_shared_trigger(mut self, trigger: BoxedTrigger) -> Self {
        self.triggers.push(trigger);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn case(&self) -> Option<TermCase> {
        self.case
    }

    pub fn randomize(&self) -> Option<&RandomizeSettings> {
        self.randomize.as_ref()
    }

    pub fn triggers(&self) -> &[BoxedTrigger] {
        &self.triggers
    }
}

/// Declaration of a page: its own settings and triggers, and its components.
///
/// Page-level culture, format and case apply to every component that does
/// not declare its own. Page-level triggers attach to the page component.
#[derive(Debug, Clone)]
pub struct PageDeclaration {
    name: String,
    culture: Option<String>,
    format: Option<String>,
    case: Option<TermCase>,
    triggers: Vec<BoxedTrigger>,
    components: Vec<ComponentDeclaration>,
}

impl PageDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            culture: None,
            format: None,
            case: None,
            triggers: Vec::new(),
            components: Vec::new(),
        }
    }

    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_case(mut self, case: TermCase) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_trigger<T: crate::triggers::Trigger + 'static>(mut self, trigger: T) -> Self {
        self.triggers.push(Arc::new(trigger));
        self
    }

    pub fn with_component(mut self, component: ComponentDeclaration) -> Self {
        self.components.push(component);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn culture(&self) -> Option<&str> {
        self.culture.as_deref()
    }

    pub fn format(&self) -> Option<&str> {
        self.format.as_deref()
    }

    pub fn case(&self) -> Option<TermCase> {
        self.case
    }

    pub fn triggers(&self) -> &[BoxedTrigger] {
        &self.triggers
    }

    pub fn components(&self) -> &[ComponentDeclaration] {
        &self.components
    }
}
