//! Editable fields backed by an element value.

use super::{Field, RandomValueGenerator, Randomize, ValueGenerator};
use crate::component::{Component, ComponentCore, ComponentId, UIComponentMetadata};
use crate::error::{FieldError, Result};
use crate::log_value;
use crate::logging::truncate_field;
use crate::page::PageObject;
use crate::terms::{TermConvert, TermOptions, TermResolver};
use crate::triggers::{execute_triggers, TriggerEvents};
use std::fmt;
use std::sync::{Arc, Weak};

/// A field whose value can be written.
///
/// Implementors provide the raw write ([`set_value`](Self::set_value)) and
/// random generation; [`set`](Self::set) wraps the write in
/// [`BEFORE_SET`](TriggerEvents::BEFORE_SET) and
/// [`AFTER_SET`](TriggerEvents::AFTER_SET) triggers.
pub trait EditableField: Field {
    /// Writes the raw value without firing triggers.
    fn set_value(&self, value: &Self::Value) -> Result<()>;

    /// Produces a random value suitable for this field.
    fn generate_random_value(&self) -> Result<Self::Value>;

    /// Writes `value`, firing `BEFORE_SET` and `AFTER_SET` triggers, and
    /// returns the owner for chaining.
    fn set(&self, value: &Self::Value) -> Result<Arc<Self::Owner>>
    where
        Self: Sized,
    {
        execute_triggers(self, TriggerEvents::BEFORE_SET)?;
        self.set_value(value)?;
        execute_triggers(self, TriggerEvents::AFTER_SET)?;

        let log_config = self.metadata().log_config();
        log_value!(
            log_config,
            component.id = %self.id(),
            value = %truncate_field(&format!("{value:?}"), log_config.max_field_length),
            "Set field value"
        );
        self.owner()
    }

    /// Generates a random value, sets it and returns it.
    fn randomize(&self) -> Result<Self::Value>
    where
        Self: Sized,
    {
        let value = self.generate_random_value()?;
        self.set(&value)?;
        Ok(value)
    }

    /// Sets a random value, records it in `value` and returns the owner.
    fn set_random(&self, value: &mut Self::Value) -> Result<Arc<Self::Owner>>
    where
        Self: Sized,
    {
        *value = self.randomize()?;
        self.owner()
    }
}

/// An input element: reads and writes the element value, converting through
/// the field's term options.
///
/// Random values come from a [`ValueGenerator`]; by default a
/// [`RandomValueGenerator`] using the component's randomization settings.
pub struct InputField<T, O> {
    core: ComponentCore,
    owner: Weak<O>,
    value_term_options: Arc<TermOptions>,
    generator: Box<dyn ValueGenerator<T>>,
}

impl<T, O> InputField<T, O>
where
    T: Randomize + 'static,
{
    /// Creates an input field with term options derived from its metadata.
    pub fn new(core: ComponentCore, owner: Weak<O>) -> Self {
        let generator = RandomValueGenerator::<T>::new(core.metadata().randomize().clone());
        Self::with_generator(core, owner, generator)
    }
}

impl<T, O> InputField<T, O> {
    /// Creates an input field drawing random values from `generator`.
    pub fn with_generator<G>(core: ComponentCore, owner: Weak<O>, generator: G) -> Self
    where
        G: ValueGenerator<T> + 'static,
    {
        Self {
            value_term_options: Arc::new(TermOptions::from_metadata(core.metadata())),
            core,
            owner,
            generator: Box::new(generator),
        }
    }

    /// Adjusts the term options derived from metadata.
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

    /// Replaces the random value generator.
    pub fn map_generator<G>(mut self, generator: G) -> Self
    where
        G: ValueGenerator<T> + 'static,
    {
        self.generator = Box::new(generator);
        self
    }

    pub fn core(&self) -> &ComponentCore {
        &self.core
    }
}

impl<T, O> Component for InputField<T, O>
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

impl<T, O> Field for InputField<T, O>
where
    T: TermConvert + PartialEq + fmt::Debug + 'static,
    O: PageObject,
{
    type Value = T;
    type Owner = O;

    fn get_value(&self) -> Result<T> {
        let text = self.core.value()?;
        TermResolver::from_string(&text, &self.value_term_options)
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

impl<T, O> EditableField for InputField<T, O>
where
    T: TermConvert + PartialEq + fmt::Debug + 'static,
    O: PageObject,
{
    fn set_value(&self, value: &T) -> Result<()> {
        let text = self.convert_value_to_string(value);
        self.core.set_value(&text)
    }

    fn generate_random_value(&self) -> Result<T> {
        self.generator.generate()
    }
}

impl<T, O> PartialEq for InputField<T, O> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl<T, O> Eq for InputField<T, O> {}

impl<T, O> fmt::Debug for InputField<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputField")
            .field("id", self.core.id())
            .field("value_term_options", &self.value_term_options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ComponentDeclaration, Locator, PageDeclaration};
    use crate::document::{Document, InMemoryDocument};
    use crate::page::{PageContext, PageObject, PageScope};
    use crate::triggers::FnTrigger;
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    thread_local! {
        static SET_LOG: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    fn observe(label: &'static str, on: TriggerEvents) -> FnTrigger {
        FnTrigger::new(label, on, move |context| {
            let content = context.component().content()?;
            SET_LOG.with(|log| log.borrow_mut().push(format!("{label}={content}")));
            Ok(())
        })
    }

    #[derive(Debug)]
    struct PaymentPage {
        page: ComponentCore,
        amount: InputField<Option<Decimal>, PaymentPage>,
    }

    impl PageObject for PaymentPage {
        fn declare() -> PageDeclaration {
            PageDeclaration::new("PaymentPage").with_culture("de-DE").with_component(
                ComponentDeclaration::new("amount")
                    .with_locator("#amount")
                    .with_format("N2")
                    .with_trigger(observe("before", TriggerEvents::BEFORE_SET))
                    .with_trigger(observe("after", TriggerEvents::AFTER_SET)),
            )
        }

        fn build(scope: &PageScope<'_, Self>) -> Self {
            Self {
                page: scope.page_core(),
                amount: scope
                    .input_field("amount")
                    .map_generator(|| Some(Decimal::new(4250, 2))),
            }
        }

        fn page(&self) -> &ComponentCore {
            &self.page
        }
    }

    #[test]
    fn test_set_fires_triggers_around_write() {
        let document = InMemoryDocument::new().with_input("#amount", "0,00");
        let payment = PageContext::new(Arc::new(document.clone()))
            .go_to::<PaymentPage>()
            .unwrap();

        let owner = payment.amount.set(&Some(Decimal::new(123456, 2))).unwrap();
        assert!(Arc::ptr_eq(&owner, &payment));
        assert_eq!(document.value(&Locator::from("#amount")).unwrap(), "1.234,56");

        let log = SET_LOG.with(|log| log.borrow().clone());
        assert_eq!(log, vec!["before=0,00".to_string(), "after=1.234,56".to_string()]);
    }

    #[test]
    fn test_randomize_uses_generator_and_writes() {
        let document = InMemoryDocument::new().with_input("#amount", "");
        let payment = PageContext::new(Arc::new(document.clone()))
            .go_to::<PaymentPage>()
            .unwrap();
        assert_eq!(payment.amount.get().unwrap(), None);

        let mut recorded = None;
        payment.amount.set_random(&mut recorded).unwrap();
        assert_eq!(recorded, Some(Decimal::new(4250, 2)));
        assert_eq!(document.value(&Locator::from("#amount")).unwrap(), "42,50");
        assert_eq!(payment.amount.get().unwrap(), recorded);
    }

    #[test]
    fn test_default_generator_respects_settings() {
        let metadata = UIComponentMetadata::builder("count")
            .randomize(crate::field::RandomizeSettings::range(7, 7))
            .build();
        let core = ComponentCore::new(
            ComponentId::member("Detached", "count"),
            "input",
            Locator::from("#count"),
            Arc::new(metadata),
            Arc::new(InMemoryDocument::new().with_input("#count", "")),
        );
        let field = InputField::<u32, PaymentPage>::new(core, Weak::new());
        assert_eq!(field.generate_random_value().unwrap(), 7);
        assert_eq!(field.full_name(), "\"count\" input");
    }
}
