//! Page objects and their construction.

use crate::component::{
    Component, ComponentCore, ComponentId, Locator, MetadataRegistry, PageDeclaration,
};
use crate::config::FieldConfig;
use crate::document::Document;
use crate::error::Result;
use crate::field::{ContentField, InputField, Randomize};
use crate::triggers::{execute_triggers, TriggerEvents};
use std::sync::{Arc, Weak};
use tracing::{info, instrument};

/// A page of the application under test and the components declared on it.
///
/// Pages are built by [`PageContext::go_to`]. The page struct owns its
/// components; components refer back to the page through a weak reference,
/// so dropping the last `Arc` of the page drops the whole tree.
///
/// # Examples
///
/// ```rust
/// use term_field::prelude::*;
/// use rust_decimal::Decimal;
/// use std::sync::Arc;
///
/// #[derive(Debug)]
/// struct CheckoutPage {
///     page: ComponentCore,
///     total: ContentField<Decimal, CheckoutPage>,
/// }
///
/// impl PageObject for CheckoutPage {
///     fn declare() -> PageDeclaration {
///         PageDeclaration::new("CheckoutPage")
///             .with_culture("en-US")
///             .with_trigger(VerifyContentContainsAll::new(["Checkout"]))
///             .with_component(ComponentDeclaration::new("total").with_locator("#total"))
///     }
///
///     fn build(scope: &PageScope<'_, Self>) -> Self {
///         Self {
///             page: scope.page_core(),
///             total: scope.content_field("total"),
///         }
///     }
///
///     fn page(&self) -> &ComponentCore {
///         &self.page
///     }
///
///     fn components(&self) -> Vec<&dyn Component> {
///         vec![&self.total]
///     }
/// }
///
/// let document = InMemoryDocument::new()
///     .with_body("Checkout")
///     .with_element("#total", "1,234.50");
/// let context = PageContext::new(Arc::new(document));
///
/// let checkout = context.go_to::<CheckoutPage>().unwrap();
/// assert_eq!(checkout.total.get().unwrap(), Decimal::new(123450, 2));
/// ```
pub trait PageObject: Sized + Send + Sync + 'static {
    /// Declares the page settings, triggers and components.
    fn declare() -> PageDeclaration;

    /// Constructs the page from resolved metadata.
    fn build(scope: &PageScope<'_, Self>) -> Self;

    /// The page's own component.
    fn page(&self) -> &ComponentCore;

    /// Components that receive initialization triggers, in firing order.
    fn components(&self) -> Vec<&dyn Component> {
        Vec::new()
    }
}

/// Everything a page needs while it is being built.
///
/// The owner reference handed to fields cannot be upgraded until
/// [`PageContext::go_to`] has finished constructing the page.
pub struct PageScope<'a, P> {
    owner: &'a Weak<P>,
    page_name: &'a str,
    registry: &'a MetadataRegistry,
    document: &'a Arc<dyn Document>,
}

impl<'a, P: PageObject> PageScope<'a, P> {
    /// A weak reference to the page under construction.
    pub fn owner(&self) -> Weak<P> {
        Weak::clone(self.owner)
    }

    pub fn registry(&self) -> &MetadataRegistry {
        self.registry
    }

    /// The page component, addressing the document root.
    pub fn page_core(&self) -> ComponentCore {
        ComponentCore::new(
            ComponentId::page(self.page_name),
            "page",
            Locator::root(),
            Arc::clone(self.registry.page()),
            Arc::clone(self.document),
        )
    }

    /// A plain component of the given kind.
    pub fn control(&self, name: &str, kind: &'static str) -> ComponentCore {
        ComponentCore::new(
            ComponentId::member(self.page_name, name),
            kind,
            self.registry.locator(name),
            self.registry.resolve(name),
            Arc::clone(self.document),
        )
    }

    /// A content field named `name`.
    pub fn content_field<T>(&self, name: &str) -> ContentField<T, P> {
        ContentField::new(self.control(name, "field"), self.owner())
    }

    /// An input field named `name` with the default random generator.
    pub fn input_field<T: Randomize + 'static>(&self, name: &str) -> InputField<T, P> {
        InputField::new(self.control(name, "input"), self.owner())
    }
}

/// Entry point for navigating to pages of a document.
#[derive(Clone)]
pub struct PageContext {
    document: Arc<dyn Document>,
    config: Arc<FieldConfig>,
}

impl PageContext {
    /// Creates a context with the default configuration.
    pub fn new(document: Arc<dyn Document>) -> Self {
        Self {
            document,
            config: Arc::new(FieldConfig::default()),
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    pub fn document(&self) -> &Arc<dyn Document> {
        &self.document
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Builds page `P` and runs its initialization triggers.
    ///
    /// `ON_PAGE_OBJECT_INIT` fires on the page and then on each of its
    /// [`components`](PageObject::components); `ON_PAGE_OBJECT_INIT_COMPLETED`
    /// fires on the page last. The first failing trigger aborts navigation.
    #[instrument(skip(self), fields(page = std::any::type_name::<P>()))]
    pub fn go_to<P: PageObject>(&self) -> Result<Arc<P>> {
        let declaration = P::declare();
        let registry = MetadataRegistry::build(&declaration, &self.config)?;

        let page = Arc::new_cyclic(|owner| {
            let scope = PageScope {
                owner,
                page_name: declaration.name(),
                registry: &registry,
                document: &self.document,
            };
            P::build(&scope)
        });

        info!(
            page = declaration.name(),
            components = registry.len(),
            "Initializing page object"
        );

        execute_triggers(page.page(), TriggerEvents::ON_PAGE_OBJECT_INIT)?;
        for component in page.components() {
            execute_triggers(component, TriggerEvents::ON_PAGE_OBJECT_INIT)?;
        }
        execute_triggers(page.page(), TriggerEvents::ON_PAGE_OBJECT_INIT_COMPLETED)?;

        info!(page = declaration.name(), "Page object initialized");
        Ok(page)
    }
}

impl std::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentDeclaration;
    use crate::document::InMemoryDocument;
    use crate::error::FieldError;
    use crate::field::{ContentField, Field};
    use crate::test_fixtures::{order_document, OrderPage};
    use crate::triggers::{FnTrigger, VerifyContentContainsAll};
    use rust_decimal::Decimal;
    use std::cell::RefCell;

    thread_local! {
        static INIT_LOG: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    fn record(label: &'static str, on: TriggerEvents) -> FnTrigger {
        FnTrigger::new(label, on, move |context| {
            let entry = format!("{label}:{}:{}", context.component().name(), context.event());
            INIT_LOG.with(|log| log.borrow_mut().push(entry));
            Ok(())
        })
    }

    #[derive(Debug)]
    struct TracedPage {
        page: ComponentCore,
        first: ContentField<String, TracedPage>,
        second: ContentField<String, TracedPage>,
    }

    impl PageObject for TracedPage {
        fn declare() -> PageDeclaration {
            PageDeclaration::new("TracedPage")
                .with_trigger(record(
                    "page",
                    TriggerEvents::ON_PAGE_OBJECT_INIT | TriggerEvents::ON_PAGE_OBJECT_INIT_COMPLETED,
                ))
                .with_component(
                    ComponentDeclaration::new("first")
                        .with_trigger(record("member", TriggerEvents::ON_PAGE_OBJECT_INIT)),
                )
                .with_component(
                    ComponentDeclaration::new("second")
                        .with_trigger(record("member", TriggerEvents::ON_PAGE_OBJECT_INIT))
                        .with_trigger(record("get", TriggerEvents::BEFORE_GET)),
                )
        }

        fn build(scope: &PageScope<'_, Self>) -> Self {
            Self {
                page: scope.page_core(),
                first: scope.content_field("first"),
                second: scope.content_field("second"),
            }
        }

        fn page(&self) -> &ComponentCore {
            &self.page
        }

        fn components(&self) -> Vec<&dyn Component> {
            vec![&self.first, &self.second]
        }
    }

    #[derive(Debug)]
    struct GuardedPage {
        page: ComponentCore,
    }

    impl PageObject for GuardedPage {
        fn declare() -> PageDeclaration {
            PageDeclaration::new("GuardedPage")
                .with_trigger(VerifyContentContainsAll::new(["Welcome", "Dashboard"]))
        }

        fn build(scope: &PageScope<'_, Self>) -> Self {
            Self {
                page: scope.page_core(),
            }
        }

        fn page(&self) -> &ComponentCore {
            &self.page
        }
    }

    #[test]
    fn test_go_to_builds_fields() {
        let context = PageContext::new(Arc::new(order_document()));
        let order = context.go_to::<OrderPage>().unwrap();

        assert_eq!(order.heading.get().unwrap(), "New order");
        assert_eq!(order.amount.get().unwrap(), Some(Decimal::new(125000, 2)));
        assert_eq!(order.quantity.get().unwrap(), 3);
        assert_eq!(order.amount.id().as_str(), "OrderPage.amount");
        assert_eq!(order.page().full_name(), "\"OrderPage\" page");
    }

    #[test]
    fn test_fields_point_back_to_owner() {
        let context = PageContext::new(Arc::new(order_document()));
        let order = context.go_to::<OrderPage>().unwrap();
        let owner = order.quantity.owner().unwrap();
        assert!(Arc::ptr_eq(&order, &owner));
    }

    #[test]
    fn test_init_triggers_fire_page_then_components() {
        let document = InMemoryDocument::new()
            .with_body("")
            .with_element("first", "1")
            .with_element("second", "2");
        let context = PageContext::new(Arc::new(document));
        context.go_to::<TracedPage>().unwrap();

        assert_eq!(
            INIT_LOG.with(|log| log.borrow().clone()),
            vec![
                "page:TracedPage:OnPageObjectInit".to_string(),
                "member:first:OnPageObjectInit".to_string(),
                "member:second:OnPageObjectInit".to_string(),
                "page:TracedPage:OnPageObjectInitCompleted".to_string(),
            ]
        );
    }

    #[test]
    fn test_failing_init_trigger_aborts_navigation() {
        let context = PageContext::new(Arc::new(
            InMemoryDocument::new().with_body("Welcome to the App"),
        ));
        let err = context.go_to::<GuardedPage>().unwrap_err();
        assert_eq!(err.missing_values(), Some(&["Dashboard".to_string()][..]));

        let context = PageContext::new(Arc::new(
            InMemoryDocument::new().with_body("Welcome to the Dashboard"),
        ));
        assert!(context.go_to::<GuardedPage>().is_ok());
    }

    #[test]
    fn test_invalid_config_fails_navigation() {
        let context = PageContext::new(Arc::new(order_document()))
            .with_config(FieldConfig::default().with_culture("nope"));
        let err = context.go_to::<OrderPage>().unwrap_err();
        assert!(matches!(err, FieldError::Configuration(_)));
    }
}
