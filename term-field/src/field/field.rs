//! The generic field abstraction.

use crate::component::Component;
use crate::error::Result;
use crate::log_value;
use crate::logging::truncate_field;
use crate::page::PageObject;
use crate::terms::{TermConvert, TermOptions, TermResolver};
use crate::triggers::{execute_triggers, TriggerEvents};
use crate::verification::FieldVerificationProvider;
use std::fmt::Debug;
use std::sync::Arc;

/// A typed value accessor bound to a location in a rendered document.
///
/// Implementors provide the raw value retrieval ([`get_value`]); everything
/// else is derived. Reading through [`get`] fires
/// [`BEFORE_GET`](TriggerEvents::BEFORE_GET) and
/// [`AFTER_GET`](TriggerEvents::AFTER_GET) around the retrieval, with the
/// field itself as the trigger component. Values are never cached: every
/// read goes back to the document.
///
/// # Equality
///
/// A field compared with a *value* ([`equals_value`]) fetches its current
/// value and compares that. A field compared with another *field*
/// ([`is_same`], and the `PartialEq` impls of the built-in fields) compares
/// identity only. Two distinct fields holding equal values are not equal;
/// compare their [`value`](Field::value)s explicitly for that.
///
/// [`get_value`]: Field::get_value
/// [`get`]: Field::get
/// [`equals_value`]: Field::equals_value
/// [`is_same`]: Field::is_same
pub trait Field: Component {
    /// The type of the field's data.
    type Value: TermConvert + PartialEq + Debug;

    /// The page object owning the field.
    type Owner: PageObject;

    /// Retrieves the raw value without firing triggers.
    fn get_value(&self) -> Result<Self::Value>;

    /// Term options used to convert the value, fixed at construction.
    fn value_term_options(&self) -> &TermOptions;

    /// The owning page object.
    fn owner(&self) -> Result<Arc<Self::Owner>>;

    /// Label used for the value in assertion messages.
    fn data_provider_name(&self) -> &str {
        "value"
    }

    /// Reads the value, firing `BEFORE_GET` and `AFTER_GET` triggers.
    ///
    /// A failing trigger or conversion aborts the read and is returned.
    fn get(&self) -> Result<Self::Value>
    where
        Self: Sized,
    {
        execute_triggers(self, TriggerEvents::BEFORE_GET)?;
        let value = self.get_value()?;
        execute_triggers(self, TriggerEvents::AFTER_GET)?;

        let log_config = self.metadata().log_config();
        log_value!(
            log_config,
            component.id = %self.id(),
            value = %truncate_field(&format!("{value:?}"), log_config.max_field_length),
            "Read field value"
        );
        Ok(value)
    }

    /// Same as [`get`](Field::get).
    fn value(&self) -> Result<Self::Value>
    where
        Self: Sized,
    {
        self.get()
    }

    /// Explicit conversion of the field to its value; same as
    /// [`get`](Field::get).
    fn to_value(&self) -> Result<Self::Value>
    where
        Self: Sized,
    {
        self.get()
    }

    /// Fetches the current value and compares it with `expected`.
    ///
    /// Read failures are returned rather than reported as inequality.
    fn equals_value(&self, expected: &Self::Value) -> Result<bool>
    where
        Self: Sized,
    {
        Ok(self.get()? == *expected)
    }

    /// Returns true if `other` is this very field instance.
    fn is_same(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        std::ptr::eq(self, other)
    }

    /// Starts a verification of the field's value.
    fn should(&self) -> FieldVerificationProvider<'_, Self>
    where
        Self: Sized,
    {
        FieldVerificationProvider::new(self)
    }

    /// Renders a value under the field's term options.
    fn convert_value_to_string(&self, value: &Self::Value) -> String {
        TermResolver::to_string(value, self.value_term_options())
    }

    /// Parses text under the field's term options.
    fn convert_string_to_value(&self, text: &str) -> Result<Self::Value> {
        TermResolver::from_string(text, self.value_term_options())
    }
}
