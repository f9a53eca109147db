//! Random-value helpers that project an editable field's value into another
//! numeric shape.
//!
//! A decimal-backed input is often driven from test code that wants a plain
//! integer; [`EditableFieldExt::set_random_as`] sets a random value and hands
//! back the narrowed projection.

use crate::error::{FieldError, Result};
use crate::field::EditableField;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Fallible conversion from a field value into a narrower representation.
pub trait NarrowFrom<S>: Sized {
    fn narrow_from(source: S) -> Result<Self>;
}

/// Truncates toward zero. A missing value or one outside the `i32` range is a
/// narrowing error.
impl NarrowFrom<Option<Decimal>> for i32 {
    fn narrow_from(source: Option<Decimal>) -> Result<Self> {
        match source {
            Some(value) => value
                .to_i32()
                .ok_or_else(|| FieldError::narrowing::<i32>(value.to_string())),
            None => Err(FieldError::narrowing::<i32>("None")),
        }
    }
}

/// Truncates toward zero; `None` stays `None`.
impl NarrowFrom<Option<Decimal>> for Option<i32> {
    fn narrow_from(source: Option<Decimal>) -> Result<Self> {
        source
            .map(|value| {
                value
                    .to_i32()
                    .ok_or_else(|| FieldError::narrowing::<Option<i32>>(value.to_string()))
            })
            .transpose()
    }
}

/// Unwraps an optional value; `None` is a narrowing error.
impl<D> NarrowFrom<Option<D>> for D {
    fn narrow_from(source: Option<D>) -> Result<Self> {
        source.ok_or_else(|| FieldError::narrowing::<D>("None"))
    }
}

/// Helpers available on every [`EditableField`].
pub trait EditableFieldExt: EditableField {
    /// Sets a random value and records it in `value`, narrowed to `V`.
    ///
    /// The field is written before narrowing: if the generated value cannot
    /// be represented as `V`, the error is returned, `value` is left
    /// untouched and the field keeps the generated value.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let mut quantity = 0_i32;
    /// let page = page.quantity.set_random_as(&mut quantity)?;
    /// ```
    fn set_random_as<V>(&self, value: &mut V) -> Result<Arc<Self::Owner>>
    where
        Self: Sized,
        V: NarrowFrom<Self::Value>,
    {
        let generated = self.randomize()?;
        *value = V::narrow_from(generated)?;
        self.owner()
    }
}

impl<F: EditableField> EditableFieldExt for F {}
