//! Verification of field values: the attachment point behind
//! [`Field::should`].

use crate::error::{FieldError, Result};
use crate::field::Field;
use std::sync::Arc;
use tracing::debug;

/// Assertions over a field's current value.
///
/// Each assertion reads the value afresh (firing get triggers), returns the
/// owner page object on success and [`FieldError::AssertionFailed`] when the
/// expectation does not hold.
///
/// # Examples
///
/// ```rust,ignore
/// page.total.should().equal(&Decimal::new(4200, 2))?;
/// page.status.should().not().equal(&Status::Failed)?;
/// page.count.should().satisfy(|count| *count > 0, "be positive")?;
/// ```
#[derive(Debug)]
pub struct FieldVerificationProvider<'a, F> {
    field: &'a F,
    negated: bool,
}

impl<'a, F: Field> FieldVerificationProvider<'a, F> {
    pub fn new(field: &'a F) -> Self {
        Self {
            field,
            negated: false,
        }
    }

    /// Negates the following assertion.
    pub fn not(self) -> Self {
        Self {
            field: self.field,
            negated: !self.negated,
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Asserts that the value equals `expected`.
    pub fn equal(&self, expected: &F::Value) -> Result<Arc<F::Owner>> {
        let expected_term = self.field.convert_value_to_string(expected);
        self.check(
            |actual| actual == expected,
            &format!("equal \"{expected_term}\""),
        )
    }

    /// Asserts that `predicate` holds for the value.
    ///
    /// `description` completes the sentence "expected value to ...".
    pub fn satisfy<P>(&self, predicate: P, description: &str) -> Result<Arc<F::Owner>>
    where
        P: FnOnce(&F::Value) -> bool,
    {
        self.check(predicate, description)
    }

    fn check<P>(&self, predicate: P, description: &str) -> Result<Arc<F::Owner>>
    where
        P: FnOnce(&F::Value) -> bool,
    {
        let actual = self.field.get()?;
        if predicate(&actual) != self.negated {
            debug!(
                component.id = %self.field.id(),
                negated = self.negated,
                expectation = description,
                "Verification passed"
            );
            return self.field.owner();
        }

        let actual_term = self.field.convert_value_to_string(&actual);
        let not = if self.negated { "not " } else { "" };
        Err(FieldError::assertion_failed(
            self.field.full_name(),
            format!(
                "expected {} {not}to {description}, but was \"{actual_term}\"",
                self.field.data_provider_name()
            ),
        ))
    }
}
