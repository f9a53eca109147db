//! Field controls.
//!
//! [`Field`] is the read side shared by all fields; [`EditableField`] adds
//! writing and random values. [`ContentField`] and [`InputField`] are the
//! two concrete controls.

mod content;
mod field;
mod input;
mod randomize;

pub use content::ContentField;
pub use field::Field;
pub use input::{EditableField, InputField};
pub use randomize::{RandomValueGenerator, Randomize, RandomizeSettings, ValueGenerator};
