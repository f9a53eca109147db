//! Random value generation for editable fields.

use crate::error::{FieldError, Result};
use rand::distr::Alphanumeric;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Bounds and shape of randomly generated values.
///
/// Numbers are drawn uniformly from `min..=max`; `precision` is the number of
/// fractional digits for decimals and floats. Strings are `string_length`
/// alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomizeSettings {
    pub min: i64,
    pub max: i64,
    pub precision: u32,
    pub string_length: usize,
}

impl Default for RandomizeSettings {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            precision: 0,
            string_length: 15,
        }
    }
}

impl RandomizeSettings {
    /// Largest supported precision.
    pub const MAX_PRECISION: u32 = 9;

    /// Creates settings for the range `min..=max`.
    pub fn range(min: i64, max: i64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_string_length(mut self, length: usize) -> Self {
        self.string_length = length;
        self
    }

    /// Checks that the range is not inverted and the precision is supported.
    pub fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(FieldError::Configuration(format!(
                "randomize range is inverted: min {} > max {}",
                self.min, self.max
            )));
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(FieldError::Configuration(format!(
                "randomize precision {} exceeds the maximum of {}",
                self.precision,
                Self::MAX_PRECISION
            )));
        }
        Ok(())
    }
}

/// A type that can produce a random value within [`RandomizeSettings`].
pub trait Randomize: Sized {
    fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self>;
}

impl Randomize for Decimal {
    fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self> {
        settings.validate()?;
        let factor = 10_i128.pow(settings.precision);
        let low = i128::from(settings.min) * factor;
        let high = i128::from(settings.max) * factor;
        let mantissa = rng.random_range(low..=high);
        Decimal::try_from_i128_with_scale(mantissa, settings.precision)
            .map_err(|e| FieldError::Configuration(format!("randomize range too wide: {e}")))
    }
}

macro_rules! impl_integer_randomize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Randomize for $ty {
                fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self> {
                    settings.validate()?;
                    let clamp = |bound: i64| {
                        i128::from(bound).clamp(<$ty>::MIN as i128, <$ty>::MAX as i128) as $ty
                    };
                    Ok(rng.random_range(clamp(settings.min)..=clamp(settings.max)))
                }
            }
        )*
    };
}

impl_integer_randomize!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

macro_rules! impl_float_randomize {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Randomize for $ty {
                fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self> {
                    settings.validate()?;
                    let value = rng.random_range(settings.min as $ty..=settings.max as $ty);
                    let factor = (10.0 as $ty).powi(settings.precision as i32);
                    Ok((value * factor).round() / factor)
                }
            }
        )*
    };
}

impl_float_randomize!(f32, f64);

impl Randomize for bool {
    fn randomize<R: Rng>(rng: &mut R, _settings: &RandomizeSettings) -> Result<Self> {
        Ok(rng.random_bool(0.5))
    }
}

impl Randomize for String {
    fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self> {
        Ok((0..settings.string_length)
            .map(|_| char::from(rng.sample(Alphanumeric)))
            .collect())
    }
}

/// Optional values are always generated as `Some`.
impl<T: Randomize> Randomize for Option<T> {
    fn randomize<R: Rng>(rng: &mut R, settings: &RandomizeSettings) -> Result<Self> {
        T::randomize(rng, settings).map(Some)
    }
}

/// Produces values for an editable field's random-value operation.
pub trait ValueGenerator<T>: Send + Sync {
    fn generate(&self) -> Result<T>;
}

/// Generates values with the thread-local RNG within fixed settings.
#[derive(Debug, Clone)]
pub struct RandomValueGenerator<T> {
    settings: RandomizeSettings,
    _value: PhantomData<fn() -> T>,
}

impl<T> RandomValueGenerator<T> {
    pub fn new(settings: RandomizeSettings) -> Self {
        Self {
            settings,
            _value: PhantomData,
        }
    }

    pub fn settings(&self) -> &RandomizeSettings {
        &self.settings
    }
}

impl<T: Randomize> ValueGenerator<T> for RandomValueGenerator<T> {
    fn generate(&self) -> Result<T> {
        T::randomize(&mut rand::rng(), &self.settings)
    }
}

/// Any closure returning a value is a generator; handy for fixed sequences
/// in tests.
impl<T, F> ValueGenerator<T> for F
where
    F: Fn() -> T + Send + Sync,
{
    fn generate(&self) -> Result<T> {
        Ok(self())
    }
}
