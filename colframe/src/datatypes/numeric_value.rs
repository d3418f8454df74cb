//! This module defines the trait [NumericValue].

use num::ToPrimitive;

use crate::error::ConversionError;

use super::{column_type_name::out_of_range, ColumnValue, Double, Float};

/// A [ColumnValue] that can be viewed as a floating point number.
///
/// Vectorized arithmetic and aggregations compute in [f64];
/// this trait converts between that representation and the stored type.
pub trait NumericValue: ColumnValue + Copy {
    /// Returns the value as [f64], mapping the sentinel to NaN.
    fn to_f64(self) -> f64;

    /// Converts an [f64] back into this type, mapping NaN to the sentinel.
    ///
    /// # Errors
    /// Returns an error if `value` is not exactly representable,
    /// e.g. if it has a fractional part, is out of range, or would collide with the sentinel.
    fn from_f64(value: f64) -> Result<Self, ConversionError>;
}

/// Largest magnitude up to which every integer is exactly representable as [f64] (2^53 - 1).
/// Larger results may have been rounded on the way through [f64] and are rejected.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

macro_rules! integer_numeric_value {
    ($type:ty) => {
        impl NumericValue for $type {
            fn to_f64(self) -> f64 {
                if self.is_missing() {
                    f64::NAN
                } else {
                    ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
                }
            }

            fn from_f64(value: f64) -> Result<Self, ConversionError> {
                if value.is_nan() {
                    return Ok(Self::missing_value());
                }

                if value.fract() != 0.0 || value.abs() > MAX_EXACT_INTEGER {
                    return Err(out_of_range(value, Self::TYPE));
                }

                match <$type as num::NumCast>::from(value) {
                    Some(result) if !result.is_missing() => Ok(result),
                    _ => Err(out_of_range(value, Self::TYPE)),
                }
            }
        }
    };
}

integer_numeric_value!(i8);
integer_numeric_value!(i16);
integer_numeric_value!(i32);
integer_numeric_value!(i64);

impl NumericValue for Double {
    fn to_f64(self) -> f64 {
        self.value()
    }

    fn from_f64(value: f64) -> Result<Self, ConversionError> {
        Ok(Double::new(value))
    }
}

impl NumericValue for Float {
    fn to_f64(self) -> f64 {
        f64::from(self.value())
    }

    fn from_f64(value: f64) -> Result<Self, ConversionError> {
        if value.is_finite() && value.abs() > f64::from(f32::MAX) {
            return Err(out_of_range(value, Self::TYPE));
        }

        Ok(Float::new(value as f32))
    }
}
