//! This module collects null-aware elementwise and statistical operations on numeric columns.
//!
//! All operations compute in [f64] through [NumericValue::to_f64](crate::datatypes::NumericValue::to_f64),
//! so sentinels enter the computation as NaN.
//! Derived columns are of type [Double](crate::datatypes::Double),
//! with missing results stored as NaN.

pub mod arithmetic;
pub mod ratio;
pub mod statistics;
pub mod transforms;

use crate::{
    columnar::Column,
    datatypes::{Double, NumericValue},
};

/// Map every present value of `column` through `function`, keeping missing values missing.
pub(crate) fn map_present<T, F>(column: &Column<T>, name: String, function: F) -> Column<Double>
where
    T: NumericValue,
    F: Fn(f64) -> f64,
{
    let values = column
        .iter()
        .map(|value| {
            if value.is_missing() {
                Double::NAN
            } else {
                Double::new(function(value.to_f64()))
            }
        })
        .collect();

    Column::from_values(name, values)
}
