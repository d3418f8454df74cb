//! Shares of the column total.

use crate::{
    columnar::Column,
    datatypes::{Double, NumericValue},
};

/// Sum of all present values
fn present_sum<T: NumericValue>(values: &[T]) -> f64 {
    values
        .iter()
        .filter(|value| !value.is_missing())
        .map(|value| value.to_f64())
        .sum()
}

/// Share of `value` in `total`, scaled by `scale`.
/// A zero total yields zero for every value.
fn share(value: f64, total: f64, scale: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        value / total * scale
    }
}

impl<T: NumericValue> Column<T> {
    fn shares(&self, scale: f64) -> Column<Double> {
        let total = present_sum(self.values());
        super::map_present(self, self.name().to_string(), |value| {
            share(value, total, scale)
        })
    }

    /// Return a new column with every value divided by the sum of all present values.
    pub fn as_ratio(&self) -> Column<Double> {
        self.shares(1.0)
    }

    /// Return a new column with every value as a percentage of the sum of all present values.
    pub fn as_percent(&self) -> Column<Double> {
        self.shares(100.0)
    }
}

impl Column<Double> {
    fn convert_to_shares(&mut self, scale: f64) {
        let total = present_sum(self.values());
        for value in self.values_mut() {
            if !value.is_nan() {
                *value = Double::new(share(value.value(), total, scale));
            }
        }
    }

    /// Divide every value by the sum of all present values, in place.
    pub fn convert_to_ratio(&mut self) {
        self.convert_to_shares(1.0);
    }

    /// Express every value as a percentage of the sum of all present values, in place.
    pub fn convert_to_percent(&mut self) {
        self.convert_to_shares(100.0);
    }
}
