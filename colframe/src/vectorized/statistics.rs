//! Descriptive statistics over the present values of a column.
//!
//! Missing values never cause an error; they are skipped and their number is logged.

use itertools::Itertools;
use linked_hash_map::LinkedHashMap;
use serde::Serialize;

use crate::{
    aggregates::{AggregateOperation, Aggregated},
    columnar::Column,
    datatypes::{ColumnValue, NumericValue},
};

/// Summary of the distribution of a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of present values
    pub count: usize,
    /// Number of missing values
    pub missing: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation
    pub std: f64,
    /// Smallest value
    pub min: f64,
    /// Largest value
    pub max: f64,
}

impl<T: ColumnValue> Column<T> {
    /// Return the most frequent present value, or `None` if there is none.
    ///
    /// Ties are broken in favor of the value that occurs first in the column.
    pub fn mode(&self) -> Option<T> {
        let mut frequencies = LinkedHashMap::<&T, usize>::new();
        for value in self.present_values() {
            *frequencies.entry(value).or_insert(0) += 1;
        }

        let mut best: Option<(&T, usize)> = None;
        for (value, count) in frequencies.iter() {
            if best.map_or(true, |(_, best_count)| *count > best_count) {
                best = Some((*value, *count));
            }
        }

        best.map(|(value, _)| value.clone())
    }
}

impl<T: NumericValue> Column<T> {
    /// Apply an aggregate operation to this column.
    pub fn aggregate(&self, operation: AggregateOperation) -> Aggregated {
        operation.aggregate_numeric(self.values())
    }

    fn present_doubles(&self) -> Vec<f64> {
        let present = self
            .present_values()
            .map(|value| value.to_f64())
            .collect::<Vec<_>>();

        let excluded = self.size() - present.len();
        if excluded > 0 {
            log::debug!("Column \"{}\": skipped {excluded} missing values", self.name());
        }

        present
    }

    /// Number of present values.
    pub fn count(&self) -> usize {
        self.count_present()
    }

    /// Sum of the present values, zero if there are none.
    pub fn sum(&self) -> f64 {
        self.aggregate(AggregateOperation::Sum).value
    }

    /// Arithmetic mean of the present values, NaN if there are none.
    pub fn mean(&self) -> f64 {
        self.aggregate(AggregateOperation::Mean).value
    }

    /// Largest present value, NaN if there are none.
    pub fn max(&self) -> f64 {
        self.aggregate(AggregateOperation::Max).value
    }

    /// Smallest present value, NaN if there are none.
    pub fn min(&self) -> f64 {
        self.aggregate(AggregateOperation::Min).value
    }

    /// Difference between the largest and smallest present value.
    pub fn range(&self) -> f64 {
        self.max() - self.min()
    }

    /// Sample standard deviation.
    pub fn std(&self) -> f64 {
        self.aggregate(AggregateOperation::Std).value
    }

    /// Population standard deviation.
    pub fn population_std(&self) -> f64 {
        self.aggregate(AggregateOperation::StdPopulation).value
    }

    fn variance_with(&self, degrees_of_freedom: usize) -> f64 {
        let values = self.present_doubles();
        if values.len() <= degrees_of_freedom {
            return f64::NAN;
        }

        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let squares = values
            .iter()
            .map(|value| (value - mean) * (value - mean))
            .sum::<f64>();

        squares / (values.len() - degrees_of_freedom) as f64
    }

    /// Sample variance, NaN for less than two present values.
    pub fn variance(&self) -> f64 {
        self.variance_with(1)
    }

    /// Population variance, NaN if there are no present values.
    pub fn population_variance(&self) -> f64 {
        self.variance_with(0)
    }

    /// Middle value of the sorted present values.
    /// For an even number of values, the mean of the two middle values is returned.
    pub fn median(&self) -> f64 {
        let sorted = self
            .present_doubles()
            .into_iter()
            .sorted_by(f64::total_cmp)
            .collect::<Vec<_>>();

        let middle = sorted.len() / 2;
        match sorted.len() {
            0 => f64::NAN,
            len if len % 2 == 0 => (sorted[middle - 1] + sorted[middle]) / 2.0,
            _ => sorted[middle],
        }
    }

    /// Compute the common statistics of this column at once.
    pub fn describe(&self) -> Summary {
        let (min, max) = match self.present_doubles().into_iter().minmax_by(f64::total_cmp) {
            itertools::MinMaxResult::NoElements => (f64::NAN, f64::NAN),
            itertools::MinMaxResult::OneElement(value) => (value, value),
            itertools::MinMaxResult::MinMax(min, max) => (min, max),
        };

        Summary {
            count: self.count(),
            missing: self.count_missing(),
            mean: self.mean(),
            std: self.std(),
            min,
            max,
        }
    }
}
