//! Exposes supported aggregate operations and allows creating the associated processors

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    datatypes::NumericValue,
    error::Error,
};

use super::processors::{
    count_aggregate::CountAggregateProcessor,
    deviation_aggregate::DeviationAggregateProcessor,
    max_aggregate::MaxAggregateProcessor,
    mean_aggregate::MeanAggregateProcessor,
    min_aggregate::MinAggregateProcessor,
    processor::{AggregateProcessor, AggregateProcessorT},
    sum_aggregate::SumAggregateProcessor,
};

/// Aggregate operations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregateOperation {
    /// Number of present values
    Count,
    /// Maximum value
    Max,
    /// Arithmetic mean
    Mean,
    /// Minimum value
    Min,
    /// Sample standard deviation (one degree of freedom)
    Std,
    /// Population standard deviation (zero degrees of freedom)
    StdPopulation,
    /// Sum of all values
    Sum,
}

/// Result of an aggregation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aggregated {
    /// Aggregated value, NaN if the aggregate is undefined
    pub value: f64,
    /// Number of missing values that were skipped
    pub excluded: usize,
}

impl Aggregated {
    /// Returns `true` if the aggregate is undefined for the input,
    /// e.g. the mean of an empty sequence.
    pub fn is_missing(&self) -> bool {
        self.value.is_nan()
    }
}

impl AggregateOperation {
    /// All aggregate operations, ordered by name
    pub const ALL: [AggregateOperation; 7] = [
        AggregateOperation::Count,
        AggregateOperation::Max,
        AggregateOperation::Mean,
        AggregateOperation::Min,
        AggregateOperation::Std,
        AggregateOperation::StdPopulation,
        AggregateOperation::Sum,
    ];

    /// Return the name of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            AggregateOperation::Count => "count",
            AggregateOperation::Max => "max",
            AggregateOperation::Mean => "mean",
            AggregateOperation::Min => "min",
            AggregateOperation::Std => "std",
            AggregateOperation::StdPopulation => "std_population",
            AggregateOperation::Sum => "sum",
        }
    }

    /// Return the degrees of freedom subtracted from the number of values
    /// in the denominator of the variance, for the standard deviations.
    pub fn degrees_of_freedom(&self) -> Option<usize> {
        match self {
            AggregateOperation::Std => Some(1),
            AggregateOperation::StdPopulation => Some(0),
            _ => None,
        }
    }

    /// Returns whether missing values are skipped.
    /// This is the case for every operation.
    pub fn excludes_missing(&self) -> bool {
        true
    }

    /// Creates a new aggregate processor for the given aggregate operation.
    pub(crate) fn create_processor(&self) -> AggregateProcessorT {
        match self {
            AggregateOperation::Count => CountAggregateProcessor::new().into(),
            AggregateOperation::Max => MaxAggregateProcessor::new().into(),
            AggregateOperation::Mean => MeanAggregateProcessor::new().into(),
            AggregateOperation::Min => MinAggregateProcessor::new().into(),
            AggregateOperation::Std => DeviationAggregateProcessor::new(1).into(),
            AggregateOperation::StdPopulation => DeviationAggregateProcessor::new(0).into(),
            AggregateOperation::Sum => SumAggregateProcessor::new().into(),
        }
    }

    /// Aggregate a sequence of nullable values.
    /// `None` and NaN count as missing; they are skipped and counted in [Aggregated::excluded].
    ///
    /// For an input without present values, `count` and `sum` return 0,
    /// all other operations return NaN.
    /// The standard deviations also return NaN if there are not more values than degrees of freedom.
    pub fn aggregate<I>(&self, values: I) -> Aggregated
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut processor = self.create_processor();
        let mut excluded = 0;

        for value in values {
            match value {
                Some(value) if !value.is_nan() => processor.write_value(value),
                _ => excluded += 1,
            }
        }

        if excluded > 0 {
            log::debug!("Aggregate {self} skipped {excluded} missing values");
        }

        Aggregated {
            value: processor.finish(),
            excluded,
        }
    }

    /// Aggregate a slice of column values, skipping sentinels.
    pub fn aggregate_numeric<T: NumericValue>(&self, values: &[T]) -> Aggregated {
        self.aggregate(values.iter().map(|value| Some(value.to_f64())))
    }
}

impl Display for AggregateOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregateOperation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AggregateOperation::ALL
            .into_iter()
            .find(|operation| operation.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown aggregation \"{s}\"")))
    }
}
