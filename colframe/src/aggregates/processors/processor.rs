//! Traits for implementing new aggregate operations

use enum_dispatch::enum_dispatch;

use super::{
    count_aggregate::CountAggregateProcessor, deviation_aggregate::DeviationAggregateProcessor,
    max_aggregate::MaxAggregateProcessor, mean_aggregate::MeanAggregateProcessor,
    min_aggregate::MinAggregateProcessor, sum_aggregate::SumAggregateProcessor,
};

/// Allows aggregation of multiple values to produce a single aggregate value.
///
/// Processors only ever see present values; missing ones are filtered out by the caller.
#[enum_dispatch]
pub(crate) trait AggregateProcessor {
    /// Processes a value and updates the internal state.
    fn write_value(&mut self, value: f64);

    /// Returns the resulting aggregated value of all the processed input values.
    /// Returns NaN if the aggregate is undefined for the processed values.
    fn finish(&self) -> f64;
}

/// Collects all [AggregateProcessor]s
#[enum_dispatch(AggregateProcessor)]
#[derive(Debug)]
pub(crate) enum AggregateProcessorT {
    Count(CountAggregateProcessor),
    Deviation(DeviationAggregateProcessor),
    Max(MaxAggregateProcessor),
    Mean(MeanAggregateProcessor),
    Min(MinAggregateProcessor),
    Sum(SumAggregateProcessor),
}
