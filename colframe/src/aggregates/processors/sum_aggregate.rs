//! Computes the sum of all input values.

use super::processor::AggregateProcessor;

#[derive(Debug)]
pub(crate) struct SumAggregateProcessor {
    current_sum: f64,
}

impl SumAggregateProcessor {
    pub(crate) fn new() -> Self {
        Self { current_sum: 0.0 }
    }
}

impl AggregateProcessor for SumAggregateProcessor {
    fn write_value(&mut self, value: f64) {
        self.current_sum += value;
    }

    fn finish(&self) -> f64 {
        self.current_sum
    }
}
