//! Computes the arithmetic mean of all input values.

use super::processor::AggregateProcessor;

#[derive(Debug)]
pub(crate) struct MeanAggregateProcessor {
    sum: f64,
    count: usize,
}

impl MeanAggregateProcessor {
    pub(crate) fn new() -> Self {
        Self { sum: 0.0, count: 0 }
    }
}

impl AggregateProcessor for MeanAggregateProcessor {
    fn write_value(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    fn finish(&self) -> f64 {
        if self.count == 0 {
            return f64::NAN;
        }

        self.sum / self.count as f64
    }
}
