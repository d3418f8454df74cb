//! Counts the input values.

use super::processor::AggregateProcessor;

#[derive(Debug)]
pub(crate) struct CountAggregateProcessor {
    count: usize,
}

impl CountAggregateProcessor {
    pub(crate) fn new() -> Self {
        Self { count: 0 }
    }
}

impl AggregateProcessor for CountAggregateProcessor {
    fn write_value(&mut self, _value: f64) {
        self.count += 1;
    }

    fn finish(&self) -> f64 {
        self.count as f64
    }
}
