//! Computes the minimum of all input values.

use super::processor::AggregateProcessor;

#[derive(Debug)]
pub(crate) struct MinAggregateProcessor {
    current_min_value: Option<f64>,
}

impl MinAggregateProcessor {
    pub(crate) fn new() -> Self {
        Self {
            current_min_value: None,
        }
    }
}

impl AggregateProcessor for MinAggregateProcessor {
    fn write_value(&mut self, value: f64) {
        match self.current_min_value {
            Some(current_min_value) => {
                if value < current_min_value {
                    self.current_min_value = Some(value);
                }
            }
            None => self.current_min_value = Some(value),
        }
    }

    fn finish(&self) -> f64 {
        self.current_min_value.unwrap_or(f64::NAN)
    }
}
