//! Computes the maximum of all input values.

use super::processor::AggregateProcessor;

#[derive(Debug)]
pub(crate) struct MaxAggregateProcessor {
    current_max_value: Option<f64>,
}

impl MaxAggregateProcessor {
    pub(crate) fn new() -> Self {
        Self {
            current_max_value: None,
        }
    }
}

impl AggregateProcessor for MaxAggregateProcessor {
    fn write_value(&mut self, value: f64) {
        match self.current_max_value {
            Some(current_max_value) => {
                if value > current_max_value {
                    self.current_max_value = Some(value);
                }
            }
            None => self.current_max_value = Some(value),
        }
    }

    fn finish(&self) -> f64 {
        self.current_max_value.unwrap_or(f64::NAN)
    }
}
