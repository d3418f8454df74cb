//! Computes the standard deviation of all input values.

use super::processor::AggregateProcessor;

/// Standard deviation with a configurable number of degrees of freedom
/// (1 for the sample, 0 for the population standard deviation).
///
/// The values are buffered, so the mean is known before the squared deviations are summed.
#[derive(Debug)]
pub(crate) struct DeviationAggregateProcessor {
    degrees_of_freedom: usize,
    values: Vec<f64>,
}

impl DeviationAggregateProcessor {
    pub(crate) fn new(degrees_of_freedom: usize) -> Self {
        Self {
            degrees_of_freedom,
            values: Vec::new(),
        }
    }
}

impl AggregateProcessor for DeviationAggregateProcessor {
    fn write_value(&mut self, value: f64) {
        self.values.push(value);
    }

    fn finish(&self) -> f64 {
        let count = self.values.len();
        if count <= self.degrees_of_freedom {
            return f64::NAN;
        }

        let mean = self.values.iter().sum::<f64>() / count as f64;
        let squares = self
            .values
            .iter()
            .map(|value| (value - mean) * (value - mean))
            .sum::<f64>();

        (squares / (count - self.degrees_of_freedom) as f64).sqrt()
    }
}
