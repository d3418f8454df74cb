//! This module contains the built-in aggregate processors, which determine how to aggregate multiple values into a single output value.

pub(crate) mod count_aggregate;
pub(crate) mod deviation_aggregate;
pub(crate) mod max_aggregate;
pub(crate) mod mean_aggregate;
pub(crate) mod min_aggregate;
pub(crate) mod processor;
pub(crate) mod sum_aggregate;
