//! Aggregations reduce a sequence of nullable numbers to a single number.
//!
//! The set of aggregations is closed (see [AggregateOperation]).
//! They are used directly on columns, by grouping code on the values of each group,
//! and by [crate::rolling::RollingWindow] on each window.
//! Missing values are never an error: they are skipped and their number is reported.

pub mod operation;
pub use operation::{AggregateOperation, Aggregated};
pub(crate) mod processors;
