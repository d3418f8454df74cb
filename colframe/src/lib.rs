//! This crate implements an in-process analytical table engine.
//! It provides typed columns with a per-type sentinel encoding of missing values,
//! null-aware vectorized arithmetic and statistics,
//! a closed algebra of aggregations, and rolling windows built on top of it.
//!
//! Grouping, joining, sorting, querying and file ingestion are left to callers,
//! which build on the per-column primitives exposed here.

#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts
)]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_qualifications,
    unused_extern_crates,
    variant_size_differences
)]

pub mod aggregates;
pub mod columnar;
pub mod columntype;
pub mod datatypes;
pub mod error;
pub mod rolling;
pub mod vectorized;

pub(crate) mod parallel;

pub use aggregates::{Aggregated, AggregateOperation};
pub use columnar::{AnyColumn, Column, ColumnContainer, ColumnMut};
pub use columntype::{ColumnType, FormatOptions, NumberLocale, ParserOptions};
pub use datatypes::{ColumnTypeName, ColumnValue, Double, Float, NumericValue};
pub use error::{ConversionError, Error};
pub use rolling::RollingWindow;
pub use vectorized::statistics::Summary;
