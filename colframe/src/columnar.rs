//! This module collects data structures and operations on individual columns
//! and on tables made of columns.

pub mod any_column;
pub use any_column::AnyColumn;
pub mod column;
pub use column::Column;
pub mod container;
pub use container::{ColumnContainer, ColumnMut};
