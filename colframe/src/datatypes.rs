//! This module collects functionality specific to the supported scalar types.

/// Module for defining [ColumnTypeName]
pub mod column_type_name;
pub use column_type_name::{ColumnTypeName, COLUMN_TYPES};
/// Module for defining [Double]
pub mod double;
pub use double::Double;
/// Module for defining [Float]
pub mod float;
pub use float::Float;
/// Module for defining [ColumnValue]
pub mod column_value;
pub use column_value::ColumnValue;
/// Module for defining [NumericValue]
pub mod numeric_value;
pub use numeric_value::NumericValue;
