use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ConversionError, Error};

/// Number of column types
pub const NUM_COLUMN_TYPES: usize = 11;

/// Descriptors to refer to the possible column types at runtime.
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnTypeName {
    /// Data type [`bool`]
    Boolean,
    /// Data type [`i8`]
    Byte,
    /// Data type [`char`]
    Character,
    /// Data type [`chrono::NaiveDate`]
    Date,
    /// Data type [`chrono::NaiveDateTime`]
    DateTime,
    /// Data type [`super::Double`]
    Double,
    /// Data type [`super::Float`]
    Float,
    /// Data type [`i32`]
    Integer,
    /// Data type [`i64`]
    Long,
    /// Data type [`i16`]
    Short,
    /// Data type [`String`]
    String,
}

/// A list of all [ColumnTypeName]s,
/// in the order they appear in the enum.
pub const COLUMN_TYPES: [ColumnTypeName; NUM_COLUMN_TYPES] = [
    ColumnTypeName::Boolean,
    ColumnTypeName::Byte,
    ColumnTypeName::Character,
    ColumnTypeName::Date,
    ColumnTypeName::DateTime,
    ColumnTypeName::Double,
    ColumnTypeName::Float,
    ColumnTypeName::Integer,
    ColumnTypeName::Long,
    ColumnTypeName::Short,
    ColumnTypeName::String,
];

impl ColumnTypeName {
    /// Return the name of this type as used in [Display] and [FromStr].
    pub fn name(&self) -> &'static str {
        match self {
            ColumnTypeName::Boolean => "Boolean",
            ColumnTypeName::Byte => "Byte",
            ColumnTypeName::Character => "Character",
            ColumnTypeName::Date => "Date",
            ColumnTypeName::DateTime => "DateTime",
            ColumnTypeName::Double => "Double",
            ColumnTypeName::Float => "Float",
            ColumnTypeName::Integer => "Integer",
            ColumnTypeName::Long => "Long",
            ColumnTypeName::Short => "Short",
            ColumnTypeName::String => "String",
        }
    }

    /// Return `true` if columns of this type support the vectorized numeric operations.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ColumnTypeName::Byte
                | ColumnTypeName::Short
                | ColumnTypeName::Integer
                | ColumnTypeName::Long
                | ColumnTypeName::Float
                | ColumnTypeName::Double
        )
    }

    /// Return `true` if this is one of the integer types.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ColumnTypeName::Byte
                | ColumnTypeName::Short
                | ColumnTypeName::Integer
                | ColumnTypeName::Long
        )
    }

    /// Return `true` if this is a date or date-time type.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnTypeName::Date | ColumnTypeName::DateTime)
    }
}

impl Display for ColumnTypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnTypeName {
    type Err = Error;

    /// Parses type names case-insensitively.
    /// Common aliases such as `int`, `bool` or `text` are accepted as well.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let result = match lower.as_str() {
            "boolean" | "bool" => ColumnTypeName::Boolean,
            "byte" | "i8" => ColumnTypeName::Byte,
            "character" | "char" => ColumnTypeName::Character,
            "date" | "localdate" => ColumnTypeName::Date,
            "datetime" | "localdatetime" | "timestamp" => ColumnTypeName::DateTime,
            "double" | "f64" => ColumnTypeName::Double,
            "float" | "f32" => ColumnTypeName::Float,
            "integer" | "int" | "i32" => ColumnTypeName::Integer,
            "long" | "i64" => ColumnTypeName::Long,
            "short" | "i16" => ColumnTypeName::Short,
            "string" | "text" | "str" => ColumnTypeName::String,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "unknown column type \"{s}\""
                )))
            }
        };

        Ok(result)
    }
}

impl From<ColumnTypeName> for String {
    fn from(value: ColumnTypeName) -> Self {
        value.name().to_string()
    }
}

/// Helper to build the error returned for out of range numeric conversions.
pub(crate) fn out_of_range(value: impl ToString, target: ColumnTypeName) -> ConversionError {
    ConversionError::new(value, target).with_reason("value is not representable in this type")
}
