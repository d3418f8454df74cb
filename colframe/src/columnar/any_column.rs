//! This module defines [AnyColumn],
//! which collects the columns of all supported types into a single object.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    aggregates::{AggregateOperation, Aggregated},
    columntype::{FormatOptions, ParserOptions},
    datatypes::{ColumnTypeName, ColumnValue, Double, Float, NumericValue},
    error::{ConversionError, Error},
};

use super::Column;

/// Type-erased column.
///
/// This is the closed registry of supported column types:
/// every [ColumnTypeName] corresponds to exactly one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyColumn {
    /// Column of [bool]
    Boolean(Column<bool>),
    /// Column of [i8]
    Byte(Column<i8>),
    /// Column of [char]
    Character(Column<char>),
    /// Column of [NaiveDate]
    Date(Column<NaiveDate>),
    /// Column of [NaiveDateTime]
    DateTime(Column<NaiveDateTime>),
    /// Column of [Double]
    Double(Column<Double>),
    /// Column of [Float]
    Float(Column<Float>),
    /// Column of [i32]
    Integer(Column<i32>),
    /// Column of [i64]
    Long(Column<i64>),
    /// Column of [i16]
    Short(Column<i16>),
    /// Column of [String]
    String(Column<String>),
}

/// Evaluates `$body` with `$column` bound to the typed column inside `$value`.
macro_rules! with_column {
    ($value:expr, $column:ident => $body:expr) => {
        match $value {
            AnyColumn::Boolean($column) => $body,
            AnyColumn::Byte($column) => $body,
            AnyColumn::Character($column) => $body,
            AnyColumn::Date($column) => $body,
            AnyColumn::DateTime($column) => $body,
            AnyColumn::Double($column) => $body,
            AnyColumn::Float($column) => $body,
            AnyColumn::Integer($column) => $body,
            AnyColumn::Long($column) => $body,
            AnyColumn::Short($column) => $body,
            AnyColumn::String($column) => $body,
        }
    };
}

/// Evaluates `$body` with `$column` bound to the typed column inside `$value`
/// if it holds numeric values, and `$fallback` otherwise.
macro_rules! with_numeric_column {
    ($value:expr, $column:ident => $body:expr, $other:ident => $fallback:expr) => {
        match $value {
            AnyColumn::Byte($column) => $body,
            AnyColumn::Short($column) => $body,
            AnyColumn::Integer($column) => $body,
            AnyColumn::Long($column) => $body,
            AnyColumn::Float($column) => $body,
            AnyColumn::Double($column) => $body,
            $other => $fallback,
        }
    };
}

impl<T: ColumnValue> From<Column<T>> for AnyColumn {
    fn from(value: Column<T>) -> Self {
        T::into_any_column(value)
    }
}

/// Converts a column of doubles into numeric type `U`.
fn doubles_into<U: NumericValue>(column: &Column<Double>) -> Result<AnyColumn, Error> {
    let converted = column.try_convert(|value| U::from_f64(value.value()))?;
    Ok(converted.into())
}

impl AnyColumn {
    /// Create an empty column of the given type.
    pub fn create(name: impl Into<String>, column_type: ColumnTypeName) -> Self {
        let name = name.into();
        match column_type {
            ColumnTypeName::Boolean => AnyColumn::Boolean(Column::new(name)),
            ColumnTypeName::Byte => AnyColumn::Byte(Column::new(name)),
            ColumnTypeName::Character => AnyColumn::Character(Column::new(name)),
            ColumnTypeName::Date => AnyColumn::Date(Column::new(name)),
            ColumnTypeName::DateTime => AnyColumn::DateTime(Column::new(name)),
            ColumnTypeName::Double => AnyColumn::Double(Column::new(name)),
            ColumnTypeName::Float => AnyColumn::Float(Column::new(name)),
            ColumnTypeName::Integer => AnyColumn::Integer(Column::new(name)),
            ColumnTypeName::Long => AnyColumn::Long(Column::new(name)),
            ColumnTypeName::Short => AnyColumn::Short(Column::new(name)),
            ColumnTypeName::String => AnyColumn::String(Column::new(name)),
        }
    }

    /// Return the name of the column.
    pub fn name(&self) -> &str {
        with_column!(self, column => column.name())
    }

    /// Change the name of the column.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        with_column!(self, column => column.set_name(name))
    }

    /// Return the type of the column.
    pub fn column_type(&self) -> ColumnTypeName {
        with_column!(self, column => column.column_type())
    }

    /// Return the number of entries (including missing ones).
    pub fn len(&self) -> usize {
        with_column!(self, column => column.len())
    }

    /// Return `true` if the column has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the value at `index` is missing.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn is_absent(&self, index: usize) -> Result<bool, Error> {
        with_column!(self, column => column.is_absent(index))
    }

    /// Return the number of missing entries.
    pub fn count_missing(&self) -> usize {
        with_column!(self, column => column.count_missing())
    }

    /// Append the sentinel.
    pub fn append_missing(&mut self) {
        with_column!(self, column => column.append_missing())
    }

    /// Parse `text` according to the column's type and append the result.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] on malformed text; the column is left unchanged.
    pub fn append_text(&mut self, text: &str, options: &ParserOptions) -> Result<(), Error> {
        with_column!(self, column => column.append_text(text, options))
    }

    /// Append sentinels until the column has `len` entries.
    pub fn pad_to(&mut self, len: usize) {
        with_column!(self, column => column.pad_to(len))
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        with_column!(self, column => column.clear())
    }

    /// Return an empty column with the same name and type.
    pub fn copy_empty(&self) -> Self {
        with_column!(self, column => column.copy_empty().into())
    }

    /// Return a new column containing the values at the given indices, in that order.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if any index is not smaller than the size.
    pub fn take(&self, indices: &[usize]) -> Result<Self, Error> {
        with_column!(self, column => column.take(indices).map(AnyColumn::from))
    }

    /// Return the permutation that sorts this column (stable).
    pub fn sorted_indices(&self, ascending: bool) -> Vec<usize> {
        with_column!(self, column => column.sorted_indices(ascending))
    }

    /// Format the value at `index` for display.
    ///
    /// # Errors
    /// Returns [Error::IndexOutOfBounds] if `index` is not smaller than the size.
    pub fn format_cell(&self, index: usize, options: &FormatOptions) -> Result<String, Error> {
        with_column!(self, column => {
            let value = column.get(index)?;
            Ok(if value.is_missing() {
                options.missing_text.clone()
            } else {
                value.format_value(options)
            })
        })
    }

    /// Return the typed column if this holds values of type `T`.
    pub fn as_column<T: ColumnValue>(&self) -> Option<&Column<T>> {
        T::from_any_column(self)
    }

    /// Return the typed column if this holds values of type `T`.
    pub fn as_column_mut<T: ColumnValue>(&mut self) -> Option<&mut Column<T>> {
        T::from_any_column_mut(self)
    }

    /// Return the typed column if this holds values of type `T`.
    ///
    /// # Errors
    /// Returns [Error::TypeMismatch] otherwise.
    pub fn try_as_column<T: ColumnValue>(&self) -> Result<&Column<T>, Error> {
        self.as_column::<T>().ok_or_else(|| Error::TypeMismatch {
            column: self.name().to_string(),
            expected: T::TYPE,
            found: self.column_type(),
        })
    }

    /// Return the values of a numeric column as doubles.
    ///
    /// # Errors
    /// Returns [Error::TypeMismatch] if the column is not numeric.
    pub fn to_doubles(&self) -> Result<Column<Double>, Error> {
        with_numeric_column!(self,
            column => Ok(column.convert(|value| Double::new(value.to_f64()))),
            other => Err(Error::TypeMismatch {
                column: other.name().to_string(),
                expected: ColumnTypeName::Double,
                found: other.column_type(),
            })
        )
    }

    /// Aggregate the values of a numeric column.
    ///
    /// # Errors
    /// Returns [Error::TypeMismatch] if the column is not numeric.
    pub fn aggregate(&self, operation: AggregateOperation) -> Result<Aggregated, Error> {
        with_numeric_column!(self,
            column => Ok(operation.aggregate_numeric(column.values())),
            other => Err(Error::TypeMismatch {
                column: other.name().to_string(),
                expected: ColumnTypeName::Double,
                found: other.column_type(),
            })
        )
    }

    /// Convert this column into a column of type `target`.
    ///
    /// Supported are conversions between numeric types (values must be exactly representable),
    /// from any type to [ColumnTypeName::String] (using the default [FormatOptions]),
    /// from [ColumnTypeName::String] to any type (using the default [ParserOptions]),
    /// and between dates and date-times.
    /// Missing values stay missing.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] if a value cannot be converted
    /// or there is no conversion between the two types.
    pub fn cast(&self, target: ColumnTypeName) -> Result<AnyColumn, Error> {
        let source = self.column_type();
        if source == target {
            return Ok(self.clone());
        }

        if target == ColumnTypeName::String {
            let options = FormatOptions::default();
            return Ok(with_column!(self, column => {
                column.convert(|value| value.format_value(&options)).into()
            }));
        }

        if let AnyColumn::String(column) = self {
            let options = ParserOptions::default();
            let mut result = AnyColumn::create(column.name(), target);
            for text in column.iter() {
                result.append_text(text, &options)?;
            }
            return Ok(result);
        }

        if source.is_numeric() && target.is_numeric() {
            let doubles = self.to_doubles()?;
            return match target {
                ColumnTypeName::Byte => doubles_into::<i8>(&doubles),
                ColumnTypeName::Short => doubles_into::<i16>(&doubles),
                ColumnTypeName::Integer => doubles_into::<i32>(&doubles),
                ColumnTypeName::Long => doubles_into::<i64>(&doubles),
                ColumnTypeName::Float => doubles_into::<Float>(&doubles),
                _ => Ok(doubles.into()),
            };
        }

        match self {
            AnyColumn::Date(column) if target == ColumnTypeName::DateTime => Ok(column
                .convert(|date| date.and_time(NaiveTime::MIN))
                .into()),
            AnyColumn::DateTime(column) if target == ColumnTypeName::Date => {
                Ok(column.convert(|datetime| datetime.date()).into())
            }
            _ => Err(ConversionError::new(self.name(), target)
                .with_reason(format!("there is no conversion from {source}"))
                .into()),
        }
    }
}
