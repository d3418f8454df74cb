//! This module defines the trait [ColumnValue],
//! which describes one scalar kind that can be stored in a [Column].

use std::{fmt::Debug, hash::Hash};

use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    columnar::{AnyColumn, Column},
    columntype::{format_options::localize_number, FormatOptions, ParserOptions},
    error::ConversionError,
};

use super::{ColumnTypeName, Double, Float};

/// A scalar kind that can be stored in a [Column].
///
/// Missing entries are not tracked separately but encoded as a designated
/// sentinel value, returned by [ColumnValue::missing_value].
/// Consequently, a genuine value that equals the sentinel cannot be told apart from a missing one.
/// The sentinels are the minimum value for integer types, NaN for floating point types,
/// `'\u{FFFF}'` for characters, the empty string, the minimum date and date-time,
/// and `false` for booleans.
pub trait ColumnValue: Debug + Clone + Eq + Hash + Ord + Send + Sync + 'static {
    /// Runtime tag of this type
    const TYPE: ColumnTypeName;

    /// Returns the sentinel that encodes a missing value.
    fn missing_value() -> Self;

    /// Returns `true` if this value is the sentinel.
    fn is_missing(&self) -> bool {
        *self == Self::missing_value()
    }

    /// Parses a non-missing value from text.
    ///
    /// This does not check for missing-value markers, see [crate::columntype::ColumnType::parse].
    ///
    /// # Errors
    /// Returns an error if `text` is not a valid representation of a value of this type.
    fn parse_value(text: &str, options: &ParserOptions) -> Result<Self, ConversionError>;

    /// Formats a non-missing value.
    fn format_value(&self, options: &FormatOptions) -> String;

    /// Wraps a column of this type into an [AnyColumn].
    fn into_any_column(column: Column<Self>) -> AnyColumn;

    /// Returns the typed column if `column` holds values of this type.
    fn from_any_column(column: &AnyColumn) -> Option<&Column<Self>>;

    /// Returns the typed column if `column` holds values of this type.
    fn from_any_column_mut(column: &mut AnyColumn) -> Option<&mut Column<Self>>;
}

macro_rules! any_column_hooks {
    ($variant:ident) => {
        fn into_any_column(column: Column<Self>) -> AnyColumn {
            AnyColumn::$variant(column)
        }

        fn from_any_column(column: &AnyColumn) -> Option<&Column<Self>> {
            match column {
                AnyColumn::$variant(column) => Some(column),
                _ => None,
            }
        }

        fn from_any_column_mut(column: &mut AnyColumn) -> Option<&mut Column<Self>> {
            match column {
                AnyColumn::$variant(column) => Some(column),
                _ => None,
            }
        }
    };
}

macro_rules! integer_column_value {
    ($type:ty, $variant:ident) => {
        impl ColumnValue for $type {
            const TYPE: ColumnTypeName = ColumnTypeName::$variant;

            fn missing_value() -> Self {
                <$type>::MIN
            }

            fn parse_value(text: &str, _options: &ParserOptions) -> Result<Self, ConversionError> {
                let trimmed = text.trim();
                let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
                trimmed.parse::<$type>().map_err(|error| {
                    ConversionError::new(text, Self::TYPE).with_reason(error)
                })
            }

            fn format_value(&self, options: &FormatOptions) -> String {
                localize_number(&self.to_string(), options.locale)
            }

            any_column_hooks!($variant);
        }
    };
}

integer_column_value!(i8, Byte);
integer_column_value!(i16, Short);
integer_column_value!(i32, Integer);
integer_column_value!(i64, Long);

fn format_floating(value: f64, options: &FormatOptions) -> String {
    let raw = match options.decimal_places {
        Some(places) => format!("{value:.places$}"),
        None => value.to_string(),
    };
    localize_number(&raw, options.locale)
}

impl ColumnValue for Double {
    const TYPE: ColumnTypeName = ColumnTypeName::Double;

    fn missing_value() -> Self {
        Double::NAN
    }

    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn parse_value(text: &str, _options: &ParserOptions) -> Result<Self, ConversionError> {
        text.trim()
            .parse::<f64>()
            .map(Double::new)
            .map_err(|error| ConversionError::new(text, Self::TYPE).with_reason(error))
    }

    fn format_value(&self, options: &FormatOptions) -> String {
        format_floating(self.value(), options)
    }

    any_column_hooks!(Double);
}

impl ColumnValue for Float {
    const TYPE: ColumnTypeName = ColumnTypeName::Float;

    fn missing_value() -> Self {
        Float::NAN
    }

    fn is_missing(&self) -> bool {
        self.is_nan()
    }

    fn parse_value(text: &str, _options: &ParserOptions) -> Result<Self, ConversionError> {
        text.trim()
            .parse::<f32>()
            .map(Float::new)
            .map_err(|error| ConversionError::new(text, Self::TYPE).with_reason(error))
    }

    fn format_value(&self, options: &FormatOptions) -> String {
        format_floating(f64::from(self.value()), options)
    }

    any_column_hooks!(Float);
}

impl ColumnValue for bool {
    const TYPE: ColumnTypeName = ColumnTypeName::Boolean;

    /// Booleans use `false` as their sentinel,
    /// so every `false` entry of a boolean column counts as missing.
    fn missing_value() -> Self {
        false
    }

    fn parse_value(text: &str, options: &ParserOptions) -> Result<Self, ConversionError> {
        let trimmed = text.trim();
        let matches = |tokens: &[String]| {
            tokens
                .iter()
                .any(|token| token.eq_ignore_ascii_case(trimmed))
        };

        if matches(&options.true_tokens) {
            Ok(true)
        } else if matches(&options.false_tokens) {
            Ok(false)
        } else {
            Err(ConversionError::new(text, Self::TYPE)
                .with_reason("expected one of the configured boolean tokens"))
        }
    }

    fn format_value(&self, _options: &FormatOptions) -> String {
        self.to_string()
    }

    any_column_hooks!(Boolean);
}

/// Sentinel of character columns (a Unicode noncharacter)
pub const MISSING_CHARACTER: char = '\u{FFFF}';

impl ColumnValue for char {
    const TYPE: ColumnTypeName = ColumnTypeName::Character;

    fn missing_value() -> Self {
        MISSING_CHARACTER
    }

    fn parse_value(text: &str, _options: &ParserOptions) -> Result<Self, ConversionError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(character), None) => Ok(character),
            _ => Err(ConversionError::new(text, Self::TYPE)
                .with_reason("expected exactly one character")),
        }
    }

    fn format_value(&self, _options: &FormatOptions) -> String {
        self.to_string()
    }

    any_column_hooks!(Character);
}

impl ColumnValue for String {
    const TYPE: ColumnTypeName = ColumnTypeName::String;

    fn missing_value() -> Self {
        String::new()
    }

    fn is_missing(&self) -> bool {
        self.is_empty()
    }

    fn parse_value(text: &str, _options: &ParserOptions) -> Result<Self, ConversionError> {
        Ok(text.to_string())
    }

    fn format_value(&self, _options: &FormatOptions) -> String {
        self.clone()
    }

    any_column_hooks!(String);
}

/// Formats a temporal value with a chrono pattern.
/// Falls back to the ISO representation if `pattern` contains invalid specifiers.
fn format_temporal(value: &impl std::fmt::Display, formatted: impl std::fmt::Display) -> String {
    use std::fmt::Write;

    let mut result = String::new();
    match write!(result, "{formatted}") {
        Ok(()) => result,
        Err(_) => value.to_string(),
    }
}

impl ColumnValue for NaiveDate {
    const TYPE: ColumnTypeName = ColumnTypeName::Date;

    fn missing_value() -> Self {
        NaiveDate::MIN
    }

    fn parse_value(text: &str, options: &ParserOptions) -> Result<Self, ConversionError> {
        let trimmed = text.trim();
        options
            .date_formats
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| {
                ConversionError::new(text, Self::TYPE)
                    .with_reason("text does not match any of the configured date formats")
            })
    }

    fn format_value(&self, options: &FormatOptions) -> String {
        format_temporal(self, self.format(&options.date_pattern))
    }

    any_column_hooks!(Date);
}

impl ColumnValue for NaiveDateTime {
    const TYPE: ColumnTypeName = ColumnTypeName::DateTime;

    fn missing_value() -> Self {
        NaiveDateTime::MIN
    }

    fn parse_value(text: &str, options: &ParserOptions) -> Result<Self, ConversionError> {
        let trimmed = text.trim();
        options
            .datetime_formats
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| {
                ConversionError::new(text, Self::TYPE)
                    .with_reason("text does not match any of the configured date-time formats")
            })
    }

    fn format_value(&self, options: &FormatOptions) -> String {
        format_temporal(self, self.format(&options.datetime_pattern))
    }

    any_column_hooks!(DateTime);
}
