//! This module defines [ColumnType], the strategy object describing one scalar kind:
//! its missing value, how to parse it from text and how to format it.

pub mod format_options;
pub use format_options::{FormatOptions, NumberLocale};
pub mod parser_options;
pub use parser_options::ParserOptions;

use std::marker::PhantomData;

use crate::{
    datatypes::{ColumnTypeName, ColumnValue},
    error::Error,
};

/// Parser and formatter for values of type `T`.
///
/// Parsing distinguishes two outcomes that are easily confused:
/// text that denotes a missing value (see [ColumnType::is_na]) becomes the sentinel,
/// whereas malformed text is reported as [Error::ConversionFailure].
#[derive(Debug, Clone)]
pub struct ColumnType<T: ColumnValue> {
    parser_options: ParserOptions,
    format_options: FormatOptions,
    _phantom: PhantomData<T>,
}

impl<T: ColumnValue> Default for ColumnType<T> {
    fn default() -> Self {
        Self::new(ParserOptions::default(), FormatOptions::default())
    }
}

impl<T: ColumnValue> ColumnType<T> {
    /// Create a new [ColumnType] with the given configuration.
    pub fn new(parser_options: ParserOptions, format_options: FormatOptions) -> Self {
        Self {
            parser_options,
            format_options,
            _phantom: PhantomData,
        }
    }

    /// Return the runtime tag of `T`.
    pub fn name(&self) -> ColumnTypeName {
        T::TYPE
    }

    /// Return the sentinel used for missing values.
    pub fn missing_value(&self) -> T {
        T::missing_value()
    }

    /// Return the options used for parsing.
    pub fn parser_options(&self) -> &ParserOptions {
        &self.parser_options
    }

    /// Return the options used for formatting.
    pub fn format_options(&self) -> &FormatOptions {
        &self.format_options
    }

    /// Returns `true` if `text` denotes a missing value.
    pub fn is_na(&self, text: &str) -> bool {
        self.parser_options.is_missing_token(text)
    }

    /// Returns `true` if [ColumnType::parse] would succeed on `text`.
    pub fn can_parse(&self, text: &str) -> bool {
        self.is_na(text) || T::parse_value(text, &self.parser_options).is_ok()
    }

    /// Parse `text` into a value.
    ///
    /// # Errors
    /// Returns [Error::ConversionFailure] if `text` is neither a missing-value marker
    /// nor a valid value of type `T`.
    pub fn parse(&self, text: &str) -> Result<T, Error> {
        if self.is_na(text) {
            return Ok(T::missing_value());
        }

        Ok(T::parse_value(text, &self.parser_options)?)
    }

    /// Format `value` for display, printing the configured text for missing values.
    pub fn format(&self, value: &T) -> String {
        if value.is_missing() {
            self.format_options.missing_text.clone()
        } else {
            value.format_value(&self.format_options)
        }
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::{ColumnType, FormatOptions, ParserOptions};
    use crate::{
        datatypes::{ColumnTypeName, Double},
        error::Error,
    };
    use test_log::test;

    #[test]
    fn missing_tokens_become_sentinels() {
        let integers = ColumnType::<i32>::default();
        assert!(integers.is_na("NA"));
        assert!(integers.is_na("  "));
        assert_eq!(integers.parse("NA"), Ok(i32::MIN));
        assert_eq!(integers.parse("12"), Ok(12));

        let doubles = ColumnType::<Double>::default();
        assert!(doubles.parse("NaN").unwrap().is_nan());
    }

    #[test]
    fn malformed_text_is_an_error() {
        let integers = ColumnType::<i32>::default();
        assert!(!integers.can_parse("12x"));
        assert!(integers.can_parse("null"));

        match integers.parse("12x") {
            Err(Error::ConversionFailure(error)) => {
                assert_eq!(error.target, ColumnTypeName::Integer);
                assert_eq!(error.value, "12x");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn custom_options() {
        let parser_options = ParserOptions {
            missing_tokens: vec!["?".to_string()],
            ..ParserOptions::default()
        };
        let format_options = FormatOptions {
            missing_text: "<missing>".to_string(),
            ..FormatOptions::default()
        };
        let dates = ColumnType::<NaiveDate>::new(parser_options, format_options);

        assert!(!dates.is_na("NA"));
        assert!(dates.parse("NA").is_err());
        let missing = dates.parse("?").unwrap();
        assert_eq!(dates.format(&missing), "<missing>");

        let date = dates.parse("2020-05-17").unwrap();
        assert_eq!(dates.format(&date), "2020-05-17");
        assert_eq!(dates.name(), ColumnTypeName::Date);
    }
}
