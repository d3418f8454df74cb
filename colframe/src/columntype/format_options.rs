//! This module defines [FormatOptions] and the number localization used by cell formatting.

use serde::{Deserialize, Serialize};

/// Separator conventions for formatted numbers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberLocale {
    /// No digit grouping, `.` as decimal separator (`1234.5`)
    #[default]
    Plain,
    /// `,` groups thousands, `.` separates decimals (`1,234.5`)
    English,
    /// `.` groups thousands, `,` separates decimals (`1.234,5`)
    Continental,
}

impl NumberLocale {
    fn separators(&self) -> (Option<char>, char) {
        match self {
            NumberLocale::Plain => (None, '.'),
            NumberLocale::English => (Some(','), '.'),
            NumberLocale::Continental => (Some('.'), ','),
        }
    }
}

/// Configuration for turning column values into display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Fixed number of decimal places for floating point values
    pub decimal_places: Option<usize>,
    /// Separator conventions for numbers
    pub locale: NumberLocale,
    /// chrono pattern used for dates
    pub date_pattern: String,
    /// chrono pattern used for date-times
    pub datetime_pattern: String,
    /// Text printed for missing values
    pub missing_text: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            decimal_places: None,
            locale: NumberLocale::Plain,
            date_pattern: "%Y-%m-%d".to_string(),
            datetime_pattern: "%Y-%m-%dT%H:%M:%S%.f".to_string(),
            missing_text: String::new(),
        }
    }
}

/// Rewrites a number printed by Rust (`-1234.5`, `1e21`, `inf`) according to `locale`.
pub(crate) fn localize_number(raw: &str, locale: NumberLocale) -> String {
    let (grouping, decimal) = locale.separators();

    let (sign, unsigned) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    if !unsigned.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
        return raw.to_string();
    }

    let (integral, fractional) = match unsigned.split_once('.') {
        Some((integral, fractional)) => (integral, Some(fractional)),
        None => (unsigned, None),
    };

    let mut result = String::with_capacity(raw.len() + integral.len() / 3);
    result.push_str(sign);
    for (position, digit) in integral.chars().enumerate() {
        let remaining = integral.len() - position;
        if position > 0 && remaining % 3 == 0 {
            if let Some(separator) = grouping {
                result.push(separator);
            }
        }
        result.push(digit);
    }
    if let Some(fractional) = fractional {
        result.push(decimal);
        result.push_str(fractional);
    }

    result
}
