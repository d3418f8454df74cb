//! This module defines [ParserOptions].

use serde::{Deserialize, Serialize};

/// Configuration for turning text into column values.
///
/// Can be deserialized from a host application's configuration;
/// absent fields take their default values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Texts (compared after trimming, case-sensitive) that denote a missing value
    pub missing_tokens: Vec<String>,
    /// Texts (case-insensitive) parsed as `true`
    pub true_tokens: Vec<String>,
    /// Texts (case-insensitive) parsed as `false`
    pub false_tokens: Vec<String>,
    /// chrono patterns tried in order when parsing dates
    pub date_formats: Vec<String>,
    /// chrono patterns tried in order when parsing date-times
    pub datetime_formats: Vec<String>,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            missing_tokens: strings(&["", "NA", "N/A", "NaN", "null", "-"]),
            true_tokens: strings(&["true", "t", "yes", "y", "1"]),
            false_tokens: strings(&["false", "f", "no", "n", "0"]),
            date_formats: strings(&["%Y-%m-%d", "%Y%m%d", "%m/%d/%Y", "%d.%m.%Y"]),
            datetime_formats: strings(&[
                "%Y-%m-%dT%H:%M:%S%.f",
                "%Y-%m-%d %H:%M:%S%.f",
                "%Y-%m-%dT%H:%M",
                "%Y-%m-%d %H:%M",
            ]),
        }
    }
}

impl ParserOptions {
    /// Returns `true` if `text` denotes a missing value.
    pub fn is_missing_token(&self, text: &str) -> bool {
        let trimmed = text.trim();
        self.missing_tokens.iter().any(|token| token == trimmed)
    }
}
