//! This module defines a wrapper type [Double] for [f64] that can be used as a column value.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f64] with a total order.
///
/// [f64::NAN] is the missing value of double columns.
/// All NaN payloads compare equal to each other and greater than every other value,
/// and `-0.0` compares equal to `0.0`.
/// [Hash] is consistent with this notion of equality.
#[derive(Copy, Clone, Debug, Default)]
pub struct Double(f64);

impl Double {
    /// The missing value.
    pub const NAN: Double = Double(f64::NAN);

    /// Wraps the given [f64]-`value` as a value over [Double].
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped [f64].
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` if this value is NaN.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    /// Representation used for comparison and hashing.
    fn canonical(self) -> f64 {
        if self.0.is_nan() {
            f64::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Double {}

impl PartialOrd for Double {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Double {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.canonical().total_cmp(&other.canonical()),
        }
    }
}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state)
    }
}

impl fmt::Display for Double {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Double> for f64 {
    fn from(value: Double) -> Self {
        value.0
    }
}

#[cfg(test)]
impl Arbitrary for Double {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(f64::arbitrary(g))
    }
}
