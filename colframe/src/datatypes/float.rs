//! This module defines a wrapper type [Float] for [f32] that can be used as a column value.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(test)]
use quickcheck::{Arbitrary, Gen};

/// Wrapper for [f32] with a total order.
///
/// Behaves like [super::Double]: [f32::NAN] marks missing values,
/// sorts after every other value and is equal to itself.
#[derive(Copy, Clone, Debug, Default)]
pub struct Float(f32);

impl Float {
    /// The missing value.
    pub const NAN: Float = Float(f32::NAN);

    /// Wraps the given [f32]-`value` as a value over [Float].
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Returns the wrapped [f32].
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns `true` if this value is NaN.
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn canonical(self) -> f32 {
        if self.0.is_nan() {
            f32::NAN
        } else if self.0 == 0.0 {
            0.0
        } else {
            self.0
        }
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.is_nan(), other.0.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.canonical().total_cmp(&other.canonical()),
        }
    }
}

impl Hash for Float {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().to_bits().hash(state)
    }
}

impl fmt::Display for Float {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<f32> for Float {
    fn from(value: f32) -> Self {
        Self(value)
    }
}

impl From<Float> for f32 {
    fn from(value: Float) -> Self {
        value.0
    }
}

#[cfg(test)]
impl Arbitrary for Float {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(f32::arbitrary(g))
    }
}
