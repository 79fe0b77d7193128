use crate::{Error, Result};

use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

/// Width multiplier for bands and stops: the `k` in `middle ± k × σ` and
/// `low − k × ATR`.
///
/// Wraps a finite, strictly positive `f64`. Implements `Eq` and `Hash` via
/// bit-level comparison, which is sound because NaN is rejected at
/// construction.
#[derive(Clone, Copy, Debug)]
pub struct Multiplier(f64);

impl Multiplier {
    /// Creates a new multiplier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMultiplier`] if `value` is zero, negative, infinite
    /// or NaN.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            tracing::debug!(value, "rejected multiplier");
            return Err(Error::InvalidMultiplier(value));
        }

        Ok(Self(value))
    }

    pub(crate) const fn new_unchecked(value: f64) -> Self {
        Self(value)
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for Multiplier {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Multiplier {}

impl Hash for Multiplier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
