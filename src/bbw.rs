use std::fmt::Display;

use crate::{
    Bb, BbConfig, Indicator, IndicatorConfig, IndicatorConfigBuilder, Multiplier, Price, Result,
    error::check_length,
};

/// Configuration for the Bollinger Band Width ([`Bbw`]) indicator.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BbwConfig {
    pub(crate) length: usize,
    pub(crate) multiplier: Multiplier,
}

impl IndicatorConfig for BbwConfig {
    type Builder = BbwConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BbwConfigBuilder {
            length: 5,
            multiplier: 4.0,
        }
    }
}

impl BbwConfig {
    /// Window length of the underlying bands.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Standard deviation multiplier of the underlying bands.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Config with the given length and multiplier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) or
    /// [`Error::InvalidMultiplier`](crate::Error::InvalidMultiplier).
    pub fn new(length: usize, multiplier: f64) -> Result<Self> {
        Self::builder()
            .length(length)
            .multiplier(multiplier)
            .build()
    }
}

impl Default for BbwConfig {
    fn default() -> Self {
        Self {
            length: 5,
            multiplier: Multiplier::new_unchecked(4.0),
        }
    }
}

impl Display for BbwConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BbwConfig({}, {})", self.length, self.multiplier)
    }
}

/// Builder for [`BbwConfig`].
///
/// Defaults: length = 5, multiplier = 4.0.
pub struct BbwConfigBuilder {
    length: usize,
    multiplier: f64,
}

impl BbwConfigBuilder {
    /// Sets the window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the standard deviation multiplier.
    #[inline]
    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl IndicatorConfigBuilder<BbwConfig> for BbwConfigBuilder {
    fn build(self) -> Result<BbwConfig> {
        Ok(BbwConfig {
            length: check_length("BBW", self.length, 1)?,
            multiplier: Multiplier::new(self.multiplier)?,
        })
    }
}

/// Bollinger Band Width (BBW).
///
/// Band width relative to the middle band:
///
/// ```text
/// BBW = (upper − lower) / middle
/// ```
///
/// NaN while the bands are undefined, and when the middle band is zero.
///
/// # Example
///
/// ```
/// use ta_stream::{Bbw, BbwConfig};
///
/// let mut bbw = Bbw::new(BbwConfig::new(2, 1.0).unwrap());
///
/// bbw.compute(3.0);
/// // mean 4, σ 1: (5 − 3) / 4
/// assert_eq!(bbw.compute(5.0), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct Bbw {
    config: BbwConfig,
    bb: Bb,
    current: Price,
}

impl Indicator for Bbw {
    type Config = BbwConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            bb: Bb::new(BbConfig {
                length: config.length,
                multiplier: config.multiplier,
            }),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let bands = self.bb.compute(price);

        self.current = if bands.middle() == 0.0 {
            Price::NAN
        } else {
            bands.width() / bands.middle()
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Bbw {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BBW({}, {})", self.config.length, self.config.multiplier)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{assert_approx, assert_nan};

    fn bbw(length: usize, multiplier: f64) -> Bbw {
        Bbw::new(BbwConfig::new(length, multiplier).unwrap())
    }

    #[test]
    fn nan_until_window_full() {
        let mut bbw = bbw(3, 4.0);
        assert_nan!(bbw.compute(1.0));
        assert_nan!(bbw.compute(2.0));
        assert!(!bbw.compute(3.0).is_nan());
    }

    #[test]
    fn scales_with_multiplier() {
        // [3, 5]: width 2kσ = 8 at k = 4, relative to 4
        let mut bbw = bbw(2, 4.0);
        bbw.compute(3.0);
        assert_approx!(bbw.compute(5.0), 2.0);
    }

    #[test]
    fn zero_middle_is_nan() {
        let mut bbw = bbw(2, 1.0);
        bbw.compute(-1.0);
        assert_nan!(bbw.compute(1.0));
    }

    #[test]
    fn flat_is_zero() {
        let mut bbw = bbw(2, 1.0);
        bbw.compute(7.0);
        assert_eq!(bbw.compute(7.0), 0.0);
    }

    #[test]
    fn defaults() {
        assert_eq!(BbwConfig::default(), BbwConfig::new(5, 4.0).unwrap());
        assert_eq!(BbwConfig::default().to_string(), "BbwConfig(5, 4)");
        assert_eq!(Bbw::new(BbwConfig::default()).to_string(), "BBW(5, 4)");
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(BbwConfig::new(0, 4.0).is_err());
        assert!(BbwConfig::new(5, f64::NAN).is_err());
    }
}
