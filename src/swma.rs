use std::fmt::Display;

use crate::{CircularBuffer, Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, Result};

const TAPS: usize = 4;

/// Configuration for the Symmetrically Weighted Moving Average ([`Swma`]).
///
/// SWMA has a fixed four-value window and no parameters.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct SwmaConfig;

impl IndicatorConfig for SwmaConfig {
    type Builder = SwmaConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        SwmaConfigBuilder
    }
}

impl SwmaConfig {
    /// Window length, always 4.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        TAPS
    }
}

impl Display for SwmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SwmaConfig")
    }
}

/// Builder for [`SwmaConfig`].
pub struct SwmaConfigBuilder;

impl IndicatorConfigBuilder<SwmaConfig> for SwmaConfigBuilder {
    fn build(self) -> Result<SwmaConfig> {
        Ok(SwmaConfig)
    }
}

/// Symmetrically Weighted Moving Average (SWMA).
///
/// Four-tap filter with weights `1/6, 2/6, 2/6, 1/6`, oldest to newest.
/// Returns NaN until four values have been seen.
///
/// # Example
///
/// ```
/// use ta_stream::{Swma, SwmaConfig};
///
/// let mut swma = Swma::new(SwmaConfig);
///
/// for v in [6.0, 6.0, 6.0] {
///     assert!(swma.compute(v).is_nan());
/// }
/// assert!((swma.compute(6.0) - 6.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Swma {
    window: CircularBuffer,
    current: Price,
}

impl Indicator for Swma {
    type Config = SwmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(_config: Self::Config) -> Self {
        Self {
            window: CircularBuffer::new(TAPS),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.window.put(price);

        self.current = if self.window.is_full() {
            self.window
                .ordered_values()
                .zip([1.0, 2.0, 2.0, 1.0])
                .map(|(v, w)| v * w / 6.0)
                .sum()
        } else {
            Price::NAN
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Swma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SWMA")
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{assert_approx, assert_nan};

    #[test]
    fn nan_until_four_values() {
        let mut swma = Swma::new(SwmaConfig);
        for v in [1.0, 2.0, 3.0] {
            assert_nan!(swma.compute(v));
        }
    }

    #[test]
    fn weights_oldest_to_newest() {
        let mut swma = Swma::new(SwmaConfig);
        for v in [6.0, 0.0, 0.0] {
            swma.compute(v);
        }
        // Oldest 6 weighted 1/6
        assert_approx!(swma.compute(0.0), 1.0);
        // Now 6 is gone: [0, 0, 0, 12] → 12 × 1/6
        assert_approx!(swma.compute(12.0), 2.0);
        // [0, 0, 12, 0] → 12 × 2/6
        assert_approx!(swma.compute(0.0), 4.0);
    }

    #[test]
    fn config_is_parameterless() {
        assert_eq!(SwmaConfig::builder().build().unwrap(), SwmaConfig);
        assert_eq!(SwmaConfig.length(), 4);
        assert_eq!(Swma::new(SwmaConfig).to_string(), "SWMA");
    }
}
