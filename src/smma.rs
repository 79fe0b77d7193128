use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Smoothed Moving Average ([`Smma`]).
    SmmaConfig, SmmaConfigBuilder, "SMMA", default = 20, min = 1
);

/// Smoothed Moving Average (SMMA).
///
/// Seeded with the mean of the first full window, then:
///
/// ```text
/// SMMA = (prev_SMMA × (length − 1) + price) / length
/// ```
///
/// If the average ever becomes NaN it is reseeded from the window on the
/// next call that finds the window full.
///
/// # Example
///
/// ```
/// use ta_stream::{Smma, SmmaConfig};
///
/// let mut smma = Smma::new(SmmaConfig::new(2).unwrap());
///
/// assert!(smma.compute(1.0).is_nan());
/// assert_eq!(smma.compute(3.0), 2.0);
/// // (2 × 1 + 6) / 2 = 4
/// assert_eq!(smma.compute(6.0), 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct Smma {
    config: SmmaConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for Smma {
    type Config = SmmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            window: CircularBuffer::new(config.length),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.window.put(price);

        #[allow(clippy::cast_precision_loss)]
        let length = self.config.length as f64;

        if self.current.is_nan() {
            if self.window.is_full() {
                self.current = self.window.ordered_values().sum::<f64>() / length;
                if !self.current.is_nan() {
                    tracing::trace!(length = self.config.length, seed = self.current, "SMMA seeded");
                }
            }
        } else {
            self.current = (self.current * (length - 1.0) + price) / length;
        }

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Smma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMMA({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::assert_nan;

    fn smma(length: usize) -> Smma {
        Smma::new(SmmaConfig::new(length).unwrap())
    }

    #[test]
    fn seeds_with_window_mean() {
        let mut smma = smma(3);
        assert_nan!(smma.compute(3.0));
        assert_nan!(smma.compute(6.0));
        assert_eq!(smma.compute(9.0), 6.0);
    }

    #[test]
    fn smooths_after_seed() {
        let mut smma = smma(3);
        for v in [3.0, 6.0, 9.0] {
            smma.compute(v);
        }
        // (6 × 2 + 12) / 3 = 8
        assert_eq!(smma.compute(12.0), 8.0);
    }

    #[test]
    fn reseeds_after_nan() {
        let mut smma = smma(2);
        smma.compute(1.0);
        smma.compute(3.0);
        assert_nan!(smma.compute(f64::NAN));
        // Window [NaN, 5] still poisons the seed
        assert_nan!(smma.compute(5.0));
        // Window [5, 7] reseeds
        assert_eq!(smma.compute(7.0), 6.0);
    }

    #[test]
    fn display() {
        assert_eq!(smma(20).to_string(), "SMMA(20)");
    }
}
