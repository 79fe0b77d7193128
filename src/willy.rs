use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the [`Willy`] oscillator.
    WillyConfig, WillyConfigBuilder, "WILLY", default = 6, min = 1
);

/// Willy: a Williams %R of a single series, rescaled to `[20, 80]`.
///
/// ```text
/// WILLY = 60 × (price − highest) / (highest − lowest) + 80
/// ```
///
/// `highest` and `lowest` span the last `length` values, including the
/// current one. NaN until the window is full, and on a flat window.
///
/// # Example
///
/// ```
/// use ta_stream::{Willy, WillyConfig};
///
/// let mut willy = Willy::new(WillyConfig::new(3).unwrap());
///
/// willy.compute(10.0);
/// willy.compute(20.0);
/// assert_eq!(willy.compute(15.0), 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct Willy {
    config: WillyConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for Willy {
    type Config = WillyConfig;
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

        self.current = if self.window.is_full() {
            let values = self.window.values();
            let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let low = values.iter().copied().fold(f64::INFINITY, f64::min);
            60.0 * (price - high) / (high - low) + 80.0
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

impl Display for Willy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WILLY({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::assert_nan;

    fn willy(length: usize) -> Willy {
        Willy::new(WillyConfig::new(length).unwrap())
    }

    #[test]
    fn nan_until_window_full() {
        let mut willy = willy(3);
        assert_nan!(willy.compute(1.0));
        assert_nan!(willy.compute(2.0));
    }

    #[test]
    fn range_is_20_to_80() {
        let mut willy = willy(3);
        willy.compute(10.0);
        willy.compute(20.0);
        assert_eq!(willy.compute(20.0), 80.0);
        assert_eq!(willy.compute(10.0), 20.0);
    }

    #[test]
    fn flat_window_is_nan() {
        let mut willy = willy(2);
        willy.compute(5.0);
        assert_nan!(willy.compute(5.0));
    }

    #[test]
    fn display() {
        assert_eq!(willy(6).to_string(), "WILLY(6)");
    }
}
