use std::fmt::Display;

use crate::{CircularBuffer, Hlc, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Williams %R ([`Wpr`]) indicator.
    WprConfig, WprConfigBuilder, "WPR", default = 20, min = 1
);

/// Williams %R (WPR).
///
/// Position of the close within the highest high and lowest low of the last
/// `length` bars, on a `[-100, 0]` scale:
///
/// ```text
/// %R = −100 × (highest_high − close) / (highest_high − lowest_low)
/// ```
///
/// NaN until `length` bars are seen.
///
/// # Example
///
/// ```
/// use ta_stream::{Hlc, Wpr, WprConfig};
///
/// let mut wpr = Wpr::new(WprConfig::new(2).unwrap());
///
/// assert!(wpr.compute(Hlc::new(12.0, 8.0, 10.0)).is_nan());
/// // Range 8..14, close 11 halfway
/// assert_eq!(wpr.compute(Hlc::new(14.0, 9.0, 11.0)), -50.0);
/// ```
#[derive(Clone, Debug)]
pub struct Wpr {
    config: WprConfig,
    highs: CircularBuffer,
    lows: CircularBuffer,
    current: Price,
}

impl Indicator for Wpr {
    type Config = WprConfig;
    type Input = Hlc;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            highs: CircularBuffer::new(config.length),
            lows: CircularBuffer::new(config.length),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, hlc: Hlc) -> Price {
        self.highs.put(hlc.high);
        self.lows.put(hlc.low);

        self.current = if self.highs.is_full() && self.lows.is_full() {
            let highest = self.highs.values().iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let lowest = self.lows.values().iter().copied().fold(f64::INFINITY, f64::min);
            -100.0 * (highest - hlc.close) / (highest - lowest)
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

impl Display for Wpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WPR({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::assert_nan;

    fn wpr(length: usize) -> Wpr {
        Wpr::new(WprConfig::new(length).unwrap())
    }

    #[test]
    fn nan_until_window_full() {
        let mut wpr = wpr(3);
        assert_nan!(wpr.compute(Hlc::new(2.0, 1.0, 1.5)));
        assert_nan!(wpr.compute(Hlc::new(2.0, 1.0, 1.5)));
    }

    #[test]
    fn close_at_extremes() {
        let mut wpr = wpr(2);
        wpr.compute(Hlc::new(10.0, 5.0, 7.0));
        assert_eq!(wpr.compute(Hlc::new(10.0, 6.0, 10.0)), 0.0);
        assert_eq!(wpr.compute(Hlc::new(9.0, 5.0, 5.0)), -100.0);
    }

    #[test]
    fn old_extremes_roll_off() {
        let mut wpr = wpr(2);
        wpr.compute(Hlc::new(100.0, 0.0, 50.0));
        wpr.compute(Hlc::new(12.0, 8.0, 10.0));
        // Window now [12..8, 14..9]
        assert_eq!(wpr.compute(Hlc::new(14.0, 9.0, 11.0)), -50.0);
    }

    #[test]
    fn display() {
        assert_eq!(wpr(20).to_string(), "WPR(20)");
    }
}
