use std::fmt::Display;

use crate::{Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Relative Strength Index ([`Rsi`]) indicator.
    ///
    /// RSI uses Wilder's smoothing, which has infinite memory: the seed
    /// (a running mean of the first `length` gains and losses) influences
    /// all subsequent values. The minimum length is 2.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_stream::RsiConfig;
    ///
    /// let config = RsiConfig::new(14).unwrap();
    /// assert_eq!(config.length(), 14);
    /// assert!(RsiConfig::new(1).is_err());
    /// ```
    RsiConfig, RsiConfigBuilder, "RSI", default = 14, min = 2
);

/// Relative Strength Index (RSI) with Wilder's smoothing.
///
/// Measures the speed and magnitude of recent price changes on a 0–100
/// scale. The first sample has no previous price and counts as a zero gain
/// and zero loss.
///
/// For the first `length` samples the averages are a running mean. After
/// that they are smoothed with Wilder's method:
///
/// ```text
/// avg_gain = (prev_avg_gain × (length − 1) + gain) / length
/// avg_loss = (prev_avg_loss × (length − 1) + loss) / length
/// RSI      = 100 − 100 / (1 + avg_gain / avg_loss)
/// ```
///
/// NaN for the first `length − 1` calls. NaN also whenever the average loss
/// is zero, including a window of pure gains.
///
/// # Example
///
/// ```
/// use ta_stream::{Rsi, RsiConfig};
///
/// let mut rsi = Rsi::new(RsiConfig::new(3).unwrap());
///
/// assert!(rsi.compute(10.0).is_nan());
/// assert!(rsi.compute(12.0).is_nan());
/// // avg_gain = 2/3, avg_loss = 1/3, RS = 2
/// let value = rsi.compute(11.0);
/// assert!((value - 200.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Rsi {
    config: RsiConfig,
    prev: Price,
    avg_gain: f64,
    avg_loss: f64,
    count: usize,
    current: Price,
}

impl Indicator for Rsi {
    type Config = RsiConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            prev: Price::NAN,
            avg_gain: 0.0,
            avg_loss: 0.0,
            count: 0,
            current: Price::NAN,
        }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn compute(&mut self, price: Price) -> Price {
        let (gain, loss) = if self.prev.is_nan() {
            (0.0, 0.0)
        } else {
            let change = price - self.prev;
            (change.max(0.0), (-change).max(0.0))
        };

        let length = self.config.length;
        if self.count < length {
            let count = self.count as f64;
            self.avg_gain = (self.avg_gain * count + gain) / (count + 1.0);
            self.avg_loss = (self.avg_loss * count + loss) / (count + 1.0);
        } else {
            let n = length as f64;
            self.avg_gain = (self.avg_gain * (n - 1.0) + gain) / n;
            self.avg_loss = (self.avg_loss * (n - 1.0) + loss) / n;
        }

        self.count += 1;
        self.prev = price;

        self.current = if self.count < length || self.avg_loss == 0.0 {
            Price::NAN
        } else {
            let rs = self.avg_gain / self.avg_loss;
            100.0 - 100.0 / (rs + 1.0)
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Rsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RSI({})", self.config.length)
    }
}
