use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Simple Moving Average ([`Sma`]) indicator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ta_stream::SmaConfig;
    ///
    /// let config = SmaConfig::new(20).unwrap();
    /// assert_eq!(config.length(), 20);
    /// assert!(SmaConfig::new(0).is_err());
    /// ```
    SmaConfig, SmaConfigBuilder, "SMA", default = 20, min = 1
);

/// Simple Moving Average (SMA).
///
/// Computes the unweighted mean of the last *n* values, where *n* is the
/// configured window length. Returns NaN until the window is full.
///
/// The mean is recomputed from the buffered window on every call, so the
/// output never accumulates running-sum drift.
///
/// # Example
///
/// ```rust
/// use ta_stream::{Sma, SmaConfig};
///
/// let mut sma = Sma::new(SmaConfig::new(3).unwrap());
///
/// assert!(sma.compute(10.0).is_nan());
/// assert!(sma.compute(20.0).is_nan());
/// assert_eq!(sma.compute(30.0), 20.0);
/// ```
#[derive(Clone, Debug)]
pub struct Sma {
    config: SmaConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for Sma {
    type Config = SmaConfig;
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
            #[allow(clippy::cast_precision_loss)]
            let length = self.config.length as f64;
            self.window.values().iter().sum::<f64>() / length
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

impl Display for Sma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SMA({})", self.config.length)
    }
}
