use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Weighted Moving Average ([`Wma`]) indicator.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_stream::WmaConfig;
    ///
    /// assert_eq!(WmaConfig::default().length(), 15);
    /// ```
    WmaConfig, WmaConfigBuilder, "WMA", default = 15, min = 1
);

/// Weighted Moving Average (WMA).
///
/// Linearly weighted mean of the last `length` values. The newest value
/// has weight `length`, the oldest weight `1`:
///
/// ```text
/// WMA = Σ wᵢ × priceᵢ / (length × (length + 1) / 2)
/// ```
///
/// Returns NaN until the window is full.
///
/// # Example
///
/// ```
/// use ta_stream::{Wma, WmaConfig};
///
/// let mut wma = Wma::new(WmaConfig::new(3).unwrap());
///
/// wma.compute(1.0);
/// wma.compute(2.0);
/// // (1×1 + 2×2 + 3×3) / 6 = 14 / 6
/// assert_eq!(wma.compute(3.0), 14.0 / 6.0);
/// ```
#[derive(Clone, Debug)]
pub struct Wma {
    config: WmaConfig,
    window: CircularBuffer,
    divisor: f64,
    current: Price,
}

impl Indicator for Wma {
    type Config = WmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let length = config.length as f64;

        Self {
            config,
            window: CircularBuffer::new(config.length),
            divisor: length * (length + 1.0) / 2.0,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.window.put(price);

        self.current = if self.window.is_full() {
            // Oldest first, so weights run 1..=length
            #[allow(clippy::cast_precision_loss)]
            let sum: f64 = self
                .window
                .ordered_values()
                .enumerate()
                .map(|(i, v)| v * (i + 1) as f64)
                .sum();
            sum / self.divisor
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

impl Display for Wma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "WMA({})", self.config.length)
    }
}
