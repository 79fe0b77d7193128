use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Kaufman [`EfficiencyRatio`].
    EfficiencyRatioConfig, EfficiencyRatioConfigBuilder, "ER", default = 10, min = 1
);

/// Kaufman Efficiency Ratio (ER), scaled to `[-100, 100]`.
///
/// Compares the net move over `length` steps with the total distance
/// travelled:
///
/// ```text
/// ER = 100 × (price − price[length]) / Σ |priceᵢ − priceᵢ₋₁|
/// ```
///
/// Buffers `length + 1` prices and returns NaN until the buffer is full. A
/// perfectly flat window (zero total travel) yields `0`, not NaN.
///
/// # Example
///
/// ```
/// use ta_stream::{EfficiencyRatio, EfficiencyRatioConfig};
///
/// let mut er = EfficiencyRatio::new(EfficiencyRatioConfig::new(2).unwrap());
///
/// assert!(er.compute(10.0).is_nan());
/// assert!(er.compute(12.0).is_nan());
/// // net 1, travel 2 + 1
/// assert!((er.compute(11.0) - 100.0 / 3.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct EfficiencyRatio {
    config: EfficiencyRatioConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for EfficiencyRatio {
    type Config = EfficiencyRatioConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            window: CircularBuffer::new(config.length + 1),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.window.put(price);

        if !self.window.is_full() {
            self.current = Price::NAN;
            return self.current;
        }

        let travel: f64 = self
            .window
            .ordered_values()
            .zip(self.window.ordered_values().skip(1))
            .map(|(prev, next)| (next - prev).abs())
            .sum();
        let net = price - self.window.first();

        self.current = if travel == 0.0 {
            0.0
        } else {
            net / travel * 100.0
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for EfficiencyRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ER({})", self.config.length)
    }
}
