use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the [`PercentRank`] indicator.
    PercentRankConfig, PercentRankConfigBuilder, "PERCENTRANK", default = 20, min = 1
);

/// Percent rank of the current value within the previous `length` values.
///
/// Counts how many of the buffered values are less than or equal to the new
/// one, before the new value is buffered:
///
/// ```text
/// rank = 100 × count(prev ≤ price) / length
/// ```
///
/// Returns NaN until `length` values have been buffered, so the first
/// defined output is on call `length + 1`.
///
/// # Example
///
/// ```
/// use ta_stream::{PercentRank, PercentRankConfig};
///
/// let mut rank = PercentRank::new(PercentRankConfig::new(4).unwrap());
///
/// for v in [1.0, 2.0, 3.0, 4.0] {
///     assert!(rank.compute(v).is_nan());
/// }
/// // 2.5 beats 1 and 2
/// assert_eq!(rank.compute(2.5), 50.0);
/// ```
#[derive(Clone, Debug)]
pub struct PercentRank {
    config: PercentRankConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for PercentRank {
    type Config = PercentRankConfig;
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
        self.current = if self.window.is_full() {
            let count = self.window.values().iter().filter(|&&v| v <= price).count();
            #[allow(clippy::cast_precision_loss)]
            {
                count as f64 * 100.0 / self.config.length as f64
            }
        } else {
            Price::NAN
        };

        self.window.put(price);

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for PercentRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PERCENTRANK({})", self.config.length)
    }
}
