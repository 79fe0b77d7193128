use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the [`Momentum`] indicator.
    MomentumConfig, MomentumConfigBuilder, "MOM", default = 20, min = 1
);

/// Momentum: change over `length` samples.
///
/// ```text
/// MOM = price − price[length]
/// ```
///
/// NaN until `length + 1` prices are buffered. A NaN price is returned
/// verbatim and not buffered.
///
/// # Example
///
/// ```
/// use ta_stream::{Momentum, MomentumConfig};
///
/// let mut mom = Momentum::new(MomentumConfig::new(2).unwrap());
///
/// assert!(mom.compute(10.0).is_nan());
/// assert!(mom.compute(11.0).is_nan());
/// assert_eq!(mom.compute(15.0), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct Momentum {
    config: MomentumConfig,
    window: CircularBuffer,
    current: Price,
}

impl Indicator for Momentum {
    type Config = MomentumConfig;
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
        if price.is_nan() {
            self.current = price;
            return price;
        }

        self.window.put(price);

        // first() is NaN until the buffer is full
        self.current = price - self.window.first();
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Momentum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MOM({})", self.config.length)
    }
}
