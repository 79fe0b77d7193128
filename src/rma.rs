use std::fmt::Display;

use crate::{Indicator, Price, Sma, SmaConfig, indicator::length_config};

length_config!(
    /// Configuration for the Relative Moving Average ([`Rma`]) indicator.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_stream::RmaConfig;
    ///
    /// let config = RmaConfig::new(14).unwrap();
    /// assert_eq!(config.length(), 14);
    /// ```
    RmaConfig, RmaConfigBuilder, "RMA", default = 14, min = 1
);

/// Relative Moving Average (RMA), also known as Wilder's smoothing.
///
/// Exponential smoothing with `α = 1 / length`:
///
/// ```text
/// RMA = α × price + (1 − α) × prev_RMA
/// ```
///
/// Seeded with the first non-NaN [`Sma`] of the raw stream. Output is NaN
/// until then. After seeding a NaN input propagates into every later value.
///
/// # Example
///
/// ```
/// use ta_stream::{Rma, RmaConfig};
///
/// let mut rma = Rma::new(RmaConfig::new(2).unwrap());
///
/// assert!(rma.compute(2.0).is_nan());
/// // Seed: (2 + 4) / 2 = 3
/// assert_eq!(rma.compute(4.0), 3.0);
/// // 0.5 × 7 + 0.5 × 3 = 5
/// assert_eq!(rma.compute(7.0), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct Rma {
    config: RmaConfig,
    alpha: f64,
    sma: Option<Sma>,
    current: Price,
}

impl Indicator for Rma {
    type Config = RmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            #[allow(clippy::cast_precision_loss)]
            alpha: 1.0 / config.length as f64,
            sma: Some(Sma::new(SmaConfig {
                length: config.length,
            })),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        match &mut self.sma {
            Some(sma) => {
                let seed = sma.compute(price);
                if !seed.is_nan() {
                    tracing::trace!(length = self.config.length, seed, "RMA seeded");
                    self.current = seed;
                    self.sma = None;
                }
            }
            None => {
                self.current = self
                    .alpha
                    .mul_add(price, (1.0 - self.alpha) * self.current);
            }
        }

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Rma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RMA({})", self.config.length)
    }
}
