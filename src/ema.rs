use std::fmt::Display;

use crate::{Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Exponential Moving Average ([`Ema`]) indicator.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_stream::EmaConfig;
    ///
    /// let config = EmaConfig::new(20).unwrap();
    /// assert_eq!(config.length(), 20);
    /// ```
    EmaConfig, EmaConfigBuilder, "EMA", default = 20, min = 1
);

#[derive(Clone, Debug)]
enum EmaPhase {
    Seeding { sum: f64, count: usize },
    Active { ema: Price },
}

/// Exponential Moving Average (EMA).
///
/// A weighted moving average that gives more weight to recent prices. Uses
/// the standard smoothing factor `α = 2 / (length + 1)`:
///
/// ```text
/// EMA = α × (price − prev_EMA) + prev_EMA
/// ```
///
/// The first `length` non-NaN prices are summed to compute an SMA seed.
/// Output is NaN until the seed is ready.
///
/// # NaN inputs
///
/// A NaN price is returned verbatim and leaves the state untouched, both
/// before and after seeding. It is not counted towards the seed, and it
/// does not invalidate an already seeded average. This lets an EMA consume
/// the output of another indicator that is still warming up.
///
/// # Example
///
/// ```
/// use ta_stream::{Ema, EmaConfig};
///
/// let mut ema = Ema::new(EmaConfig::new(3).unwrap());
///
/// // Seeding phase
/// assert!(ema.compute(2.0).is_nan());
/// assert!(ema.compute(4.0).is_nan());
///
/// // SMA seed = (2 + 4 + 6) / 3 = 4.0
/// assert_eq!(ema.compute(6.0), 4.0);
///
/// // EMA(3) α = 0.5: 0.5 × (8 − 4) + 4 = 6.0
/// assert_eq!(ema.compute(8.0), 6.0);
/// ```
#[derive(Clone, Debug)]
pub struct Ema {
    config: EmaConfig,
    alpha: f64,
    phase: EmaPhase,
    current: Price,
}

impl Indicator for Ema {
    type Config = EmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            #[allow(clippy::cast_precision_loss)]
            alpha: 2.0 / (config.length + 1) as f64,
            phase: EmaPhase::Seeding { sum: 0.0, count: 0 },
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        if price.is_nan() {
            self.current = price;
            return price;
        }

        self.current = match &mut self.phase {
            EmaPhase::Seeding { sum, count } => {
                *sum += price;
                *count += 1;

                #[allow(clippy::cast_precision_loss)]
                let seed = *sum / self.config.length as f64;

                // A non-finite sum never seeds, the count moves past length.
                if *count == self.config.length && !seed.is_nan() {
                    tracing::trace!(length = self.config.length, seed, "EMA seeded");
                    self.phase = EmaPhase::Active { ema: seed };
                    seed
                } else {
                    Price::NAN
                }
            }
            EmaPhase::Active { ema } => {
                *ema = self.alpha.mul_add(price - *ema, *ema);
                *ema
            }
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Ema {
    /// Whether the SMA seed has been computed.
    #[must_use]
    pub fn is_seeded(&self) -> bool {
        matches!(self.phase, EmaPhase::Active { .. })
    }
}

impl Display for Ema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EMA({})", self.config.length)
    }
}
