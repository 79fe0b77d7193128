use std::fmt::Display;

use crate::{Ema, EmaConfig, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Double Exponential Moving Average ([`Dema`]).
    DemaConfig, DemaConfigBuilder, "DEMA", default = 20, min = 1
);

/// Double Exponential Moving Average (DEMA).
///
/// Two cascaded [`Ema`]s of the same length, the second fed the output of
/// the first:
///
/// ```text
/// DEMA = 2 × EMA₁ − EMA₂
/// ```
///
/// NaN while either stage is NaN. Since an EMA skips NaN inputs, the second
/// stage starts seeding only once the first one is seeded, so the first
/// defined value arrives on call `2 × length − 1`.
///
/// # Example
///
/// ```
/// use ta_stream::{Dema, DemaConfig};
///
/// let mut dema = Dema::new(DemaConfig::new(2).unwrap());
///
/// assert!(dema.compute(1.0).is_nan());
/// assert!(dema.compute(3.0).is_nan()); // EMA₁ = 2
/// // EMA₁ = 2 + (2/3) × (5 − 2) = 4, EMA₂ = (2 + 4) / 2 = 3
/// assert!((dema.compute(5.0) - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Dema {
    config: DemaConfig,
    ema1: Ema,
    ema2: Ema,
    current: Price,
}

impl Indicator for Dema {
    type Config = DemaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        let ema = EmaConfig {
            length: config.length,
        };

        Self {
            config,
            ema1: Ema::new(ema),
            ema2: Ema::new(ema),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let e1 = self.ema1.compute(price);
        let e2 = self.ema2.compute(e1);

        self.current = if e1.is_nan() || e2.is_nan() {
            Price::NAN
        } else {
            2.0 * e1 - e2
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Dema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DEMA({})", self.config.length)
    }
}
