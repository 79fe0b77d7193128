use std::fmt::Display;

use crate::{Ema, EmaConfig, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the Triple Exponential Moving Average ([`Tema`]).
    TemaConfig, TemaConfigBuilder, "TEMA", default = 20, min = 1
);

/// Triple Exponential Moving Average (TEMA).
///
/// ```text
/// TEMA = 3 × EMA₁ − 3 × EMA₂ + EMA₃
/// ```
///
/// where each stage is an [`Ema`] of the previous one. NaN while any stage
/// is NaN.
#[derive(Clone, Debug)]
pub struct Tema {
    config: TemaConfig,
    ema1: Ema,
    ema2: Ema,
    ema3: Ema,
    current: Price,
}

impl Indicator for Tema {
    type Config = TemaConfig;
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
            ema3: Ema::new(ema),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let e1 = self.ema1.compute(price);
        let e2 = self.ema2.compute(e1);
        let e3 = self.ema3.compute(e2);

        self.current = if e1.is_nan() || e2.is_nan() || e3.is_nan() {
            Price::NAN
        } else {
            e1 * 3.0 - e2 * 3.0 + e3
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Tema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TEMA({})", self.config.length)
    }
}
