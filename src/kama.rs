use std::fmt::Display;

use crate::{
    EfficiencyRatio, EfficiencyRatioConfig, Indicator, Price, indicator::length_config,
};

const FAST: f64 = 2.0 / (2.0 + 1.0);
const SLOW: f64 = 2.0 / (30.0 + 1.0);

length_config!(
    /// Configuration for Kaufman's Adaptive Moving Average ([`Kama`]).
    ///
    /// The length is the [`EfficiencyRatio`] window. Fast and slow periods
    /// are fixed at 2 and 30.
    KamaConfig, KamaConfigBuilder, "KAMA", default = 10, min = 1
);

/// Kaufman's Adaptive Moving Average (KAMA).
///
/// Smoothing adapts to the [`EfficiencyRatio`]: trending windows follow
/// price closely, choppy windows barely move.
///
/// ```text
/// sc   = (|ER| / 100 × (fast − slow) + slow)²
/// KAMA = prev_KAMA + sc × (price − prev_KAMA)
/// ```
///
/// with `fast = 2/3` and `slow = 2/31`. The first defined ER seeds the
/// average with the current price. A value of exactly zero is the
/// unseeded state, so an average that lands on `0.0` is reseeded by the
/// next price. NaN while ER is undefined.
///
/// # Example
///
/// ```
/// use ta_stream::{Kama, KamaConfig};
///
/// let mut kama = Kama::new(KamaConfig::new(2).unwrap());
///
/// assert!(kama.compute(10.0).is_nan());
/// assert!(kama.compute(11.0).is_nan());
/// assert_eq!(kama.compute(12.0), 12.0); // seed
/// // ER = 100, sc = (2/3)²
/// assert!((kama.compute(15.0) - (12.0 + 4.0 / 9.0 * 3.0)).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct Kama {
    config: KamaConfig,
    er: EfficiencyRatio,
    kama: Price,
    current: Price,
}

impl Indicator for Kama {
    type Config = KamaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            er: EfficiencyRatio::new(EfficiencyRatioConfig {
                length: config.length,
            }),
            kama: 0.0,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let er = self.er.compute(price);
        if er.is_nan() {
            self.current = Price::NAN;
            return self.current;
        }

        let sc = (er.abs() / 100.0 * (FAST - SLOW) + SLOW).powi(2);

        if self.kama == 0.0 {
            tracing::trace!(length = self.config.length, seed = price, "KAMA seeded");
            self.kama = price;
        } else {
            self.kama += sc * (price - self.kama);
        }

        self.current = self.kama;
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Kama {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "KAMA({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{assert_approx, assert_nan};

    fn kama(length: usize) -> Kama {
        Kama::new(KamaConfig::new(length).unwrap())
    }

    #[test]
    fn nan_while_er_undefined() {
        let mut kama = kama(3);
        for v in [1.0, 2.0, 3.0] {
            assert_nan!(kama.compute(v));
        }
    }

    #[test]
    fn seeds_with_price() {
        let mut kama = kama(2);
        kama.compute(1.0);
        kama.compute(2.0);
        assert_eq!(kama.compute(7.0), 7.0);
    }

    #[test]
    fn choppy_market_uses_slow_constant() {
        let mut kama = kama(2);
        kama.compute(10.0);
        kama.compute(12.0);
        kama.compute(10.0); // seed = 10
        // Window [12, 10, 12]: ER = 0, sc = slow²
        let expected = 10.0 + SLOW * SLOW * 2.0;
        assert_approx!(kama.compute(12.0), expected);
    }

    #[test]
    fn zero_average_reseeds() {
        let mut kama = kama(1);
        kama.compute(5.0);
        kama.compute(0.0); // seed = 0, the unseeded sentinel
        assert_eq!(kama.compute(3.0), 3.0);
    }

    #[test]
    fn display() {
        assert_eq!(kama(10).to_string(), "KAMA(10)");
    }
}
