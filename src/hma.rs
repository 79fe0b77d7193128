use std::fmt::Display;

use crate::{Indicator, Price, Wma, WmaConfig, indicator::length_config};

length_config!(
    /// Configuration for the Hull Moving Average ([`Hma`]).
    ///
    /// The half window `length / 2` must be at least one, so the minimum
    /// length is 2.
    HmaConfig, HmaConfigBuilder, "HMA", default = 16, min = 2
);

/// Hull Moving Average (HMA).
///
/// ```text
/// raw = 2 × WMA(length / 2) − WMA(length)
/// HMA = WMA(round(√length)) of raw
/// ```
///
/// `length / 2` truncates. The smoothing stage is fed only once both inner
/// averages are defined.
#[derive(Clone, Debug)]
pub struct Hma {
    config: HmaConfig,
    full: Wma,
    half: Wma,
    smooth: Wma,
    current: Price,
}

impl Indicator for Hma {
    type Config = HmaConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_precision_loss,
            clippy::cast_sign_loss
        )]
        let sqrt_length = (config.length as f64).sqrt().round() as usize;

        Self {
            config,
            full: Wma::new(WmaConfig {
                length: config.length,
            }),
            half: Wma::new(WmaConfig {
                length: config.length / 2,
            }),
            smooth: Wma::new(WmaConfig {
                length: sqrt_length,
            }),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let full = self.full.compute(price);
        let half = self.half.compute(price);

        self.current = if full.is_nan() || half.is_nan() {
            Price::NAN
        } else {
            self.smooth.compute(half * 2.0 - full)
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Hma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HMA({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{Error, test_util::feed};

    fn hma(length: usize) -> Hma {
        Hma::new(HmaConfig::new(length).unwrap())
    }

    #[test]
    fn stage_lengths() {
        let hma = hma(16);
        assert_eq!(hma.full.to_string(), "WMA(16)");
        assert_eq!(hma.half.to_string(), "WMA(8)");
        assert_eq!(hma.smooth.to_string(), "WMA(4)");

        assert_eq!(self::hma(10).smooth.to_string(), "WMA(3)");
    }

    #[test]
    fn warm_up_is_length_plus_sqrt_minus_two() {
        let mut hma = hma(9);
        let values: Vec<f64> = (1..=20).map(f64::from).collect();
        let out = feed(&values, |v| hma.compute(v));
        // WMA(9) defined from call 9, WMA(3) of raw from call 11
        assert!(out[..10].iter().all(|v| v.is_nan()));
        assert!(!out[10].is_nan());
    }

    #[test]
    fn constant_input_is_constant() {
        let mut hma = hma(4);
        let out = feed(&[3.0; 10], |v| hma.compute(v));
        assert_eq!(out[9], 3.0);
    }

    #[test]
    fn rejects_length_one() {
        assert_eq!(
            HmaConfig::new(1),
            Err(Error::InvalidLength {
                indicator: "HMA",
                length: 1,
                min: 2,
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(hma(16).to_string(), "HMA(16)");
    }
}
