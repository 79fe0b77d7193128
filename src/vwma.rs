use std::fmt::Display;

use crate::{Indicator, Price, PriceWithVolume, Sma, SmaConfig, indicator::length_config};

length_config!(
    /// Configuration for the Volume Weighted Moving Average ([`Vwma`]).
    VwmaConfig, VwmaConfigBuilder, "VWMA", default = 20, min = 1
);

/// Volume Weighted Moving Average (VWMA).
///
/// ```text
/// VWMA = SMA(price × volume) / SMA(volume)
/// ```
///
/// The two averages keep independent windows. A window without volume
/// yields NaN.
///
/// # Example
///
/// ```
/// use ta_stream::{PriceWithVolume, Vwma, VwmaConfig};
///
/// let mut vwma = Vwma::new(VwmaConfig::new(2).unwrap());
///
/// assert!(vwma.compute(PriceWithVolume::new(10.0, 1.0)).is_nan());
/// // (10 × 1 + 20 × 3) / (1 + 3) = 17.5
/// assert_eq!(vwma.compute(PriceWithVolume::new(20.0, 3.0)), 17.5);
/// ```
#[derive(Clone, Debug)]
pub struct Vwma {
    config: VwmaConfig,
    weighted: Sma,
    volume: Sma,
    current: Price,
}

impl Indicator for Vwma {
    type Config = VwmaConfig;
    type Input = PriceWithVolume;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        let sma = SmaConfig {
            length: config.length,
        };

        Self {
            config,
            weighted: Sma::new(sma),
            volume: Sma::new(sma),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, input: PriceWithVolume) -> Price {
        let weighted = self.weighted.compute(input.value * input.volume);
        let volume = self.volume.compute(input.volume);

        self.current = weighted / volume;
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Vwma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VWMA({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::assert_nan;

    fn vwma(length: usize) -> Vwma {
        Vwma::new(VwmaConfig::new(length).unwrap())
    }

    #[test]
    fn nan_until_window_full() {
        let mut vwma = vwma(3);
        assert_nan!(vwma.compute(PriceWithVolume::new(1.0, 1.0)));
        assert_nan!(vwma.compute(PriceWithVolume::new(1.0, 1.0)));
    }

    #[test]
    fn equal_volume_is_plain_mean() {
        let mut vwma = vwma(2);
        vwma.compute(PriceWithVolume::new(10.0, 5.0));
        assert_eq!(vwma.compute(PriceWithVolume::new(30.0, 5.0)), 20.0);
    }

    #[test]
    fn heavy_volume_dominates() {
        let mut vwma = vwma(2);
        vwma.compute(PriceWithVolume::new(10.0, 1.0));
        // (10 + 20 × 9) / 10 = 19
        assert_eq!(vwma.compute(PriceWithVolume::new(20.0, 9.0)), 19.0);
    }

    #[test]
    fn zero_volume_window_is_nan() {
        let mut vwma = vwma(2);
        vwma.compute(PriceWithVolume::new(10.0, 0.0));
        assert_nan!(vwma.compute(PriceWithVolume::new(11.0, 0.0)));
    }

    #[test]
    fn display() {
        assert_eq!(vwma(20).to_string(), "VWMA(20)");
    }
}
