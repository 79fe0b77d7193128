use crate::{Ohlcv, Price};

use std::fmt::Display;

/// Candle part extracted from an [`Ohlcv`] bar before feeding a scalar
/// indicator.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum PriceSource {
    /// Opening price.
    Open,
    /// Highest price.
    High,
    /// Lowest price.
    Low,
    /// Closing price.
    #[default]
    Close,
    /// Traded volume.
    Volume,
    /// Median price: `(high + low) / 2`.
    HL2,
    /// Typical price: `(high + low + close) / 3`.
    HLC3,
    /// `(open + close) / 2`.
    OC2,
    /// `(open + high + low) / 3`.
    OHL3,
    /// Average price: `(open + high + low + close) / 4`.
    OHLC4,
}

impl Display for PriceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl PriceSource {
    #[inline]
    pub(crate) fn extract(self, ohlcv: &impl Ohlcv) -> Price {
        match self {
            Self::Open => ohlcv.open(),
            Self::High => ohlcv.high(),
            Self::Low => ohlcv.low(),
            Self::Close => ohlcv.close(),
            Self::Volume => ohlcv.volume(),
            Self::HL2 => ohlcv.hl2(),
            Self::HLC3 => ohlcv.hlc3(),
            Self::OC2 => ohlcv.oc2(),
            Self::OHL3 => ohlcv.ohl3(),
            Self::OHLC4 => ohlcv.ohlc4(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{Bar, assert_approx};

    fn bar() -> Bar {
        Bar::new(10.0, 30.0, 5.0, 20.0).vol(42.0)
    }

    #[test]
    fn extract_open() {
        assert_eq!(PriceSource::Open.extract(&bar()), 10.0);
    }

    #[test]
    fn extract_high() {
        assert_eq!(PriceSource::High.extract(&bar()), 30.0);
    }

    #[test]
    fn extract_low() {
        assert_eq!(PriceSource::Low.extract(&bar()), 5.0);
    }

    #[test]
    fn extract_close() {
        assert_eq!(PriceSource::Close.extract(&bar()), 20.0);
    }

    #[test]
    fn extract_volume() {
        assert_eq!(PriceSource::Volume.extract(&bar()), 42.0);
    }

    #[test]
    fn extract_hl2() {
        assert_eq!(PriceSource::HL2.extract(&bar()), 17.5);
    }

    #[test]
    fn extract_hlc3() {
        assert_approx!(PriceSource::HLC3.extract(&bar()), 55.0 / 3.0);
    }

    #[test]
    fn extract_oc2() {
        assert_eq!(PriceSource::OC2.extract(&bar()), 15.0);
    }

    #[test]
    fn extract_ohl3() {
        assert_eq!(PriceSource::OHL3.extract(&bar()), 15.0);
    }

    #[test]
    fn extract_ohlc4() {
        assert_eq!(PriceSource::OHLC4.extract(&bar()), 16.25);
    }

    #[test]
    fn default_is_close() {
        assert_eq!(PriceSource::default(), PriceSource::Close);
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(PriceSource::HLC3.to_string(), "HLC3");
    }
}
