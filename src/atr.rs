use std::fmt::Display;

use crate::{
    Hlc, Indicator, Price, Rma, RmaConfig, TrueRange, TrueRangeConfig, indicator::length_config,
};

length_config!(
    /// Configuration for the Average True Range ([`Atr`]) indicator.
    ///
    /// # Example
    ///
    /// ```
    /// use ta_stream::AtrConfig;
    ///
    /// assert_eq!(AtrConfig::default().length(), 14);
    /// ```
    AtrConfig, AtrConfigBuilder, "ATR", default = 14, min = 1
);

/// Average True Range (ATR).
///
/// [`Rma`] of the [`TrueRange`]. The first bar's range is `high − low`, so
/// output starts on call `length`.
///
/// # Example
///
/// ```
/// use ta_stream::{Atr, AtrConfig, Hlc};
///
/// let mut atr = Atr::new(AtrConfig::new(2).unwrap());
///
/// assert!(atr.compute(Hlc::new(12.0, 10.0, 11.0)).is_nan());
/// // TR = 2, then 4: seed (2 + 4) / 2 = 3
/// assert_eq!(atr.compute(Hlc::new(15.0, 14.0, 14.5)), 3.0);
/// ```
#[derive(Clone, Debug)]
pub struct Atr {
    config: AtrConfig,
    tr: TrueRange,
    rma: Rma,
    current: Price,
}

impl Indicator for Atr {
    type Config = AtrConfig;
    type Input = Hlc;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            tr: TrueRange::new(TrueRangeConfig::new(true)),
            rma: Rma::new(RmaConfig {
                length: config.length,
            }),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, hlc: Hlc) -> Price {
        self.current = self.rma.compute(self.tr.compute(hlc));
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Atr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ATR({})", self.config.length)
    }
}
