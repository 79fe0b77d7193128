use std::fmt::Display;

use crate::{
    Bbw, BbwConfig, Indicator, Multiplier, PercentRank, PercentRankConfig, Price,
    indicator::length_config,
};

/// Lookback of the percentile ranking, one trading year of daily bars.
const LOOKBACK: usize = 252;

length_config!(
    /// Configuration for the Bollinger Band Width Percentile ([`Bbwp`]).
    BbwpConfig, BbwpConfigBuilder, "BBWP", default = 13, min = 1
);

/// Bollinger Band Width Percentile (BBWP).
///
/// Ranks the current [`Bbw`] (at one standard deviation) against the
/// previous 252 widths with [`PercentRank`]. NaN for the first 252
/// samples. Warm-up widths are NaN and never rank below a later width.
#[derive(Clone, Debug)]
pub struct Bbwp {
    config: BbwpConfig,
    bbw: Bbw,
    rank: PercentRank,
    current: Price,
}

impl Indicator for Bbwp {
    type Config = BbwpConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            bbw: Bbw::new(BbwConfig {
                length: config.length,
                multiplier: Multiplier::new_unchecked(1.0),
            }),
            rank: PercentRank::new(PercentRankConfig { length: LOOKBACK }),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.current = self.rank.compute(self.bbw.compute(price));
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Bbwp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BBWP({})", self.config.length)
    }
}
