//! Streaming technical analysis indicators for Rust.
//!
//! Every indicator is a small state machine: feed it one sample at a time
//! with `compute` and it returns the updated value. Scalar indicators read
//! a [`Price`], range indicators an [`Hlc`], volume-weighted ones a
//! [`PriceWithVolume`]. Values are NaN (or a record of NaNs) until enough
//! data has been received.
//!
//! Configs are validated once, when the builder runs, so constructing and
//! feeding an indicator never fails.
//!
//! Each indicator type ([`Sma`], [`Ema`], [`Bb`], ...) exposes
//! [`new`](Sma::new), [`compute`](Sma::compute), and
//! [`value`](Sma::value) as inherent methods, so no trait import is
//! needed. Import [`Indicator`] only for generic code.
//!
//! ```
//! use ta_stream::{Bb, BbConfig, Rsi, RsiConfig};
//!
//! let mut rsi = Rsi::new(RsiConfig::default());
//! let mut bb = Bb::new(BbConfig::new(20, 2.0)?);
//!
//! for price in [101.0, 102.5, 101.8, 103.1] {
//!     let _ = rsi.compute(price);
//!     let _ = bb.compute(price);
//! }
//! assert!(!bb.value().is_defined());
//! # Ok::<(), ta_stream::Error>(())
//! ```

mod alma;
mod atr;
mod atr_stop_loss;
mod bb;
mod bbw;
mod bbwp;
mod circular_buffer;
mod dema;
mod efficiency_ratio;
mod ema;
mod error;
mod hma;
mod indicator;
mod kama;
mod lin_reg;
mod mfi;
mod momentum;
mod multiplier;
mod ohlcv;
mod percent_rank;
mod phoenix;
mod price_source;
mod quote;
mod rma;
mod rsi;
mod sma;
mod smma;
mod std_dev;
mod swma;
mod tci;
mod tema;
mod true_range;
mod tsi;
mod vwma;
mod willy;
mod wma;
mod wpr;

pub use crate::circular_buffer::CircularBuffer;
pub use crate::error::{Error, Result};
pub use crate::indicator::{Indicator, IndicatorConfig, IndicatorConfigBuilder};
pub use crate::multiplier::Multiplier;
pub use crate::ohlcv::{Hlc, Ohlcv, Price, PriceWithVolume, Timestamp};
pub use crate::price_source::PriceSource;
pub use crate::quote::Quote;

pub use crate::alma::{Alma, AlmaConfig, AlmaConfigBuilder};
pub use crate::atr::{Atr, AtrConfig, AtrConfigBuilder};
pub use crate::atr_stop_loss::{
    AtrStopLoss, AtrStopLossConfig, AtrStopLossConfigBuilder, AtrStopLossValue, StopLossMa,
};
pub use crate::bb::{Bb, BbConfig, BbConfigBuilder, BbValue};
pub use crate::bbw::{Bbw, BbwConfig, BbwConfigBuilder};
pub use crate::bbwp::{Bbwp, BbwpConfig, BbwpConfigBuilder};
pub use crate::dema::{Dema, DemaConfig, DemaConfigBuilder};
pub use crate::efficiency_ratio::{
    EfficiencyRatio, EfficiencyRatioConfig, EfficiencyRatioConfigBuilder,
};
pub use crate::ema::{Ema, EmaConfig, EmaConfigBuilder};
pub use crate::hma::{Hma, HmaConfig, HmaConfigBuilder};
pub use crate::kama::{Kama, KamaConfig, KamaConfigBuilder};
pub use crate::lin_reg::{LinReg, LinRegConfig, LinRegConfigBuilder};
pub use crate::mfi::{Mfi, MfiConfig, MfiConfigBuilder};
pub use crate::momentum::{Momentum, MomentumConfig, MomentumConfigBuilder};
pub use crate::percent_rank::{PercentRank, PercentRankConfig, PercentRankConfigBuilder};
pub use crate::phoenix::{Phoenix, PhoenixConfig, PhoenixConfigBuilder, PhoenixValue};
pub use crate::rma::{Rma, RmaConfig, RmaConfigBuilder};
pub use crate::rsi::{Rsi, RsiConfig, RsiConfigBuilder};
pub use crate::sma::{Sma, SmaConfig, SmaConfigBuilder};
pub use crate::smma::{Smma, SmmaConfig, SmmaConfigBuilder};
pub use crate::std_dev::{Bias, StdDev, StdDevConfig, StdDevConfigBuilder};
pub use crate::swma::{Swma, SwmaConfig, SwmaConfigBuilder};
pub use crate::tci::{Tci, TciConfig, TciConfigBuilder};
pub use crate::tema::{Tema, TemaConfig, TemaConfigBuilder};
pub use crate::true_range::{TrueRange, TrueRangeConfig, TrueRangeConfigBuilder};
pub use crate::tsi::{Tsi, TsiConfig, TsiConfigBuilder, TsiValue};
pub use crate::vwma::{Vwma, VwmaConfig, VwmaConfigBuilder};
pub use crate::willy::{Willy, WillyConfig, WillyConfigBuilder};
pub use crate::wma::{Wma, WmaConfig, WmaConfigBuilder};
pub use crate::wpr::{Wpr, WprConfig, WprConfigBuilder};

macro_rules! impl_indicator_methods {
    ($type:ty, $config:ty, $input:ty, $output:ty) => {
        impl $type {
            /// See [`Indicator::new`].
            #[must_use]
            pub fn new(config: $config) -> Self {
                <Self as Indicator>::new(config)
            }

            /// See [`Indicator::compute`].
            #[inline]
            pub fn compute(&mut self, input: $input) -> $output {
                <Self as Indicator>::compute(self, input)
            }

            /// See [`Indicator::value`].
            #[must_use]
            #[inline]
            pub fn value(&self) -> $output {
                <Self as Indicator>::value(self)
            }
        }
    };
}

impl_indicator_methods!(Sma, SmaConfig, Price, Price);
impl_indicator_methods!(Ema, EmaConfig, Price, Price);
impl_indicator_methods!(Rma, RmaConfig, Price, Price);
impl_indicator_methods!(Wma, WmaConfig, Price, Price);
impl_indicator_methods!(Dema, DemaConfig, Price, Price);
impl_indicator_methods!(Tema, TemaConfig, Price, Price);
impl_indicator_methods!(Hma, HmaConfig, Price, Price);
impl_indicator_methods!(Alma, AlmaConfig, Price, Price);
impl_indicator_methods!(Smma, SmmaConfig, Price, Price);
impl_indicator_methods!(Swma, SwmaConfig, Price, Price);
impl_indicator_methods!(Kama, KamaConfig, Price, Price);
impl_indicator_methods!(Vwma, VwmaConfig, PriceWithVolume, Price);
impl_indicator_methods!(StdDev, StdDevConfig, Price, Price);
impl_indicator_methods!(PercentRank, PercentRankConfig, Price, Price);
impl_indicator_methods!(LinReg, LinRegConfig, Price, Price);
impl_indicator_methods!(Momentum, MomentumConfig, Price, Price);
impl_indicator_methods!(EfficiencyRatio, EfficiencyRatioConfig, Price, Price);
impl_indicator_methods!(TrueRange, TrueRangeConfig, Hlc, Price);
impl_indicator_methods!(Atr, AtrConfig, Hlc, Price);
impl_indicator_methods!(AtrStopLoss, AtrStopLossConfig, Hlc, AtrStopLossValue);
impl_indicator_methods!(Rsi, RsiConfig, Price, Price);
impl_indicator_methods!(Tsi, TsiConfig, Price, TsiValue);
impl_indicator_methods!(Mfi, MfiConfig, PriceWithVolume, Price);
impl_indicator_methods!(Willy, WillyConfig, Price, Price);
impl_indicator_methods!(Wpr, WprConfig, Hlc, Price);
impl_indicator_methods!(Tci, TciConfig, Price, Price);
impl_indicator_methods!(Bb, BbConfig, Price, BbValue);
impl_indicator_methods!(Bbw, BbwConfig, Price, Price);
impl_indicator_methods!(Bbwp, BbwpConfig, Price, Price);
impl_indicator_methods!(Phoenix, PhoenixConfig, Quote, PhoenixValue);

#[cfg(test)]
mod test_util;
