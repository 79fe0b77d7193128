use std::fmt::Display;

use crate::{
    Ema, EmaConfig, Hlc, Indicator, IndicatorConfig, IndicatorConfigBuilder, Multiplier, Price,
    Result, Rma, RmaConfig, Sma, SmaConfig, TrueRange, TrueRangeConfig, Wma, WmaConfig,
    error::check_length,
};

/// Moving average applied to the true range by [`AtrStopLoss`].
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum StopLossMa {
    /// [`Sma`]
    Sma,
    /// [`Wma`]
    Wma,
    /// [`Ema`]
    Ema,
    /// [`Rma`], the classic Wilder ATR.
    #[default]
    Rma,
}

impl Display for StopLossMa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Clone, Debug)]
enum MovingAverage {
    Sma(Sma),
    Wma(Wma),
    Ema(Ema),
    Rma(Rma),
}

impl MovingAverage {
    fn new(kind: StopLossMa, length: usize) -> Self {
        match kind {
            StopLossMa::Sma => Self::Sma(Sma::new(SmaConfig { length })),
            StopLossMa::Wma => Self::Wma(Wma::new(WmaConfig { length })),
            StopLossMa::Ema => Self::Ema(Ema::new(EmaConfig { length })),
            StopLossMa::Rma => Self::Rma(Rma::new(RmaConfig { length })),
        }
    }

    #[inline]
    fn compute(&mut self, value: f64) -> f64 {
        match self {
            Self::Sma(ma) => ma.compute(value),
            Self::Wma(ma) => ma.compute(value),
            Self::Ema(ma) => ma.compute(value),
            Self::Rma(ma) => ma.compute(value),
        }
    }
}

/// Configuration for the [`AtrStopLoss`] indicator.
///
/// # Example
///
/// ```
/// use ta_stream::{AtrStopLossConfig, IndicatorConfig, IndicatorConfigBuilder, StopLossMa};
///
/// let config = AtrStopLossConfig::builder()
///     .length(10)
///     .ma(StopLossMa::Ema)
///     .multiplier(2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.ma(), StopLossMa::Ema);
/// assert!(AtrStopLossConfig::builder().multiplier(0.0).build().is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct AtrStopLossConfig {
    length: usize,
    ma: StopLossMa,
    multiplier: Multiplier,
}

impl IndicatorConfig for AtrStopLossConfig {
    type Builder = AtrStopLossConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        AtrStopLossConfigBuilder {
            length: 14,
            ma: StopLossMa::Rma,
            multiplier: 1.5,
        }
    }
}

impl AtrStopLossConfig {
    /// Moving average length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Moving average applied to the true range.
    #[inline]
    #[must_use]
    pub fn ma(&self) -> StopLossMa {
        self.ma
    }

    /// Distance of the stops in ATR units.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Config with all three parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) or
    /// [`Error::InvalidMultiplier`](crate::Error::InvalidMultiplier).
    pub fn new(length: usize, ma: StopLossMa, multiplier: f64) -> Result<Self> {
        Self::builder()
            .length(length)
            .ma(ma)
            .multiplier(multiplier)
            .build()
    }
}

impl Default for AtrStopLossConfig {
    fn default() -> Self {
        Self {
            length: 14,
            ma: StopLossMa::Rma,
            multiplier: Multiplier::new_unchecked(1.5),
        }
    }
}

impl Display for AtrStopLossConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AtrStopLossConfig({}, {}, {})",
            self.length, self.ma, self.multiplier
        )
    }
}

/// Builder for [`AtrStopLossConfig`].
///
/// Defaults: length = 14, ma = [`StopLossMa::Rma`], multiplier = 1.5.
pub struct AtrStopLossConfigBuilder {
    length: usize,
    ma: StopLossMa,
    multiplier: f64,
}

impl AtrStopLossConfigBuilder {
    /// Sets the moving average length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the moving average type.
    #[inline]
    #[must_use]
    pub fn ma(mut self, ma: StopLossMa) -> Self {
        self.ma = ma;
        self
    }

    /// Sets the ATR multiplier.
    #[inline]
    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl IndicatorConfigBuilder<AtrStopLossConfig> for AtrStopLossConfigBuilder {
    fn build(self) -> Result<AtrStopLossConfig> {
        Ok(AtrStopLossConfig {
            length: check_length("ATR_SL", self.length, 1)?,
            ma: self.ma,
            multiplier: Multiplier::new(self.multiplier)?,
        })
    }
}

/// Long and short stop levels from [`AtrStopLoss`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtrStopLossValue {
    long: Price,
    short: Price,
}

impl AtrStopLossValue {
    /// Both stops NaN.
    pub const UNDEFINED: Self = Self {
        long: Price::NAN,
        short: Price::NAN,
    };

    /// Stop for a long position: `low − k × ATR`.
    #[inline]
    #[must_use]
    pub fn long(&self) -> Price {
        self.long
    }

    /// Stop for a short position: `high + k × ATR`.
    #[inline]
    #[must_use]
    pub fn short(&self) -> Price {
        self.short
    }

    /// Whether both stops are defined.
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.long.is_nan() && !self.short.is_nan()
    }
}

impl Display for AtrStopLossValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ATR_SL(long: {}, short: {})", self.long, self.short)
    }
}

/// ATR trailing stop levels.
///
/// One [`TrueRange`] feeds two independent moving averages of the
/// configured type, one per side:
///
/// ```text
/// long  = low − long_MA(TR) × k
/// short = short_MA(TR) × k + high
/// ```
///
/// # Example
///
/// ```
/// use ta_stream::{AtrStopLoss, AtrStopLossConfig, Hlc, StopLossMa};
///
/// let config = AtrStopLossConfig::new(1, StopLossMa::Sma, 2.0).unwrap();
/// let mut sl = AtrStopLoss::new(config);
///
/// let stops = sl.compute(Hlc::new(12.0, 10.0, 11.0));
/// // TR = 2
/// assert_eq!(stops.long(), 6.0);
/// assert_eq!(stops.short(), 16.0);
/// ```
#[derive(Clone, Debug)]
pub struct AtrStopLoss {
    config: AtrStopLossConfig,
    tr: TrueRange,
    long_ma: MovingAverage,
    short_ma: MovingAverage,
    current: AtrStopLossValue,
}

impl Indicator for AtrStopLoss {
    type Config = AtrStopLossConfig;
    type Input = Hlc;
    type Output = AtrStopLossValue;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            tr: TrueRange::new(TrueRangeConfig::new(true)),
            long_ma: MovingAverage::new(config.ma, config.length),
            short_ma: MovingAverage::new(config.ma, config.length),
            current: AtrStopLossValue::UNDEFINED,
        }
    }

    #[inline]
    fn compute(&mut self, hlc: Hlc) -> AtrStopLossValue {
        let k = self.config.multiplier.value();
        let tr = self.tr.compute(hlc);

        self.current = AtrStopLossValue {
            long: hlc.low - self.long_ma.compute(tr) * k,
            short: self.short_ma.compute(tr) * k + hlc.high,
        };

        self.current
    }

    #[inline]
    fn value(&self) -> AtrStopLossValue {
        self.current
    }
}

impl Display for AtrStopLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ATR_SL({}, {}, {})",
            self.config.length, self.config.ma, self.config.multiplier
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Error;

    fn stop_loss(length: usize, ma: StopLossMa, k: f64) -> AtrStopLoss {
        AtrStopLoss::new(AtrStopLossConfig::new(length, ma, k).unwrap())
    }

    mod computation {
        use super::*;

        #[test]
        fn undefined_while_ma_warms_up() {
            let mut sl = stop_loss(3, StopLossMa::Rma, 1.5);
            let stops = sl.compute(Hlc::new(12.0, 10.0, 11.0));
            assert!(!stops.is_defined());
            assert!(stops.long().is_nan() && stops.short().is_nan());
        }

        #[test]
        fn stops_straddle_the_bar() {
            let mut sl = stop_loss(2, StopLossMa::Sma, 1.5);
            sl.compute(Hlc::new(12.0, 10.0, 11.0)); // TR 2
            let stops = sl.compute(Hlc::new(13.0, 11.0, 12.0)); // TR 2
            assert!(stops.is_defined());
            assert_eq!(stops.long(), 11.0 - 3.0);
            assert_eq!(stops.short(), 13.0 + 3.0);
        }

        #[test]
        fn every_ma_type_is_dispatched() {
            for ma in [StopLossMa::Sma, StopLossMa::Wma, StopLossMa::Ema, StopLossMa::Rma] {
                let mut sl = stop_loss(2, ma, 1.0);
                sl.compute(Hlc::new(11.0, 10.0, 10.5));
                let stops = sl.compute(Hlc::new(11.0, 10.0, 10.5));
                // Constant TR of 1 under any average
                assert_eq!(stops.long(), 9.0, "{ma}");
                assert_eq!(stops.short(), 12.0, "{ma}");
            }
        }

        #[test]
        fn sides_keep_separate_state() {
            let mut sl = stop_loss(2, StopLossMa::Ema, 1.0);
            let mut reference = Ema::new(EmaConfig::new(2).unwrap());
            let mut tr = TrueRange::new(TrueRangeConfig::default());
            for bar in [
                Hlc::new(12.0, 10.0, 11.0),
                Hlc::new(14.0, 11.0, 13.0),
                Hlc::new(13.5, 12.0, 12.5),
            ] {
                let atr = reference.compute(tr.compute(bar));
                let stops = sl.compute(bar);
                if atr.is_nan() {
                    assert!(!stops.is_defined());
                } else {
                    assert_eq!(stops.long(), bar.low - atr);
                    assert_eq!(stops.short(), atr + bar.high);
                }
            }
        }
    }

    mod config {
        use super::*;

        #[test]
        fn defaults() {
            let config = AtrStopLossConfig::default();
            assert_eq!(config.length(), 14);
            assert_eq!(config.ma(), StopLossMa::Rma);
            assert_eq!(config.multiplier().value(), 1.5);
            assert_eq!(AtrStopLossConfig::builder().build().unwrap(), config);
        }

        #[test]
        fn rejects_bad_multiplier() {
            assert_eq!(
                AtrStopLossConfig::new(14, StopLossMa::Rma, -1.0),
                Err(Error::InvalidMultiplier(-1.0))
            );
        }

        #[test]
        fn display() {
            assert_eq!(
                AtrStopLossConfig::default().to_string(),
                "AtrStopLossConfig(14, Rma, 1.5)"
            );
            assert_eq!(
                stop_loss(14, StopLossMa::Wma, 2.0).to_string(),
                "ATR_SL(14, Wma, 2)"
            );
        }
    }
}
