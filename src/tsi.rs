use std::fmt::Display;

use crate::{
    Ema, EmaConfig, Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, Result,
    error::check_length,
};

/// Configuration for the True Strength Index ([`Tsi`]).
///
/// # Example
///
/// ```
/// use ta_stream::{IndicatorConfig, IndicatorConfigBuilder, TsiConfig};
///
/// let config = TsiConfig::builder().length(9).smooth_length(6).build().unwrap();
///
/// assert_eq!(config.length(), 9);
/// assert_eq!(config.signal_length(), 13);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TsiConfig {
    pub(crate) length: usize,
    pub(crate) smooth_length: usize,
    pub(crate) signal_length: usize,
}

impl IndicatorConfig for TsiConfig {
    type Builder = TsiConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        TsiConfigBuilder {
            length: 25,
            smooth_length: 13,
            signal_length: 13,
        }
    }
}

impl TsiConfig {
    /// First (long) smoothing period.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Second (short) smoothing period.
    #[inline]
    #[must_use]
    pub fn smooth_length(&self) -> usize {
        self.smooth_length
    }

    /// Signal line period.
    #[inline]
    #[must_use]
    pub fn signal_length(&self) -> usize {
        self.signal_length
    }

    /// Config with all three periods.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) if any period
    /// is zero.
    pub fn new(length: usize, smooth_length: usize, signal_length: usize) -> Result<Self> {
        Self::builder()
            .length(length)
            .smooth_length(smooth_length)
            .signal_length(signal_length)
            .build()
    }
}

impl Default for TsiConfig {
    fn default() -> Self {
        Self {
            length: 25,
            smooth_length: 13,
            signal_length: 13,
        }
    }
}

impl Display for TsiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TsiConfig({}, {}, {})",
            self.length, self.smooth_length, self.signal_length
        )
    }
}

/// Builder for [`TsiConfig`].
///
/// Defaults: 25, 13, 13.
pub struct TsiConfigBuilder {
    length: usize,
    smooth_length: usize,
    signal_length: usize,
}

impl TsiConfigBuilder {
    /// Sets the long smoothing period.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the short smoothing period.
    #[inline]
    #[must_use]
    pub fn smooth_length(mut self, smooth_length: usize) -> Self {
        self.smooth_length = smooth_length;
        self
    }

    /// Sets the signal line period.
    #[inline]
    #[must_use]
    pub fn signal_length(mut self, signal_length: usize) -> Self {
        self.signal_length = signal_length;
        self
    }
}

impl IndicatorConfigBuilder<TsiConfig> for TsiConfigBuilder {
    fn build(self) -> Result<TsiConfig> {
        Ok(TsiConfig {
            length: check_length("TSI", self.length, 1)?,
            smooth_length: check_length("TSI", self.smooth_length, 1)?,
            signal_length: check_length("TSI", self.signal_length, 1)?,
        })
    }
}

/// TSI line and its signal line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsiValue {
    tsi: f64,
    signal: f64,
}

impl TsiValue {
    /// Both lines NaN.
    pub const UNDEFINED: Self = Self {
        tsi: f64::NAN,
        signal: f64::NAN,
    };

    /// `100 × smoothed change / smoothed |change|`, in `[-100, 100]`.
    #[inline]
    #[must_use]
    pub fn tsi(&self) -> f64 {
        self.tsi
    }

    /// EMA of the TSI line.
    #[inline]
    #[must_use]
    pub fn signal(&self) -> f64 {
        self.signal
    }

    /// Whether both lines are defined.
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.tsi.is_nan() && !self.signal.is_nan()
    }
}

impl Display for TsiValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TSI(tsi: {}, signal: {})", self.tsi, self.signal)
    }
}

#[derive(Clone, Debug)]
struct DoubleSmooth {
    long: Ema,
    short: Ema,
}

impl DoubleSmooth {
    fn new(long: usize, short: usize) -> Self {
        Self {
            long: Ema::new(EmaConfig { length: long }),
            short: Ema::new(EmaConfig { length: short }),
        }
    }

    #[inline]
    fn compute(&mut self, value: f64) -> f64 {
        self.short.compute(self.long.compute(value))
    }
}

/// True Strength Index (TSI).
///
/// Double-smoothed momentum. The price change and its absolute value go
/// through the same pair of cascaded [`Ema`]s (`length`, then
/// `smooth_length`):
///
/// ```text
/// TSI    = 100 × EMA(EMA(Δp)) / EMA(EMA(|Δp|))
/// signal = EMA(signal_length) of TSI
/// ```
///
/// A zero denominator yields a TSI of `0`. Both lines are NaN until both
/// smoothing chains are seeded. The first sample has no change and is
/// skipped by the averages.
#[derive(Clone, Debug)]
pub struct Tsi {
    config: TsiConfig,
    prev: Option<Price>,
    change: DoubleSmooth,
    abs_change: DoubleSmooth,
    signal: Ema,
    current: TsiValue,
}

impl Indicator for Tsi {
    type Config = TsiConfig;
    type Input = Price;
    type Output = TsiValue;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            prev: None,
            change: DoubleSmooth::new(config.length, config.smooth_length),
            abs_change: DoubleSmooth::new(config.length, config.smooth_length),
            signal: Ema::new(EmaConfig {
                length: config.signal_length,
            }),
            current: TsiValue::UNDEFINED,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> TsiValue {
        let (pc, apc) = match self.prev.replace(price) {
            Some(prev) => {
                let pc = price - prev;
                (pc, pc.abs())
            }
            None => (f64::NAN, f64::NAN),
        };

        let pc = self.change.compute(pc);
        let apc = self.abs_change.compute(apc);

        if pc.is_nan() || apc.is_nan() {
            self.current = TsiValue::UNDEFINED;
            return self.current;
        }

        let tsi = if apc == 0.0 { 0.0 } else { pc * 100.0 / apc };

        self.current = TsiValue {
            tsi,
            signal: self.signal.compute(tsi),
        };

        self.current
    }

    #[inline]
    fn value(&self) -> TsiValue {
        self.current
    }
}

impl Display for Tsi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TSI({}, {}, {})",
            self.config.length, self.config.smooth_length, self.config.signal_length
        )
    }
}
