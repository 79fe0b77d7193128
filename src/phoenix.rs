use std::fmt::Display;

use crate::{
    Indicator, IndicatorConfig, IndicatorConfigBuilder, LinReg, LinRegConfig, Mfi, MfiConfig,
    Ohlcv, PriceWithVolume, Quote, Result, Rsi, RsiConfig, Sma, SmaConfig, Tci, TciConfig,
    Tsi, TsiConfig, Willy, WillyConfig,
};

/// Configuration for the [`Phoenix`] oscillator.
///
/// The pipeline has fixed windows and no parameters.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub struct PhoenixConfig;

impl IndicatorConfig for PhoenixConfig {
    type Builder = PhoenixConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        PhoenixConfigBuilder
    }
}

impl Display for PhoenixConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PhoenixConfig")
    }
}

/// Builder for [`PhoenixConfig`].
pub struct PhoenixConfigBuilder;

impl IndicatorConfigBuilder<PhoenixConfig> for PhoenixConfigBuilder {
    fn build(self) -> Result<PhoenixConfig> {
        Ok(PhoenixConfig)
    }
}

/// Fast line, its SMA and its linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoenixValue {
    fast: f64,
    slow: f64,
    lsma: f64,
}

impl PhoenixValue {
    /// All three lines NaN.
    pub const UNDEFINED: Self = Self {
        fast: f64::NAN,
        slow: f64::NAN,
        lsma: f64::NAN,
    };

    /// Blend of the composite and traditional oscillators.
    #[inline]
    #[must_use]
    pub fn fast(&self) -> f64 {
        self.fast
    }

    /// 6-bar SMA of [`fast`](Self::fast).
    #[inline]
    #[must_use]
    pub fn slow(&self) -> f64 {
        self.slow
    }

    /// 32-bar least squares moving average of [`fast`](Self::fast).
    #[inline]
    #[must_use]
    pub fn lsma(&self) -> f64 {
        self.lsma
    }

    /// Whether all three lines are defined.
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.fast.is_nan() && !self.slow.is_nan() && !self.lsma.is_nan()
    }
}

impl Display for PhoenixValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PHX(fast: {}, slow: {}, lsma: {})",
            self.fast, self.slow, self.lsma
        )
    }
}

/// Phoenix composite oscillator.
///
/// Blends short-window oscillators on `hlc3` (TSI reads the open):
///
/// ```text
/// csi  = (RSI(3) + TSI(9, 6)/100 × 50 + 50) / 2
/// phx  = (TCI(9) + csi + MFI(3) + WILLY(6)) / 4
/// trad = (TCI(9) + MFI(3) + RSI(3)) / 3
/// fast = (phx + trad) / 2
/// slow = SMA(6) of fast
/// lsma = LINREG(32) of fast
/// ```
///
/// `fast` is NaN while any component is. The linear regression skips
/// those NaN samples, so `lsma` needs 32 defined `fast` values.
#[derive(Clone, Debug)]
pub struct Phoenix {
    tci: Tci,
    mfi: Mfi,
    willy: Willy,
    rsi: Rsi,
    tsi: Tsi,
    sma: Sma,
    lin_reg: LinReg,
    current: PhoenixValue,
}

impl Indicator for Phoenix {
    type Config = PhoenixConfig;
    type Input = Quote;
    type Output = PhoenixValue;

    fn new(_config: Self::Config) -> Self {
        Self {
            tci: Tci::new(TciConfig { length: 9 }),
            mfi: Mfi::new(MfiConfig { length: 3 }),
            willy: Willy::new(WillyConfig { length: 6 }),
            rsi: Rsi::new(RsiConfig { length: 3 }),
            tsi: Tsi::new(TsiConfig {
                length: 9,
                smooth_length: 6,
                signal_length: 13,
            }),
            sma: Sma::new(SmaConfig { length: 6 }),
            lin_reg: LinReg::new(LinRegConfig { length: 32 }),
            current: PhoenixValue::UNDEFINED,
        }
    }

    #[inline]
    fn compute(&mut self, quote: Quote) -> PhoenixValue {
        let src = quote.hlc3();

        let tci = self.tci.compute(src);
        let mfi = self.mfi.compute(PriceWithVolume::new(src, quote.volume()));
        let willy = self.willy.compute(src);
        let rsi = self.rsi.compute(src);
        let tsi = self.tsi.compute(quote.open()).tsi() / 100.0;

        let csi = (rsi + (tsi * 50.0 + 50.0)) / 2.0;
        let phx = (tci + csi + mfi + willy) / 4.0;
        let trad = (tci + mfi + rsi) / 3.0;
        let fast = (phx + trad) / 2.0;

        self.current = PhoenixValue {
            fast,
            slow: self.sma.compute(fast),
            lsma: self.lin_reg.compute(fast),
        };

        self.current
    }

    #[inline]
    fn value(&self) -> PhoenixValue {
        self.current
    }
}

impl Display for Phoenix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PHX")
    }
}
