use std::fmt::Display;

use crate::{Hlc, Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, Result};

/// Configuration for the [`TrueRange`] indicator.
///
/// `handle_na` decides the first bar, which has no previous close: with
/// `true` the range is `high − low`, with `false` it is NaN.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct TrueRangeConfig {
    handle_na: bool,
}

impl IndicatorConfig for TrueRangeConfig {
    type Builder = TrueRangeConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        TrueRangeConfigBuilder { handle_na: true }
    }
}

impl TrueRangeConfig {
    /// Whether the first bar yields `high − low` instead of NaN.
    #[inline]
    #[must_use]
    pub fn handle_na(&self) -> bool {
        self.handle_na
    }

    /// Config with the given first-bar handling. Always valid.
    #[must_use]
    pub const fn new(handle_na: bool) -> Self {
        Self { handle_na }
    }
}

impl Default for TrueRangeConfig {
    fn default() -> Self {
        Self { handle_na: true }
    }
}

impl Display for TrueRangeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TrueRangeConfig({})", self.handle_na)
    }
}

/// Builder for [`TrueRangeConfig`].
///
/// Defaults: `handle_na` = `true`.
pub struct TrueRangeConfigBuilder {
    handle_na: bool,
}

impl TrueRangeConfigBuilder {
    /// Sets the first-bar handling.
    #[inline]
    #[must_use]
    pub fn handle_na(mut self, handle_na: bool) -> Self {
        self.handle_na = handle_na;
        self
    }
}

impl IndicatorConfigBuilder<TrueRangeConfig> for TrueRangeConfigBuilder {
    fn build(self) -> Result<TrueRangeConfig> {
        Ok(TrueRangeConfig {
            handle_na: self.handle_na,
        })
    }
}

/// True Range (TR).
///
/// ```text
/// TR = max(high − low, |high − prev_close|, |low − prev_close|)
/// ```
///
/// The previous close is updated on every call. Without a finite previous
/// close the range is `high − low` when `handle_na` is set, NaN otherwise.
///
/// # Example
///
/// ```
/// use ta_stream::{Hlc, TrueRange, TrueRangeConfig};
///
/// let mut tr = TrueRange::new(TrueRangeConfig::default());
///
/// assert_eq!(tr.compute(Hlc::new(12.0, 10.0, 11.0)), 2.0);
/// // Gap up: |15 − 11| beats 15 − 14
/// assert_eq!(tr.compute(Hlc::new(15.0, 14.0, 14.5)), 4.0);
/// ```
#[derive(Clone, Debug)]
pub struct TrueRange {
    config: TrueRangeConfig,
    prev_close: Price,
    current: Price,
}

impl Indicator for TrueRange {
    type Config = TrueRangeConfig;
    type Input = Hlc;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            prev_close: Price::NAN,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, hlc: Hlc) -> Price {
        let high_low = hlc.high - hlc.low;

        self.current = if self.prev_close.is_nan() && self.config.handle_na {
            high_low
        } else if self.prev_close.is_finite() {
            let high_close = (hlc.high - self.prev_close).abs();
            let low_close = (hlc.low - self.prev_close).abs();
            high_low.max(high_close.max(low_close))
        } else {
            Price::NAN
        };

        self.prev_close = hlc.close;
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for TrueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TR({})", self.config.handle_na)
    }
}
