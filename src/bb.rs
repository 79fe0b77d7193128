use std::fmt::Display;

use crate::{
    Bias, Indicator, IndicatorConfig, IndicatorConfigBuilder, Multiplier, Price, Result, Sma,
    SmaConfig, StdDev, StdDevConfig, error::check_length,
};

/// Configuration for the Bollinger Bands ([`Bb`]) indicator.
///
/// # Example
///
/// ```
/// use ta_stream::{BbConfig, IndicatorConfig, IndicatorConfigBuilder};
///
/// // Default: length 20, 2 standard deviations
/// let config = BbConfig::builder().length(10).build().unwrap();
///
/// assert_eq!(config.length(), 10);
/// assert_eq!(config.multiplier().value(), 2.0);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct BbConfig {
    pub(crate) length: usize,
    pub(crate) multiplier: Multiplier,
}

impl IndicatorConfig for BbConfig {
    type Builder = BbConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        BbConfigBuilder {
            length: 20,
            multiplier: 2.0,
        }
    }
}

impl BbConfig {
    /// Window length of the middle band and the deviation.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Standard deviation multiplier for the upper and lower bands.
    #[inline]
    #[must_use]
    pub fn multiplier(&self) -> Multiplier {
        self.multiplier
    }

    /// Config with the given length and multiplier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`](crate::Error::InvalidLength) or
    /// [`Error::InvalidMultiplier`](crate::Error::InvalidMultiplier).
    pub fn new(length: usize, multiplier: f64) -> Result<Self> {
        Self::builder()
            .length(length)
            .multiplier(multiplier)
            .build()
    }
}

impl Default for BbConfig {
    fn default() -> Self {
        Self {
            length: 20,
            multiplier: Multiplier::new_unchecked(2.0),
        }
    }
}

impl Display for BbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BbConfig({}, {})", self.length, self.multiplier)
    }
}

/// Builder for [`BbConfig`].
///
/// Defaults: length = 20, multiplier = 2.0.
pub struct BbConfigBuilder {
    length: usize,
    multiplier: f64,
}

impl BbConfigBuilder {
    /// Sets the window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the standard deviation multiplier.
    #[inline]
    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl IndicatorConfigBuilder<BbConfig> for BbConfigBuilder {
    fn build(self) -> Result<BbConfig> {
        Ok(BbConfig {
            length: check_length("BB", self.length, 1)?,
            multiplier: Multiplier::new(self.multiplier)?,
        })
    }
}

/// Bollinger Bands output: upper, middle, and lower bands.
///
/// The middle band is the SMA. Upper and lower bands are offset by
/// `k × σ`, where `σ` is the population standard deviation of the window.
///
/// ```text
/// upper  = SMA + k × σ
/// middle = SMA
/// lower  = SMA − k × σ
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BbValue {
    upper: Price,
    middle: Price,
    lower: Price,
}

impl BbValue {
    /// All three bands NaN.
    pub const UNDEFINED: Self = Self {
        upper: Price::NAN,
        middle: Price::NAN,
        lower: Price::NAN,
    };

    /// Upper band: `SMA + k × σ`.
    #[inline]
    #[must_use]
    pub fn upper(&self) -> Price {
        self.upper
    }

    /// Middle band: SMA of the window.
    #[inline]
    #[must_use]
    pub fn middle(&self) -> Price {
        self.middle
    }

    /// Lower band: `SMA − k × σ`.
    #[inline]
    #[must_use]
    pub fn lower(&self) -> Price {
        self.lower
    }

    /// Band width: `upper − lower`.
    ///
    /// Narrow width indicates consolidation (Bollinger squeeze).
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Whether all three bands are defined.
    #[inline]
    #[must_use]
    pub fn is_defined(&self) -> bool {
        !self.upper.is_nan() && !self.middle.is_nan() && !self.lower.is_nan()
    }
}

impl Display for BbValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BB(u: {}, m: {}, l: {})",
            self.upper, self.middle, self.lower
        )
    }
}

/// Bollinger Bands (BB).
///
/// A volatility indicator consisting of three bands: a simple moving average
/// (middle) with upper and lower bands offset by a configurable number of
/// population standard deviations. All three are NaN until the window is
/// full.
///
/// # Example
///
/// ```
/// use ta_stream::{Bb, BbConfig};
///
/// let mut bb = Bb::new(BbConfig::new(2, 2.0).unwrap());
///
/// assert!(!bb.compute(3.0).is_defined());
///
/// // mean 4, σ 1
/// let value = bb.compute(5.0);
/// assert_eq!(value.upper(), 6.0);
/// assert_eq!(value.middle(), 4.0);
/// assert_eq!(value.lower(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct Bb {
    config: BbConfig,
    sma: Sma,
    std_dev: StdDev,
    current: BbValue,
}

impl Indicator for Bb {
    type Config = BbConfig;
    type Input = Price;
    type Output = BbValue;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            sma: Sma::new(SmaConfig {
                length: config.length,
            }),
            std_dev: StdDev::new(StdDevConfig {
                length: config.length,
                bias: Bias::Population,
            }),
            current: BbValue::UNDEFINED,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> BbValue {
        let middle = self.sma.compute(price);
        let half_width = self.std_dev.compute(price) * self.config.multiplier.value();

        self.current = BbValue {
            upper: middle + half_width,
            middle,
            lower: middle - half_width,
        };

        self.current
    }

    #[inline]
    fn value(&self) -> BbValue {
        self.current
    }
}

impl Display for Bb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BB({}, {})", self.config.length, self.config.multiplier)
    }
}
