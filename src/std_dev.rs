use std::fmt::Display;

use crate::{
    CircularBuffer, Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, Result,
    error::check_length,
};

/// Divisor applied to the variance of a [`StdDev`] window.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Default, Debug)]
pub enum Bias {
    /// Divide by `length`.
    #[default]
    Population,
    /// Divide by `length − 1` (Bessel's correction).
    Sample,
}

impl Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Configuration for the rolling standard deviation ([`StdDev`]).
///
/// A [`Bias::Sample`] deviation needs at least two values, so a length of
/// 1 with sample bias is rejected.
///
/// # Example
///
/// ```
/// use ta_stream::{Bias, IndicatorConfig, IndicatorConfigBuilder, StdDevConfig};
///
/// let config = StdDevConfig::builder()
///     .length(10)
///     .bias(Bias::Sample)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.length(), 10);
/// assert!(StdDevConfig::new(1, Bias::Sample).is_err());
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub struct StdDevConfig {
    pub(crate) length: usize,
    pub(crate) bias: Bias,
}

impl IndicatorConfig for StdDevConfig {
    type Builder = StdDevConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        StdDevConfigBuilder {
            length: 20,
            bias: Bias::Population,
        }
    }
}

impl StdDevConfig {
    /// Window length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Variance divisor.
    #[inline]
    #[must_use]
    pub fn bias(&self) -> Bias {
        self.bias
    }

    /// Config with the given length and bias.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`] for a zero length and
    /// [`Error::SampleStdDevOfOne`] for a sample deviation of length 1.
    pub fn new(length: usize, bias: Bias) -> Result<Self> {
        Self::builder().length(length).bias(bias).build()
    }
}

impl Default for StdDevConfig {
    fn default() -> Self {
        Self {
            length: 20,
            bias: Bias::Population,
        }
    }
}

impl Display for StdDevConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StdDevConfig({}, {})", self.length, self.bias)
    }
}

/// Builder for [`StdDevConfig`].
///
/// Defaults: length = 20, bias = [`Bias::Population`].
pub struct StdDevConfigBuilder {
    length: usize,
    bias: Bias,
}

impl StdDevConfigBuilder {
    /// Sets the window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the variance divisor.
    #[inline]
    #[must_use]
    pub fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }
}

impl IndicatorConfigBuilder<StdDevConfig> for StdDevConfigBuilder {
    fn build(self) -> Result<StdDevConfig> {
        let length = check_length("STDEV", self.length, 1)?;

        if self.bias == Bias::Sample && length == 1 {
            tracing::debug!(length, "rejected sample standard deviation");
            return Err(Error::SampleStdDevOfOne);
        }

        Ok(StdDevConfig {
            length,
            bias: self.bias,
        })
    }
}

/// Rolling standard deviation.
///
/// Keeps a running sum and sum of squares over the window, adjusted at the
/// boundary as values are evicted:
///
/// ```text
/// variance = mean(x²) − mean(x)²
/// σ        = √(variance × length / divisor)
/// ```
///
/// where `divisor` is `length` for [`Bias::Population`] and `length − 1`
/// for [`Bias::Sample`]. Returns NaN until the window is full.
///
/// A NaN input enters the running sums and every later output is NaN.
///
/// # Example
///
/// ```
/// use ta_stream::{Bias, StdDev, StdDevConfig};
///
/// let mut sd = StdDev::new(StdDevConfig::new(2, Bias::Population).unwrap());
///
/// assert!(sd.compute(1.0).is_nan());
/// // mean = 2, mean(x²) = 5, variance = 1
/// assert_eq!(sd.compute(3.0), 1.0);
/// ```
#[derive(Clone, Debug)]
pub struct StdDev {
    config: StdDevConfig,
    window: CircularBuffer,
    sum: f64,
    sum_of_squares: f64,
    current: Price,
}

impl Indicator for StdDev {
    type Config = StdDevConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            window: CircularBuffer::new(config.length),
            sum: 0.0,
            sum_of_squares: 0.0,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let evicted = if self.window.is_full() {
            self.window.first()
        } else {
            0.0
        };

        self.window.put(price);

        self.sum += price - evicted;
        self.sum_of_squares += price * price - evicted * evicted;

        self.current = if self.window.is_full() {
            self.deviation()
        } else {
            Price::NAN
        };

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl StdDev {
    #[allow(clippy::cast_precision_loss)]
    fn deviation(&self) -> f64 {
        let length = self.config.length as f64;
        let divisor = match self.config.bias {
            Bias::Population => length,
            Bias::Sample => length - 1.0,
        };

        let mean = self.sum / length;
        let variance = self.sum_of_squares / length - mean * mean;

        // Cancellation can leave a tiny negative variance on flat windows.
        let variance = if variance < 0.0 { 0.0 } else { variance };

        (variance * length / divisor).sqrt()
    }
}

impl Display for StdDev {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "STDEV({}, {})", self.config.length, self.config.bias)
    }
}
