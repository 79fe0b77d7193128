use std::{
    fmt::Display,
    hash::{Hash, Hasher},
};

use crate::{
    CircularBuffer, Error, Indicator, IndicatorConfig, IndicatorConfigBuilder, Price, Result,
    error::check_length,
};

/// Configuration for the Arnaud Legoux Moving Average ([`Alma`]).
///
/// `offset` places the Gaussian peak within the window (0 = oldest,
/// 1 = newest) and must lie in `[0, 1]`. `sigma` controls the curve width
/// and must be at least 1.
///
/// Implements `Eq` and `Hash` via bit-level comparison of `offset` and
/// `sigma`, which is sound because NaN is rejected in
/// [`build`](IndicatorConfigBuilder::build).
///
/// # Example
///
/// ```
/// use ta_stream::{AlmaConfig, IndicatorConfig, IndicatorConfigBuilder};
///
/// let config = AlmaConfig::builder().length(9).offset(0.9).build().unwrap();
///
/// assert_eq!(config.length(), 9);
/// assert_eq!(config.sigma(), 6.0);
/// assert!(AlmaConfig::builder().sigma(0.5).build().is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AlmaConfig {
    length: usize,
    offset: f64,
    sigma: f64,
}

impl IndicatorConfig for AlmaConfig {
    type Builder = AlmaConfigBuilder;

    #[inline]
    fn builder() -> Self::Builder {
        AlmaConfigBuilder {
            length: 20,
            offset: 0.85,
            sigma: 6.0,
        }
    }
}

impl AlmaConfig {
    /// Window length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Gaussian peak position in `[0, 1]`.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Gaussian width.
    #[inline]
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Config with all three parameters.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidLength`], [`Error::InvalidOffset`] or
    /// [`Error::InvalidSigma`] for out-of-range parameters.
    pub fn new(length: usize, offset: f64, sigma: f64) -> Result<Self> {
        Self::builder()
            .length(length)
            .offset(offset)
            .sigma(sigma)
            .build()
    }
}

impl Default for AlmaConfig {
    fn default() -> Self {
        Self {
            length: 20,
            offset: 0.85,
            sigma: 6.0,
        }
    }
}

impl PartialEq for AlmaConfig {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.offset.to_bits() == other.offset.to_bits()
            && self.sigma.to_bits() == other.sigma.to_bits()
    }
}

impl Eq for AlmaConfig {}

impl Hash for AlmaConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        self.offset.to_bits().hash(state);
        self.sigma.to_bits().hash(state);
    }
}

impl Display for AlmaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AlmaConfig({}, {}, {})",
            self.length, self.offset, self.sigma
        )
    }
}

/// Builder for [`AlmaConfig`].
///
/// Defaults: length = 20, offset = 0.85, sigma = 6.
pub struct AlmaConfigBuilder {
    length: usize,
    offset: f64,
    sigma: f64,
}

impl AlmaConfigBuilder {
    /// Sets the window length.
    #[inline]
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets the Gaussian peak position.
    #[inline]
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the Gaussian width.
    #[inline]
    #[must_use]
    pub fn sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }
}

impl IndicatorConfigBuilder<AlmaConfig> for AlmaConfigBuilder {
    fn build(self) -> Result<AlmaConfig> {
        let length = check_length("ALMA", self.length, 1)?;

        if !(0.0..=1.0).contains(&self.offset) {
            tracing::debug!(offset = self.offset, "rejected ALMA offset");
            return Err(Error::InvalidOffset(self.offset));
        }

        if !self.sigma.is_finite() || self.sigma < 1.0 {
            tracing::debug!(sigma = self.sigma, "rejected ALMA sigma");
            return Err(Error::InvalidSigma(self.sigma));
        }

        Ok(AlmaConfig {
            length,
            offset: self.offset,
            sigma: self.sigma,
        })
    }
}

/// Arnaud Legoux Moving Average (ALMA).
///
/// Gaussian-weighted mean of the window. For position `i` (0 = oldest):
///
/// ```text
/// m    = offset × (length − 1)
/// s    = length / sigma
/// wᵢ   = exp(−(i − m)² / (2s²))
/// ALMA = Σ wᵢ × priceᵢ / Σ wᵢ
/// ```
///
/// Returns NaN until the window is full.
///
/// # Example
///
/// ```
/// use ta_stream::{Alma, AlmaConfig};
///
/// let mut alma = Alma::new(AlmaConfig::new(3, 0.85, 6.0).unwrap());
///
/// assert!(alma.compute(1.0).is_nan());
/// assert!(alma.compute(2.0).is_nan());
/// // Weighted towards the newest value
/// assert!(alma.compute(3.0) > 2.5);
/// ```
#[derive(Clone, Debug)]
pub struct Alma {
    config: AlmaConfig,
    window: CircularBuffer,
    weights: Box<[f64]>,
    norm: f64,
    current: Price,
}

impl Indicator for Alma {
    type Config = AlmaConfig;
    type Input = Price;
    type Output = Price;

    #[allow(clippy::cast_precision_loss)]
    fn new(config: Self::Config) -> Self {
        let length = config.length as f64;
        let m = config.offset * (length - 1.0);
        let s = length / config.sigma;

        let weights: Box<[f64]> = (0..config.length)
            .map(|i| (-0.5 * ((i as f64 - m) / s).powi(2)).exp())
            .collect();
        let norm = weights.iter().sum();

        Self {
            config,
            window: CircularBuffer::new(config.length),
            weights,
            norm,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        self.window.put(price);

        self.current = if self.window.is_full() {
            let sum: f64 = self
                .window
                .ordered_values()
                .zip(self.weights.iter())
                .map(|(v, w)| v * w)
                .sum();
            sum / self.norm
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

impl Display for Alma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ALMA({}, {}, {})",
            self.config.length, self.config.offset, self.config.sigma
        )
    }
}
