use crate::Result;

use std::fmt::{Debug, Display};

/// Configuration for a technical [`Indicator`].
///
/// Every indicator has a corresponding config type that holds its
/// parameters. Configs are value types: cheap to copy and compare. A config
/// value is always valid: validation happens once, in
/// [`IndicatorConfigBuilder::build`].
pub trait IndicatorConfig: Sized + Copy + PartialEq + Display + Debug {
    /// Builder type for constructing this config.
    type Builder: IndicatorConfigBuilder<Self>;

    /// Returns a new builder preloaded with the default parameters.
    fn builder() -> Self::Builder;
}

/// Builder for an [`IndicatorConfig`].
pub trait IndicatorConfigBuilder<Config>
where
    Config: IndicatorConfig,
{
    /// Validates the parameters and builds the config.
    ///
    /// # Errors
    ///
    /// Returns a configuration [`Error`](crate::Error) when a parameter is
    /// out of range (window too short, bad ALMA sigma/offset, ...).
    fn build(self) -> Result<Config>;
}

/// A streaming technical indicator.
///
/// Indicators maintain internal state and update incrementally on each call
/// to [`compute`](Indicator::compute), one sample at a time, in
/// chronological order. Output is NaN (or a record of NaNs) while the
/// indicator is warming up.
///
/// # Example
///
/// ```
/// use ta_stream::{Indicator, Sma, SmaConfig};
///
/// let mut sma = Sma::new(SmaConfig::new(3).unwrap());
///
/// assert!(sma.compute(10.0).is_nan());
/// assert!(sma.compute(20.0).is_nan());
/// assert_eq!(sma.compute(30.0), 20.0);
/// ```
pub trait Indicator: Sized + Clone + Display + Debug {
    /// Configuration type for this indicator.
    type Config: IndicatorConfig;

    /// One sample: a [`Price`](crate::Price), an [`Hlc`](crate::Hlc), a
    /// [`PriceWithVolume`](crate::PriceWithVolume) or a
    /// [`Quote`](crate::Quote).
    type Input;

    /// Computed output type. `f64` for simple indicators, a record for
    /// composite ones (e.g. Bollinger Bands).
    type Output: Copy + Send + Sync + Display + Debug;

    /// Creates a new indicator from the given config.
    fn new(config: Self::Config) -> Self;

    /// Feeds one sample and returns the updated indicator value.
    fn compute(&mut self, input: Self::Input) -> Self::Output;

    /// Returns the last computed value without advancing state.
    ///
    /// This is a cached field read: O(1) with no computation.
    fn value(&self) -> Self::Output;
}

/// Declares a config whose only parameter is a window length, with its
/// builder.
macro_rules! length_config {
    (
        $(#[$meta:meta])*
        $config:ident, $builder:ident, $name:literal, default = $default:literal, min = $min:literal
    ) => {
        $(#[$meta])*
        #[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
        pub struct $config {
            pub(crate) length: usize,
        }

        impl $crate::IndicatorConfig for $config {
            type Builder = $builder;

            #[inline]
            fn builder() -> Self::Builder {
                $builder { length: $default }
            }
        }

        impl $config {
            #[doc = concat!("Window length (default ", $default, ", minimum ", $min, ").")]
            #[inline]
            #[must_use]
            pub fn length(&self) -> usize {
                self.length
            }

            #[doc = concat!("Config with the given window length.\n\n# Errors\n\n",
                "[`Error::InvalidLength`](crate::Error::InvalidLength) if `length` is below ",
                $min, ".")]
            pub fn new(length: usize) -> $crate::Result<Self> {
                use $crate::{IndicatorConfig, IndicatorConfigBuilder};

                Self::builder().length(length).build()
            }
        }

        impl Default for $config {
            fn default() -> Self {
                Self { length: $default }
            }
        }

        impl std::fmt::Display for $config {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($config), "({})"), self.length)
            }
        }

        #[doc = concat!("Builder for [`", stringify!($config), "`].")]
        pub struct $builder {
            length: usize,
        }

        impl $builder {
            /// Sets the window length.
            #[inline]
            #[must_use]
            pub fn length(mut self, length: usize) -> Self {
                self.length = length;
                self
            }
        }

        impl $crate::IndicatorConfigBuilder<$config> for $builder {
            fn build(self) -> $crate::Result<$config> {
                Ok($config {
                    length: $crate::error::check_length($name, self.length, $min)?,
                })
            }
        }
    };
}

pub(crate) use length_config;
