use crate::Price;

use thiserror::Error;

/// Errors returned when building an indicator config or a [`Quote`](crate::Quote).
///
/// Indicators themselves never fail. Once constructed, every call to
/// `compute` yields a value (NaN while warming up).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// The window length is below the indicator's minimum.
    #[error("invalid length {length} for {indicator}: must be at least {min}")]
    InvalidLength {
        /// Indicator name, e.g. `"RSI"`.
        indicator: &'static str,
        /// The rejected length.
        length: usize,
        /// Smallest accepted length.
        min: usize,
    },

    /// ALMA sigma below 1.
    #[error("invalid ALMA sigma {0}: must be at least 1")]
    InvalidSigma(f64),

    /// ALMA offset outside `[0, 1]`.
    #[error("invalid ALMA offset {0}: must be between 0 and 1")]
    InvalidOffset(f64),

    /// Band or stop multiplier that is not a finite positive number.
    #[error("invalid multiplier {0}: must be finite and positive")]
    InvalidMultiplier(f64),

    /// Sample standard deviation requested over a single-value window.
    #[error("sample standard deviation is undefined for length 1")]
    SampleStdDevOfOne,

    /// Quote low is above open, close, or high.
    #[error("low {low} cannot be greater than open {open}, high {high}, or close {close}")]
    LowAboveRange {
        low: Price,
        open: Price,
        high: Price,
        close: Price,
    },

    /// Quote high is below open or close.
    #[error("high {high} cannot be less than open {open}, low {low}, or close {close}")]
    HighBelowRange {
        high: Price,
        open: Price,
        low: Price,
        close: Price,
    },
}

/// Convenience alias for results carrying the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Rejects `length` below `min` for the named indicator.
pub(crate) fn check_length(indicator: &'static str, length: usize, min: usize) -> Result<usize> {
    if length < min {
        tracing::debug!(indicator, length, min, "rejected indicator length");
        return Err(Error::InvalidLength {
            indicator,
            length,
            min,
        });
    }

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_length_message() {
        let err = Error::InvalidLength {
            indicator: "RSI",
            length: 1,
            min: 2,
        };
        assert_eq!(err.to_string(), "invalid length 1 for RSI: must be at least 2");
    }

    #[test]
    fn sample_std_dev_message() {
        assert_eq!(
            Error::SampleStdDevOfOne.to_string(),
            "sample standard deviation is undefined for length 1"
        );
    }

    #[test]
    fn low_above_range_message() {
        let err = Error::LowAboveRange {
            low: 12.0,
            open: 10.0,
            high: 15.0,
            close: 11.0,
        };
        assert_eq!(
            err.to_string(),
            "low 12 cannot be greater than open 10, high 15, or close 11"
        );
    }

    #[test]
    fn check_length_accepts_minimum() {
        assert_eq!(check_length("SMA", 1, 1), Ok(1));
    }

    #[test]
    fn check_length_rejects_below_minimum() {
        assert_eq!(
            check_length("SMA", 0, 1),
            Err(Error::InvalidLength {
                indicator: "SMA",
                length: 0,
                min: 1,
            })
        );
    }
}
