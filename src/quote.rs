use crate::{Error, Hlc, Ohlcv, Price, Result, Timestamp};

use std::fmt::Display;

/// A validated OHLCV bar.
///
/// Construct through [`Quote::new`], which rejects bars whose low is above
/// any other price or whose high is below open or close.
///
/// # Example
///
/// ```
/// use ta_stream::{Ohlcv, Quote};
///
/// let q = Quote::new(1, 10.0, 12.0, 9.0, 11.0, 1_000.0).unwrap();
/// assert_eq!(q.hl2(), 10.5);
///
/// assert!(Quote::new(1, 10.0, 12.0, 13.0, 11.0, 1_000.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quote {
    open_time: Timestamp,
    open: Price,
    high: Price,
    low: Price,
    close: Price,
    volume: f64,
}

impl Quote {
    /// Creates a quote, validating the price range.
    ///
    /// # Errors
    ///
    /// [`Error::LowAboveRange`] if `low` exceeds `open`, `close` or `high`;
    /// [`Error::HighBelowRange`] if `high` is below `open` or `close`.
    pub fn new(
        open_time: Timestamp,
        open: Price,
        high: Price,
        low: Price,
        close: Price,
        volume: f64,
    ) -> Result<Self> {
        if low > open || low > close || low > high {
            tracing::debug!(open_time, low, open, high, close, "rejected quote: low above range");
            return Err(Error::LowAboveRange {
                low,
                open,
                high,
                close,
            });
        }

        if high < close || high < open {
            tracing::debug!(open_time, high, open, low, close, "rejected quote: high below range");
            return Err(Error::HighBelowRange {
                high,
                open,
                low,
                close,
            });
        }

        Ok(Self {
            open_time,
            open,
            high,
            low,
            close,
            volume,
        })
    }

    /// The zero quote: all prices and volume `0.0` at `open_time` 0.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            open_time: 0,
            open: 0.0,
            high: 0.0,
            low: 0.0,
            close: 0.0,
            volume: 0.0,
        }
    }

    /// Whether this is the [`empty`](Self::empty) quote.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open_time == 0
    }
}

impl Default for Quote {
    fn default() -> Self {
        Self::empty()
    }
}

impl Ohlcv for Quote {
    #[inline]
    fn open(&self) -> Price {
        self.open
    }

    #[inline]
    fn high(&self) -> Price {
        self.high
    }

    #[inline]
    fn low(&self) -> Price {
        self.low
    }

    #[inline]
    fn close(&self) -> Price {
        self.close
    }

    #[inline]
    fn open_time(&self) -> Timestamp {
        self.open_time
    }

    #[inline]
    fn volume(&self) -> f64 {
        self.volume
    }
}

impl From<&Quote> for Hlc {
    fn from(quote: &Quote) -> Self {
        quote.hlc()
    }
}

impl Display for Quote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quote(t: {}, o: {}, h: {}, l: {}, c: {}, v: {})",
            self.open_time, self.open, self.high, self.low, self.close, self.volume
        )
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::{PriceSource, PriceWithVolume};

    mod validation {
        use super::*;

        #[test]
        fn accepts_consistent_bar() {
            let q = Quote::new(1, 10.0, 12.0, 9.0, 11.0, 100.0).unwrap();
            assert_eq!(q.open(), 10.0);
            assert_eq!(q.high(), 12.0);
            assert_eq!(q.low(), 9.0);
            assert_eq!(q.close(), 11.0);
            assert_eq!(q.volume(), 100.0);
            assert_eq!(q.open_time(), 1);
        }

        #[test]
        fn accepts_flat_bar() {
            assert!(Quote::new(1, 5.0, 5.0, 5.0, 5.0, 0.0).is_ok());
        }

        #[test]
        fn rejects_low_above_open() {
            let err = Quote::new(1, 10.0, 12.0, 10.5, 11.0, 100.0).unwrap_err();
            assert_eq!(
                err,
                Error::LowAboveRange {
                    low: 10.5,
                    open: 10.0,
                    high: 12.0,
                    close: 11.0,
                }
            );
        }

        #[test]
        fn rejects_low_above_close() {
            let err = Quote::new(1, 10.0, 12.0, 9.5, 9.0, 100.0).unwrap_err();
            assert!(matches!(err, Error::LowAboveRange { .. }));
        }

        #[test]
        fn rejects_high_below_close() {
            let err = Quote::new(1, 10.0, 11.0, 9.0, 11.5, 100.0).unwrap_err();
            assert_eq!(
                err,
                Error::HighBelowRange {
                    high: 11.0,
                    open: 10.0,
                    low: 9.0,
                    close: 11.5,
                }
            );
        }

        #[test]
        fn rejects_high_below_open() {
            let err = Quote::new(1, 12.0, 11.0, 9.0, 10.0, 100.0).unwrap_err();
            assert!(matches!(err, Error::HighBelowRange { .. }));
        }
    }

    mod views {
        use super::*;

        fn quote() -> Quote {
            Quote::new(7, 10.0, 30.0, 5.0, 20.0, 3.0).unwrap()
        }

        #[test]
        fn hlc_from_quote() {
            assert_eq!(Hlc::from(&quote()), Hlc::new(30.0, 5.0, 20.0));
        }

        #[test]
        fn price_with_volume() {
            assert_eq!(
                quote().with_volume(PriceSource::OC2),
                PriceWithVolume::new(15.0, 3.0)
            );
        }
    }

    mod empty {
        use super::*;

        #[test]
        fn empty_is_empty() {
            assert!(Quote::empty().is_empty());
            assert!(Quote::default().is_empty());
        }

        #[test]
        fn real_quote_is_not_empty() {
            assert!(!Quote::new(1, 1.0, 1.0, 1.0, 1.0, 1.0).unwrap().is_empty());
        }
    }

    #[test]
    fn display() {
        let q = Quote::new(1, 10.0, 12.0, 9.0, 11.0, 100.0).unwrap();
        assert_eq!(q.to_string(), "Quote(t: 1, o: 10, h: 12, l: 9, c: 11, v: 100)");
    }
}
