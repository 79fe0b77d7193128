use crate::PriceSource;

use std::fmt::Display;

/// A price value.
///
/// Semantic alias for [`f64`]. Documents intent in function signatures
/// without introducing newtype construction overhead. NaN stands for
/// "undefined" throughout the crate.
pub type Price = f64;

/// Bar open timestamp or sequence number.
///
/// Indicators never read it. Callers must feed bars in chronological order.
pub type Timestamp = u64;

/// OHLCV bar data.
///
/// Implement this on your own kline/candle type to get the derived price
/// views (`hl2`, `hlc3`, ...) and the [`Hlc`] / [`PriceWithVolume`]
/// projections that HLC-based and volume-weighted indicators consume.
///
/// # Example
///
/// ```
/// use ta_stream::{Ohlcv, Price, PriceSource, Timestamp};
///
/// struct MyKline {
///     o: f64, h: f64, l: f64, c: f64, v: f64,
///     ts: u64,
/// }
///
/// impl Ohlcv for MyKline {
///     fn open(&self) -> Price { self.o }
///     fn high(&self) -> Price { self.h }
///     fn low(&self) -> Price { self.l }
///     fn close(&self) -> Price { self.c }
///     fn volume(&self) -> f64 { self.v }
///     fn open_time(&self) -> Timestamp { self.ts }
/// }
///
/// let k = MyKline { o: 10.0, h: 30.0, l: 5.0, c: 20.0, v: 3.0, ts: 1 };
/// assert_eq!(k.hl2(), 17.5);
/// assert_eq!(k.price(PriceSource::OHLC4), 16.25);
/// ```
pub trait Ohlcv {
    /// Opening price of the bar.
    fn open(&self) -> Price;

    /// Highest price during the bar.
    fn high(&self) -> Price;

    /// Lowest price during the bar.
    fn low(&self) -> Price;

    /// Closing (or latest) price of the bar.
    fn close(&self) -> Price;

    /// Bar open timestamp or sequence number.
    fn open_time(&self) -> Timestamp;

    /// Trade volume during the bar. Defaults to `0.0`.
    fn volume(&self) -> f64 {
        0.0
    }

    /// Median price: `(high + low) / 2`.
    fn hl2(&self) -> Price {
        (self.high() + self.low()) / 2.0
    }

    /// Typical price: `(high + low + close) / 3`.
    fn hlc3(&self) -> Price {
        (self.high() + self.low() + self.close()) / 3.0
    }

    /// `(open + close) / 2`.
    fn oc2(&self) -> Price {
        (self.open() + self.close()) / 2.0
    }

    /// `(open + high + low) / 3`.
    fn ohl3(&self) -> Price {
        (self.open() + self.high() + self.low()) / 3.0
    }

    /// Average price: `(open + high + low + close) / 4`.
    fn ohlc4(&self) -> Price {
        (self.open() + self.high() + self.low() + self.close()) / 4.0
    }

    /// High, low and close of the bar.
    fn hlc(&self) -> Hlc {
        Hlc::new(self.high(), self.low(), self.close())
    }

    /// The configured candle part of this bar.
    fn price(&self, source: PriceSource) -> Price
    where
        Self: Sized,
    {
        source.extract(self)
    }

    /// The configured candle part paired with the bar volume.
    fn with_volume(&self, source: PriceSource) -> PriceWithVolume
    where
        Self: Sized,
    {
        PriceWithVolume::new(source.extract(self), self.volume())
    }
}

/// High, low and close of a bar: input of True Range, ATR, ATR stop-loss
/// and Williams %R.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hlc {
    pub high: Price,
    pub low: Price,
    pub close: Price,
}

impl Hlc {
    #[must_use]
    pub const fn new(high: Price, low: Price, close: Price) -> Self {
        Self { high, low, close }
    }
}

impl Display for Hlc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HLC(h: {}, l: {}, c: {})", self.high, self.low, self.close)
    }
}

/// A price paired with its traded volume: input of MFI and VWMA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceWithVolume {
    pub value: Price,
    pub volume: f64,
}

impl PriceWithVolume {
    #[must_use]
    pub const fn new(value: Price, volume: f64) -> Self {
        Self { value, volume }
    }
}

impl Display for PriceWithVolume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @ {}", self.value, self.volume)
    }
}
