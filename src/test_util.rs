// src/test_util.rs

use crate::{Ohlcv, Price, Timestamp};

/// Asserts that two `f64` values are approximately equal using a
/// relative epsilon of `4 * f64::EPSILON`.
macro_rules! assert_approx {
    ($actual:expr, $expected:expr) => {{
        let (a, e) = ($actual, $expected);
        assert!(
            (a - e).abs() <= e.abs() * 4.0 * f64::EPSILON,
            "assert_approx failed: actual={a}, expected={e}, diff={}",
            (a - e).abs(),
        );
    }};
}

/// Asserts that an `f64` is NaN, i.e. the indicator is still warming up.
macro_rules! assert_nan {
    ($actual:expr) => {{
        let a: f64 = $actual;
        assert!(a.is_nan(), "expected NaN, got {a}");
    }};
}

pub(crate) use assert_approx;
pub(crate) use assert_nan;

pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub open_time: u64,
}

impl Bar {
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: 0.0,
            open_time: 0,
        }
    }

    pub fn vol(mut self, volume: f64) -> Self {
        self.volume = volume;
        self
    }
}

impl Ohlcv for Bar {
    fn open(&self) -> Price {
        self.open
    }
    fn high(&self) -> Price {
        self.high
    }
    fn low(&self) -> Price {
        self.low
    }
    fn close(&self) -> Price {
        self.close
    }
    fn volume(&self) -> f64 {
        self.volume
    }
    fn open_time(&self) -> Timestamp {
        self.open_time
    }
}

/// Feeds every value through `f` and collects the outputs.
pub fn feed<T>(values: &[f64], mut f: impl FnMut(f64) -> T) -> Vec<T> {
    values.iter().map(|&v| f(v)).collect()
}
