#![allow(dead_code)]

use serde::{Deserialize, de::DeserializeOwned};
use ta_stream::{Ohlcv, Price, PriceSource, PriceWithVolume, Quote, Timestamp};

/// Hourly OHLCV bar parsed from the fixture CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct RefQuote {
    pub open_time: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl RefQuote {
    /// Validated [`Quote`] with the same prices.
    pub fn to_quote(&self) -> Quote {
        Quote::new(
            self.open_time,
            self.open,
            self.high,
            self.low,
            self.close,
            self.volume,
        )
        .unwrap_or_else(|e| panic!("invalid fixture quote at t={}: {e}", self.open_time))
    }

    pub fn close_with_volume(&self) -> PriceWithVolume {
        self.with_volume(PriceSource::Close)
    }

    pub fn hlc3_with_volume(&self) -> PriceWithVolume {
        self.with_volume(PriceSource::HLC3)
    }
}

impl Ohlcv for RefQuote {
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

    fn open_time(&self) -> Timestamp {
        self.open_time
    }

    fn volume(&self) -> f64 {
        self.volume
    }
}

/// Reference value with timestamp. `NaN` marks warm-up rows.
#[derive(Debug, Deserialize)]
pub struct RefValue {
    pub open_time: u64,
    pub expected: f64,
}

/// Reference Bollinger Bands.
#[derive(Debug, Deserialize)]
pub struct RefBands {
    pub open_time: u64,
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Reference ATR stop levels.
#[derive(Debug, Deserialize)]
pub struct RefStops {
    pub open_time: u64,
    pub long: f64,
    pub short: f64,
}

/// Reference TSI line and signal.
#[derive(Debug, Deserialize)]
pub struct RefTsi {
    pub open_time: u64,
    pub tsi: f64,
    pub signal: f64,
}

/// Reference Phoenix lines.
#[derive(Debug, Deserialize)]
pub struct RefPhoenix {
    pub open_time: u64,
    pub fast: f64,
    pub slow: f64,
    pub lsma: f64,
}

const QUOTES_PATH: &str = "tests/fixtures/data/quotes.csv";

/// Load the 600-bar reference series.
pub fn load_quotes() -> Vec<RefQuote> {
    load_records(QUOTES_PATH, "invalid OHLCV record")
}

/// Load single-value reference data.
pub fn load_ref_values(path: &str) -> Vec<RefValue> {
    load_records(path, "invalid reference record")
}

/// Load multi-column reference data.
pub fn load_ref<D: DeserializeOwned>(path: &str) -> Vec<D> {
    load_records(path, "invalid reference record")
}

/// Assert two f64 values are within tolerance. NaN only matches NaN.
pub fn assert_near(actual: f64, expected: f64, tolerance: f64, context: &str) {
    if expected.is_nan() || actual.is_nan() {
        assert!(
            expected.is_nan() && actual.is_nan(),
            "{context}: expected {expected:.10}, got {actual:.10}"
        );
        return;
    }

    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{context}: expected {expected:.10}, got {actual:.10}, diff {diff:.2e} > tolerance {tolerance:.2e}"
    );
}

/// Assert every reference row was checked against a streamed bar.
pub fn assert_aligned(quotes: &[RefQuote], open_times: impl ExactSizeIterator<Item = u64>) {
    assert_eq!(
        quotes.len(),
        open_times.len(),
        "reference length differs from quote series"
    );
    for (i, (quote, t)) in quotes.iter().zip(open_times).enumerate() {
        assert_eq!(quote.open_time, t, "reference row {i} out of step");
    }
}

/// Generate reference match and clone tests for a single-value indicator.
///
/// Usage: `reference_test!(sma_20, Sma, SmaConfig::new(20).unwrap(), |q: &RefQuote| q.close, "tests/fixtures/data/sma-20.csv", 1e-9);`
#[allow(unused_macros)]
macro_rules! reference_test {
    ($name:ident, $ind:ty, $config:expr, $input:expr, $ref_path:expr, $tolerance:expr) => {
        mod $name {
            use super::fixtures::*;
            use ta_stream::*;

            #[test]
            fn matches_reference() {
                let quotes = load_quotes();
                let reference = load_ref_values($ref_path);
                assert_aligned(&quotes, reference.iter().map(|r| r.open_time));

                let input = $input;
                let mut ind = <$ind>::new($config);

                for (i, (quote, row)) in quotes.iter().zip(&reference).enumerate() {
                    let value = ind.compute(input(quote));
                    assert_near(
                        value,
                        row.expected,
                        $tolerance,
                        &format!("{} at bar {i} (t={})", stringify!($name), quote.open_time),
                    );
                    assert_eq!(ind.value().to_bits(), value.to_bits());
                }
            }

            #[test]
            fn clone_resumes_identically() {
                let quotes = load_quotes();
                let input = $input;
                let mut ind = <$ind>::new($config);

                let (head, tail) = quotes.split_at(quotes.len() / 2);
                for quote in head {
                    ind.compute(input(quote));
                }

                let mut cloned = ind.clone();
                for (i, quote) in tail.iter().enumerate() {
                    let original = ind.compute(input(quote));
                    let copy = cloned.compute(input(quote));
                    assert_eq!(
                        original.to_bits(),
                        copy.to_bits(),
                        "{} clone diverged at bar {}",
                        stringify!($name),
                        head.len() + i
                    );
                }
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use reference_test;

fn load_records<D>(path: &str, expect_msg: &str) -> Vec<D>
where
    D: DeserializeOwned,
{
    let mut rdr =
        csv::Reader::from_path(path).unwrap_or_else(|e| panic!("failed to open {path}: {e}"));

    rdr.deserialize()
        .map(|r| r.unwrap_or_else(|e| panic!("{expect_msg} in {path}: {e}")))
        .collect()
}
