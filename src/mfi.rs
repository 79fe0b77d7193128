use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, PriceWithVolume, indicator::length_config};

length_config!(
    /// Configuration for the Money Flow Index ([`Mfi`]).
    MfiConfig, MfiConfigBuilder, "MFI", default = 14, min = 1
);

/// Money Flow Index (MFI).
///
/// Volume-weighted RSI. Raw money flow `price × volume` is assigned to the
/// positive side on an up move and to the negative side on a down move. An
/// unchanged price (and the first sample) adds zero to both:
///
/// ```text
/// MFI = 100 − 100 / (1 + Σ positive / Σ negative)
/// ```
///
/// NaN until `length` samples are seen. A window without negative flow
/// yields `100`.
///
/// # Example
///
/// ```
/// use ta_stream::{Mfi, MfiConfig, PriceWithVolume};
///
/// let mut mfi = Mfi::new(MfiConfig::new(3).unwrap());
///
/// mfi.compute(PriceWithVolume::new(10.0, 1.0));
/// mfi.compute(PriceWithVolume::new(11.0, 1.0)); // +11
/// // −10: 100 − 100 / (1 + 11/10)
/// let value = mfi.compute(PriceWithVolume::new(10.0, 1.0));
/// assert!((value - 1100.0 / 21.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug)]
pub struct Mfi {
    config: MfiConfig,
    positive: CircularBuffer,
    negative: CircularBuffer,
    prev: Price,
    current: Price,
}

impl Indicator for Mfi {
    type Config = MfiConfig;
    type Input = PriceWithVolume;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            positive: CircularBuffer::new(config.length),
            negative: CircularBuffer::new(config.length),
            prev: Price::NAN,
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, input: PriceWithVolume) -> Price {
        let change = if self.prev.is_nan() {
            0.0
        } else {
            input.value - self.prev
        };
        let flow = input.volume * input.value;

        let (positive, negative) = if change > 0.0 {
            (flow, 0.0)
        } else if change < 0.0 {
            (0.0, flow)
        } else {
            (0.0, 0.0)
        };

        self.positive.put(positive);
        self.negative.put(negative);
        self.prev = input.value;

        self.current = if self.positive.is_full() && self.negative.is_full() {
            let positive: f64 = self.positive.values().iter().sum();
            let negative: f64 = self.negative.values().iter().sum();

            if negative == 0.0 {
                100.0
            } else {
                100.0 - 100.0 / (positive / negative + 1.0)
            }
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

impl Display for Mfi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MFI({})", self.config.length)
    }
}
