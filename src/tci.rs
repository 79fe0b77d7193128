use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

const RAW_PERIOD: f64 = 6.0;
const SCALE: f64 = 0.025;

length_config!(
    /// Configuration for the Trend Confidence Index ([`Tci`]).
    TciConfig, TciConfigBuilder, "TCI", default = 9, min = 1
);

#[derive(Clone, Debug)]
enum TciPhase {
    Seeding(CircularBuffer),
    Active { src: f64, diff: f64, raw: f64 },
}

/// Trend Confidence Index (TCI), a WaveTrend style oscillator centred on 50.
///
/// The first full window seeds three averages directly:
///
/// ```text
/// src  = mean(window)
/// diff = mean(|v − src|)
/// raw  = Σ (v − src) / (0.025 × |v − src|) / 6
/// ```
///
/// A window value equal to `src` adds nothing to `raw`. Afterwards, with
/// `α = 2 / (length + 1)` and `β = 2 / 7`:
///
/// ```text
/// src  = α × price + (1 − α) × src
/// diff = α × |price − src| + (1 − α) × diff
/// raw  = β × (price − src) / (0.025 × diff) + (1 − β) × raw
/// TCI  = raw + 50
/// ```
///
/// NaN until the first window is full.
#[derive(Clone, Debug)]
pub struct Tci {
    config: TciConfig,
    alpha: f64,
    phase: TciPhase,
    current: Price,
}

impl Indicator for Tci {
    type Config = TciConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            #[allow(clippy::cast_precision_loss)]
            alpha: 2.0 / (config.length + 1) as f64,
            phase: TciPhase::Seeding(CircularBuffer::new(config.length)),
            current: Price::NAN,
        }
    }

    #[inline]
    fn compute(&mut self, price: Price) -> Price {
        let alpha = self.alpha;

        match &mut self.phase {
            TciPhase::Seeding(window) => {
                window.put(price);
                if !window.is_full() {
                    return self.current;
                }

                #[allow(clippy::cast_precision_loss)]
                let length = self.config.length as f64;
                let src = window.ordered_values().sum::<f64>() / length;
                let diff = window.ordered_values().map(|v| (v - src).abs()).sum::<f64>() / length;
                let raw = window
                    .ordered_values()
                    .filter(|&v| v != src)
                    .map(|v| (v - src) / (SCALE * (v - src).abs()))
                    .sum::<f64>()
                    / RAW_PERIOD;

                tracing::trace!(length = self.config.length, src, diff, raw, "TCI seeded");
                self.phase = TciPhase::Active { src, diff, raw };
                self.current = raw + 50.0;
            }
            TciPhase::Active { src, diff, raw } => {
                let beta = 2.0 / (RAW_PERIOD + 1.0);

                *src = alpha * price + (1.0 - alpha) * *src;
                *diff = alpha * (price - *src).abs() + (1.0 - alpha) * *diff;
                let raw_now = (price - *src) / (*diff * SCALE);
                *raw = beta * raw_now + (1.0 - beta) * *raw;

                self.current = *raw + 50.0;
            }
        }

        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for Tci {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TCI({})", self.config.length)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::test_util::{assert_approx, assert_nan};

    fn tci(length: usize) -> Tci {
        Tci::new(TciConfig::new(length).unwrap())
    }

    mod seeding {
        use super::*;

        #[test]
        fn nan_until_window_full() {
            let mut tci = tci(3);
            assert_nan!(tci.compute(1.0));
            assert_nan!(tci.compute(2.0));
            assert!(!tci.compute(3.0).is_nan());
        }

        #[test]
        fn raw_seed_counts_signs() {
            // src = 2: terms −40, 0 (skipped), +40
            let mut tci = tci(3);
            tci.compute(1.0);
            tci.compute(2.0);
            assert_eq!(tci.compute(3.0), 50.0);
        }

        #[test]
        fn skewed_window_seeds_off_centre() {
            // src = 2: three values below (−40 each), one above (+40)
            let mut tci = tci(4);
            for v in [1.0, 1.0, 1.0] {
                tci.compute(v);
            }
            let out = tci.compute(5.0);
            assert_approx!(out, 50.0 + (-120.0 + 40.0) / 6.0);
        }
    }

    mod update {
        use super::*;

        #[test]
        fn follows_recurrence() {
            let mut tci = tci(3);
            for v in [1.0, 2.0, 3.0] {
                tci.compute(v);
            }
            // Seed: src 2, diff 2/3, raw 0
            let alpha = 0.5;
            let beta = 2.0 / 7.0;
            let src = alpha * 4.0 + (1.0 - alpha) * 2.0;
            let diff = alpha * f64::abs(4.0 - src) + (1.0 - alpha) * (2.0 / 3.0);
            let raw = beta * ((4.0 - src) / (diff * 0.025));
            assert_approx!(tci.compute(4.0), raw + 50.0);
        }

        #[test]
        fn rising_prices_are_above_50() {
            let mut tci = tci(5);
            let mut out = f64::NAN;
            for i in 0..30 {
                out = tci.compute(100.0 + f64::from(i));
            }
            assert!(out > 50.0, "{out}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(tci(9).to_string(), "TCI(9)");
    }
}
