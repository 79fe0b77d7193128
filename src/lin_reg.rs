use std::fmt::Display;

use crate::{CircularBuffer, Indicator, Price, indicator::length_config};

length_config!(
    /// Configuration for the rolling linear regression ([`LinReg`]).
    ///
    /// A regression line needs two points, so the minimum length is 2.
    LinRegConfig, LinRegConfigBuilder, "LINREG", default = 9, min = 2
);

/// Rolling least-squares linear regression, evaluated at the newest point.
///
/// `x` is the ordinal position of the sample since construction. Running
/// sums of `x`, `y`, `x²` and `xy` are corrected as the oldest point leaves
/// the window:
///
/// ```text
/// slope     = (n × Σxy − Σx × Σy) / (n × Σx² − (Σx)²)
/// intercept = (Σy − slope × Σx) / n
/// LINREG    = slope × x + intercept
/// ```
///
/// NaN until `length` points are seen. A NaN input is returned verbatim and
/// skipped: it takes no `x` position.
///
/// # Example
///
/// ```
/// use ta_stream::{LinReg, LinRegConfig};
///
/// let mut lr = LinReg::new(LinRegConfig::new(3).unwrap());
///
/// assert!(lr.compute(1.0).is_nan());
/// assert!(lr.compute(3.0).is_nan());
/// // Points on y = 2x + 1 reproduce the line
/// assert!((lr.compute(5.0) - 5.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug)]
pub struct LinReg {
    config: LinRegConfig,
    window: CircularBuffer,
    count: usize,
    x_sum: f64,
    y_sum: f64,
    xx_sum: f64,
    xy_sum: f64,
    current: Price,
}

impl Indicator for LinReg {
    type Config = LinRegConfig;
    type Input = Price;
    type Output = Price;

    fn new(config: Self::Config) -> Self {
        Self {
            config,
            window: CircularBuffer::new(config.length),
            count: 0,
            x_sum: 0.0,
            y_sum: 0.0,
            xx_sum: 0.0,
            xy_sum: 0.0,
            current: Price::NAN,
        }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    fn compute(&mut self, y: Price) -> Price {
        if y.is_nan() {
            self.current = y;
            return y;
        }

        let length = self.config.length;
        let x = self.count as f64;

        if self.window.is_full() {
            let first_x = (self.count - length) as f64;
            let first_y = self.window.first();
            self.x_sum -= first_x;
            self.y_sum -= first_y;
            self.xx_sum -= first_x * first_x;
            self.xy_sum -= first_x * first_y;
        }

        self.x_sum += x;
        self.y_sum += y;
        self.xx_sum += x * x;
        self.xy_sum += x * y;

        self.window.put(y);
        self.count += 1;

        if self.count < length {
            self.current = Price::NAN;
            return self.current;
        }

        let n = length as f64;
        let slope = (n * self.xy_sum - self.x_sum * self.y_sum)
            / (n * self.xx_sum - self.x_sum * self.x_sum);
        let intercept = (self.y_sum - slope * self.x_sum) / n;

        self.current = slope * x + intercept;
        self.current
    }

    #[inline]
    fn value(&self) -> Price {
        self.current
    }
}

impl Display for LinReg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LINREG({})", self.config.length)
    }
}
