use crate::error::{ScatterError, ScatterResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;
const NICE_MAX_ITERATIONS: usize = 10;

/// Continuous linear mapping from a data domain onto a pixel range.
///
/// A degenerate domain (`start == end`) maps every value to the middle of the
/// range instead of failing, so single-valued fields still plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ScatterError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Extends the domain outward to round values, stepping like `ticks(count)`.
    ///
    /// The domain is left untouched when it is degenerate or when the step does
    /// not settle within a bounded number of passes.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let reversed = self.domain_end < self.domain_start;
        let (mut start, mut stop) = if reversed {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut previous_step = None;
        for _ in 0..NICE_MAX_ITERATIONS {
            let Some(step) = tick_increment(start, stop, count) else {
                return self;
            };
            if previous_step == Some(step) {
                let (domain_start, domain_end) = if reversed {
                    (stop, start)
                } else {
                    (start, stop)
                };
                return Self {
                    domain_start,
                    domain_end,
                    ..self
                };
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            }
            previous_step = Some(step);
        }

        self
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (value - self.domain_start) / span
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        let normalized = if span == 0.0 {
            0.5
        } else {
            (pixel - self.range_start) / span
        };
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Round tick values inside the domain, approximately `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        let (start, stop) = if self.domain_end < self.domain_start {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };
        if count == 0 {
            return Vec::new();
        }
        if start == stop {
            return vec![start];
        }
        let Some((first, last, increment)) = tick_spec(start, stop, count as f64) else {
            return Vec::new();
        };
        if last < first {
            return Vec::new();
        }

        let n = (last - first) as usize + 1;
        (0..n)
            .map(|i| {
                let k = first + i as f64;
                if increment < 0.0 { k / -increment } else { k * increment }
            })
            .collect()
    }

    /// Decimal places needed to tell ticks apart.
    #[must_use]
    pub fn tick_precision(self, count: usize) -> usize {
        let (start, stop) = (
            self.domain_start.min(self.domain_end),
            self.domain_start.max(self.domain_end),
        );
        let Some((_, _, increment)) = tick_spec(start, stop, count as f64) else {
            return 0;
        };
        let step = if increment < 0.0 { -1.0 / increment } else { increment };
        let exponent = step.abs().log10().floor();
        if exponent < 0.0 { (-exponent) as usize } else { 0 }
    }
}

/// Square-root mapping so the *area* of a mark grows linearly with its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SqrtScale {
    linear: LinearScale,
    domain_start: f64,
    domain_end: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ScatterResult<Self> {
        let linear = LinearScale::new((signed_sqrt(domain.0), signed_sqrt(domain.1)), range)?;
        Ok(Self {
            linear,
            domain_start: domain.0,
            domain_end: domain.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.linear.map(signed_sqrt(value))
    }
}

fn signed_sqrt(value: f64) -> f64 {
    if value < 0.0 {
        -(-value).sqrt()
    } else {
        value.sqrt()
    }
}

/// Returns `(first, last, increment)`; a negative increment means "divide by
/// `-increment`", which keeps fractional ticks exact.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = (start * inc).round();
        last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = (start / inc).round();
        last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((first, last, increment))
}

fn tick_increment(start: f64, stop: f64, count: usize) -> Option<f64> {
    tick_spec(start, stop, count as f64).map(|(_, _, increment)| increment)
}

/// Formats a tick value with fixed precision and thousands separators.
#[must_use]
pub fn format_tick(value: f64, precision: usize) -> String {
    let raw = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match raw.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (raw.as_str(), None),
    };

    let mut grouped = String::with_capacity(raw.len() + integer.len() / 3 + 1);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    if value.is_sign_negative() && !is_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}
