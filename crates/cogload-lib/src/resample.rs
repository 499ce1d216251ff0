use crate::series::{DenseSeries, LoadSamples};
use thiserror::Error;

/// Why a sample series cannot be resampled.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResampleError {
    #[error("times and values differ in length ({times} times, {values} values)")]
    LengthMismatch { times: usize, values: usize },
    #[error("need at least 2 samples to interpolate, got {len}")]
    TooFewSamples { len: usize },
    #[error("duplicate timestamp at index {index} (zero-length interval)")]
    DuplicateTimestamp { index: usize },
    #[error("sample times must be strictly increasing (violated at index {index})")]
    NonIncreasingTimes { index: usize },
}

/// Resample sparse load samples onto a unit-step grid with a natural cubic
/// spline, clamping values to `[0, 1]` and rounding to two decimals.
///
/// The grid starts exactly at the first sample time and steps by one second
/// through the last sample time. A fractional first time therefore yields a
/// fractional grid rather than one aligned to whole seconds.
pub fn densify(samples: &LoadSamples) -> Result<DenseSeries, ResampleError> {
    validate(samples)?;
    let x = &samples.times;
    let y = &samples.values;
    let n = x.len();
    let y2 = second_derivatives(x, y);

    let mut times = Vec::new();
    let mut values = Vec::new();
    let mut i = 0;
    let mut t = x[0];
    while t <= x[n - 1] {
        // t only moves forward, so the bracket cursor never backtracks.
        while i < n - 2 && t > x[i + 1] {
            i += 1;
        }
        let h = x[i + 1] - x[i];
        let a = (x[i + 1] - t) / h;
        let b = (t - x[i]) / h;
        let v = a * y[i]
            + b * y[i + 1]
            + ((a * a * a - a) * y2[i] + (b * b * b - b) * y2[i + 1]) * (h * h) / 6.0;
        times.push(t);
        values.push(round2(v.clamp(0.0, 1.0)));
        t += 1.0;
    }
    Ok(DenseSeries { times, values })
}

/// Second derivatives of the natural cubic spline through `(x, y)`, via the
/// standard one-pass tridiagonal recurrence with zero-curvature endpoints.
fn second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut y2 = vec![0.0; n];
    let mut u = vec![0.0; n];
    for i in 1..n - 1 {
        let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        u[i] = (6.0
            * ((y[i + 1] - y[i]) / (x[i + 1] - x[i]) - (y[i] - y[i - 1]) / (x[i] - x[i - 1]))
            / (x[i + 1] - x[i - 1])
            - sig * u[i - 1])
            / p;
    }
    for k in (0..n - 1).rev() {
        y2[k] = y2[k] * y2[k + 1] + u[k];
    }
    y2
}

fn validate(samples: &LoadSamples) -> Result<(), ResampleError> {
    if samples.times.len() != samples.values.len() {
        return Err(ResampleError::LengthMismatch {
            times: samples.times.len(),
            values: samples.values.len(),
        });
    }
    let n = samples.times.len();
    if n < 2 {
        return Err(ResampleError::TooFewSamples { len: n });
    }
    for i in 1..n {
        if samples.times[i] == samples.times[i - 1] {
            return Err(ResampleError::DuplicateTimestamp { index: i });
        }
        if samples.times[i] < samples.times[i - 1] {
            return Err(ResampleError::NonIncreasingTimes { index: i });
        }
    }
    Ok(())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
