use serde::{Deserialize, Serialize};

/// Sparse cognitive-load samples as produced by the analysis backend.
///
/// Times are seconds from the start of the video and are expected to be
/// strictly increasing. Values are nominally in `[0, 1]` but the backend does
/// not guarantee it; the resampler clamps on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSamples {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl LoadSamples {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// First and last sample time, or `None` when empty.
    pub fn span(&self) -> Option<(f64, f64)> {
        match (self.times.first(), self.times.last()) {
            (Some(&first), Some(&last)) => Some((first, last)),
            _ => None,
        }
    }

    /// Load level in effect at playback position `t` (sample-and-hold):
    /// the value of the last sample at or before `t`. Positions before the
    /// first sample report the first value.
    pub fn level_at(&self, t: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let mut index = 0;
        for i in (0..self.times.len()).rev() {
            if t >= self.times[i] {
                index = i;
                break;
            }
        }
        Some(self.values[index])
    }
}

/// Load series resampled onto a unit-step grid.
///
/// Times are `start + k` for consecutive `k`, so they are whole seconds
/// whenever the first sample time is integral. A fractional first sample
/// offsets the whole grid by the same fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseSeries {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
}

impl DenseSeries {
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
