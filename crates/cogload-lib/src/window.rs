use crate::series::{DenseSeries, LoadSamples};

/// Index of the first element `>= target` in an ascending slice.
pub fn lower_bound(sorted: &[f64], target: f64) -> usize {
    sorted.partition_point(|&v| v < target)
}

/// Index of the first element `> target` in an ascending slice.
pub fn upper_bound(sorted: &[f64], target: f64) -> usize {
    sorted.partition_point(|&v| v <= target)
}

impl LoadSamples {
    /// Sub-series whose times lie in `[start_s, end_s]`.
    pub fn window(&self, start_s: f64, end_s: f64) -> LoadSamples {
        let (lo, hi) = window_range(&self.times, start_s, end_s);
        LoadSamples {
            times: self.times[lo..hi].to_vec(),
            values: self.values[lo..hi].to_vec(),
        }
    }
}

impl DenseSeries {
    /// Sub-series whose times lie in `[start_s, end_s]`.
    pub fn window(&self, start_s: f64, end_s: f64) -> DenseSeries {
        let (lo, hi) = window_range(&self.times, start_s, end_s);
        DenseSeries {
            times: self.times[lo..hi].to_vec(),
            values: self.values[lo..hi].to_vec(),
        }
    }
}

fn window_range(times: &[f64], start_s: f64, end_s: f64) -> (usize, usize) {
    let lo = lower_bound(times, start_s);
    let hi = upper_bound(times, end_s).max(lo);
    (lo, hi)
}
