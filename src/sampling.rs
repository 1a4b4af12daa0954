//! Evenly spaced sampling and elementwise formula application.

use rayon::prelude::*;

use crate::constants::PARALLEL_SAMPLE_THRESHOLD;

/// Evenly spaced values from `start` to `end`, both inclusive.
///
/// `count == 1` collapses to `[start]`; `start == end` yields `count`
/// identical points. The last element is pinned to `end` so consumers see
/// the exact endpoint rather than an accumulated rounding of it.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    values[count - 1] = end;
    values
}

/// Apply a scalar formula elementwise over an ordered sequence.
///
/// Output order matches input order. Above `PARALLEL_SAMPLE_THRESHOLD`
/// points the map runs on the rayon pool; collection still preserves input
/// order.
pub fn map_samples<T, F>(xs: &[f64], f: F) -> Vec<T>
where
    T: Send,
    F: Fn(f64) -> T + Sync + Send,
{
    if xs.len() >= PARALLEL_SAMPLE_THRESHOLD {
        xs.par_iter().map(|&x| f(x)).collect()
    } else {
        xs.iter().map(|&x| f(x)).collect()
    }
}
