//! Shared numerical building blocks for the wing and nacelle modules.

mod integration;

pub use integration::{Anchor, cumulative_integral, trapezoid};

/// Generate a vec of station values which are linearly spaced between `start` and `end` and which
/// have a count of `count`. The first value will be exactly `start` and the last value will be
/// exactly `end`, so the endpoints never pick up rounding drift from the step accumulation.
///
/// # Arguments
///
/// * `start`: the first station, inclusive
/// * `end`: the last station, inclusive
/// * `count`: the total number of evenly spaced stations, callers must ensure this is at least 2
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use aerostruct::common::linear_space;
/// let stations = linear_space(0.0, 1.0, 3);
/// assert_eq!(stations, vec![0.0, 0.5, 1.0]);
/// ```
pub fn linear_space(start: f64, end: f64, count: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(count);
    let step = (end - start) / (count - 1) as f64;
    for i in 0..count {
        result.push(start + i as f64 * step);
    }
    if let Some(last) = result.last_mut() {
        *last = end;
    }
    result
}

/// Returns the index and value of the first non-finite entry in `values`, if there is one.
pub fn first_non_finite(values: &[f64]) -> Option<(usize, f64)> {
    values
        .iter()
        .enumerate()
        .find(|(_, v)| !v.is_finite())
        .map(|(i, v)| (i, *v))
}
