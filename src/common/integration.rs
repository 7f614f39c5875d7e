//! Discrete integration over uniformly spaced stations.
//!
//! The cantilever boundary conditions used by the bending solver are expressed entirely through
//! `Anchor`: quantities which are known at the free tip are anchored at the end of the domain and
//! quantities which are known at the clamped root are anchored at the start.

use itertools::Itertools;

/// Where a cumulative integral is pinned to a known value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Shift the integral so that its first entry equals the given value.
    Start(f64),

    /// Shift the integral so that its last entry equals the given value.
    End(f64),
}

/// Compute the running sum of `values[j] * dx` for `j = 0..=i` at every index `i`, accumulating
/// from the first entry towards the last, and then shift the whole sequence by a constant so that
/// it satisfies the `anchor` condition.
///
/// This is a rectangle rule, not a trapezoid rule, so the truncation error shrinks linearly with
/// the station spacing. Non-finite inputs are carried through untouched, so a NaN or infinity in
/// `values` will show up in the result rather than being hidden.
///
/// # Arguments
///
/// * `values`: the integrand sampled at each station
/// * `dx`: the integration step
/// * `anchor`: the boundary condition the result must satisfy
///
/// returns: Vec<f64, Global>
///
/// # Examples
///
/// ```
/// use aerostruct::common::{cumulative_integral, Anchor};
/// let v = cumulative_integral(&[1.0, 1.0, 1.0], 0.5, Anchor::End(0.0));
/// assert_eq!(v, vec![-1.0, -0.5, 0.0]);
/// ```
pub fn cumulative_integral(values: &[f64], dx: f64, anchor: Anchor) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len());
    let mut total = 0.0;
    for v in values {
        total += v * dx;
        result.push(total);
    }

    let shift = match (anchor, result.first(), result.last()) {
        (Anchor::Start(value), Some(first), _) => value - first,
        (Anchor::End(value), _, Some(last)) => value - last,
        _ => return result,
    };

    result.iter_mut().for_each(|v| *v += shift);
    result
}

/// Integrate `y` over the (not necessarily uniform) stations `x` with the trapezoid rule. Only
/// the overlapping part of the two slices is used.
pub fn trapezoid(x: &[f64], y: &[f64]) -> f64 {
    x.iter()
        .zip(y.iter())
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| (x1 - x0) * (y0 + y1) * 0.5)
        .sum()
}
