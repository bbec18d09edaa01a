//! Small statistics helpers.
//!
//! Percentiles use linear interpolation between closest ranks so that
//! p50 of [30, 60] is 45 and p90 is 57 — matching how the downstream
//! reporting tooling computes them.

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Linear-interpolated percentile over pre-sorted values.
///
/// `q` in [0, 1]; rank = (n − 1) · q, interpolating between the floor and
/// ceil ranks. Returns 0 for an empty slice.
pub fn percentile_linear(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let q = q.clamp(0.0, 1.0);
    let rank = (sorted.len() - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
    }
}
