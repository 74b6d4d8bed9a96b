//! Linear-interpolation percentiles.

/// Percentile of `values` at `p` (0..=100) with linear interpolation
/// between order statistics, computed over a sorted copy.
///
/// `p <= 0` returns the minimum, `p >= 100` the maximum, and an empty
/// input returns 0.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let frac = rank - rank.floor();
    if lower >= n - 1 {
        return sorted[n - 1];
    }
    sorted[lower] + frac * (sorted[lower + 1] - sorted[lower])
}
