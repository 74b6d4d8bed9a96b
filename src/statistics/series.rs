//! Curve-shaping primitives: grouped mean, DC removal, rolling smoothing.

/// Collapse repeated scans at the same physical position into one
/// averaged point per position.
///
/// Positions are compared by exact equality (repeated scans log the same
/// coordinate bit-for-bit). NaN values are excluded from a group's mean;
/// a group with no finite values is dropped entirely. Output is sorted
/// ascending by position.
pub fn grouped_mean(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut sorted: Vec<(f64, f64)> = points.to_vec();
    sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out = Vec::new();
    let mut i = 0;
    while i < sorted.len() {
        let position = sorted[i].0;
        let mut sum = 0.0;
        let mut count = 0usize;
        while i < sorted.len() && sorted[i].0 == position {
            if !sorted[i].1.is_nan() {
                sum += sorted[i].1;
                count += 1;
            }
            i += 1;
        }
        if count > 0 {
            out.push((position, sum / count as f64));
        }
    }
    out
}

/// Subtract the mean of the non-NaN samples from every sample.
///
/// NaN samples stay NaN. An empty or all-NaN input comes back unchanged.
pub fn remove_dc(values: &[f64]) -> Vec<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for &v in values {
        if !v.is_nan() {
            sum += v;
            count += 1;
        }
    }
    if count == 0 {
        return values.to_vec();
    }
    let mean = sum / count as f64;
    values.iter().map(|&v| v - mean).collect()
}

/// Causal rolling mean with a left-truncated window.
///
/// `out[i]` is the mean of the non-NaN values in `[max(0, i+1-w), i]` —
/// not a centered window, so the curve never looks ahead. A window whose
/// values are all NaN yields NaN. `window <= 1` is the identity.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    if window <= 1 {
        return values.to_vec();
    }
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let mut sum = 0.0;
        let mut count = 0usize;
        for &v in &values[start..=i] {
            if !v.is_nan() {
                sum += v;
                count += 1;
            }
        }
        out.push(if count > 0 { sum / count as f64 } else { f64::NAN });
    }
    out
}
