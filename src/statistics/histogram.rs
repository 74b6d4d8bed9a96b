//! Histogram binning with a fitted Gaussian overlay.

use crate::constants::{GAUSSIAN_CURVE_POINTS, HISTOGRAM_BINS};

/// Binned histogram plus the Gaussian fitted to the same samples.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    /// Bin edges, `HISTOGRAM_BINS + 1` entries spanning [min, max].
    pub bin_edges: Vec<f64>,
    /// Per-bin density: count / (N * bin width).
    pub densities: Vec<f64>,
    /// Gaussian overlay x coordinates.
    pub gauss_x: Vec<f64>,
    /// Gaussian overlay y values.
    pub gauss_y: Vec<f64>,
    /// Sample mean.
    pub mean: f64,
    /// Sample standard deviation (n-1 denominator).
    pub std_dev: f64,
}

/// Bin pre-filtered samples into equal-width bins and fit a Gaussian.
///
/// The caller is responsible for sentinel filtering; this function treats
/// every sample as real data (NaNs are dropped defensively). Returns
/// `None` when no samples remain or when all samples are identical (zero
/// bin width).
pub fn histogram(samples: &[f64]) -> Option<HistogramData> {
    let values: Vec<f64> = samples.iter().copied().filter(|v| !v.is_nan()).collect();
    if values.is_empty() {
        return None;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= min {
        return None;
    }

    let width = (max - min) / HISTOGRAM_BINS as f64;
    let mut counts = vec![0usize; HISTOGRAM_BINS];
    for &v in &values {
        let mut bin = ((v - min) / width) as usize;
        if bin >= HISTOGRAM_BINS {
            bin = HISTOGRAM_BINS - 1; // v == max lands in the last bin
        }
        counts[bin] += 1;
    }

    let n = values.len() as f64;
    let densities: Vec<f64> = counts.iter().map(|&c| c as f64 / (n * width)).collect();
    let bin_edges: Vec<f64> = (0..=HISTOGRAM_BINS)
        .map(|i| min + width * i as f64)
        .collect();

    let mean = values.iter().sum::<f64>() / n;
    let std_dev = if values.len() > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean) * (v - mean)).sum();
        (ss / (n - 1.0)).sqrt()
    } else {
        0.0
    };

    let (gauss_x, gauss_y) = gaussian_curve(min, max, mean, std_dev);

    Some(HistogramData {
        bin_edges,
        densities,
        gauss_x,
        gauss_y,
        mean,
        std_dev,
    })
}

/// Evaluate the normal density at evenly spaced points across the data
/// range. A zero std yields a flat zero curve rather than a division.
fn gaussian_curve(min: f64, max: f64, mean: f64, std_dev: f64) -> (Vec<f64>, Vec<f64>) {
    let step = (max - min) / (GAUSSIAN_CURVE_POINTS - 1) as f64;
    let xs: Vec<f64> = (0..GAUSSIAN_CURVE_POINTS)
        .map(|i| min + step * i as f64)
        .collect();
    let ys: Vec<f64> = if std_dev > 0.0 {
        let norm = 1.0 / (std_dev * (2.0 * std::f64::consts::PI).sqrt());
        xs.iter()
            .map(|&x| {
                let z = (x - mean) / std_dev;
                norm * (-0.5 * z * z).exp()
            })
            .collect()
    } else {
        vec![0.0; GAUSSIAN_CURVE_POINTS]
    };
    (xs, ys)
}
