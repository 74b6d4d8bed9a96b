//! Direct spectral amplitude summation over non-uniform samples.
//!
//! The scan positions are not evenly spaced, so an FFT does not apply.
//! Instead each test frequency is correlated against the signal directly:
//!
//! ```text
//! aS(f) = (2/n) * sum(s[i] * sin(2*pi*f*p[i]))
//! aC(f) = (2/n) * sum(s[i] * cos(2*pi*f*p[i]))
//! amplitude(f) = sqrt(aS^2 + aC^2)
//! ```
//!
//! O(samples x frequencies) by contract; the sweep is 1000 points and the
//! per-cycle grouped-mean signal is short, so this stays cheap.

use std::f64::consts::TAU;

use crate::constants::{FREQ_SWEEP_MAX, FREQ_SWEEP_MIN, FREQ_SWEEP_POINTS};

/// Sweep the fixed frequency band and return `(frequency, amplitude)`
/// pairs. Positions are in millimeters, frequencies in cycles per
/// millimeter. Empty input yields an empty sweep.
pub fn amplitude_sweep(positions: &[f64], signal: &[f64]) -> Vec<(f64, f64)> {
    let n = positions.len().min(signal.len());
    if n == 0 {
        return Vec::new();
    }

    let step = (FREQ_SWEEP_MAX - FREQ_SWEEP_MIN) / (FREQ_SWEEP_POINTS - 1) as f64;
    let norm = 2.0 / n as f64;

    let mut out = Vec::with_capacity(FREQ_SWEEP_POINTS);
    for k in 0..FREQ_SWEEP_POINTS {
        let freq = FREQ_SWEEP_MIN + step * k as f64;
        let mut a_sin = 0.0;
        let mut a_cos = 0.0;
        for i in 0..n {
            let phase = TAU * freq * positions[i];
            a_sin += signal[i] * phase.sin();
            a_cos += signal[i] * phase.cos();
        }
        a_sin *= norm;
        a_cos *= norm;
        out.push((freq, (a_sin * a_sin + a_cos * a_cos).sqrt()));
    }
    out
}
