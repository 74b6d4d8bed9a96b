//! Shared numeric primitives for the analysis engine.
//!
//! Every graph mode is built from the same small set of operations:
//! - Sentinel-aware station value/difference reads
//! - Grouped mean (collapse repeated scans at one position to one point)
//! - DC removal and causal rolling-mean smoothing
//! - Ordinary least squares and polynomial fits via normal equations
//! - Direct spectral amplitude summation over non-uniform samples
//! - Histogram binning with a Gaussian overlay
//! - Linear-interpolation percentiles
//!
//! All primitives are total: empty, all-NaN, or degenerate inputs produce
//! defined fallback values, never panics.

mod histogram;
mod percentile;
mod regression;
mod sentinel;
mod series;
mod spectrum;

pub use histogram::{histogram, HistogramData};
pub use percentile::percentile;
pub use regression::{linear_fit, poly_eval, poly_fit, LinearFit};
pub use sentinel::{station_difference, station_value, SentinelPolicy};
pub use series::{grouped_mean, remove_dc, rolling_mean};
pub use spectrum::amplitude_sweep;
