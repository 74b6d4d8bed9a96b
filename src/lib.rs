//! # regcal
//!
//! Analysis engine for print-registration calibration measurements.
//!
//! A calibration run scans a test pattern and logs, per scan point, the
//! registration offset reported by six measurement stations (plus an
//! always-zero absolute reference, station 0). This crate ingests those
//! tabular records and computes the diagnostic views used to chase down
//! mechanical registration error:
//!
//! - Position/time series of station differences (colors, columns,
//!   blanket cycles, revolutions)
//! - Frequency spectra via direct summation over non-uniform samples
//! - Histograms, skew/bow fits, dropout maps, width-scaling estimates
//! - Percentile and offset/skew statistics tables
//!
//! ## Pipeline
//!
//! ```ignore
//! use regcal::{CalibrationStore, FilterState, StationPair, compute_colors};
//!
//! let store = CalibrationStore::parse(&raw_text)?;
//! let filter = FilterState {
//!     machine_serial: store.serials()[0],
//!     ..FilterState::default()
//! };
//! let records = store.apply_filters(&filter);
//! let pair = StationPair::new(1, 0).unwrap();
//! let graph = compute_colors(&records, &filter, &[pair]);
//! ```
//!
//! ## Sentinel semantics
//!
//! A station value of exactly -1000 or -2000 is an invalid reading and is
//! excluded from every aggregation (the DFT mode substitutes 1.0 instead;
//! the histogram additionally treats exact 0 as "no data"). See
//! [`statistics::SentinelPolicy`].
//!
//! ## Totality
//!
//! No analysis function panics or returns an error: empty filters,
//! all-sentinel data, and degenerate fits all produce empty or
//! zero-filled results a renderer can show as "no data". The single
//! fallible boundary is [`CalibrationStore::parse`] on input that is not
//! a calibration table at all.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod palette;
mod record;
mod result;
mod store;

// Functional modules
pub mod analysis;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{
    compute_blanket_cycles, compute_colors, compute_columns, compute_dft, compute_histogram,
    compute_missing_data, compute_offset_skew, compute_revolutions, compute_skew,
    compute_skew_along_bracket, compute_stats, compute_x_scaling,
};
pub use config::{Axis, FilterState, StationPair, YAxisPolicy};
pub use constants::{
    FORMAT_WIDTH_MM, FREQ_SWEEP_MAX, FREQ_SWEEP_MIN, FREQ_SWEEP_POINTS, MECHANICAL_SOURCES,
    SENTINEL_FAULT, SENTINEL_NO_READING,
};
pub use palette::{color_for_index, column_gradient, LineStyle, Rgba};
pub use record::CalibrationRecord;
pub use result::{
    GraphResult, HistogramGraph, OffsetSkewRow, ReferenceMarker, Series, SeriesGraph, SkewCell,
    SkewGrid, StatsRow,
};
pub use store::{CalibrationStore, StoreError};
