//! Histogram mode: pooled absolute station values with Gaussian overlay.

use crate::config::FilterState;
use crate::constants::{FIRST_STATION, LAST_STATION, SENTINEL_FAULT, SENTINEL_NO_READING};
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, HistogramGraph};
use crate::statistics::histogram;

/// Histogram of |station value| pooled across all six stations on the
/// active axis.
///
/// Besides the usual -1000/-2000 sentinels, exact zeros are excluded
/// here: in this pool a zero is a dropped-out sensor report, not a
/// perfectly registered measurement. No other mode shares that rule.
pub fn compute_histogram(records: &[CalibrationRecord], filter: &FilterState) -> GraphResult {
    let mut pool = Vec::new();
    for record in records {
        let values = match filter.axis {
            crate::config::Axis::X => &record.station_x,
            crate::config::Axis::Y => &record.station_y,
        };
        for &value in &values[FIRST_STATION..=LAST_STATION] {
            if value == SENTINEL_NO_READING || value == SENTINEL_FAULT || value == 0.0 {
                continue;
            }
            pool.push(value.abs());
        }
    }

    let graph = match histogram(&pool) {
        Some(data) => HistogramGraph {
            title: format!(
                "|{}| distribution - mean {:.2}, 2 std {:.2}",
                filter.axis.label(),
                data.mean,
                2.0 * data.std_dev
            ),
            x_label: format!("|{}| registration error", filter.axis.label()),
            y_label: "Density".to_string(),
            y_policy: filter.y_axis_policy(),
            bin_edges: data.bin_edges,
            densities: data.densities,
            gauss_x: data.gauss_x,
            gauss_y: data.gauss_y,
            mean: data.mean,
            std_dev: data.std_dev,
        },
        None => HistogramGraph {
            title: format!("|{}| distribution - no data", filter.axis.label()),
            x_label: format!("|{}| registration error", filter.axis.label()),
            y_label: "Density".to_string(),
            y_policy: filter.y_axis_policy(),
            bin_edges: Vec::new(),
            densities: Vec::new(),
            gauss_x: Vec::new(),
            gauss_y: Vec::new(),
            mean: f64::NAN,
            std_dev: f64::NAN,
        },
    };

    GraphResult::Histogram(graph)
}
