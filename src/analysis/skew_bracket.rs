//! Skew-along-bracket mode: per-row line slope along the process
//! direction.

use crate::config::{FilterState, StationPair};
use crate::palette::color_for_index;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};
use crate::statistics::{linear_fit, station_difference, SentinelPolicy};

use super::support::{distinct_columns, distinct_positions_y};

/// For each process position with a complete set of columns, fit a line
/// to the station difference across the columns and plot its slope.
///
/// Only the single cycle equal to `cycle_from` is used — not the
/// `[cycle_from, cycle_to]` range every other mode honors. The legacy
/// tool behaves this way (quite possibly unintentionally) and downstream
/// diagnostics are calibrated against it, so the quirk is kept.
/// `records` must come from `apply_base_filters`.
pub fn compute_skew_along_bracket(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pair: StationPair,
) -> GraphResult {
    let slice: Vec<&CalibrationRecord> = records
        .iter()
        .filter(|r| r.cycle_number == filter.cycle_from)
        .collect();
    let owned: Vec<CalibrationRecord> = slice.iter().map(|r| (*r).clone()).collect();
    let expected_columns = distinct_columns(&owned).len();

    let mut x = Vec::new();
    let mut y = Vec::new();
    if expected_columns > 0 {
        for position in distinct_positions_y(&owned) {
            let row: Vec<&CalibrationRecord> = slice
                .iter()
                .copied()
                .filter(|r| r.location_y == position)
                .collect();
            // Incomplete rows would bias the fit toward whichever side
            // happened to scan; require the full column set.
            if row.len() != expected_columns {
                continue;
            }
            let mut xs = Vec::with_capacity(row.len());
            let mut ys = Vec::with_capacity(row.len());
            for record in row {
                let diff =
                    station_difference(record, filter.axis, pair, SentinelPolicy::Exclude);
                if diff.is_nan() {
                    continue;
                }
                xs.push(record.location_x);
                ys.push(diff);
            }
            let fit = linear_fit(&xs, &ys);
            x.push(position);
            y.push(fit.slope);
        }
    }

    let series = vec![Series::solid(
        format!("Slope {}", pair.label()),
        x,
        y,
        color_for_index(0),
    )];

    GraphResult::SkewAlongBracket(SeriesGraph {
        title: format!("Skew along bracket {} ({})", pair.label(), filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: "Slope".to_string(),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
