//! Small helpers shared by the graph modes.

use crate::config::{Axis, StationPair};
use crate::record::CalibrationRecord;
use crate::statistics::{station_difference, SentinelPolicy};

/// Derive `(location_y, test - reference)` points for one station pair.
pub(crate) fn difference_points(
    records: &[CalibrationRecord],
    axis: Axis,
    pair: StationPair,
    policy: SentinelPolicy,
) -> Vec<(f64, f64)> {
    records
        .iter()
        .map(|r| (r.location_y, station_difference(r, axis, pair, policy)))
        .collect()
}

/// Split `(x, y)` pairs into parallel arrays for a series payload.
pub(crate) fn split_xy(points: Vec<(f64, f64)>) -> (Vec<f64>, Vec<f64>) {
    points.into_iter().unzip()
}

/// Distinct cycle numbers present in the slice, ascending.
pub(crate) fn distinct_cycles(records: &[CalibrationRecord]) -> Vec<i64> {
    let mut cycles: Vec<i64> = records.iter().map(|r| r.cycle_number).collect();
    cycles.sort_unstable();
    cycles.dedup();
    cycles
}

/// Distinct column positions present in the slice, ascending.
pub(crate) fn distinct_columns(records: &[CalibrationRecord]) -> Vec<i64> {
    let mut columns: Vec<i64> = records.iter().map(|r| r.column()).collect();
    columns.sort_unstable();
    columns.dedup();
    columns
}

/// Distinct `location_y` positions present in the slice, ascending.
pub(crate) fn distinct_positions_y(records: &[CalibrationRecord]) -> Vec<f64> {
    let mut positions: Vec<f64> = records.iter().map(|r| r.location_y).collect();
    positions.sort_by(|a, b| a.total_cmp(b));
    positions.dedup();
    positions
}
