//! Columns mode: one curve per cross-process column.

use crate::config::{FilterState, StationPair};
use crate::palette::column_gradient;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};
use crate::statistics::{grouped_mean, SentinelPolicy};

use super::support::{difference_points, distinct_columns, split_xy};

/// Grouped-mean station difference vs process position, computed per
/// distinct column. Line color runs blue to pink in column order, which
/// makes a left-to-right drift across the format immediately visible.
pub fn compute_columns(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pair: StationPair,
) -> GraphResult {
    let columns = distinct_columns(records);

    let mut series = Vec::with_capacity(columns.len());
    for (idx, &column) in columns.iter().enumerate() {
        let subset: Vec<CalibrationRecord> = records
            .iter()
            .filter(|r| r.column() == column)
            .cloned()
            .collect();
        let points = difference_points(&subset, filter.axis, pair, SentinelPolicy::Exclude);
        let (x, y) = split_xy(grouped_mean(&points));
        series.push(Series::solid(
            format!("Column {column}"),
            x,
            y,
            column_gradient(idx, columns.len()),
        ));
    }

    GraphResult::Columns(SeriesGraph {
        title: format!("Per-column differences {} ({})", pair.label(), filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: format!("{} registration error", filter.axis.label()),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
