//! Blanket-cycles mode: one curve per selected blanket cycle.

use crate::config::{FilterState, StationPair};
use crate::palette::color_for_index;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};
use crate::statistics::{grouped_mean, SentinelPolicy};

use super::support::{difference_points, distinct_cycles, split_xy};

/// Grouped-mean station difference per caller-selected cycle.
///
/// `records` must come from `apply_base_filters`: cycle selection happens
/// here, not in the range filter. Requested cycles that do not occur in
/// the data are skipped rather than plotted empty.
pub fn compute_blanket_cycles(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pair: StationPair,
    cycles: &[i64],
) -> GraphResult {
    let present = distinct_cycles(records);

    let mut series = Vec::new();
    for &cycle in cycles {
        if !present.contains(&cycle) {
            continue;
        }
        let subset: Vec<CalibrationRecord> = records
            .iter()
            .filter(|r| r.cycle_number == cycle)
            .cloned()
            .collect();
        let points = difference_points(&subset, filter.axis, pair, SentinelPolicy::Exclude);
        let (x, y) = split_xy(grouped_mean(&points));
        let color = color_for_index(series.len());
        series.push(Series::solid(format!("Cycle {cycle}"), x, y, color));
    }

    GraphResult::BlanketCycles(SeriesGraph {
        title: format!("Blanket cycles {} ({})", pair.label(), filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: format!("{} registration error", filter.axis.label()),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
