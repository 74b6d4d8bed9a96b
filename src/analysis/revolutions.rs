//! Revolutions mode: raw station value split by revolution bucket.

use crate::config::{FilterState, StationPair};
use crate::constants::REVOLUTION_BUCKETS;
use crate::palette::color_for_index;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};
use crate::statistics::{grouped_mean, station_value, SentinelPolicy};

use super::support::split_xy;

/// Grouped-mean of the raw (not differenced) test-station value per
/// revolution bucket. Comparing "One Only" against first/last-of-many
/// separates startup transients from steady-state registration error.
pub fn compute_revolutions(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pair: StationPair,
) -> GraphResult {
    let mut series = Vec::with_capacity(REVOLUTION_BUCKETS.len());
    for (idx, bucket) in REVOLUTION_BUCKETS.iter().enumerate() {
        let points: Vec<(f64, f64)> = records
            .iter()
            .filter(|r| r.revolution_label == *bucket)
            .map(|r| {
                (
                    r.location_y,
                    station_value(r, filter.axis, pair.test(), SentinelPolicy::Exclude),
                )
            })
            .collect();
        let (x, y) = split_xy(grouped_mean(&points));
        series.push(Series::solid(bucket.to_string(), x, y, color_for_index(idx)));
    }

    GraphResult::Revolutions(SeriesGraph {
        title: format!("Revolutions S{} ({})", pair.test(), filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: format!("{} registration error", filter.axis.label()),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
