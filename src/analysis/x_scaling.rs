//! X-scaling mode: optical width estimate along the process direction.

use crate::config::FilterState;
use crate::constants::FORMAT_WIDTH_MM;
use crate::palette::color_for_index;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};

use super::support::distinct_positions_y;

/// Accepted band for width estimates, as multiples of the format width.
const OUTLIER_LOW: f64 = 0.25;
const OUTLIER_HIGH: f64 = 4.0;

/// Pixel-space spread between the leftmost and rightmost column of each
/// scan row, normalized by the final row's spread and scaled to the
/// physical format width. A drifting optical X scale shows up as a trend;
/// rows whose estimate falls outside `[0.25, 4] x` format width are
/// dropped as measurement outliers.
pub fn compute_x_scaling(records: &[CalibrationRecord], filter: &FilterState) -> GraphResult {
    let mut rows: Vec<(f64, f64)> = Vec::new();
    for y in distinct_positions_y(records) {
        let row: Vec<&CalibrationRecord> =
            records.iter().filter(|r| r.location_y == y).collect();
        let leftmost = row.iter().min_by(|a, b| a.location_x.total_cmp(&b.location_x));
        let rightmost = row.iter().max_by(|a, b| a.location_x.total_cmp(&b.location_x));
        if let (Some(left), Some(right)) = (leftmost, rightmost) {
            rows.push((y, right.pixel_x - left.pixel_x));
        }
    }

    let mut series = Vec::new();
    if let Some(&(_, last_spread)) = rows.last() {
        if last_spread != 0.0 {
            let mut x = Vec::new();
            let mut y = Vec::new();
            for (position, spread) in rows {
                let width = spread / last_spread * FORMAT_WIDTH_MM;
                if width < OUTLIER_LOW * FORMAT_WIDTH_MM || width > OUTLIER_HIGH * FORMAT_WIDTH_MM
                {
                    continue;
                }
                x.push(position);
                y.push(width);
            }
            series.push(Series::solid("Estimated width", x, y, color_for_index(0)));
        }
    }

    GraphResult::XScaling(SeriesGraph {
        title: "X scaling".to_string(),
        x_label: "Process position (mm)".to_string(),
        y_label: "Estimated format width (mm)".to_string(),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
