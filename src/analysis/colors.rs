//! Colors mode: station differences along the process direction.

use crate::config::{FilterState, StationPair};
use crate::constants::MECHANICAL_SOURCES;
use crate::palette::{color_for_index, LineStyle, Rgba};
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, ReferenceMarker, Series, SeriesGraph};
use crate::statistics::{grouped_mean, remove_dc, rolling_mean, SentinelPolicy};

use super::support::{difference_points, split_xy};

/// Grouped-mean station difference vs process position, one series per
/// pair, with optional DC removal and rolling smoothing. Vertical markers
/// show the wavelength (1/f) of each known rotating mechanical source, so
/// a periodic error can be matched to its origin by eye.
pub fn compute_colors(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pairs: &[StationPair],
) -> GraphResult {
    let mut series = Vec::with_capacity(pairs.len());
    for (idx, &pair) in pairs.iter().enumerate() {
        let points = difference_points(records, filter.axis, pair, SentinelPolicy::Exclude);
        let (x, mut y) = split_xy(grouped_mean(&points));
        if filter.remove_dc {
            y = remove_dc(&y);
        }
        if filter.smoothing_window > 1 {
            y = rolling_mean(&y, filter.smoothing_window);
        }
        series.push(Series::solid(pair.label(), x, y, color_for_index(idx)));
    }

    let markers = MECHANICAL_SOURCES
        .iter()
        .map(|&(name, freq)| ReferenceMarker {
            label: name.to_string(),
            position: 1.0 / freq,
            color: Rgba(0x9c, 0xa3, 0xaf, 0xff),
            style: LineStyle::Dashed,
        })
        .collect();

    GraphResult::Colors(SeriesGraph {
        title: format!("Station differences ({})", filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: format!("{} registration error", filter.axis.label()),
        y_policy: filter.y_axis_policy(),
        series,
        markers,
    })
}
