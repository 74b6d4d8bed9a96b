//! Missing-data mode: sensor dropout counts per station.

use crate::config::{Axis, FilterState};
use crate::constants::{FIRST_STATION, LAST_STATION, SENTINEL_NO_READING};
use crate::palette::color_for_index;
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SeriesGraph};

use super::support::distinct_positions_y;

/// Count of exactly-(-1000) readings per station, grouped by process
/// position. This diagnoses *where* a station stops reading, independent
/// of the values it reads elsewhere; -2000 faults are a different failure
/// and are deliberately not counted here.
pub fn compute_missing_data(records: &[CalibrationRecord], filter: &FilterState) -> GraphResult {
    let positions = distinct_positions_y(records);

    let mut series = Vec::with_capacity(LAST_STATION);
    for station in FIRST_STATION..=LAST_STATION {
        let counts: Vec<f64> = positions
            .iter()
            .map(|&y| {
                records
                    .iter()
                    .filter(|r| r.location_y == y)
                    .filter(|r| {
                        let value = match filter.axis {
                            Axis::X => r.station_x[station],
                            Axis::Y => r.station_y[station],
                        };
                        value == SENTINEL_NO_READING
                    })
                    .count() as f64
            })
            .collect();
        series.push(Series::solid(
            format!("Station {station}"),
            positions.clone(),
            counts,
            color_for_index(station - FIRST_STATION),
        ));
    }

    // A fully-empty record slice means no positions, hence empty series.
    GraphResult::MissingData(SeriesGraph {
        title: format!("Missing readings ({})", filter.axis.label()),
        x_label: "Process position (mm)".to_string(),
        y_label: "Dropout count".to_string(),
        y_policy: filter.y_axis_policy(),
        series,
        markers: Vec::new(),
    })
}
