//! DFT mode: spectral amplitude sweep of the station-difference signal.

use crate::config::{FilterState, StationPair};
use crate::constants::MECHANICAL_SOURCES;
use crate::palette::{color_for_index, LineStyle, Rgba};
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, ReferenceMarker, Series, SeriesGraph};
use crate::statistics::{amplitude_sweep, grouped_mean, remove_dc, SentinelPolicy};

use super::support::{difference_points, distinct_cycles, split_xy};

/// Per-cycle amplitude spectrum of the DC-removed grouped-mean station
/// difference, computed by direct summation over the (non-uniform) scan
/// positions. Invalid readings are substituted with 1.0 instead of NaN —
/// a NaN anywhere in the sum would blank the entire spectrum, while a
/// unit sample only adds broadband noise.
pub fn compute_dft(
    records: &[CalibrationRecord],
    filter: &FilterState,
    pair: StationPair,
) -> GraphResult {
    let mut series = Vec::new();
    for (idx, cycle) in distinct_cycles(records).into_iter().enumerate() {
        let subset: Vec<CalibrationRecord> = records
            .iter()
            .filter(|r| r.cycle_number == cycle)
            .cloned()
            .collect();
        let points =
            difference_points(&subset, filter.axis, pair, SentinelPolicy::SubstituteUnit);
        let (positions, signal) = split_xy(grouped_mean(&points));
        let signal = remove_dc(&signal);
        let (freq, amplitude) = split_xy(amplitude_sweep(&positions, &signal));
        series.push(Series::solid(
            format!("Cycle {cycle}"),
            freq,
            amplitude,
            color_for_index(idx),
        ));
    }

    let markers = MECHANICAL_SOURCES
        .iter()
        .map(|&(name, freq)| ReferenceMarker {
            label: name.to_string(),
            position: freq,
            color: Rgba(0x9c, 0xa3, 0xaf, 0xff),
            style: LineStyle::Dashed,
        })
        .collect();

    GraphResult::Dft(SeriesGraph {
        title: format!("Spectrum {} ({})", pair.label(), filter.axis.label()),
        x_label: "Frequency (cycles/mm)".to_string(),
        y_label: "Amplitude".to_string(),
        y_policy: filter.y_axis_policy(),
        series,
        markers,
    })
}
