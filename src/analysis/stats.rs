//! Tabular statistics reports: percentile summary and per-station
//! offset/skew.

use crate::config::Axis;
use crate::constants::{FIRST_STATION, LAST_STATION};
use crate::record::CalibrationRecord;
use crate::result::{OffsetSkewRow, StatsRow};
use crate::statistics::{
    grouped_mean, linear_fit, percentile, station_value, SentinelPolicy,
};

/// Valid (non-sentinel) station values of one record on one axis.
fn valid_station_values(record: &CalibrationRecord, axis: Axis) -> Vec<f64> {
    (FIRST_STATION..=LAST_STATION)
        .map(|s| station_value(record, axis, s, SentinelPolicy::Exclude))
        .filter(|v| !v.is_nan())
        .collect()
}

/// Collapse one record's station values into a single "absolute CPR"
/// number: when all stations err in the same direction the worst
/// magnitude is the error; when they disagree the spread between the
/// extremes is what a print would actually show.
fn absolute_cpr(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if min >= 0.0 || max <= 0.0 {
        Some(values.iter().fold(0.0f64, |acc, v| acc.max(v.abs())))
    } else {
        Some(max - min)
    }
}

/// Round for display; NaN renders literally.
fn fmt_rounded(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{}", value.round() as i64)
    }
}

fn percentile_row(label: impl Into<String>, pool: &[f64]) -> StatsRow {
    if pool.is_empty() {
        return StatsRow {
            station: label.into(),
            pct_95: "NaN".to_string(),
            pct_99: "NaN".to_string(),
        };
    }
    StatsRow {
        station: label.into(),
        pct_95: fmt_rounded(percentile(pool, 95.0)),
        pct_99: fmt_rounded(percentile(pool, 99.0)),
    }
}

/// Percentile summary of the absolute CPR error.
///
/// Rows: the per-record maximum across both axes, each axis pooled
/// individually, then per-station per-axis percentiles of |value|. All
/// values rounded to the nearest integer for display; pools that end up
/// empty (all readings invalid) render as `"NaN"`.
pub fn compute_stats(records: &[CalibrationRecord]) -> Vec<StatsRow> {
    let mut pool_max = Vec::new();
    let mut pool_y = Vec::new();
    let mut pool_x = Vec::new();
    for record in records {
        let cpr_y = absolute_cpr(&valid_station_values(record, Axis::Y));
        let cpr_x = absolute_cpr(&valid_station_values(record, Axis::X));
        if let Some(v) = cpr_y {
            pool_y.push(v);
        }
        if let Some(v) = cpr_x {
            pool_x.push(v);
        }
        match (cpr_y, cpr_x) {
            (Some(y), Some(x)) => pool_max.push(y.max(x)),
            (Some(y), None) => pool_max.push(y),
            (None, Some(x)) => pool_max.push(x),
            (None, None) => {}
        }
    }

    let mut rows = vec![
        percentile_row("Max(X,Y)", &pool_max),
        percentile_row("Y", &pool_y),
        percentile_row("X", &pool_x),
    ];

    for station in FIRST_STATION..=LAST_STATION {
        for axis in [Axis::Y, Axis::X] {
            let pool: Vec<f64> = records
                .iter()
                .map(|r| station_value(r, axis, station, SentinelPolicy::Exclude))
                .filter(|v| !v.is_nan())
                .map(f64::abs)
                .collect();
            rows.push(percentile_row(
                format!("Station {station} {}", axis.label()),
                &pool,
            ));
        }
    }

    rows
}

/// Per-station mean offsets and skew slope.
///
/// Y/X offsets are the means of all valid readings on each axis, rounded
/// to the nearest integer. The skew slope is the least-squares slope of
/// the grouped-mean value across cross-process positions on the requested
/// axis, rendered with 3 decimals. Stations with no valid data render
/// `"NaN"`.
pub fn compute_offset_skew(records: &[CalibrationRecord], axis: Axis) -> Vec<OffsetSkewRow> {
    let mut rows = Vec::with_capacity(LAST_STATION);
    for station in FIRST_STATION..=LAST_STATION {
        let mean_of = |a: Axis| -> Option<f64> {
            let values: Vec<f64> = records
                .iter()
                .map(|r| station_value(r, a, station, SentinelPolicy::Exclude))
                .filter(|v| !v.is_nan())
                .collect();
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<f64>() / values.len() as f64)
            }
        };

        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| {
                (
                    r.location_x,
                    station_value(r, axis, station, SentinelPolicy::Exclude),
                )
            })
            .collect();
        let curve = grouped_mean(&points);
        let skew_slope = if curve.is_empty() {
            "NaN".to_string()
        } else {
            let (xs, ys): (Vec<f64>, Vec<f64>) = curve.into_iter().unzip();
            format!("{:.3}", linear_fit(&xs, &ys).slope)
        };

        rows.push(OffsetSkewRow {
            station: format!("Station {station}"),
            y_offset: mean_of(Axis::Y).map(fmt_rounded).unwrap_or_else(|| "NaN".to_string()),
            x_offset: mean_of(Axis::X).map(fmt_rounded).unwrap_or_else(|| "NaN".to_string()),
            skew_slope,
        });
    }
    rows
}
