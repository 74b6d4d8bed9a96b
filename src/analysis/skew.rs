//! Skew mode: per-station scatter across columns with fit overlays.

use crate::config::FilterState;
use crate::constants::{FIRST_STATION, LAST_STATION};
use crate::palette::{color_for_index, LineStyle, Rgba};
use crate::record::CalibrationRecord;
use crate::result::{GraphResult, Series, SkewCell, SkewGrid};
use crate::statistics::{
    grouped_mean, linear_fit, poly_eval, poly_fit, station_value, SentinelPolicy,
};

use super::support::split_xy;

const SHARED_RANGE_PADDING: f64 = 0.10;

/// Fixed 2x3 grid, one cell per station: grouped-mean value vs
/// cross-process position, overlaid with the least-squares skew line and,
/// when `bow_degree >= 2`, a polynomial bow fit evaluated across the full
/// distinct-column range. With `shared_y_axis` set, one padded Y range is
/// computed across all six scatters so cells compare directly.
pub fn compute_skew(records: &[CalibrationRecord], filter: &FilterState) -> GraphResult {
    let mut column_positions: Vec<f64> = records.iter().map(|r| r.location_x).collect();
    column_positions.sort_by(|a, b| a.total_cmp(b));
    column_positions.dedup();

    let mut cells = Vec::with_capacity(LAST_STATION);
    for station in FIRST_STATION..=LAST_STATION {
        let points: Vec<(f64, f64)> = records
            .iter()
            .map(|r| {
                (
                    r.location_x,
                    station_value(r, filter.axis, station, SentinelPolicy::Exclude),
                )
            })
            .collect();
        let (x, y) = split_xy(grouped_mean(&points));

        let mut overlays = Vec::new();
        if !x.is_empty() {
            let fit = linear_fit(&x, &y);
            let x_min = x[0];
            let x_max = x[x.len() - 1];
            overlays.push(Series {
                name: "Skew".to_string(),
                x: vec![x_min, x_max],
                y: vec![fit.eval(x_min), fit.eval(x_max)],
                color: color_for_index(1),
                style: LineStyle::Dashed,
                stroke_width: 1.0,
            });

            if filter.bow_degree >= 2 {
                let coefficients = poly_fit(&x, &y, filter.bow_degree);
                let bow_y: Vec<f64> = column_positions
                    .iter()
                    .map(|&cx| poly_eval(&coefficients, cx))
                    .collect();
                overlays.push(Series {
                    name: format!("Bow (deg {})", filter.bow_degree),
                    x: column_positions.clone(),
                    y: bow_y,
                    color: Rgba(0x10, 0xb9, 0x81, 0xff),
                    style: LineStyle::Dotted,
                    stroke_width: 1.0,
                });
            }
        }

        cells.push(SkewCell { station, x, y, overlays });
    }

    let shared_y_range = if filter.shared_y_axis {
        shared_range(&cells)
    } else {
        None
    };

    GraphResult::Skew(SkewGrid {
        title: format!("Skew ({})", filter.axis.label()),
        x_label: "Cross-process position (mm)".to_string(),
        y_label: format!("{} registration error", filter.axis.label()),
        y_policy: filter.y_axis_policy(),
        cells,
        shared_y_range,
    })
}

/// Min/max across every cell's scatter values, padded by 10% of the span.
fn shared_range(cells: &[SkewCell]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for cell in cells {
        for &v in &cell.y {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        return None;
    }
    let pad = (max - min) * SHARED_RANGE_PADDING;
    Some((min - pad, max + pad))
}
