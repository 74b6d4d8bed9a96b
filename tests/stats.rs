//! Tests for the percentile and offset/skew statistics reports.

use regcal::{compute_offset_skew, compute_stats, Axis, CalibrationRecord};

fn record(loc_x: f64) -> CalibrationRecord {
    CalibrationRecord {
        machine_serial: 1,
        iteration_number: 0,
        cycle_number: 1,
        location_x: loc_x,
        location_y: 0.0,
        pixel_x: 0.0,
        pixel_y: 0.0,
        station_x: [0.0; 7],
        station_y: [0.0; 7],
        revolution_code: String::new(),
        revolution_label: String::new(),
        calibration_start_time: String::new(),
    }
}

#[test]
fn stats_report_has_fixed_row_layout() {
    let mut rec = record(0.0);
    rec.station_y = [0.0, 3.0, 5.0, 1.0, 2.0, 4.0, 2.0];
    rec.station_x = [0.0, -1.0, -2.0, -1.0, -3.0, -2.0, -1.0];
    let rows = compute_stats(&[rec]);

    // Max(X,Y), Y, X, then six stations x two axes.
    assert_eq!(rows.len(), 3 + 12);
    assert_eq!(rows[0].station, "Max(X,Y)");
    assert_eq!(rows[1].station, "Y");
    assert_eq!(rows[2].station, "X");
    assert_eq!(rows[3].station, "Station 1 Y");
    assert_eq!(rows[4].station, "Station 1 X");
    assert_eq!(rows[14].station, "Station 6 X");
}

#[test]
fn same_sign_record_uses_max_magnitude() {
    let mut rec = record(0.0);
    rec.station_y = [0.0, 3.0, 5.0, 1.0, 2.0, 4.0, 2.0];
    let rows = compute_stats(&[rec]);
    // All Y values positive: absolute CPR is the worst magnitude, 5.
    assert_eq!(rows[1].pct_95, "5");
    assert_eq!(rows[1].pct_99, "5");
}

#[test]
fn mixed_sign_record_uses_spread() {
    let mut rec = record(0.0);
    rec.station_y = [0.0, -2.0, 3.0, 1.0, 1.0, 1.0, 1.0];
    let rows = compute_stats(&[rec]);
    // Spread between extremes: 3 - (-2) = 5.
    assert_eq!(rows[1].pct_95, "5");
}

#[test]
fn sentinel_only_records_render_nan() {
    let mut rec = record(0.0);
    rec.station_y = [0.0, -1000.0, -1000.0, -2000.0, -1000.0, -2000.0, -1000.0];
    rec.station_x = [0.0, -1000.0, -1000.0, -1000.0, -1000.0, -1000.0, -1000.0];
    let rows = compute_stats(&[rec]);
    assert_eq!(rows[0].pct_95, "NaN");
    assert_eq!(rows[1].pct_95, "NaN");
    assert_eq!(rows[3].pct_95, "NaN");
}

#[test]
fn empty_input_renders_all_nan() {
    let rows = compute_stats(&[]);
    assert!(rows.iter().all(|r| r.pct_95 == "NaN" && r.pct_99 == "NaN"));
}

#[test]
fn max_row_combines_both_axes() {
    let mut rec = record(0.0);
    rec.station_y = [0.0, 2.0, 2.0, 2.0, 2.0, 2.0, 2.0];
    rec.station_x = [0.0, 7.0, 7.0, 7.0, 7.0, 7.0, 7.0];
    let rows = compute_stats(&[rec]);
    assert_eq!(rows[0].pct_95, "7");
    assert_eq!(rows[1].pct_95, "2");
    assert_eq!(rows[2].pct_95, "7");
}

#[test]
fn offset_skew_means_and_slope() {
    // Station 1 Y value climbs with location_x: slope 0.5.
    let mut records = Vec::new();
    for &x in &[0.0, 10.0, 20.0] {
        let mut rec = record(x);
        rec.station_y[1] = 0.5 * x;
        rec.station_x[1] = 4.0;
        records.push(rec);
    }
    let rows = compute_offset_skew(&records, Axis::Y);
    assert_eq!(rows.len(), 6);
    let station1 = &rows[0];
    assert_eq!(station1.station, "Station 1");
    // Mean of {0, 5, 10} = 5.
    assert_eq!(station1.y_offset, "5");
    assert_eq!(station1.x_offset, "4");
    assert_eq!(station1.skew_slope, "0.500");
}

#[test]
fn offset_skew_sentinels_are_excluded_from_means() {
    let mut a = record(0.0);
    a.station_y[1] = 10.0;
    let mut b = record(0.0);
    b.station_y[1] = -1000.0;
    let rows = compute_offset_skew(&[a, b], Axis::Y);
    // The sentinel does not drag the mean down.
    assert_eq!(rows[0].y_offset, "10");
}

#[test]
fn offset_skew_no_data_renders_nan() {
    let mut rec = record(0.0);
    rec.station_y[2] = -1000.0;
    rec.station_x[2] = -2000.0;
    let rows = compute_offset_skew(&[rec], Axis::Y);
    let station2 = &rows[1];
    assert_eq!(station2.y_offset, "NaN");
    assert_eq!(station2.x_offset, "NaN");
    // Grouped-mean curve for station 2 is empty on Y: slope unavailable.
    assert_eq!(station2.skew_slope, "NaN");
}
