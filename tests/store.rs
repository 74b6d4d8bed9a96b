//! Ingestion and filtering tests for the calibration data store.

use regcal::{CalibrationStore, FilterState, StoreError};

const HEADER: &str = "MachineSerialNumber,IterationNumber,CycleNumber,ElementLocationX,ElementLocationY,PixelLocationX,PixelLocationY,Revolution,CalibrationStartTime,RegistrationDataStationX1,RegistrationDataStationX2,RegistrationDataStationX3,RegistrationDataStationX4,RegistrationDataStationX5,RegistrationDataStationX6,RegistrationDataStationY1,RegistrationDataStationY2,RegistrationDataStationY3,RegistrationDataStationY4,RegistrationDataStationY5,RegistrationDataStationY6";

/// One data row with the given leading fields and all station values set
/// to `station`.
fn row(
    serial: i64,
    iteration: i64,
    cycle: i64,
    loc_x: f64,
    loc_y: f64,
    revolution: &str,
    time: &str,
    station: f64,
) -> String {
    let stations = (0..12)
        .map(|_| station.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("{serial},{iteration},{cycle},{loc_x},{loc_y},0,0,{revolution},{time},{stations}")
}

fn sample_text() -> String {
    let mut text = String::from(HEADER);
    text.push('\n');
    for line in [
        row(77, 0, 1, 10.0, 0.0, "RevolutionOneOnly", "2024-03-01T08:30:00+01:00", 5.0),
        row(77, 0, 2, 20.0, 5.0, "RevolutionFirstOfMany", "2024-03-01T08:30:00+01:00", 6.0),
        row(77, 1, 3, 30.0, 10.0, "RevolutionLastOfMany", "2024-03-02T09:00:00+01:00", 7.0),
        row(88, 0, 1, 10.0, 0.0, "RevolutionMiddle", "2024-04-01T10:00:00+02:00", 8.0),
    ] {
        text.push_str(&line);
        text.push('\n');
    }
    text
}

#[test]
fn parses_well_formed_table() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    assert_eq!(store.len(), 4);

    let first = &store.records()[0];
    assert_eq!(first.machine_serial, 77);
    assert_eq!(first.cycle_number, 1);
    assert_eq!(first.location_x, 10.0);
    assert_eq!(first.station_x[0], 0.0);
    assert_eq!(first.station_x[1], 5.0);
    assert_eq!(first.station_y[6], 5.0);
    assert_eq!(first.revolution_code, "RevolutionOneOnly");
    assert_eq!(first.revolution_label, "One Only");
    assert_eq!(first.calibration_start_time, "2024-03-01 08:30:00");
}

#[test]
fn header_lookup_is_case_insensitive() {
    let lowered = sample_text().replacen(HEADER, &HEADER.to_lowercase(), 1);
    let store = CalibrationStore::parse(&lowered).unwrap();
    assert_eq!(store.len(), 4);
    assert_eq!(store.records()[0].machine_serial, 77);
}

#[test]
fn short_rows_are_skipped_silently() {
    let mut text = sample_text();
    text.push_str("77,0\n");
    let store = CalibrationStore::parse(&text).unwrap();
    assert_eq!(store.len(), 4);
}

#[test]
fn unparsable_numbers_default_to_zero() {
    let mut text = String::from(HEADER);
    text.push('\n');
    text.push_str(&row(77, 0, 1, 10.0, 0.0, "RevolutionOneOnly", "t", 1.0).replace("77,", "oops,"));
    text.push('\n');
    let store = CalibrationStore::parse(&text).unwrap();
    assert_eq!(store.records()[0].machine_serial, 0);
}

#[test]
fn bad_timestamp_passes_through() {
    let mut text = String::from(HEADER);
    text.push('\n');
    text.push_str(&row(1, 0, 1, 0.0, 0.0, "RevolutionOneOnly", "not-a-time", 1.0));
    let store = CalibrationStore::parse(&text).unwrap();
    assert_eq!(store.records()[0].calibration_start_time, "not-a-time");
}

#[test]
fn rejects_non_calibration_input() {
    assert!(matches!(
        CalibrationStore::parse("name,age\nbob,4\n"),
        Err(StoreError::NotCalibrationData)
    ));
    assert!(matches!(
        CalibrationStore::parse(""),
        Err(StoreError::MissingHeader)
    ));
}

#[test]
fn enumerations_are_distinct_and_sorted() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    assert_eq!(store.serials(), vec![77, 88]);
    assert_eq!(
        store.calibration_times(77),
        vec!["2024-03-01 08:30:00".to_string(), "2024-03-02 09:00:00".to_string()]
    );
    assert_eq!(store.iterations(77, None), vec![0, 1]);
    assert_eq!(store.cycles(77, None), vec![1, 2, 3]);
    assert_eq!(store.columns(77, None), vec![10, 20, 30]);
    assert_eq!(
        store.revolutions(77, Some("2024-03-01 08:30:00")),
        vec!["First of Many".to_string(), "One Only".to_string()]
    );
}

#[test]
fn filters_match_all_clauses() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    let filter = FilterState {
        machine_serial: 77,
        iteration: 0,
        cycle_from: 1,
        cycle_to: 2,
        column_from: 10,
        column_to: 20,
        ..FilterState::default()
    };
    let records = store.apply_filters(&filter);
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.machine_serial == 77));
}

#[test]
fn cycle_and_column_ranges_are_order_independent() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    let forward = FilterState {
        machine_serial: 77,
        iteration: 0,
        cycle_from: 1,
        cycle_to: 2,
        column_from: 10,
        column_to: 20,
        ..FilterState::default()
    };
    let reversed = FilterState {
        cycle_from: 2,
        cycle_to: 1,
        column_from: 20,
        column_to: 10,
        ..forward.clone()
    };
    assert_eq!(store.apply_filters(&forward), store.apply_filters(&reversed));
}

#[test]
fn base_filters_ignore_cycle_and_column_ranges() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    let filter = FilterState {
        machine_serial: 77,
        iteration: 0,
        cycle_from: 99,
        cycle_to: 99,
        column_from: 99,
        column_to: 99,
        ..FilterState::default()
    };
    assert!(store.apply_filters(&filter).is_empty());
    assert_eq!(store.apply_base_filters(&filter).len(), 2);
}

#[test]
fn revolution_and_time_clauses_restrict() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    let filter = FilterState {
        machine_serial: 77,
        iteration: 0,
        revolution: Some("One Only".to_string()),
        calibration_time: Some("2024-03-01 08:30:00".to_string()),
        cycle_from: 0,
        cycle_to: 100,
        column_from: 0,
        column_to: 100,
        ..FilterState::default()
    };
    let records = store.apply_filters(&filter);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].revolution_label, "One Only");
}

#[test]
fn unmatched_serial_yields_empty_set() {
    let store = CalibrationStore::parse(&sample_text()).unwrap();
    let filter = FilterState {
        machine_serial: 12345,
        cycle_from: 0,
        cycle_to: 100,
        column_from: 0,
        column_to: 100,
        ..FilterState::default()
    };
    assert!(store.apply_filters(&filter).is_empty());
}
