//! Calibration data store: ingestion, dimension enumeration, filtering.
//!
//! The store owns the full record set for one loaded log. Ingestion is
//! deliberately forgiving: malformed rows are skipped, unparsable numeric
//! fields default to 0, unparsable timestamps pass through as raw text.
//! The only hard failure is input that cannot be a calibration table at
//! all (no header, or a header naming none of the known columns).

use std::collections::{BTreeSet, HashMap};

use log::{debug, warn};
use thiserror::Error;

use crate::config::FilterState;
use crate::record::{format_calibration_time, revolution_label, CalibrationRecord};

/// Ingestion failure. Per-row problems never surface here; only input
/// that cannot be parsed as a calibration table at all.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The input has no header line.
    #[error("calibration data has no header row")]
    MissingHeader,
    /// The header names none of the known calibration columns.
    #[error("header does not describe calibration data")]
    NotCalibrationData,
}

/// Fixed case-insensitive header rename table. Keys are lower-cased raw
/// header tokens; values are the canonical column names the store indexes
/// by. Tokens not listed here pass through verbatim.
const HEADER_RENAMES: [(&str, &str); 21] = [
    ("machineserialnumber", "MachineSerialNumber"),
    ("iterationnumber", "IterationNumber"),
    ("cyclenumber", "CycleNumber"),
    ("elementlocationx", "ElementLocationX"),
    ("elementlocationy", "ElementLocationY"),
    ("pixellocationx", "PixelLocationX"),
    ("pixellocationy", "PixelLocationY"),
    ("revolution", "Revolution"),
    ("calibrationstarttime", "CalibrationStartTime"),
    ("registrationdatastationx1", "RegistrationDataStationX1"),
    ("registrationdatastationx2", "RegistrationDataStationX2"),
    ("registrationdatastationx3", "RegistrationDataStationX3"),
    ("registrationdatastationx4", "RegistrationDataStationX4"),
    ("registrationdatastationx5", "RegistrationDataStationX5"),
    ("registrationdatastationx6", "RegistrationDataStationX6"),
    ("registrationdatastationy1", "RegistrationDataStationY1"),
    ("registrationdatastationy2", "RegistrationDataStationY2"),
    ("registrationdatastationy3", "RegistrationDataStationY3"),
    ("registrationdatastationy4", "RegistrationDataStationY4"),
    ("registrationdatastationy5", "RegistrationDataStationY5"),
    ("registrationdatastationy6", "RegistrationDataStationY6"),
];

/// Canonicalize one raw header token.
fn rename_header(token: &str) -> String {
    let lowered = token.to_ascii_lowercase();
    for (raw, canonical) in HEADER_RENAMES {
        if lowered == raw {
            return canonical.to_string();
        }
    }
    token.to_string()
}

/// Trim whitespace and strip one layer of surrounding quotes.
fn clean(token: &str) -> &str {
    token.trim().trim_matches(|c| c == '"' || c == '\'').trim()
}

/// Tolerant float parse; anything unparsable becomes 0.
fn parse_f64(token: &str) -> f64 {
    clean(token).parse::<f64>().unwrap_or(0.0)
}

/// Tolerant integer parse; falls back to truncating a float, then 0.
fn parse_i64(token: &str) -> i64 {
    let cleaned = clean(token);
    cleaned
        .parse::<i64>()
        .unwrap_or_else(|_| cleaned.parse::<f64>().map(|v| v.trunc() as i64).unwrap_or(0))
}

/// In-memory store of calibration records for one loaded log.
#[derive(Debug, Clone, Default)]
pub struct CalibrationStore {
    records: Vec<CalibrationRecord>,
}

impl CalibrationStore {
    /// Parse a delimited calibration table (header line plus data rows).
    ///
    /// # Errors
    ///
    /// Fails only when the input cannot be a calibration table at all:
    /// no header line, or a header naming none of the known columns.
    /// Row-level problems degrade silently (skip / zero-fill).
    pub fn parse(text: &str) -> Result<Self, StoreError> {
        let mut lines = text.lines();
        let header_line = lines.next().ok_or(StoreError::MissingHeader)?;

        let columns: HashMap<String, usize> = header_line
            .split(',')
            .enumerate()
            .map(|(i, token)| (rename_header(clean(token)), i))
            .collect();
        let width = header_line.split(',').count();

        let known = HEADER_RENAMES
            .iter()
            .filter(|(_, canonical)| columns.contains_key(*canonical))
            .count();
        if known == 0 {
            return Err(StoreError::NotCalibrationData);
        }

        let field = |tokens: &[&str], name: &str| -> Option<String> {
            columns
                .get(name)
                .and_then(|&i| tokens.get(i))
                .map(|t| clean(t).to_string())
        };

        let mut records = Vec::new();
        let mut skipped = 0usize;
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split(',').collect();
            if tokens.len() < width {
                skipped += 1;
                continue;
            }

            let mut station_x = [0.0; 7];
            let mut station_y = [0.0; 7];
            for slot in 1..=6 {
                if let Some(v) = field(&tokens, &format!("RegistrationDataStationX{slot}")) {
                    station_x[slot] = parse_f64(&v);
                }
                if let Some(v) = field(&tokens, &format!("RegistrationDataStationY{slot}")) {
                    station_y[slot] = parse_f64(&v);
                }
            }

            let revolution_code = field(&tokens, "Revolution").unwrap_or_default();
            let raw_time = field(&tokens, "CalibrationStartTime").unwrap_or_default();

            records.push(CalibrationRecord {
                machine_serial: field(&tokens, "MachineSerialNumber")
                    .map(|v| parse_i64(&v))
                    .unwrap_or(0),
                iteration_number: field(&tokens, "IterationNumber")
                    .map(|v| parse_i64(&v))
                    .unwrap_or(0),
                cycle_number: field(&tokens, "CycleNumber")
                    .map(|v| parse_i64(&v))
                    .unwrap_or(0),
                location_x: field(&tokens, "ElementLocationX")
                    .map(|v| parse_f64(&v))
                    .unwrap_or(0.0),
                location_y: field(&tokens, "ElementLocationY")
                    .map(|v| parse_f64(&v))
                    .unwrap_or(0.0),
                pixel_x: field(&tokens, "PixelLocationX")
                    .map(|v| parse_f64(&v))
                    .unwrap_or(0.0),
                pixel_y: field(&tokens, "PixelLocationY")
                    .map(|v| parse_f64(&v))
                    .unwrap_or(0.0),
                station_x,
                station_y,
                revolution_label: revolution_label(&revolution_code),
                revolution_code,
                calibration_start_time: format_calibration_time(&raw_time),
            });
        }

        if skipped > 0 {
            debug!("skipped {skipped} malformed calibration rows");
        }
        if records.is_empty() && text.lines().count() > 1 {
            warn!("calibration load produced no records from a non-empty body");
        }

        Ok(Self { records })
    }

    /// All loaded records in file order.
    pub fn records(&self) -> &[CalibrationRecord] {
        &self.records
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct machine serials, ascending.
    pub fn serials(&self) -> Vec<i64> {
        let set: BTreeSet<i64> = self.records.iter().map(|r| r.machine_serial).collect();
        set.into_iter().collect()
    }

    fn scoped<'a>(
        &'a self,
        serial: i64,
        time: Option<&'a str>,
    ) -> impl Iterator<Item = &'a CalibrationRecord> {
        let time = time.filter(|t| !t.is_empty());
        self.records.iter().filter(move |r| {
            r.machine_serial == serial
                && time.map_or(true, |t| r.calibration_start_time == t)
        })
    }

    /// Distinct calibration run timestamps for one machine, ascending.
    pub fn calibration_times(&self, serial: i64) -> Vec<String> {
        let set: BTreeSet<String> = self
            .scoped(serial, None)
            .map(|r| r.calibration_start_time.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Distinct revolution labels for one machine/run, ascending.
    pub fn revolutions(&self, serial: i64, time: Option<&str>) -> Vec<String> {
        let set: BTreeSet<String> = self
            .scoped(serial, time)
            .map(|r| r.revolution_label.clone())
            .collect();
        set.into_iter().collect()
    }

    /// Distinct iteration numbers for one machine/run, ascending.
    pub fn iterations(&self, serial: i64, time: Option<&str>) -> Vec<i64> {
        let set: BTreeSet<i64> = self.scoped(serial, time).map(|r| r.iteration_number).collect();
        set.into_iter().collect()
    }

    /// Distinct cycle numbers for one machine/run, ascending.
    pub fn cycles(&self, serial: i64, time: Option<&str>) -> Vec<i64> {
        let set: BTreeSet<i64> = self.scoped(serial, time).map(|r| r.cycle_number).collect();
        set.into_iter().collect()
    }

    /// Distinct column positions (truncated `location_x`) for one
    /// machine/run, ascending.
    pub fn columns(&self, serial: i64, time: Option<&str>) -> Vec<i64> {
        let set: BTreeSet<i64> = self.scoped(serial, time).map(|r| r.column()).collect();
        set.into_iter().collect()
    }

    /// Records matching every clause of the filter, including the cycle
    /// and column ranges. Returns a fresh owned vector.
    pub fn apply_filters(&self, filter: &FilterState) -> Vec<CalibrationRecord> {
        let (cycle_min, cycle_max) = filter.cycle_range();
        let (col_min, col_max) = filter.column_range();
        self.base_matches(filter)
            .filter(|r| r.cycle_number >= cycle_min && r.cycle_number <= cycle_max)
            .filter(|r| {
                let col = r.column();
                col >= col_min && col <= col_max
            })
            .cloned()
            .collect()
    }

    /// Records matching the filter *without* the cycle/column range
    /// clauses. Modes that slice the cycle or column space themselves
    /// (blanket cycles, skew-along-bracket) start from this set.
    pub fn apply_base_filters(&self, filter: &FilterState) -> Vec<CalibrationRecord> {
        self.base_matches(filter).cloned().collect()
    }

    fn base_matches<'a>(
        &'a self,
        filter: &'a FilterState,
    ) -> impl Iterator<Item = &'a CalibrationRecord> {
        self.records.iter().filter(move |r| {
            r.machine_serial == filter.machine_serial
                && filter
                    .calibration_time_clause()
                    .map_or(true, |t| r.calibration_start_time == t)
                && filter
                    .revolution_clause()
                    .map_or(true, |rev| r.revolution_label == rev)
                && r.iteration_number == filter.iteration
        })
    }
}
