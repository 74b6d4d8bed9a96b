//! One scan-point measurement and its field decoding rules.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::STATION_SLOTS;

/// Display format applied to calibration timestamps that parse cleanly.
const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single scan-point measurement.
///
/// Station arrays hold seven slots: slot 0 is the absolute reference and
/// always carries 0; slots 1..=6 are the six physical stations. A station
/// value of exactly -1000 or -2000 means the reading is invalid; see
/// [`crate::statistics::SentinelPolicy`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRecord {
    /// Machine serial number.
    pub machine_serial: i64,
    /// Iteration number within the calibration run.
    pub iteration_number: i64,
    /// Cycle number within the iteration.
    pub cycle_number: i64,
    /// Cross-process position in millimeters.
    pub location_x: f64,
    /// Process-direction position in millimeters.
    pub location_y: f64,
    /// Optical pixel-space X position.
    pub pixel_x: f64,
    /// Optical pixel-space Y position.
    pub pixel_y: f64,
    /// Per-station X-axis offsets; slot 0 is always 0.
    pub station_x: [f64; STATION_SLOTS],
    /// Per-station Y-axis offsets; slot 0 is always 0.
    pub station_y: [f64; STATION_SLOTS],
    /// Raw revolution categorical code as logged.
    pub revolution_code: String,
    /// Human-readable revolution label decoded from the code.
    pub revolution_label: String,
    /// Calibration run start time, display-formatted when parsable.
    pub calibration_start_time: String,
}

impl CalibrationRecord {
    /// Column position of this record: the truncated integer part of
    /// `location_x`.
    pub fn column(&self) -> i64 {
        self.location_x.trunc() as i64
    }
}

/// Decode a raw revolution code into its display label.
///
/// Unrecognized codes pass through unchanged so new firmware tags still
/// show up (and group) verbatim.
pub fn revolution_label(code: &str) -> String {
    match code {
        "RevolutionOneOnly" => "One Only".to_string(),
        "RevolutionFirstOfMany" => "First of Many".to_string(),
        "RevolutionLastOfMany" => "Last of Many".to_string(),
        "RevolutionMiddle" => "Middle of Many".to_string(),
        other => other.to_string(),
    }
}

/// Normalize a logged calibration timestamp into the display format.
///
/// Accepts ISO-8601 with a UTC offset (`2024-03-01T08:30:00+01:00`) or a
/// bare ISO timestamp (`2024-03-01T08:30:00.250`). Anything unparsable
/// passes through unchanged.
pub fn format_calibration_time(raw: &str) -> String {
    let trimmed = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(trimmed) {
        return with_offset.format(DISPLAY_TIME_FORMAT).to_string();
    }
    if let Ok(bare) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return bare.format(DISPLAY_TIME_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_revolution_codes_map_to_labels() {
        assert_eq!(revolution_label("RevolutionOneOnly"), "One Only");
        assert_eq!(revolution_label("RevolutionFirstOfMany"), "First of Many");
        assert_eq!(revolution_label("RevolutionLastOfMany"), "Last of Many");
        assert_eq!(revolution_label("RevolutionMiddle"), "Middle of Many");
    }

    #[test]
    fn unknown_revolution_code_passes_through() {
        assert_eq!(revolution_label("RevolutionBetaTag"), "RevolutionBetaTag");
    }

    #[test]
    fn offset_timestamp_is_reformatted() {
        assert_eq!(
            format_calibration_time("2024-03-01T08:30:00+01:00"),
            "2024-03-01 08:30:00"
        );
    }

    #[test]
    fn bare_timestamp_is_reformatted() {
        assert_eq!(
            format_calibration_time("2024-03-01T08:30:00.250"),
            "2024-03-01 08:30:00"
        );
    }

    #[test]
    fn unparsable_timestamp_passes_through() {
        assert_eq!(format_calibration_time("yesterday-ish"), "yesterday-ish");
    }
}
