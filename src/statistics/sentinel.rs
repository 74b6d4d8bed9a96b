//! Sentinel-aware station reads.
//!
//! Stations report exactly -1000 (no reading) or -2000 (fault) in place of
//! a real offset. How an invalid reading propagates is mode-specific, so
//! the policy is an explicit parameter rather than a magic number buried
//! in each primitive.

use crate::config::{Axis, StationPair};
use crate::constants::{SENTINEL_FAULT, SENTINEL_NO_READING};
use crate::record::CalibrationRecord;

/// What an invalid station reading turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelPolicy {
    /// Invalid readings become NaN and are excluded from aggregation.
    /// This is the rule everywhere except the spectral sweep.
    Exclude,
    /// Invalid readings are substituted with 1.0. Used only by the DFT
    /// mode, where a NaN would poison the whole spectral sum.
    SubstituteUnit,
}

impl SentinelPolicy {
    /// Apply the policy to one raw station reading.
    pub fn apply(&self, value: f64) -> f64 {
        if value == SENTINEL_NO_READING || value == SENTINEL_FAULT {
            match self {
                SentinelPolicy::Exclude => f64::NAN,
                SentinelPolicy::SubstituteUnit => 1.0,
            }
        } else {
            value
        }
    }
}

/// Read one station's offset on one axis, sentinel-filtered per `policy`.
pub fn station_value(
    record: &CalibrationRecord,
    axis: Axis,
    station: usize,
    policy: SentinelPolicy,
) -> f64 {
    let raw = match axis {
        Axis::X => record.station_x[station],
        Axis::Y => record.station_y[station],
    };
    policy.apply(raw)
}

/// Test-minus-reference station difference on one axis.
///
/// NaN (or 1.0 under [`SentinelPolicy::SubstituteUnit`]) propagates from
/// either side before the subtraction.
pub fn station_difference(
    record: &CalibrationRecord,
    axis: Axis,
    pair: StationPair,
    policy: SentinelPolicy,
) -> f64 {
    station_value(record, axis, pair.test(), policy)
        - station_value(record, axis, pair.reference(), policy)
}
