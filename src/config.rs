//! Analysis request configuration.
//!
//! A [`FilterState`] is an immutable snapshot describing one analysis
//! request: which machine, which calibration run, which slice of the
//! cycle/column space, and how the resulting curves should be
//! post-processed (DC removal, smoothing, bow fitting) and displayed.

use serde::{Deserialize, Serialize};

/// Measurement axis selector.
///
/// `Y` is the process direction (paper travel), `X` the cross-process
/// direction. Every station records an offset on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Process direction.
    Y,
    /// Cross-process direction.
    X,
}

impl Axis {
    /// Short display label ("Y" / "X").
    pub fn label(&self) -> &'static str {
        match self {
            Axis::Y => "Y",
            Axis::X => "X",
        }
    }
}

/// A test/reference station selection for difference computations.
///
/// Station 0 is the absolute reference (always reads 0) and is only valid
/// on the reference side; the constructor rejects it as a test station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationPair {
    test: usize,
    reference: usize,
}

impl StationPair {
    /// Build a pair from a test station (1..=6) and a reference station
    /// (0..=6). Returns `None` for out-of-range stations or when the test
    /// station is 0.
    pub fn new(test: usize, reference: usize) -> Option<Self> {
        if (1..=6).contains(&test) && reference <= 6 {
            Some(Self { test, reference })
        } else {
            None
        }
    }

    /// Test station index (1..=6).
    pub fn test(&self) -> usize {
        self.test
    }

    /// Reference station index (0..=6). 0 means the absolute reference.
    pub fn reference(&self) -> usize {
        self.reference
    }

    /// Display label, e.g. `"S3 - S0"`.
    pub fn label(&self) -> String {
        format!("S{} - S{}", self.test, self.reference)
    }
}

/// Y-axis display policy carried by every graph result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum YAxisPolicy {
    /// Let the renderer fit the range to the data.
    Auto,
    /// Fixed range requested by the user.
    Manual {
        /// Lower bound.
        from: f64,
        /// Upper bound.
        to: f64,
    },
}

/// Immutable snapshot of one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterState {
    /// Machine serial number (required).
    pub machine_serial: i64,

    /// Calibration run timestamp; `None` or empty means any run.
    pub calibration_time: Option<String>,

    /// Revolution label; `None` or empty means any revolution.
    pub revolution: Option<String>,

    /// Iteration number (exact match).
    pub iteration: i64,

    /// Cycle range bound. `cycle_from`/`cycle_to` are order-independent;
    /// see [`FilterState::cycle_range`].
    pub cycle_from: i64,
    /// Other cycle range bound.
    pub cycle_to: i64,

    /// Column range bound (columns are truncated `location_x` values).
    pub column_from: i64,
    /// Other column range bound.
    pub column_to: i64,

    /// Which measurement axis to analyze.
    pub axis: Axis,

    /// Subtract the mean from each curve before plotting.
    pub remove_dc: bool,

    /// Let the renderer auto-range the Y axis.
    pub auto_y_axis: bool,

    /// Share one Y range across all six skew subplots.
    pub shared_y_axis: bool,

    /// Rolling-mean window; 1 disables smoothing.
    pub smoothing_window: usize,

    /// Degree of the bow (polynomial) overlay; below 2 disables it.
    pub bow_degree: usize,

    /// Manual Y-range lower bound (used when `auto_y_axis` is false).
    pub manual_y_from: f64,
    /// Manual Y-range upper bound.
    pub manual_y_to: f64,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            machine_serial: 0,
            calibration_time: None,
            revolution: None,
            iteration: 0,
            cycle_from: 0,
            cycle_to: 0,
            column_from: 0,
            column_to: 0,
            axis: Axis::Y,
            remove_dc: false,
            auto_y_axis: true,
            shared_y_axis: false,
            smoothing_window: 1,
            bow_degree: 0,
            manual_y_from: 0.0,
            manual_y_to: 0.0,
        }
    }
}

impl FilterState {
    /// Normalized inclusive cycle range `(min, max)`.
    pub fn cycle_range(&self) -> (i64, i64) {
        (
            self.cycle_from.min(self.cycle_to),
            self.cycle_from.max(self.cycle_to),
        )
    }

    /// Normalized inclusive column range `(min, max)`.
    pub fn column_range(&self) -> (i64, i64) {
        (
            self.column_from.min(self.column_to),
            self.column_from.max(self.column_to),
        )
    }

    /// Calibration time clause, with empty strings collapsed to `None`.
    pub fn calibration_time_clause(&self) -> Option<&str> {
        self.calibration_time.as_deref().filter(|t| !t.is_empty())
    }

    /// Revolution clause, with empty strings collapsed to `None`.
    pub fn revolution_clause(&self) -> Option<&str> {
        self.revolution.as_deref().filter(|r| !r.is_empty())
    }

    /// Y-axis display policy implied by this request.
    pub fn y_axis_policy(&self) -> YAxisPolicy {
        if self.auto_y_axis {
            YAxisPolicy::Auto
        } else {
            YAxisPolicy::Manual {
                from: self.manual_y_from,
                to: self.manual_y_to,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_pair_rejects_reference_as_test() {
        assert!(StationPair::new(0, 1).is_none());
        assert!(StationPair::new(7, 0).is_none());
        assert!(StationPair::new(1, 7).is_none());
        assert!(StationPair::new(1, 0).is_some());
        assert!(StationPair::new(6, 6).is_some());
    }

    #[test]
    fn ranges_normalize_order() {
        let filter = FilterState {
            cycle_from: 5,
            cycle_to: 2,
            column_from: 9,
            column_to: -1,
            ..FilterState::default()
        };
        assert_eq!(filter.cycle_range(), (2, 5));
        assert_eq!(filter.column_range(), (-1, 9));
    }

    #[test]
    fn empty_clauses_collapse_to_none() {
        let filter = FilterState {
            calibration_time: Some(String::new()),
            revolution: Some("One Only".to_string()),
            ..FilterState::default()
        };
        assert_eq!(filter.calibration_time_clause(), None);
        assert_eq!(filter.revolution_clause(), Some("One Only"));
    }
}
