//! Fixed numeric constants shared across the store and the analysis engine.

/// Sentinel written by the scanner when a station produced no reading.
pub const SENTINEL_NO_READING: f64 = -1000.0;

/// Sentinel written by the scanner when a station reported a fault.
pub const SENTINEL_FAULT: f64 = -2000.0;

/// Number of station slots per record. Slot 0 is the absolute reference
/// and always carries 0; slots 1..=6 are the physical stations.
pub const STATION_SLOTS: usize = 7;

/// Index of the first physical measurement station.
pub const FIRST_STATION: usize = 1;

/// Index of the last physical measurement station.
pub const LAST_STATION: usize = 6;

/// Physical width of the print format in millimeters, used by the
/// X-scaling diagnostic to convert pixel spreads into width estimates.
pub const FORMAT_WIDTH_MM: f64 = 520.0;

/// Lower bound of the spectral sweep in cycles per millimeter.
pub const FREQ_SWEEP_MIN: f64 = 0.001;

/// Upper bound of the spectral sweep in cycles per millimeter.
pub const FREQ_SWEEP_MAX: f64 = 0.2;

/// Number of test frequencies in the spectral sweep.
pub const FREQ_SWEEP_POINTS: usize = 1000;

/// Number of equal-width bins in the station-value histogram.
pub const HISTOGRAM_BINS: usize = 100;

/// Number of evaluation points for the Gaussian overlay curve.
pub const GAUSSIAN_CURVE_POINTS: usize = 200;

/// Rotating mechanical sources whose rotation period shows up as a
/// periodic registration error. Each entry is `(name, cycles per mm)`,
/// i.e. the reciprocal of the component circumference.
pub const MECHANICAL_SOURCES: [(&str, f64); 5] = [
    ("Drum", 1.0 / 75.4),
    ("Charge roller", 1.0 / 44.0),
    ("Developer roller", 1.0 / 36.2),
    ("Transfer belt", 1.0 / 188.5),
    ("Fuser", 1.0 / 56.5),
];

/// Revolution buckets plotted by the revolutions mode. The "Middle of
/// Many" bucket is intentionally absent; it mirrors first/last closely
/// and only adds clutter.
pub const REVOLUTION_BUCKETS: [&str; 3] = ["One Only", "First of Many", "Last of Many"];
