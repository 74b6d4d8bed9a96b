//! Analysis result types.
//!
//! [`GraphResult`] is a tagged union with one variant per graph mode, so a
//! renderer can match on the mode and never encounters half-filled
//! optional payloads. Three payload shapes exist: plain line series
//! ([`SeriesGraph`]), the fixed 2x3 skew grid ([`SkewGrid`]), and the
//! histogram ([`HistogramGraph`]). Statistics reports are flat rows of
//! pre-rendered strings.

use serde::{Deserialize, Serialize};

use crate::config::YAxisPolicy;
use crate::palette::{LineStyle, Rgba};

/// One named curve: paired x/y arrays plus rendering hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Legend label.
    pub name: String,
    /// X coordinates, ascending.
    pub x: Vec<f64>,
    /// Y values, same length as `x`.
    pub y: Vec<f64>,
    /// Stroke color.
    pub color: Rgba,
    /// Stroke style.
    pub style: LineStyle,
    /// Stroke width in points.
    pub stroke_width: f32,
}

impl Series {
    /// A solid line with default stroke width.
    pub fn solid(name: impl Into<String>, x: Vec<f64>, y: Vec<f64>, color: Rgba) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            color,
            style: LineStyle::Solid,
            stroke_width: 1.5,
        }
    }
}

/// A vertical reference marker (wavelength or frequency of a known
/// mechanical source) drawn behind the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceMarker {
    /// Label shown next to the marker.
    pub label: String,
    /// X position of the vertical line.
    pub position: f64,
    /// Line color.
    pub color: Rgba,
    /// Line style (markers are normally dashed).
    pub style: LineStyle,
}

/// Payload for all simple line-graph modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesGraph {
    /// Graph title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Y-axis display policy.
    pub y_policy: YAxisPolicy,
    /// Zero or more curves.
    pub series: Vec<Series>,
    /// Vertical reference markers, possibly empty.
    pub markers: Vec<ReferenceMarker>,
}

impl SeriesGraph {
    /// Whether the graph carries no data at all.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.x.is_empty())
    }
}

/// One cell of the skew grid: a scatter for one station plus fit overlays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewCell {
    /// Station index (1..=6).
    pub station: usize,
    /// Scatter x coordinates (cross-process positions).
    pub x: Vec<f64>,
    /// Scatter values.
    pub y: Vec<f64>,
    /// Fit overlays: linear skew line, optional bow polynomial.
    pub overlays: Vec<Series>,
}

/// Payload for the skew mode: a fixed 2x3 grid, one cell per station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkewGrid {
    /// Graph title.
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Y-axis display policy.
    pub y_policy: YAxisPolicy,
    /// Six cells, stations 1..=6 in order.
    pub cells: Vec<SkewCell>,
    /// Shared Y range across all cells (10% padded), when requested.
    pub shared_y_range: Option<(f64, f64)>,
}

/// Payload for the histogram mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramGraph {
    /// Graph title (embeds the computed mean and 2-sigma).
    pub title: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Y-axis display policy.
    pub y_policy: YAxisPolicy,
    /// Bin edges, length = bin count + 1. Empty when no samples survived
    /// sentinel filtering.
    pub bin_edges: Vec<f64>,
    /// Per-bin densities (count / (N * bin width)).
    pub densities: Vec<f64>,
    /// Gaussian overlay x coordinates.
    pub gauss_x: Vec<f64>,
    /// Gaussian overlay y values.
    pub gauss_y: Vec<f64>,
    /// Sample mean of the pooled values.
    pub mean: f64,
    /// Sample standard deviation of the pooled values.
    pub std_dev: f64,
}

/// Result of one graph computation, tagged by mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GraphResult {
    /// Station differences along the process direction.
    Colors(SeriesGraph),
    /// One curve per cross-process column.
    Columns(SeriesGraph),
    /// One curve per selected blanket cycle.
    BlanketCycles(SeriesGraph),
    /// Pixel-spread width estimate along the process direction.
    XScaling(SeriesGraph),
    /// Spectral amplitude sweep per cycle.
    Dft(SeriesGraph),
    /// Pooled station-value histogram with Gaussian overlay.
    Histogram(HistogramGraph),
    /// Raw station value per revolution bucket.
    Revolutions(SeriesGraph),
    /// Dropout counts per station along the process direction.
    MissingData(SeriesGraph),
    /// Per-station scatter with skew/bow fits.
    Skew(SkewGrid),
    /// Line slope across columns per process position.
    SkewAlongBracket(SeriesGraph),
}

impl GraphResult {
    /// Graph title, regardless of payload shape.
    pub fn title(&self) -> &str {
        match self {
            GraphResult::Colors(g)
            | GraphResult::Columns(g)
            | GraphResult::BlanketCycles(g)
            | GraphResult::XScaling(g)
            | GraphResult::Dft(g)
            | GraphResult::Revolutions(g)
            | GraphResult::MissingData(g)
            | GraphResult::SkewAlongBracket(g) => &g.title,
            GraphResult::Histogram(h) => &h.title,
            GraphResult::Skew(s) => &s.title,
        }
    }

    /// Whether the result carries no data (renderers show "no data"
    /// instead of an empty plot).
    pub fn is_empty(&self) -> bool {
        match self {
            GraphResult::Colors(g)
            | GraphResult::Columns(g)
            | GraphResult::BlanketCycles(g)
            | GraphResult::XScaling(g)
            | GraphResult::Dft(g)
            | GraphResult::Revolutions(g)
            | GraphResult::MissingData(g)
            | GraphResult::SkewAlongBracket(g) => g.is_empty(),
            GraphResult::Histogram(h) => h.bin_edges.is_empty(),
            GraphResult::Skew(s) => s.cells.iter().all(|c| c.x.is_empty()),
        }
    }
}

/// One row of the percentile statistics report.
///
/// Values are pre-rendered for display: rounded to the nearest integer,
/// with `"NaN"` standing in for quantities that could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRow {
    /// Station or aggregate label.
    pub station: String,
    /// 95th percentile.
    pub pct_95: String,
    /// 99th percentile.
    pub pct_99: String,
}

/// One row of the per-station offset/skew report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetSkewRow {
    /// Station label.
    pub station: String,
    /// Mean of all valid Y readings, rounded to the nearest integer.
    pub y_offset: String,
    /// Mean of all valid X readings, rounded to the nearest integer.
    pub x_offset: String,
    /// Slope of the grouped-mean value across columns, 3 decimals.
    pub skew_slope: String,
}
