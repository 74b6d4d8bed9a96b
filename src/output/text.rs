//! Plain-text table rendering for the statistics reports.

use crate::result::{OffsetSkewRow, StatsRow};

/// Render the percentile statistics report as an aligned text table.
pub fn format_stats(rows: &[StatsRow]) -> String {
    let mut out = String::new();
    let label_width = rows
        .iter()
        .map(|r| r.station.len())
        .max()
        .unwrap_or(0)
        .max("Station".len());

    out.push_str(&format!(
        "{:<width$}  {:>8}  {:>8}\n",
        "Station",
        "95th",
        "99th",
        width = label_width
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<width$}  {:>8}  {:>8}\n",
            row.station,
            row.pct_95,
            row.pct_99,
            width = label_width
        ));
    }
    out
}

/// Render the offset/skew report as an aligned text table.
pub fn format_offset_skew(rows: &[OffsetSkewRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<10}  {:>10}  {:>10}  {:>10}\n",
        "Station", "Y offset", "X offset", "Skew"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<10}  {:>10}  {:>10}  {:>10}\n",
            row.station, row.y_offset, row.x_offset, row.skew_slope
        ));
    }
    out
}
