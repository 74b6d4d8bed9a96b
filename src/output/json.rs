//! JSON serialization for analysis results.

use crate::result::{GraphResult, OffsetSkewRow, StatsRow};

/// Serialize a graph result to a compact JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `GraphResult`).
pub fn to_json(result: &GraphResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}

/// Serialize a graph result to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for
/// `GraphResult`).
pub fn to_json_pretty(result: &GraphResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

/// Serialize the percentile statistics report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn stats_to_json(rows: &[StatsRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string(rows)
}

/// Serialize the offset/skew report.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn offset_skew_to_json(rows: &[OffsetSkewRow]) -> Result<String, serde_json::Error> {
    serde_json::to_string(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::YAxisPolicy;
    use crate::result::{GraphResult, SeriesGraph};

    #[test]
    fn graph_result_round_trips() {
        let result = GraphResult::Colors(SeriesGraph {
            title: "Station differences (Y)".to_string(),
            x_label: "Process position (mm)".to_string(),
            y_label: "Y registration error".to_string(),
            y_policy: YAxisPolicy::Auto,
            series: Vec::new(),
            markers: Vec::new(),
        });
        let json = to_json(&result).unwrap();
        assert!(json.contains("Colors"));
        let back: GraphResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
