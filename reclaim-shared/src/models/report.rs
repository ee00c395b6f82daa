use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-stream metrics within an EPR report.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StreamMetrics {
    /// Collected weight for the stream, in kilograms.
    pub weight: f64,

    /// Fees attributed to the stream, in Rand.
    #[serde(default)]
    pub fees: f64,
}

/// Aggregate extended producer responsibility report.
///
/// Fetched read-only from `GET /api/epr-report` and replaced wholesale on
/// each fetch. Streams are keyed by stream name; `BTreeMap` keeps iteration
/// order deterministic regardless of backend JSON key order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EprReport {
    /// Share of suppliers that are WEEE compliant, in percent.
    pub compliance_pct: f64,

    /// Total EPR fees collected, in Rand.
    pub total_fees: f64,

    /// Metrics per waste stream.
    pub streams: BTreeMap<String, StreamMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_deserializes_backend_payload() {
        let json = r#"{
            "compliance_pct": 83.456,
            "total_fees": 1200.0,
            "streams": {
                "Lighting": {"weight": 30.0, "fees": 420.5},
                "Batteries": {"weight": 10.0, "fees": 101.25}
            }
        }"#;
        let report: EprReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.streams.len(), 2);
        assert_eq!(report.streams["Batteries"].weight, 10.0);
        assert_eq!(report.streams["Lighting"].fees, 420.5);
    }

    #[test]
    fn stream_iteration_order_is_name_sorted() {
        let json = r#"{
            "compliance_pct": 50.0,
            "total_fees": 0.0,
            "streams": {
                "Packaging": {"weight": 5.0},
                "Batteries": {"weight": 1.0},
                "Lighting": {"weight": 3.0}
            }
        }"#;
        let report: EprReport = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = report.streams.keys().map(String::as_str).collect();
        assert_eq!(names, ["Batteries", "Lighting", "Packaging"]);
    }

    #[test]
    fn stream_fees_default_to_zero() {
        let json = r#"{"weight": 2.5}"#;
        let metrics: StreamMetrics = serde_json::from_str(json).unwrap();
        assert_eq!(metrics.weight, 2.5);
        assert_eq!(metrics.fees, 0.0);
    }
}
