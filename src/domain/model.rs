use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row/document: field name → JSON value. Backed by `serde_json::Map`
/// with `preserve_order` so written files keep the source field order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    pub fn new(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

/// Signed decimal coordinates in the shape Elasticsearch expects for
/// a `geo_point` field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Outcome of one tool run. Nothing is persisted across runs; this is
/// what gets reported to the user at the end.
#[derive(Debug, Clone, Default)]
pub struct ToolReport {
    /// Documents written to the output file or indexed into Elasticsearch.
    pub documents: u64,
    /// Input rows dropped (missing values, ragged rows, blank lines).
    pub skipped: u64,
    /// HTTP requests issued (converters leave this at 0).
    pub requests: u64,
    /// Output location, when the tool writes a file.
    pub output: Option<String>,
}

impl ToolReport {
    pub fn file_output(documents: u64, skipped: u64, output: impl Into<String>) -> Self {
        Self {
            documents,
            skipped,
            requests: 0,
            output: Some(output.into()),
        }
    }

    pub fn upload(documents: u64, requests: u64) -> Self {
        Self {
            documents,
            skipped: 0,
            requests,
            output: None,
        }
    }
}
