pub mod actions;
pub mod csv_json;
pub mod geo;
pub mod ndjson;

pub use actions::BulkPrepare;
pub use csv_json::CsvToJson;
pub use geo::GeoConvert;
pub use ndjson::JsonToNdjson;

use crate::utils::error::{IngestError, Result};
use serde_json::Value;

/// Load a whole input file as a JSON array. Anything else (object, scalar,
/// NDJSON) is an input-shape error naming the file.
pub(crate) fn read_json_array(path: &str) -> Result<Vec<Value>> {
    let content = std::fs::read_to_string(path)?;
    match serde_json::from_str(&content)? {
        Value::Array(values) => Ok(values),
        _ => Err(IngestError::NotAnArrayError {
            path: path.to_string(),
        }),
    }
}
