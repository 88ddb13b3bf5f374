use crate::app::converters::read_json_array;
use crate::core::{GeoPoint, Result, Tool, ToolReport};
use crate::utils::error::IngestError;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::fs;

const LATITUDE_FIELD: &str = "Latitude";
const LONGITUDE_FIELD: &str = "Longitude";

/// Replace string `Latitude`/`Longitude` fields ("48.85N", "2.35E") with a
/// signed decimal `location` field shaped for an Elasticsearch `geo_point`
/// mapping. Southern latitudes and western longitudes are negated.
pub struct GeoConvert {
    input: String,
    output: String,
}

impl GeoConvert {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Parse `"<number><hemisphere-letter>"`; the negative hemisphere flips the
/// sign. A bare number (no suffix) is taken as already signed.
fn parse_coordinate(raw: &str, positive: char, negative: char) -> Option<f64> {
    let trimmed = raw.trim();
    if let Some(prefix) = trimmed.strip_suffix(negative) {
        prefix.trim_end().parse::<f64>().ok().map(|v| -v)
    } else if let Some(prefix) = trimmed.strip_suffix(positive) {
        prefix.trim_end().parse().ok()
    } else {
        trimmed.parse().ok()
    }
}

fn take_coordinate(
    index: usize,
    data: &mut Map<String, Value>,
    field: &str,
    positive: char,
    negative: char,
) -> Result<f64> {
    let value = data
        .remove(field)
        .ok_or_else(|| IngestError::GeoFieldError {
            index,
            field: field.to_string(),
            reason: "is missing".to_string(),
        })?;

    let raw = value.as_str().ok_or_else(|| IngestError::GeoFieldError {
        index,
        field: field.to_string(),
        reason: format!("is not a string (got {})", value),
    })?;

    parse_coordinate(raw, positive, negative).ok_or_else(|| IngestError::GeoFieldError {
        index,
        field: field.to_string(),
        reason: format!("has no parseable numeric value ('{}')", raw),
    })
}

#[async_trait]
impl Tool for GeoConvert {
    fn name(&self) -> &str {
        "geo_convert"
    }

    async fn execute(&self) -> Result<ToolReport> {
        let mut values = read_json_array(&self.input)?;

        for (index, value) in values.iter_mut().enumerate() {
            let data = value
                .as_object_mut()
                .ok_or_else(|| IngestError::GeoFieldError {
                    index,
                    field: LATITUDE_FIELD.to_string(),
                    reason: "cannot be read (record is not a JSON object)".to_string(),
                })?;

            let lat = take_coordinate(index, data, LATITUDE_FIELD, 'N', 'S')?;
            let lon = take_coordinate(index, data, LONGITUDE_FIELD, 'E', 'W')?;
            let location = GeoPoint { lat, lon };

            // appended last, after the removed coordinate fields
            data.insert(
                "location".to_string(),
                json!({ "lat": location.lat, "lon": location.lon }),
            );
        }

        let json = serde_json::to_string_pretty(&values)?;
        fs::write(&self.output, json)?;

        Ok(ToolReport::file_output(values.len() as u64, 0, &self.output))
    }
}
