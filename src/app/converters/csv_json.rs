use crate::core::{Record, Result, Tool, ToolReport};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::fs;

/// CSV table → JSON array of records. Rows with a missing value in any
/// column are dropped, as are ragged rows whose field count differs from
/// the header. Field order follows column order.
pub struct CsvToJson {
    input: String,
    output: String,
}

impl CsvToJson {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Per-cell type inference: integer, then finite float, else string.
fn infer_cell(raw: &str) -> Value {
    if let Ok(i) = raw.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = raw.parse::<f64>() {
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::String(raw.to_string())
}

#[async_trait]
impl Tool for CsvToJson {
    fn name(&self) -> &str {
        "csv_to_json"
    }

    async fn execute(&self) -> Result<ToolReport> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.input)?;
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        let mut skipped = 0u64;

        for row in reader.records() {
            let row = row?;
            if row.len() != headers.len() || row.iter().any(|cell| cell.trim().is_empty()) {
                skipped += 1;
                continue;
            }

            let mut data = Map::new();
            for (name, cell) in headers.iter().zip(row.iter()) {
                data.insert(name.to_string(), infer_cell(cell));
            }
            records.push(Record::new(data));
        }

        if skipped > 0 {
            tracing::info!("🔍 Dropped {} incomplete rows", skipped);
        }

        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.output, json)?;

        Ok(ToolReport::file_output(
            records.len() as u64,
            skipped,
            &self.output,
        ))
    }
}
