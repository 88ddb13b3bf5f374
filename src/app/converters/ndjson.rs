use crate::app::converters::read_json_array;
use crate::core::{Result, Tool, ToolReport};
use async_trait::async_trait;
use std::fs;

/// JSON array → NDJSON: one compact JSON value per line, input order
/// preserved, one output line per array element.
pub struct JsonToNdjson {
    input: String,
    output: String,
}

impl JsonToNdjson {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[async_trait]
impl Tool for JsonToNdjson {
    fn name(&self) -> &str {
        "json_to_ndjson"
    }

    async fn execute(&self) -> Result<ToolReport> {
        let values = read_json_array(&self.input)?;

        let mut out = String::new();
        for value in &values {
            out.push_str(&serde_json::to_string(value)?);
            out.push('\n');
        }
        fs::write(&self.output, out)?;

        Ok(ToolReport::file_output(values.len() as u64, 0, &self.output))
    }
}
