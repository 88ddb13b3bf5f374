use crate::core::{Result, Tool, ToolReport};
use async_trait::async_trait;
use std::fs;

/// The trivial bulk action: index, no explicit id or routing.
pub const ACTION_LINE: &str = r#"{"index":{}}"#;

/// Rewrite an NDJSON file so every document line is preceded by the fixed
/// action line, producing a body the `_bulk` endpoint accepts. Document
/// lines are copied byte for byte; blank lines are dropped.
pub struct BulkPrepare {
    input: String,
    output: String,
}

impl BulkPrepare {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

#[async_trait]
impl Tool for BulkPrepare {
    fn name(&self) -> &str {
        "bulk_prepare"
    }

    async fn execute(&self) -> Result<ToolReport> {
        // Read everything before opening the output so input and output may
        // name the same path (in-place rewrite).
        let content = fs::read_to_string(&self.input)?;

        let mut out = String::with_capacity(content.len() * 2);
        let mut documents = 0u64;
        let mut skipped = 0u64;

        for line in content.lines() {
            if line.trim().is_empty() {
                skipped += 1;
                continue;
            }
            out.push_str(ACTION_LINE);
            out.push('\n');
            out.push_str(line);
            out.push('\n');
            documents += 1;
        }
        fs::write(&self.output, out)?;

        Ok(ToolReport::file_output(documents, skipped, &self.output))
    }
}
