use crate::domain::model::ToolReport;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A single-purpose conversion or upload tool. Every binary wraps exactly
/// one `Tool` and runs it through the engine; tools never call each other.
#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;

    async fn execute(&self) -> Result<ToolReport>;
}
