use crate::core::{Result, Tool, ToolReport};
use crate::utils::monitor::SystemMonitor;
use std::time::Instant;

pub struct ToolEngine<T: Tool> {
    tool: T,
    monitor: SystemMonitor,
}

impl<T: Tool> ToolEngine<T> {
    pub fn new(tool: T) -> Self {
        Self::new_with_monitoring(tool, false)
    }

    pub fn new_with_monitoring(tool: T, monitor_enabled: bool) -> Self {
        Self {
            tool,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<ToolReport> {
        let start = Instant::now();
        tracing::info!("🚀 Starting {}...", self.tool.name());
        self.monitor.log_stats("Start");

        let report = self.tool.execute().await?;

        self.monitor.log_stats("Done");
        tracing::info!(
            "✅ {} finished in {:?} ({} documents, {} skipped, {} requests)",
            self.tool.name(),
            start.elapsed(),
            report.documents,
            report.skipped,
            report.requests
        );
        if let Some(output) = &report.output {
            tracing::info!("📁 Output saved to: {}", output);
        }
        self.monitor.log_final_stats();

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::IngestError;
    use async_trait::async_trait;

    struct FixedTool {
        fail: bool,
    }

    #[async_trait]
    impl Tool for FixedTool {
        fn name(&self) -> &str {
            "fixed-tool"
        }

        async fn execute(&self) -> Result<ToolReport> {
            if self.fail {
                Err(IngestError::NotAnArrayError {
                    path: "input.json".to_string(),
                })
            } else {
                Ok(ToolReport::file_output(3, 1, "out.json"))
            }
        }
    }

    #[tokio::test]
    async fn test_engine_passes_report_through() {
        let engine = ToolEngine::new(FixedTool { fail: false });
        let report = engine.run().await.unwrap();
        assert_eq!(report.documents, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.output.as_deref(), Some("out.json"));
    }

    #[tokio::test]
    async fn test_engine_propagates_tool_errors() {
        let engine = ToolEngine::new(FixedTool { fail: true });
        assert!(engine.run().await.is_err());
    }
}
