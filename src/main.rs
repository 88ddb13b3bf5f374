use clap::Parser;
use es_ingest::utils::{logger, validation::Validate};
use es_ingest::{BulkConfig, BulkUploader, ToolEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = BulkConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting es-ingest bulk uploader");
    if config.verbose {
        tracing::debug!("Config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if config.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let monitor_enabled = config.monitor;
    let uploader = BulkUploader::new(config);
    let engine = ToolEngine::new_with_monitoring(uploader, monitor_enabled);

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Indexed {} documents with {} bulk requests",
                report.documents, report.requests
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Bulk upload failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
