use clap::Parser;
use es_ingest::utils::{logger, validation::Validate};
use es_ingest::{DocPusher, PushConfig, ToolEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = PushConfig::parse();
    logger::init_cli_logger(config.verbose);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let pusher = DocPusher::new(config);
    let engine = ToolEngine::new(pusher);

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Indexed {} documents ({} requests)",
                report.documents, report.requests
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Push failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
