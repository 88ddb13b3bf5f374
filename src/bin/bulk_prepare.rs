use clap::Parser;
use es_ingest::utils::logger;
use es_ingest::{BulkPrepare, ToolEngine};

#[derive(Parser)]
#[command(name = "bulk_prepare")]
#[command(about = "Prepend the {\"index\":{}} action line before every NDJSON line")]
struct Args {
    /// Input NDJSON file
    input: String,

    /// Output bulk file (may be the same path as the input)
    output: String,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let converter = BulkPrepare::new(&args.input, &args.output);
    let engine = ToolEngine::new(converter);

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Prepared {} documents for bulk upload in {}",
                report.documents, args.output
            );
        }
        Err(e) => {
            tracing::error!("❌ Preparation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
