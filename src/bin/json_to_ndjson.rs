use clap::Parser;
use es_ingest::utils::logger;
use es_ingest::{JsonToNdjson, ToolEngine};

#[derive(Parser)]
#[command(name = "json_to_ndjson")]
#[command(about = "Convert a JSON array into NDJSON, one compact object per line")]
struct Args {
    /// Input JSON file (must contain an array)
    input: String,

    /// Output NDJSON file
    output: String,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let converter = JsonToNdjson::new(&args.input, &args.output);
    let engine = ToolEngine::new(converter);

    match engine.run().await {
        Ok(report) => {
            println!("✅ Wrote {} lines to {}", report.documents, args.output);
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}
