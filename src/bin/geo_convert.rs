use clap::Parser;
use es_ingest::utils::logger;
use es_ingest::{GeoConvert, ToolEngine};

#[derive(Parser)]
#[command(name = "geo_convert")]
#[command(about = "Replace string Latitude/Longitude fields with a geo_point-shaped location field")]
struct Args {
    /// Input JSON file (array of records with Latitude/Longitude fields)
    input: String,

    /// Output JSON file
    output: String,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let converter = GeoConvert::new(&args.input, &args.output);
    let engine = ToolEngine::new(converter);

    match engine.run().await {
        Ok(report) => {
            println!("✅ Converted {} records to {}", report.documents, args.output);
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
