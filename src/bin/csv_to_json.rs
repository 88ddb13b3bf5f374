use clap::Parser;
use es_ingest::utils::logger;
use es_ingest::{CsvToJson, ToolEngine};

#[derive(Parser)]
#[command(name = "csv_to_json")]
#[command(about = "Convert a CSV table with a header row into a JSON array of records")]
struct Args {
    /// Input CSV file
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

    let converter = CsvToJson::new(&args.input, &args.output);
    let engine = ToolEngine::new(converter);

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Converted {} rows to {} ({} dropped)",
                report.documents, args.output, report.skipped
            );
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
