use crate::utils::error::Result;
use crate::utils::validation::{
    validate_index_name, validate_input_file, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Arguments for the batched bulk uploader (`es-ingest`).
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "es-ingest")]
#[command(about = "Batched bulk upload of an NDJSON file to an Elasticsearch index")]
pub struct BulkConfig {
    /// Bulk NDJSON file (alternating action and source lines, see bulk_prepare)
    pub bulk_file: String,

    /// Target index name
    pub index: String,

    /// Elasticsearch base URL, e.g. http://localhost:9200
    pub es_host: String,

    /// Documents per bulk request
    #[arg(long, default_value = "1000")]
    pub batch_size: usize,

    /// Inspect the file and print the upload plan without sending anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory usage while running
    #[arg(long)]
    pub monitor: bool,
}

impl Validate for BulkConfig {
    fn validate(&self) -> Result<()> {
        validate_input_file("bulk_file", &self.bulk_file, None)?;
        validate_index_name("index", &self.index)?;
        validate_url("es_host", &self.es_host)?;
        validate_positive_number("batch_size", self.batch_size, 1)?;
        Ok(())
    }
}

/// Arguments for the one-request-per-document pusher (`push_docs`).
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "push_docs")]
#[command(about = "Index every element of a JSON array as one document, one request at a time")]
pub struct PushConfig {
    /// JSON file containing an array of documents
    pub file: String,

    /// Target index name
    pub index: String,

    /// Elasticsearch base URL, e.g. http://localhost:9200
    pub url: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl Validate for PushConfig {
    fn validate(&self) -> Result<()> {
        validate_input_file("file", &self.file, Some("json"))?;
        validate_index_name("index", &self.index)?;
        validate_url("url", &self.url)?;
        Ok(())
    }
}
