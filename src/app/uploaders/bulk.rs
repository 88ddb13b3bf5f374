use crate::config::BulkConfig;
use crate::core::{Result, Tool, ToolReport};
use crate::utils::error::IngestError;
use async_trait::async_trait;
use reqwest::Client;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Streams a bulk NDJSON file to `{host}/{index}/_bulk` in fixed-size
/// batches. Batch size is counted in documents; every document is exactly
/// two lines (action line + source line), so a flush happens at
/// `2 × batch_size` buffered lines and a pair is never split across
/// requests. The first non-200 response aborts the run.
pub struct BulkUploader {
    config: BulkConfig,
    client: Client,
}

/// What `inspect` learned about the file before any request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPlan {
    pub lines: usize,
    pub documents: usize,
    pub batches: usize,
}

impl BulkUploader {
    pub fn new(config: BulkConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn bulk_url(&self) -> String {
        format!(
            "{}/{}/_bulk",
            self.config.es_host.trim_end_matches('/'),
            self.config.index
        )
    }

    /// First pass over the file: count non-empty lines and reject an odd
    /// count up front, so a mis-paired file never reaches the server.
    pub fn inspect(&self) -> Result<UploadPlan> {
        let reader = BufReader::new(File::open(&self.config.bulk_file)?);
        let mut lines = 0usize;
        for line in reader.lines() {
            if !line?.trim().is_empty() {
                lines += 1;
            }
        }

        if lines % 2 != 0 {
            return Err(IngestError::UnpairedLinesError {
                path: self.config.bulk_file.clone(),
                lines,
            });
        }

        let documents = lines / 2;
        Ok(UploadPlan {
            lines,
            documents,
            batches: documents.div_ceil(self.config.batch_size),
        })
    }

    async fn flush(
        &self,
        batch: usize,
        total_batches: usize,
        pending: &mut Vec<String>,
        indexed: &mut u64,
    ) -> Result<()> {
        let documents = (pending.len() / 2) as u64;
        let mut body = pending.join("\n");
        // the bulk API requires the body to end with a newline
        body.push('\n');

        let response = self
            .client
            .post(self.bulk_url())
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::BulkRejectedError {
                batch,
                status: status.as_u16(),
                body,
                indexed: *indexed,
            });
        }

        *indexed += documents;
        tracing::info!(
            "📦 Batch {}/{} indexed ({} documents, {} total)",
            batch,
            total_batches,
            documents,
            indexed
        );
        pending.clear();
        Ok(())
    }
}

#[async_trait]
impl Tool for BulkUploader {
    fn name(&self) -> &str {
        "es-ingest"
    }

    async fn execute(&self) -> Result<ToolReport> {
        let plan = self.inspect()?;
        tracing::info!(
            "🔍 {}: {} documents, {} batches of up to {}",
            self.config.bulk_file,
            plan.documents,
            plan.batches,
            self.config.batch_size
        );

        if self.config.dry_run {
            tracing::info!("💡 Dry run: no requests will be sent");
            return Ok(ToolReport::upload(0, 0));
        }

        let reader = BufReader::new(File::open(&self.config.bulk_file)?);
        let mut pending: Vec<String> = Vec::with_capacity(self.config.batch_size * 2);
        let mut indexed = 0u64;
        let mut requests = 0u64;
        let mut batch = 0usize;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            pending.push(line);

            if pending.len() == self.config.batch_size * 2 {
                batch += 1;
                self.flush(batch, plan.batches, &mut pending, &mut indexed)
                    .await?;
                requests += 1;
            }
        }

        // remaining partial batch
        if !pending.is_empty() {
            batch += 1;
            self.flush(batch, plan.batches, &mut pending, &mut indexed)
                .await?;
            requests += 1;
        }

        tracing::info!("✅ Indexed {} documents with {} bulk requests", indexed, requests);
        Ok(ToolReport::upload(indexed, requests))
    }
}
