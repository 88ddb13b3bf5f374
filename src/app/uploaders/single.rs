use crate::app::converters::read_json_array;
use crate::config::PushConfig;
use crate::core::{Result, Tool, ToolReport};
use crate::utils::error::IngestError;
use async_trait::async_trait;
use reqwest::Client;

/// Indexes every element of a JSON array as its own document with one
/// `PUT {url}/{index}/_doc/{i}` per element, using the array position as
/// the document id. No batching; the first non-2xx response aborts.
pub struct DocPusher {
    config: PushConfig,
    client: Client,
}

impl DocPusher {
    pub fn new(config: PushConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn doc_url(&self, id: usize) -> String {
        format!(
            "{}/{}/_doc/{}",
            self.config.url.trim_end_matches('/'),
            self.config.index,
            id
        )
    }
}

#[async_trait]
impl Tool for DocPusher {
    fn name(&self) -> &str {
        "push_docs"
    }

    async fn execute(&self) -> Result<ToolReport> {
        let documents = read_json_array(&self.config.file)?;
        tracing::info!(
            "🔍 {}: {} documents to index one at a time",
            self.config.file,
            documents.len()
        );

        let mut indexed = 0u64;
        for (id, document) in documents.iter().enumerate() {
            let response = self
                .client
                .put(self.doc_url(id))
                .json(document)
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(IngestError::DocumentRejectedError {
                    id,
                    status: status.as_u16(),
                    body,
                    indexed,
                });
            }

            indexed += 1;
            tracing::debug!("📄 Indexed document {}", id);
        }

        Ok(ToolReport::upload(indexed, indexed))
    }
}
