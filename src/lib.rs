pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use app::converters::{BulkPrepare, CsvToJson, GeoConvert, JsonToNdjson};
pub use app::uploaders::{BulkUploader, DocPusher};
pub use config::{BulkConfig, PushConfig};
pub use core::engine::ToolEngine;
pub use utils::error::{IngestError, Result};
