use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Input file '{path}' does not contain a JSON array")]
    NotAnArrayError { path: String },

    #[error("Record {index}: geo field '{field}' {reason}")]
    GeoFieldError {
        index: usize,
        field: String,
        reason: String,
    },

    #[error("Bulk file '{path}' has an odd number of lines ({lines}); every document needs an action line and a source line")]
    UnpairedLinesError { path: String, lines: usize },

    #[error("Bulk request for batch {batch} rejected with HTTP {status}: {body}")]
    BulkRejectedError {
        batch: usize,
        status: u16,
        body: String,
        indexed: u64,
    },

    #[error("Index request for document {id} rejected with HTTP {status}: {body}")]
    DocumentRejectedError {
        id: usize,
        status: u16,
        body: String,
        indexed: u64,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    InputData,
    Transport,
    System,
}

impl IngestError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IngestError::HttpError(_)
            | IngestError::BulkRejectedError { .. }
            | IngestError::DocumentRejectedError { .. } => ErrorSeverity::Medium,
            IngestError::IoError(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            IngestError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            IngestError::CsvError(_)
            | IngestError::SerializationError(_)
            | IngestError::NotAnArrayError { .. }
            | IngestError::GeoFieldError { .. }
            | IngestError::UnpairedLinesError { .. } => ErrorCategory::InputData,
            IngestError::HttpError(_)
            | IngestError::BulkRejectedError { .. }
            | IngestError::DocumentRejectedError { .. } => ErrorCategory::Transport,
            IngestError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            IngestError::HttpError(_) => {
                "Check that the Elasticsearch host is reachable and retry".to_string()
            }
            IngestError::CsvError(_) => {
                "Check the CSV file for malformed rows or encoding issues".to_string()
            }
            IngestError::IoError(_) => {
                "Check file paths, permissions and available disk space".to_string()
            }
            IngestError::SerializationError(_) => {
                "Check that the input file contains valid JSON".to_string()
            }
            IngestError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' argument and run again", field)
            }
            IngestError::NotAnArrayError { .. } => {
                "The input must be a JSON array of objects, e.g. produced by csv_to_json"
                    .to_string()
            }
            IngestError::GeoFieldError { .. } => {
                "Coordinates must look like '48.85N' / '2.35E'; fix the source data".to_string()
            }
            IngestError::UnpairedLinesError { .. } => {
                "Regenerate the bulk file with bulk_prepare so every document has an action line"
                    .to_string()
            }
            IngestError::BulkRejectedError { indexed, .. } => format!(
                "{} documents were already indexed; the target index is partially loaded. \
                 Fix the cause and rerun (rerunning re-indexes from the start)",
                indexed
            ),
            IngestError::DocumentRejectedError { indexed, .. } => format!(
                "{} documents were already indexed; fix the rejected document and rerun",
                indexed
            ),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IngestError::HttpError(_) => "Could not reach the Elasticsearch server".to_string(),
            IngestError::CsvError(_) => "The CSV file could not be parsed".to_string(),
            IngestError::IoError(e) => format!("File operation failed: {}", e),
            IngestError::SerializationError(_) => "The input is not valid JSON".to_string(),
            IngestError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            IngestError::NotAnArrayError { path } => {
                format!("'{}' is not a JSON array of documents", path)
            }
            IngestError::GeoFieldError { index, field, .. } => {
                format!("Record {} has an unusable '{}' coordinate", index, field)
            }
            IngestError::UnpairedLinesError { path, .. } => {
                format!("'{}' is not a valid bulk file (odd line count)", path)
            }
            IngestError::BulkRejectedError { batch, status, .. } => {
                format!("Elasticsearch rejected batch {} (HTTP {})", batch, status)
            }
            IngestError::DocumentRejectedError { id, status, .. } => {
                format!("Elasticsearch rejected document {} (HTTP {})", id, status)
            }
        }
    }
}
