use crate::utils::error::{IngestError, Result};
use regex::Regex;
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_index_name(field_name: &str, index: &str) -> Result<()> {
    // 與 Elasticsearch 索引名稱的最低要求一致:至少兩個字元
    let pattern = Regex::new(r"^\w{2,}$").expect("index name pattern is valid");
    if pattern.is_match(index) {
        Ok(())
    } else {
        Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: index.to_string(),
            reason: "Index name must be at least 2 word characters (letters, digits, underscore)"
                .to_string(),
        })
    }
}

pub fn validate_input_file(
    field_name: &str,
    path: &str,
    required_extension: Option<&str>,
) -> Result<()> {
    let p = Path::new(path);

    if !p.is_file() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "File does not exist".to_string(),
        });
    }

    if let Some(required) = required_extension {
        let matches = p
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(required))
            .unwrap_or(false);
        if !matches {
            return Err(IngestError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: path.to_string(),
                reason: format!("File must have a .{} extension", required),
            });
        }
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(IngestError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
