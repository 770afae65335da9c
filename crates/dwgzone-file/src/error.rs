//! 文件操作错误定义

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Malformed file: {0}")]
    MalformedFile(String),

    #[error("Structured read unavailable: {0}")]
    UnsupportedStructuredRead(String),

    #[error("Failed to decode coordinates at offset {offset}")]
    ScanDecode { offset: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}
