//! 提取器配置
//!
//! 可从 TOML 文件加载，缺失的键使用默认值：
//!
//! ```toml
//! [structured]
//! enabled = true
//!
//! [scanner]
//! stride = 4
//! max_scan_bytes = 16777216
//!
//! [synthetic]
//! max_rooms = 5
//! ```

use crate::error::FileError;
use crate::scanner::ScanConfig;
use crate::synthetic::SyntheticConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 结构化读取参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredConfig {
    /// 是否注入 DXF 读取器
    pub enabled: bool,
}

impl Default for StructuredConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// 完整的提取器配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub structured: StructuredConfig,
    pub scanner: ScanConfig,
    pub synthetic: SyntheticConfig,
}

impl ExtractorConfig {
    /// 从 TOML 文本解析
    pub fn from_toml(text: &str) -> Result<Self, FileError> {
        Ok(toml::from_str(text)?)
    }

    /// 从 TOML 文件加载
    pub fn load(path: &Path) -> Result<Self, FileError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        tracing::debug!("Loaded extractor config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = ExtractorConfig::from_toml("").unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert!(config.structured.enabled);
        assert_eq!(config.scanner.stride, 4);
        assert_eq!(config.scanner.max_patterns, 10);
        assert_eq!(config.synthetic.max_rooms, 5);
    }

    #[test]
    fn test_partial_override() {
        let config = ExtractorConfig::from_toml(
            r#"
            [structured]
            enabled = false

            [scanner]
            max_scan_bytes = 4096
            "#,
        )
        .unwrap();
        assert!(!config.structured.enabled);
        assert_eq!(config.scanner.max_scan_bytes, Some(4096));
        assert_eq!(config.scanner.stride, 4);
        assert_eq!(config.synthetic.max_rooms, 5);
    }

    #[test]
    fn test_invalid_toml() {
        let result = ExtractorConfig::from_toml("[scanner]\nstride = \"four\"");
        assert!(matches!(result, Err(FileError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("dwgzone.toml");
        std::fs::write(&path, "[synthetic]\nmax_rooms = 7\n").expect("Failed to write");

        let config = ExtractorConfig::load(&path).expect("Failed to load");
        assert_eq!(config.synthetic.max_rooms, 7);
    }
}
