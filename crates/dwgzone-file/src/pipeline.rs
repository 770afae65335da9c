//! 解析入口
//!
//! 文件签名分析 → 区域提取级联 → 规范化。
//! 只有路径本身不存在时才返回错误，其余失败都在各策略内部消化。

use crate::cascade::ZoneExtractor;
use crate::config::ExtractorConfig;
use crate::error::FileError;
use crate::signature::{self, FileSignature};
use dwgzone_core::normalize::normalize;
use dwgzone_core::zone::ValidatedZone;
use std::path::Path;

/// 一次解析的结果
#[derive(Debug, Clone)]
pub struct ParsedZones {
    /// 签名分析结果，分析失败时为 `None`
    pub signature: Option<FileSignature>,
    /// 胜出的提取策略
    pub strategy: Option<&'static str>,
    pub zones: Vec<ValidatedZone>,
}

impl ParsedZones {
    /// 所有区域的面积之和
    pub fn total_area(&self) -> f64 {
        self.zones.iter().map(|z| z.area()).sum()
    }

    /// 结果是否来自合成布局
    pub fn is_synthetic(&self) -> bool {
        self.zones.iter().any(|z| z.source().is_synthetic())
    }
}

/// 使用给定配置解析文件
pub fn parse_file(path: &Path, config: &ExtractorConfig) -> Result<ParsedZones, FileError> {
    if !path.is_file() {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let signature = match signature::analyze(path) {
        Ok(sig) => {
            tracing::info!("Analyzed {}: {}", path.display(), sig.describe());
            Some(sig)
        }
        Err(e) => {
            tracing::warn!("Signature analysis failed for {}: {}", path.display(), e);
            None
        }
    };

    let extraction =
        ZoneExtractor::from_config_with_signature(config, signature.clone()).extract_with_strategy(path);
    let zones = normalize(extraction.zones);

    tracing::info!(
        "Extracted {} zones from {} via {}",
        zones.len(),
        path.display(),
        extraction.strategy.unwrap_or("none")
    );

    Ok(ParsedZones {
        signature,
        strategy: extraction.strategy,
        zones,
    })
}
