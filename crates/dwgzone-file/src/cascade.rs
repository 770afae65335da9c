//! 区域提取级联
//!
//! 按可信度从高到低依次尝试各策略：
//! 结构化读取 → 二进制模式扫描 → 合成布局。
//! 第一个返回非空结果的策略胜出，后续策略不再执行；
//! 任何策略的错误都只记录日志，不会向外传播。

use crate::config::ExtractorConfig;
use crate::scanner::BinaryPatternStrategy;
use crate::signature::FileSignature;
use crate::strategy::ExtractionStrategy;
use crate::structured::StructuredExtractor;
use crate::synthetic::SyntheticLayoutStrategy;
use dwgzone_core::zone::Zone;
use std::path::Path;

/// 级联结果
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub zones: Vec<Zone>,
    /// 胜出的策略名称，没有任何结果时为 `None`
    pub strategy: Option<&'static str>,
}

/// 区域提取器
pub struct ZoneExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl ZoneExtractor {
    /// 使用自定义策略列表（按顺序尝试）
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// 根据配置构建默认级联
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::from_config_with_signature(config, None)
    }

    /// 根据配置构建默认级联，合成布局复用已分析的签名
    pub fn from_config_with_signature(
        config: &ExtractorConfig,
        signature: Option<FileSignature>,
    ) -> Self {
        let structured = if config.structured.enabled {
            StructuredExtractor::with_dxf()
        } else {
            StructuredExtractor::new(None)
        };

        Self::new(vec![
            Box::new(structured),
            Box::new(BinaryPatternStrategy::new(config.scanner.clone())),
            Box::new(SyntheticLayoutStrategy::new(config.synthetic.clone()).with_signature(signature)),
        ])
    }

    /// 策略名称，按执行顺序
    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// 提取区域，从不失败
    pub fn extract(&self, path: &Path) -> Vec<Zone> {
        self.extract_with_strategy(path).zones
    }

    /// 提取区域并报告胜出的策略
    pub fn extract_with_strategy(&self, path: &Path) -> Extraction {
        let winner = self.strategies.iter().find_map(|strategy| {
            match strategy.attempt(path) {
                Ok(zones) if !zones.is_empty() => {
                    tracing::debug!("Strategy {} produced {} zones", strategy.name(), zones.len());
                    Some((strategy.name(), zones))
                }
                Ok(_) => {
                    tracing::debug!("Strategy {} found nothing", strategy.name());
                    None
                }
                Err(e) => {
                    tracing::warn!("Strategy {} failed: {}", strategy.name(), e);
                    None
                }
            }
        });

        match winner {
            Some((name, zones)) => Extraction {
                zones,
                strategy: Some(name),
            },
            None => Extraction {
                zones: Vec::new(),
                strategy: None,
            },
        }
    }
}

impl Default for ZoneExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }
}
