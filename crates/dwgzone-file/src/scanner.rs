//! 二进制坐标模式扫描
//!
//! 不是 DWG 格式解析器：以固定步长滑动窗口，把窗口内的字节按小端
//! IEEE-754 双精度解释为 (x, y) 坐标对，保留数值"看起来合理"的窗口。
//! 误报（恰好解码为合理浮点数的字节）是可接受的代价。
//!
//! 窗口布局（偏移 `i`，`j` 取 0/8/16/24）：
//! ```text
//! x = f64_le(data[i+j .. i+j+8])
//! y = f64_le(data[i+j+8 .. i+j+16])
//! ```

use crate::error::FileError;
use crate::strategy::ExtractionStrategy;
use dwgzone_core::math::Point2;
use dwgzone_core::zone::{Zone, ZoneKind, ZoneSource};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 扫描参数
///
/// 默认值是启发式调参结果，并非来自 DWG 格式规范。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// 窗口步长（字节）
    pub stride: usize,
    /// 窗口长度（字节）
    pub window: usize,
    /// 坐标绝对值上限（开区间）
    pub coordinate_limit: f64,
    /// 成为候选模式所需的最少坐标对
    pub min_pairs: usize,
    /// 找到这么多候选后停止扫描
    pub max_patterns: usize,
    /// 转换为区域的候选数上限
    pub max_zones: usize,
    /// 最多扫描的字节数，`None` 表示不限
    pub max_scan_bytes: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            stride: 4,
            window: 32,
            coordinate_limit: 1_000_000.0,
            min_pairs: 3,
            max_patterns: 10,
            max_zones: 5,
            max_scan_bytes: None,
        }
    }
}

impl ScanConfig {
    /// 坐标是否落在合理范围内（NaN 不通过）
    fn is_plausible(&self, value: f64) -> bool {
        -self.coordinate_limit < value && value < self.coordinate_limit
    }
}

/// 读取小端 f64
fn read_f64_le(data: &[u8], offset: usize) -> Result<f64, FileError> {
    data.get(offset..offset + 8)
        .and_then(|bytes| bytes.try_into().ok())
        .map(f64::from_le_bytes)
        .ok_or(FileError::ScanDecode { offset })
}

/// 解码单个窗口，任一坐标越界读取则整个窗口失败
fn decode_window(data: &[u8], offset: usize, config: &ScanConfig) -> Result<Vec<Point2>, FileError> {
    let mut coords = Vec::new();
    for j in (0..config.window).step_by(8) {
        let start = offset + j;
        if start + 8 > data.len() {
            continue;
        }
        let x = read_f64_le(data, start)?;
        let y = read_f64_le(data, start + 8)?;
        if config.is_plausible(x) && config.is_plausible(y) {
            coords.push(Point2::new(x, y));
        }
    }
    Ok(coords)
}

/// 查找候选坐标组
pub fn find_coordinate_patterns(data: &[u8], config: &ScanConfig) -> Vec<Vec<Point2>> {
    let data = match config.max_scan_bytes {
        Some(budget) if budget < data.len() => &data[..budget],
        _ => data,
    };

    let mut patterns = Vec::new();
    if config.max_patterns == 0 {
        return patterns;
    }

    let end = data.len().saturating_sub(config.window);
    for offset in (0..end).step_by(config.stride.max(1)) {
        match decode_window(data, offset, config) {
            Ok(coords) if coords.len() >= config.min_pairs => patterns.push(coords),
            Ok(_) => {}
            Err(e) => {
                tracing::trace!("{}", e);
                continue;
            }
        }

        if patterns.len() >= config.max_patterns {
            break;
        }
    }

    patterns
}

/// 读取待扫描的字节，有预算时只读取文件前缀
pub fn read_scan_bytes(path: &Path, max_scan_bytes: Option<usize>) -> Result<Vec<u8>, FileError> {
    let Some(budget) = max_scan_bytes else {
        return Ok(std::fs::read(path)?);
    };

    let mut data = Vec::with_capacity(budget.min(1 << 20));
    File::open(path)?.take(budget as u64).read_to_end(&mut data)?;
    Ok(data)
}

/// 二进制模式扫描策略
#[derive(Debug, Clone, Default)]
pub struct BinaryPatternStrategy {
    config: ScanConfig,
}

impl BinaryPatternStrategy {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// 扫描字节并转换为区域
    pub fn zones_from_bytes(&self, data: &[u8]) -> Vec<Zone> {
        let patterns = find_coordinate_patterns(data, &self.config);
        tracing::debug!("Binary scan found {} candidate patterns", patterns.len());

        patterns
            .into_iter()
            .take(self.config.max_zones)
            .enumerate()
            .filter(|(_, pattern)| pattern.len() >= self.config.min_pairs)
            .map(|(i, pattern)| {
                Zone::new(pattern, ZoneKind::BinaryExtracted, ZoneSource::BinaryAnalysis)
                    .with_layer(format!("EXTRACTED_{}", i))
            })
            .collect()
    }
}

impl ExtractionStrategy for BinaryPatternStrategy {
    fn name(&self) -> &'static str {
        "binary_analysis"
    }

    fn attempt(&self, path: &Path) -> Result<Vec<Zone>, FileError> {
        let data = read_scan_bytes(path, self.config.max_scan_bytes)?;
        tracing::debug!("Scanning {} bytes of {}", data.len(), path.display());
        Ok(self.zones_from_bytes(&data))
    }
}
