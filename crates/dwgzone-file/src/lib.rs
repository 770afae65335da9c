//! DWGZone 文件处理
//!
//! 从 DWG/DXF 文件中提取房间区域：
//! - 文件头签名分析
//! - 提取级联：结构化读取（DXF）→ 二进制模式扫描 → 合成布局
//! - 报告与导出（JSON / CSV / 文本摘要）
//!
//! 注意：这不是 DWG 二进制格式解码器。二进制扫描是启发式的，
//! 合成布局是占位数据，来源字段会明确标记。

pub mod cascade;
pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod report;
pub mod scanner;
pub mod signature;
pub mod strategy;
pub mod structured;
pub mod synthetic;

pub use cascade::{Extraction, ZoneExtractor};
pub use config::ExtractorConfig;
pub use error::FileError;
pub use export::{export_report, render, ExportFormat};
pub use pipeline::{parse_file, ParsedZones};
pub use report::{RoomRecord, ZoneReport};
pub use signature::{analyze, FileSignature};
pub use strategy::ExtractionStrategy;
pub use structured::{DxfReader, StructuredExtractor, StructuredReader};
