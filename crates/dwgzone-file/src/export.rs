//! 报告导出
//!
//! 支持三种格式：
//! - JSON：完整报告
//! - CSV：每个房间一行
//! - 文本摘要

use crate::error::FileError;
use crate::report::ZoneReport;
use chrono::{DateTime, Local};
use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
    Summary,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Json, ExportFormat::Csv, ExportFormat::Summary];

    /// 追加到输入文件名后的后缀
    pub fn file_suffix(&self) -> &'static str {
        match self {
            ExportFormat::Json => "_analysis.json",
            ExportFormat::Csv => "_rooms.csv",
            ExportFormat::Summary => "_summary.txt",
        }
    }
}

/// 渲染为字符串
pub fn render(report: &ZoneReport, format: ExportFormat) -> Result<String, FileError> {
    match format {
        ExportFormat::Json => render_json(report),
        ExportFormat::Csv => render_csv(report),
        ExportFormat::Summary => render_summary(report, Local::now()),
    }
}

pub fn render_json(report: &ZoneReport) -> Result<String, FileError> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_csv(report: &ZoneReport) -> Result<String, FileError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Room", "Area", "Layer", "Type", "Source"])?;

    for (i, room) in report.rooms.iter().enumerate() {
        writer.write_record([
            format!("Room {}", i + 1),
            format!("{:.2}", room.area),
            room.layer.clone(),
            room.kind.clone(),
            room.source.clone(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| FileError::Io(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| FileError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// 文本摘要，时间戳由调用方提供
pub fn render_summary(report: &ZoneReport, generated_at: DateTime<Local>) -> Result<String, FileError> {
    let mut out = String::new();
    write_summary(&mut out, report, generated_at)?;
    Ok(out)
}

fn write_summary(out: &mut impl Write, report: &ZoneReport, generated_at: DateTime<Local>) -> fmt::Result {
    writeln!(out, "DWG Analysis Report")?;
    writeln!(out, "==================")?;
    writeln!(out, "File: {}", report.file)?;
    writeln!(out, "Date: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    if let Some(sig) = &report.signature {
        writeln!(out, "Format: {}", sig.describe())?;
    }
    writeln!(out)?;
    writeln!(out, "File Information:")?;
    writeln!(out, "- Layers: {}", report.layers.len())?;
    writeln!(out, "- Total Rooms: {}", report.rooms.len())?;
    if report.synthetic {
        writeln!(
            out,
            "- Note: no geometry could be recovered; rooms are a synthetic placeholder layout"
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Room Details:")?;

    for (i, room) in report.rooms.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "Room {}:", i + 1)?;
        writeln!(out, "  - Area: {:.2} sq units", room.area)?;
        writeln!(out, "  - Layer: {}", room.layer)?;
        writeln!(out, "  - Type: {}", room.kind)?;
        writeln!(out, "  - Source: {}", room.source)?;
        writeln!(out, "  - Points: {} vertices", room.points.len())?;
    }

    writeln!(out)?;
    writeln!(out, "Analysis Generated By: dwgzone {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Total Floor Area: {:.2} sq units", report.total_area)
}

/// 导出文件名：`<stem><suffix>`
pub fn output_path(dir: &Path, stem: &str, format: ExportFormat) -> PathBuf {
    dir.join(format!("{}{}", stem, format.file_suffix()))
}

/// 导出到目录，返回写入的文件路径
pub fn export_report(
    report: &ZoneReport,
    format: ExportFormat,
    dir: &Path,
    stem: &str,
) -> Result<PathBuf, FileError> {
    let content = render(report, format)?;
    std::fs::create_dir_all(dir)?;
    let path = output_path(dir, stem, format);
    std::fs::write(&path, content)?;

    tracing::info!("Exported {:?} report to {}", format, path.display());
    Ok(path)
}
