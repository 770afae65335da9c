//! 命令行参数

use clap::{Parser, ValueEnum};
use dwgzone_file::ExportFormat;
use std::path::PathBuf;

/// 从 DWG/DXF 文件中提取房间区域并生成报告
#[derive(Debug, Parser)]
#[command(name = "dwgzone", version, about)]
pub struct Cli {
    /// 要分析的 DWG/DXF 文件
    pub path: PathBuf,

    /// 报告格式
    #[arg(short, long, value_enum, default_value_t = FormatArg::Summary)]
    pub format: FormatArg,

    /// 输出目录；不指定时打印到标准输出
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 禁用结构化（DXF）读取
    #[arg(long)]
    pub no_structured: bool,

    /// 二进制扫描的字节上限
    #[arg(long)]
    pub max_scan_bytes: Option<usize>,

    /// 输出调试日志
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Csv,
    Summary,
    All,
}

impl FormatArg {
    pub fn formats(&self) -> Vec<ExportFormat> {
        match self {
            FormatArg::Json => vec![ExportFormat::Json],
            FormatArg::Csv => vec![ExportFormat::Csv],
            FormatArg::Summary => vec![ExportFormat::Summary],
            FormatArg::All => ExportFormat::ALL.to_vec(),
        }
    }
}
