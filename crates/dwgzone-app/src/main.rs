//! DWGZone 命令行入口

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use dwgzone_file::{export, parse_file, ExportFormat, ExtractorConfig, ZoneReport};
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::Cli;

/// 初始化日志，`RUST_LOG` 优先于命令行
fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logger: {}", e))
}

/// 合并配置文件与命令行参数
fn load_config(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => ExtractorConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ExtractorConfig::default(),
    };

    if cli.no_structured {
        config.structured.enabled = false;
    }
    if let Some(budget) = cli.max_scan_bytes {
        config.scanner.max_scan_bytes = Some(budget);
    }
    Ok(config)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "drawing".to_string())
}

fn write_reports(report: &ZoneReport, formats: &[ExportFormat], output: Option<&Path>, stem: &str) -> Result<()> {
    for &format in formats {
        match output {
            Some(dir) => {
                let path = export::export_report(report, format, dir, stem)?;
                println!("{}", path.display());
            }
            None => print!("{}", export::render(report, format)?),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose)?;

    info!("Starting dwgzone...");

    let config = load_config(&cli)?;
    let parsed = parse_file(&cli.path, &config)
        .with_context(|| format!("failed to parse {}", cli.path.display()))?;

    let file_name = cli
        .path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let report = ZoneReport::from_parsed(file_name, &parsed);

    if report.synthetic {
        tracing::warn!("No real geometry recovered; report contains a synthetic layout");
    }

    write_reports(
        &report,
        &cli.format.formats(),
        cli.output.as_deref(),
        &file_stem(&cli.path),
    )?;

    Ok(())
}
