use crate::config::toml_config::TomlConfig;
use crate::config::FetchConfig;
use crate::domain::model::BuoyCategory;
use crate::utils::error::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 不帶任何參數時抓取全部四個類別
#[derive(Debug, Clone, Parser)]
#[command(name = "buoy-fetch")]
#[command(about = "Fetch moored, AWS, drifting and Argo buoy data and print it")]
pub struct CliConfig {
    /// Optional TOML file overriding endpoints and timeout
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fetch only these categories (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<BuoyCategory>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON payloads
    #[arg(long)]
    pub pretty: bool,

    /// List the endpoints that would be fetched, without fetching
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<FetchConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?.to_fetch_config()
            }
            None => FetchConfig::default(),
        };

        let config = match self.timeout_seconds {
            Some(secs) => base.with_timeout(Duration::from_secs(secs)),
            None => base,
        };

        Ok(config.only(&self.only))
    }
}
