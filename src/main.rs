use buoy_fetch::core::report;
use buoy_fetch::domain::ports::ConfigProvider;
use buoy_fetch::utils::{logger, validation::Validate};
use buoy_fetch::{BuoyFetcher, CliConfig, HttpSource, OutputFormat};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.format {
        OutputFormat::Text => logger::init_cli_logger(cli.verbose),
        OutputFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("Starting buoy-fetch");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 設定錯誤是唯一會中止程式的情況，且發生在任何請求之前
    let config = match cli.resolve().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
        for endpoint in config.endpoints() {
            println!("{}\t{}", endpoint.category, endpoint.url);
        }
        return Ok(());
    }

    let source = HttpSource::new()?;
    let fetcher = BuoyFetcher::new(source, config);
    let fetch_report = fetcher.fetch_all().await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Text => report::write_text(&mut out, &fetch_report, cli.pretty)?,
        OutputFormat::Json => report::write_json(&mut out, &fetch_report, cli.pretty)?,
    }

    Ok(())
}
