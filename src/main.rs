use anyhow::Context;
use clap::Parser;
use naver_map_search::config::cli::Command;
use naver_map_search::utils::{logger, validation::Validate};
use naver_map_search::{CliConfig, MapConfig, NaverMapService, NaverMapsClient, RadiusSearchRequest};
use serde::Serialize;

fn load_config(cli: &CliConfig) -> anyhow::Result<MapConfig> {
    let config = match &cli.config {
        Some(path) => MapConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => MapConfig::from_env().context("Failed to load configuration from environment")?,
    };
    config.validate().context("Configuration validation failed")?;
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Set NAVER_CLIENT_ID / NAVER_CLIENT_SECRET / NAVER_MAPS_CLIENT_ID / NAVER_MAPS_CLIENT_SECRET or pass --config");
            std::process::exit(1);
        }
    };

    // 初始化日誌
    let log_dir = config.logging.directory.as_deref();
    if cli.json_logs {
        logger::init_json_logger(log_dir)?;
    } else {
        logger::init_cli_logger(cli.verbose, log_dir)?;
    }

    tracing::info!("🚀 Starting naver-map-search");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let client = NaverMapsClient::new(&config)?;
    let service = NaverMapService::new(client.clone(), client);

    // 工具結果永遠是資料；失敗時以退出碼 2 表示
    let succeeded = match cli.command {
        Command::Geocode {
            address,
            language,
            page,
            count,
        } => {
            let outcome = service.geocode(&address, language.into(), page, count).await;
            print_json(&outcome)?;
            outcome.is_success()
        }
        Command::Search {
            query,
            display,
            sort,
            start,
        } => {
            let outcome = service.local_search(&query, display, sort.into(), start).await;
            print_json(&outcome)?;
            outcome.is_success()
        }
        Command::Radius(args) => {
            let request = RadiusSearchRequest::from(args);
            let outcome = service.local_search_by_coordinate(&request).await;
            print_json(&outcome)?;
            outcome.is_success()
        }
    };

    if !succeeded {
        std::process::exit(2);
    }

    Ok(())
}
