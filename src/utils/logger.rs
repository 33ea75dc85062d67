use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::error::Result;

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("naver_map_search=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("naver_map_search=info"))
    }
}

/// 每日一個檔案：`coordinate_search_YYYYMMDD.log`
pub fn daily_log_path(dir: &Path) -> PathBuf {
    let date = chrono::Local::now().format("%Y%m%d");
    dir.join(format!("coordinate_search_{}.log", date))
}

fn open_log_file(dir: &Path) -> Result<File> {
    fs::create_dir_all(dir)?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(daily_log_path(dir))?;
    Ok(file)
}

pub fn init_cli_logger(verbose: bool, log_dir: Option<&Path>) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact();

    let file_layer = match log_dir {
        Some(dir) => Some(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(open_log_file(dir)?))
                .with_ansi(false)
                .with_target(true),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

pub fn init_json_logger(log_dir: Option<&Path>) -> Result<()> {
    let file_layer = match log_dir {
        Some(dir) => Some(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(open_log_file(dir)?))
                .with_ansi(false)
                .json(),
        ),
        None => None,
    };

    tracing_subscriber::registry()
        .with(default_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 結構化輸出，方便交給 agent 或收集器
        )
        .with(file_layer)
        .init();

    Ok(())
}
