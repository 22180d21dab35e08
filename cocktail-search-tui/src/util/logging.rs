//! 日志初始化
//!
//! 终端被 UI 占用，日志写入按天滚动的文件。
//! 库代码经 `log` 门面输出，由 `tracing-log` 桥接到订阅者。

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::backend::LogConfig;

const LOG_FILE_PREFIX: &str = "cocktail-search.log";

/// 安装全局日志订阅者
///
/// 返回的 guard 必须存活到程序退出，否则缓冲中的日志会丢失。
/// `RUST_LOG` 存在时优先于配置中的级别。
pub fn init_logging(config: &LogConfig) -> Result<WorkerGuard> {
    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .with_context(|| format!("invalid log level {:?}", config.level))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(guard)
}
