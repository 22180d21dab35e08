//! Cocktail Search TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与查询服务 (`backend/`)
//!
//! main.rs 的执行顺序：
//!
//!     LocalConfigService::load()   // 读取配置（不存在则用默认值）
//!     init_logging()               // 日志写入文件，终端留给 UI
//!     set_language / set_theme     // 应用 [ui] 配置
//!     tokio Runtime                // 查询在这里执行
//!     create_lookup()              // TheCocktailDB 客户端
//!     init_terminal()              // 原始模式 + 备用屏幕 + 鼠标捕获
//!     app::run()                   // 主循环
//!     restore_terminal()           // 无论成功与否，都恢复终端

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::{Context, Result};

use backend::{ConfigService, LocalConfigService, SearchService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. 读取配置
    let config_service = LocalConfigService::new();
    let config = config_service.load()?;

    // 2. 初始化日志（guard 需存活到退出）
    let _log_guard = init_logging(&config.log)?;
    log::info!(
        "starting cocktail-search v{}, config {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );

    i18n::set_language(config.ui.language());
    view::theme::set_theme(config.ui.theme);

    // 3. 查询客户端与异步运行时
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    let lookup = cocktail_lookup::create_lookup(&config.api.to_lookup_config())
        .context("failed to create lookup client")?;
    let mut service = SearchService::new(
        lookup,
        runtime.handle().clone(),
        config.search.stale_responses,
    );

    // 4. 初始化终端
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(&config);
    let result = app::run(&mut terminal, &mut app, &mut service);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("main loop failed: {e:#}");
    }
    log::info!("cocktail-search exiting");
    result
}
