//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!     mod terminal;   // 终端初始化和恢复（原始模式、备用屏幕、鼠标捕获）
//!     mod logging;    // 日志写入滚动文件，终端留给 UI
//!
//! 终端类型别名：
//!
//!     pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//! 注意：无论主循环是正常退出还是出错，`restore_terminal()` 都必须被调用，
//!       否则终端会停留在原始模式。

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
