//!
//! src/backend/mod.rs
//! Backend 层：与外部世界打交道的服务
//!
//!     mod config_service;     // 读取 TOML 配置
//!     mod search_service;     // 在 tokio 上执行查询，经 channel 回传结果
//!
//! Update 层返回的 `Command` 由主循环交给 `SearchService::execute()`；
//! 完成的查询由 `SearchService::drain()` 取出，再作为消息送回 Update 层。

mod config_service;
mod search_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService, LogConfig};
pub use search_service::SearchService;
