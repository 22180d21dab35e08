//! 配置服务
//!
//! 配置文件位于 `<config_dir>/cocktail-search/config.toml`，不存在时使用默认值。
//! 每个分区都带 `#[serde(default)]`，只写部分键也能解析。
//!
//! ```toml
//! [ui]
//! language = "es-ES"
//! theme = "dark"
//!
//! [api]
//! base_url = "https://www.thecocktaildb.com/api/json/v1/1"
//! connect_timeout_secs = 10
//! request_timeout_secs = 30
//!
//! [search]
//! popular = ["margarita", "mojito"]
//! stale_responses = "latest-only"   # 或 "legacy"
//!
//! [panel]
//! show_delay_ms = 10
//! close_delay_ms = 300
//!
//! [log]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use cocktail_lookup::{LookupConfig, DEFAULT_BASE_URL};
use serde::Deserialize;

use crate::i18n::Language;
use crate::model::{PanelTimings, StaleResponsePolicy};
use crate::view::theme::Theme;

const APP_DIR: &str = "cocktail-search";

/// 配置加载错误
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// 应用配置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub panel: PanelConfig,
    pub log: LogConfig,
}

/// `[ui]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// 语言代码，如 "es-ES"、"en-US"
    pub language: String,
    pub theme: Theme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            language: Language::default().code().to_string(),
            theme: Theme::Dark,
        }
    }
}

impl UiConfig {
    /// 解析语言；无法识别时退回默认语言
    pub fn language(&self) -> Language {
        Language::from_code(&self.language).unwrap_or_else(|| {
            log::warn!("unknown language {:?}, falling back to default", self.language);
            Language::default()
        })
    }
}

/// `[api]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

/// `[search]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// 启动时随机挑选的搜索词
    pub popular: Vec<String>,
    pub stale_responses: StaleResponsePolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            popular: ["margarita", "mojito", "cosmopolitan", "martini", "daiquiri"]
                .into_iter()
                .map(String::from)
                .collect(),
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}

/// `[panel]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub show_delay_ms: u64,
    pub close_delay_ms: u64,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            show_delay_ms: 10,
            close_delay_ms: 300,
        }
    }
}

impl PanelConfig {
    pub fn timings(&self) -> PanelTimings {
        PanelTimings {
            show_delay: Duration::from_millis(self.show_delay_ms),
            close_delay: Duration::from_millis(self.close_delay_ms),
        }
    }
}

/// `[log]`
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` 语法，`RUST_LOG` 优先
    pub level: String,
    /// 日志目录；缺省为 `<cache_dir>/cocktail-search/logs`
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl LogConfig {
    pub fn log_dir(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("logs")
        })
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig, ConfigError>;
}

/// 本地配置服务
pub struct LocalConfigService {
    path: PathBuf,
}

impl LocalConfigService {
    /// 使用默认路径
    pub fn new() -> Self {
        Self::with_path(
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join("config.toml"),
        )
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig, ConfigError> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}
