//! 后端公共工具函数

use reqwest::{Client, Url};

use crate::error::{LookupError, Result};
use crate::types::LookupConfig;

// ============ HTTP Client ============

/// 创建带超时配置的 HTTP Client
pub fn create_http_client(config: &LookupConfig, source: &str) -> Result<Client> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(|e| LookupError::NetworkError {
            source: source.to_string(),
            detail: format!("Failed to create HTTP client: {e}"),
        })
}

// ============ URL 处理 ============

/// 校验并规范化 API 根地址（去掉末尾的 `/`）
pub fn normalize_base_url(base_url: &str, source: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let invalid = |detail: String| LookupError::InvalidParameter {
        source: source.to_string(),
        param: "base_url".to_string(),
        detail,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(format!("{trimmed}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme: {}", url.scheme())));
    }

    Ok(trimmed.to_string())
}
