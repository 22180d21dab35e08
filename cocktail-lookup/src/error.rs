use serde::{Deserialize, Serialize};

/// Unified error type for all lookup operations.
///
/// Each variant includes a `source` field identifying which lookup backend
/// produced the error, plus variant-specific context. All variants are
/// serializable for structured error reporting.
///
/// None of these errors is retried by the library: the caller decides whether
/// a new lookup should be issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum LookupError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Backend that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Backend that produced the error.
        source: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a non-success HTTP status.
    HttpStatus {
        /// Backend that produced the error.
        source: String,
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        body: Option<String>,
    },

    /// The API rate limit has been exceeded (HTTP 429).
    RateLimited {
        /// Backend that produced the error.
        source: String,
        /// Suggested wait time in seconds, if provided by the API.
        retry_after: Option<u64>,
    },

    /// Failed to parse the API response, or the response had an unexpected shape.
    ParseError {
        /// Backend that produced the error.
        source: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter or client setting is invalid.
    InvalidParameter {
        /// Backend that produced the error.
        source: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl LookupError {
    /// 是否为预期行为（用户输入、对端限流等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. } | Self::RateLimited { .. }
        )
    }

    /// Backend identifier carried by every variant.
    #[must_use]
    pub fn source_name(&self) -> &str {
        match self {
            Self::NetworkError { source, .. }
            | Self::Timeout { source, .. }
            | Self::HttpStatus { source, .. }
            | Self::RateLimited { source, .. }
            | Self::ParseError { source, .. }
            | Self::InvalidParameter { source, .. } => source,
        }
    }
}

impl std::fmt::Display for LookupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { source, detail } => {
                write!(f, "[{source}] Network error: {detail}")
            }
            Self::Timeout { source, detail } => {
                write!(f, "[{source}] Request timed out: {detail}")
            }
            Self::HttpStatus {
                source,
                status,
                body,
            } => {
                if let Some(body) = body {
                    write!(f, "[{source}] HTTP {status}: {body}")
                } else {
                    write!(f, "[{source}] HTTP {status}")
                }
            }
            Self::RateLimited {
                source,
                retry_after,
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{source}] Rate limited, retry after {secs}s")
                } else {
                    write!(f, "[{source}] Rate limited")
                }
            }
            Self::ParseError { source, detail } => {
                write!(f, "[{source}] Parse error: {detail}")
            }
            Self::InvalidParameter {
                source,
                param,
                detail,
            } => {
                write!(f, "[{source}] Invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for LookupError {}

/// Result type alias for lookup operations.
pub type Result<T> = std::result::Result<T, LookupError>;
