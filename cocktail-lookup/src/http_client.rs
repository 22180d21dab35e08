//! Generic HTTP client tools
//!
//! Shared request plumbing for lookup backends: sending, logging, status
//! classification and JSON parsing. Each backend still builds its own
//! `RequestBuilder` (URL, query string, headers).
//!
//! Nothing here retries. A failed lookup is reported once and the caller
//! decides whether to issue another one.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::LookupError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the body of a successful response
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor
    /// * `source_name` - backend name (for logging and error context)
    /// * `method_name` - request method name (such as "GET", used for logs)
    /// * `url` - request URL (for logging)
    ///
    /// # Returns
    /// * `Ok(response_text)` - body of a 2xx response
    /// * `Err(LookupError::Timeout | NetworkError)` - transport failure
    /// * `Err(LookupError::RateLimited)` - HTTP 429
    /// * `Err(LookupError::HttpStatus)` - any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        source_name: &str,
        method_name: &str,
        url: &str,
    ) -> Result<String, LookupError> {
        log::debug!("[{source_name}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout {
                    source: source_name.to_string(),
                    detail: e.to_string(),
                }
            } else {
                LookupError::NetworkError {
                    source: source_name.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("[{source_name}] Response Status: {}", status.as_u16());

        // Extract Retry-After header (before consuming response body)
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status.as_u16() == 429 {
            log::warn!("[{source_name}] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(LookupError::RateLimited {
                source: source_name.to_string(),
                retry_after,
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| LookupError::NetworkError {
                source: source_name.to_string(),
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!(
            "[{source_name}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        if !status.is_success() {
            log::warn!("[{source_name}] Non-success status (HTTP {})", status.as_u16());
            return Err(LookupError::HttpStatus {
                source: source_name.to_string(),
                status: status.as_u16(),
                body: (!response_text.is_empty()).then(|| truncate_for_log(&response_text)),
            });
        }

        Ok(response_text)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(LookupError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, source_name: &str) -> Result<T, LookupError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{source_name}] JSON parse failed: {e}");
            log::error!(
                "[{source_name}] Raw response: {}",
                truncate_for_log(response_text)
            );
            LookupError::ParseError {
                source: source_name.to_string(),
                detail: e.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Envelope {
            drinks: Option<Vec<String>>,
        }
        let result: Result<Envelope, LookupError> =
            HttpUtils::parse_json(r#"{"drinks":null}"#, "test");
        assert!(
            matches!(&result, Ok(Envelope { drinks: None })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Envelope {
            drinks: Option<Vec<String>>,
        }
        let result: Result<Envelope, LookupError> = HttpUtils::parse_json("<html>", "test");
        assert!(
            matches!(&result, Err(LookupError::ParseError { source, .. }) if source == "test"),
            "unexpected parse result: {result:?}"
        );
    }
}
