//! TheCocktailDB HTTP 请求方法

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;

use super::{SOURCE_NAME, TheCocktailDbLookup};

impl TheCocktailDbLookup {
    /// 执行 GET 请求，`query` 为 (键, 原始值)，值在此处做 URL 编码
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path, query);
        let request = self.client.get(&url);
        let response_text = HttpUtils::execute_request(request, SOURCE_NAME, "GET", &url).await?;
        HttpUtils::parse_json(&response_text, SOURCE_NAME)
    }

    pub(crate) fn build_url(&self, path: &str, query: &[(&str, &str)]) -> String {
        let query_string = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        if query_string.is_empty() {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}{path}?{query_string}", self.base_url)
        }
    }
}
