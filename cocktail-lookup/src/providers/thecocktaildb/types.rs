//! TheCocktailDB API 类型定义

use serde::Deserialize;

use crate::types::Drink;

/// `search.php` 响应
///
/// 无匹配时 API 返回 `{"drinks": null}`。
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    pub drinks: Option<Vec<Drink>>,
}
