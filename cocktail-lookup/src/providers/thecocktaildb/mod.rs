//! TheCocktailDB lookup backend

mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::error::Result;
use crate::providers::common::{create_http_client, normalize_base_url};
use crate::types::LookupConfig;

pub(crate) use types::SearchEnvelope;

/// 后端标识符
pub(crate) const SOURCE_NAME: &str = "thecocktaildb";
/// 按名称搜索的路径
pub(crate) const SEARCH_PATH: &str = "/search.php";

/// TheCocktailDB lookup backend
#[derive(Debug)]
pub struct TheCocktailDbLookup {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl TheCocktailDbLookup {
    pub fn new(config: &LookupConfig) -> Result<Self> {
        Ok(Self {
            client: create_http_client(config, SOURCE_NAME)?,
            base_url: normalize_base_url(&config.base_url, SOURCE_NAME)?,
        })
    }
}
