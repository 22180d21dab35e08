use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Drink;

/// 鸡尾酒查询后端 Trait
///
/// 每次调用对应一次出站请求；本 crate 不做缓存与重试。
#[async_trait]
pub trait CocktailLookup: Debug + Send + Sync {
    /// 后端标识符（用于日志与错误上下文）
    fn id(&self) -> &'static str;

    /// 按名称搜索
    ///
    /// 无匹配时返回空列表，而非错误。
    async fn search_by_name(&self, term: &str) -> Result<Vec<Drink>>;
}
