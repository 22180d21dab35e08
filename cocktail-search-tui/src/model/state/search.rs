//! 搜索栏状态

use cocktail_lookup::{Drink, LookupError};
use serde::Deserialize;

/// 过期响应处理策略
///
/// 多个查询重叠时，较慢的旧响应可能晚于新响应到达。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaleResponsePolicy {
    /// 只接受最近一次发出的查询的响应，旧响应被丢弃（后台任务同时被中止）
    #[default]
    LatestOnly,
    /// 按到达顺序应用每个响应，旧响应可能覆盖新结果
    Legacy,
}

/// 查询来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOrigin {
    /// 用户主动搜索：失败时显示错误
    User,
    /// 启动时的默认内容：失败只记日志
    Startup,
}

/// 一次出站查询
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    /// 单调递增的序号
    pub seq: u64,
    pub term: String,
    pub origin: LookupOrigin,
}

/// 一次查询的结果，由后台任务回传给主循环
#[derive(Debug, Clone)]
pub struct LookupCompletion {
    pub request: LookupRequest,
    pub result: Result<Vec<Drink>, LookupError>,
}

/// 搜索栏状态
#[derive(Debug, Default)]
pub struct SearchState {
    /// 输入框内容
    pub input: String,
    /// 是否正在加载
    pub loading: bool,
    /// 单槽错误信息
    pub error: Option<String>,
    /// 最近一次成功搜索没有结果
    pub no_results: bool,
    /// 过期响应处理策略
    pub policy: StaleResponsePolicy,
    /// 最近一次发出的查询序号
    latest_seq: u64,
}

impl SearchState {
    pub fn new(policy: StaleResponsePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// 输入字符；任何编辑都会清除错误
    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.clear_error();
    }

    /// 删除最后一个字符
    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.clear_error();
        }
    }

    /// 清空输入
    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.input.clear();
            self.clear_error();
        }
    }

    /// 去除首尾空白后的查询词，空则为 `None`
    pub fn query(&self) -> Option<&str> {
        Some(self.input.trim()).filter(|q| !q.is_empty())
    }

    /// 显示错误（替换已有的错误）
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// 分配新序号，生成查询
    pub fn next_request(&mut self, term: impl Into<String>, origin: LookupOrigin) -> LookupRequest {
        self.latest_seq += 1;
        LookupRequest {
            seq: self.latest_seq,
            term: term.into(),
            origin,
        }
    }

    /// 最近一次发出的查询序号
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// 按当前策略判断是否接受该序号的响应
    pub fn accepts(&self, seq: u64) -> bool {
        match self.policy {
            StaleResponsePolicy::Legacy => true,
            StaleResponsePolicy::LatestOnly => seq == self.latest_seq,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_clears_error() {
        let mut state = SearchState::default();
        state.show_error("boom");
        state.insert_char('m');
        assert_eq!(state.error, None);

        state.show_error("boom");
        state.backspace();
        assert_eq!(state.error, None);
        assert!(state.input.is_empty());
    }

    #[test]
    fn backspace_on_empty_input_keeps_error() {
        let mut state = SearchState::default();
        state.show_error("Por favor, ingresa un término de búsqueda");
        state.backspace();
        assert!(state.error.is_some());
    }

    #[test]
    fn new_error_replaces_previous() {
        let mut state = SearchState::default();
        state.show_error("first");
        state.show_error("second");
        assert_eq!(state.error.as_deref(), Some("second"));
    }

    #[test]
    fn query_is_trimmed() {
        let mut state = SearchState::default();
        state.input = "  mojito \t".to_string();
        assert_eq!(state.query(), Some("mojito"));
        state.input = "   ".to_string();
        assert_eq!(state.query(), None);
    }

    #[test]
    fn sequence_numbers_increase() {
        let mut state = SearchState::default();
        let a = state.next_request("a", LookupOrigin::Startup);
        let b = state.next_request("b", LookupOrigin::User);
        assert!(b.seq > a.seq);
        assert_eq!(state.latest_seq(), b.seq);
    }

    #[test]
    fn latest_only_rejects_older_sequence() {
        let mut state = SearchState::new(StaleResponsePolicy::LatestOnly);
        let old = state.next_request("a", LookupOrigin::User);
        let new = state.next_request("b", LookupOrigin::User);
        assert!(!state.accepts(old.seq));
        assert!(state.accepts(new.seq));
    }

    #[test]
    fn legacy_accepts_everything() {
        let mut state = SearchState::new(StaleResponsePolicy::Legacy);
        let old = state.next_request("a", LookupOrigin::User);
        state.next_request("b", LookupOrigin::User);
        assert!(state.accepts(old.seq));
    }
}
