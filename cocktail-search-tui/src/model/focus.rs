//! 焦点状态定义

/// 焦点面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 搜索输入框
    #[default]
    Search,
    /// 结果区（卡片列表）
    Results,
}

impl FocusPanel {
    /// 切换到另一个面板
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Results,
            FocusPanel::Results => FocusPanel::Search,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    pub fn is_results(self) -> bool {
        matches!(self, FocusPanel::Results)
    }
}
