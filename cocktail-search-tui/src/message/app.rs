use std::time::Instant;

use crate::model::{HitTarget, LookupCompletion};

use super::{PanelMessage, ResultsMessage, SearchMessage};

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 切换焦点（搜索框 ↔ 结果区）
    ToggleFocus,

    /// 搜索栏消息
    Search(SearchMessage),

    /// 结果区消息
    Results(ResultsMessage),

    /// 详情面板消息
    Panel(PanelMessage),

    /// 鼠标左键点击；`None` 表示点在了没有登记的空白处
    Click(Option<HitTarget>),

    /// 后台查询完成
    LookupFinished(LookupCompletion),

    /// 启动时加载默认内容
    LoadDefault,

    /// 推进延迟步骤
    Tick(Instant),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
