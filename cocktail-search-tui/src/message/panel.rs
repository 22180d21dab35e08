/// 详情面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelMessage {
    /// 为指定饮品打开详情
    Open(String),
    /// 关闭当前面板
    Close,
}
