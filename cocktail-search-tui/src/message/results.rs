/// 结果区消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    /// 为选中的卡片打开详情
    OpenSelected,
}
