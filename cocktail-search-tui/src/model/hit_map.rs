//! 鼠标点击区域
//!
//! View 层在每帧绘制时登记可点击的区域，Event 层据此把坐标翻译为点击目标。

use ratatui::layout::{Position, Rect};

/// 点击目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    /// 搜索输入框
    SearchInput,
    /// 第 i 张卡片（非按钮部分）
    Card(usize),
    /// 第 i 张卡片上的详情按钮
    DetailsButton(usize),
    /// 详情面板内部
    Panel,
    /// 详情面板的关闭按钮
    PanelClose,
}

impl HitTarget {
    /// 点击该目标是否不应触发“外部点击关闭”
    pub fn suppresses_outside_close(&self) -> bool {
        matches!(
            self,
            HitTarget::Panel | HitTarget::PanelClose | HitTarget::DetailsButton(_)
        )
    }
}

/// 一帧内登记的点击区域
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记区域；后登记的区域覆盖在先登记的之上
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// 查找坐标处最上层的目标
    pub fn hit(&self, column: u16, row: u16) -> Option<&HitTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| target)
    }
}
