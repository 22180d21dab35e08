//! 详情面板状态
//!
//! 同一时刻最多挂载一个面板。生命周期：
//!
//!     open()                tick(≥ show_at)           close()              tick(≥ remove_at)
//!   ────────▶ Pending ──────────────────────▶ Visible ────────▶ Closing ──────────────────────▶ (移除)
//!
//! - Pending：已挂载在卡片之后，但尚不可见（留给过渡效果的短暂延迟）
//! - Closing：立即隐藏，延迟后移除并清空引用
//! - 打开另一个面板时，旧面板立即移除

use std::time::{Duration, Instant};

use crate::model::domain::DetailView;

use super::listeners::{ClickListeners, ListenerId};

/// 面板的延迟配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelTimings {
    /// 挂载到可见之间的延迟
    pub show_delay: Duration,
    /// 隐藏到移除之间的延迟
    pub close_delay: Duration,
}

impl Default for PanelTimings {
    fn default() -> Self {
        Self {
            show_delay: Duration::from_millis(10),
            close_delay: Duration::from_millis(300),
        }
    }
}

/// 面板阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Pending { show_at: Instant },
    Visible,
    Closing { remove_at: Instant },
}

/// 一个已挂载的详情面板
#[derive(Debug)]
pub struct DetailPanel {
    pub view: DetailView,
    /// 所依附卡片在结果集中的位置
    pub anchor: usize,
    pub phase: PanelPhase,
    /// 外部点击监听器，关闭时释放
    listener: Option<ListenerId>,
}

impl DetailPanel {
    pub fn drink_id(&self) -> &str {
        &self.view.drink_id
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, PanelPhase::Visible)
    }

    pub fn is_closing(&self) -> bool {
        matches!(self.phase, PanelPhase::Closing { .. })
    }
}

/// 详情面板控制器
#[derive(Debug, Default)]
pub struct PanelState {
    /// 当前挂载的面板（唯一引用）
    pub active: Option<DetailPanel>,
    pub listeners: ClickListeners,
    pub timings: PanelTimings,
}

impl PanelState {
    pub fn new(timings: PanelTimings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// 打开面板；已有面板先被移除
    pub fn open(&mut self, view: DetailView, anchor: usize, now: Instant) {
        self.remove_now();
        debug_assert!(self.listeners.is_empty());

        let listener = self.listeners.acquire();
        log::debug!("detail panel opened for drink {} at card #{anchor}", view.drink_id);
        self.active = Some(DetailPanel {
            view,
            anchor,
            phase: PanelPhase::Pending {
                show_at: now + self.timings.show_delay,
            },
            listener: Some(listener),
        });
    }

    /// 关闭面板：立即隐藏并注销监听器，延迟后移除
    ///
    /// 没有面板或面板已在关闭中时返回 `false`。
    pub fn close(&mut self, now: Instant) -> bool {
        let Some(panel) = self.active.as_mut() else {
            return false;
        };
        if panel.is_closing() {
            return false;
        }

        if let Some(listener) = panel.listener.take() {
            self.listeners.release(listener);
        }
        panel.phase = PanelPhase::Closing {
            remove_at: now + self.timings.close_delay,
        };
        log::debug!(
            "detail panel closing for drink {} ({} listeners left)",
            panel.view.drink_id,
            self.listeners.len()
        );
        true
    }

    /// 立即移除面板（无过渡）
    pub fn remove_now(&mut self) {
        if let Some(mut panel) = self.active.take() {
            if let Some(listener) = panel.listener.take() {
                self.listeners.release(listener);
            }
        }
    }

    /// 推进延迟步骤
    pub fn tick(&mut self, now: Instant) {
        let Some(panel) = self.active.as_mut() else {
            return;
        };
        match panel.phase {
            PanelPhase::Pending { show_at } if now >= show_at => {
                panel.phase = PanelPhase::Visible;
            }
            PanelPhase::Closing { remove_at } if now >= remove_at => {
                self.active = None;
            }
            _ => {}
        }
    }

    /// 下一个待处理的延迟时刻
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.active.as_ref()?.phase {
            PanelPhase::Pending { show_at } => Some(show_at),
            PanelPhase::Closing { remove_at } => Some(remove_at),
            PanelPhase::Visible => None,
        }
    }

    /// 面板所依附的饮品 ID（含关闭中的面板）
    pub fn attached_to(&self) -> Option<&str> {
        self.active.as_ref().map(DetailPanel::drink_id)
    }

    /// 该饮品是否处于“打开”状态（已挂载且未在关闭中）
    pub fn is_open_for(&self, drink_id: &str) -> bool {
        self.active
            .as_ref()
            .is_some_and(|p| !p.is_closing() && p.drink_id() == drink_id)
    }

    /// 是否有面板正在监听外部点击
    pub fn listens_for_outside_clicks(&self) -> bool {
        self.active
            .as_ref()
            .and_then(|p| p.listener)
            .is_some_and(|id| self.listeners.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(id: &str) -> DetailView {
        DetailView {
            drink_id: id.to_string(),
            title: format!("{id} - Preparación"),
            instructions: "Shake.".to_string(),
            ingredients_heading: "Ingredientes:",
            ingredients: vec!["2 oz Gin".to_string()],
            close_label: "×",
        }
    }

    #[test]
    fn opens_pending_then_visible_after_show_delay() {
        let mut panel = PanelState::default();
        let t0 = Instant::now();
        panel.open(view("A"), 0, t0);

        assert!(panel.is_open_for("A"));
        assert!(!panel.active.as_ref().is_some_and(DetailPanel::is_visible));

        panel.tick(t0 + Duration::from_millis(5));
        assert!(!panel.active.as_ref().is_some_and(DetailPanel::is_visible));

        panel.tick(t0 + Duration::from_millis(10));
        assert!(panel.active.as_ref().is_some_and(DetailPanel::is_visible));
    }

    #[test]
    fn opening_another_replaces_and_keeps_single_listener() {
        let mut panel = PanelState::default();
        let t0 = Instant::now();
        panel.open(view("A"), 0, t0);
        panel.open(view("B"), 0, t0);

        assert_eq!(panel.attached_to(), Some("B"));
        assert!(!panel.is_open_for("A"));
        assert_eq!(panel.listeners.len(), 1);
    }

    #[test]
    fn close_hides_immediately_then_removes_after_delay() {
        let mut panel = PanelState::default();
        let t0 = Instant::now();
        panel.open(view("A"), 0, t0);
        panel.tick(t0 + Duration::from_millis(10));

        assert!(panel.close(t0 + Duration::from_millis(100)));
        assert!(!panel.is_open_for("A"));
        assert_eq!(panel.attached_to(), Some("A"));
        assert!(panel.listeners.is_empty());
        assert!(!panel.listens_for_outside_clicks());

        panel.tick(t0 + Duration::from_millis(399));
        assert_eq!(panel.attached_to(), Some("A"));

        panel.tick(t0 + Duration::from_millis(400));
        assert_eq!(panel.attached_to(), None);
    }

    #[test]
    fn closing_twice_is_noop() {
        let mut panel = PanelState::default();
        let t0 = Instant::now();
        assert!(!panel.close(t0));
        panel.open(view("A"), 0, t0);
        assert!(panel.close(t0));
        assert!(!panel.close(t0 + Duration::from_millis(50)));
        assert_eq!(
            panel.next_deadline(),
            Some(t0 + Duration::from_millis(300))
        );
    }

    #[test]
    fn repeated_open_close_cycles_do_not_accumulate_listeners() {
        let mut panel = PanelState::default();
        let mut now = Instant::now();
        for i in 0..20 {
            panel.open(view(&i.to_string()), 0, now);
            assert_eq!(panel.listeners.len(), 1);
            panel.close(now);
            assert!(panel.listeners.is_empty());
            now += Duration::from_millis(301);
            panel.tick(now);
            assert!(panel.active.is_none());
        }
    }

    #[test]
    fn reopen_while_closing_removes_old_immediately() {
        let mut panel = PanelState::default();
        let t0 = Instant::now();
        panel.open(view("A"), 0, t0);
        panel.close(t0);
        panel.open(view("B"), 0, t0 + Duration::from_millis(50));

        assert_eq!(panel.attached_to(), Some("B"));
        assert!(panel.listens_for_outside_clicks());

        // A 的移除时刻到了也不能影响 B
        panel.tick(t0 + Duration::from_millis(300));
        assert!(panel.is_open_for("B"));
    }
}
