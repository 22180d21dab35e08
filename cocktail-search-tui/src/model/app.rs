//! 应用主状态结构

use std::time::{Duration, Instant};

use crate::backend::AppConfig;

use super::{FocusPanel, HitMap, PanelState, ResultsState, SearchState};

/// 主循环的最长等待时间
const IDLE_POLL: Duration = Duration::from_millis(100);

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 搜索栏状态
    pub search: SearchState,

    /// 结果集与卡片
    pub results: ResultsState,

    /// 详情面板
    pub panel: PanelState,

    /// 上一帧登记的点击区域
    pub hit_map: HitMap,

    /// 启动时随机挑选的热门搜索词
    pub popular: Vec<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(config: &AppConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Search,
            search: SearchState::new(config.search.stale_responses),
            results: ResultsState::new(),
            panel: PanelState::new(config.panel.timings()),
            hit_map: HitMap::new(),
            popular: config.search.popular.clone(),
        }
    }

    /// 下一次轮询输入的等待时间
    ///
    /// 面板有待处理的延迟步骤时缩短等待，使其按时推进。
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.panel
            .next_deadline()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(now).min(IDLE_POLL)
            })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
