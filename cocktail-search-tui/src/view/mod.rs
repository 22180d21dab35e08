//!
//! src/view/mod.rs
//! View 层：只读 Model，绘制终端画面
//!
//!     layout.rs               // 五段式主布局
//!     theme.rs                // 深色 / 浅色主题
//!     text.rs                 // 按显示宽度折行、截断
//!     components/             // 搜索框、卡片、详情面板、状态栏
//!     pages/results.rs        // 结果区（卡片 + 面板 + 滚动）
//!
//! 每帧绘制的同时登记可点击区域，返回的 `HitMap` 由主循环存回 `App`，
//! 供下一次鼠标事件查询。

mod components;
mod layout;
mod pages;
mod text;
pub mod theme;

use ratatui::Frame;

use crate::model::{App, HitMap};

/// 渲染一帧
pub fn render(app: &App, frame: &mut Frame) -> HitMap {
    layout::render(app, frame)
}
