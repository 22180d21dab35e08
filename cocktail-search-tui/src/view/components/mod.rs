//! 可复用的 UI 组件

pub mod card;
pub mod detail_panel;
pub mod search_bar;
pub mod statusbar;
