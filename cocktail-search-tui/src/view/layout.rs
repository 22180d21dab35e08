//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitMap};

use super::components;
use super::pages;
use super::theme::colors;

/// 渲染主布局，返回本帧登记的点击区域
pub fn render(app: &App, frame: &mut Frame) -> HitMap {
    let mut hits = HitMap::new();

    // 标题栏 + 搜索框 + 消息行 + 结果区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_title_bar(frame, main_layout[0]);
    components::search_bar::render(app, frame, main_layout[1], &mut hits);
    components::search_bar::render_message(app, frame, main_layout[2]);
    pages::results::render(app, frame, main_layout[3], &mut hits);
    components::statusbar::render(app, frame, main_layout[4]);

    hits
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}
