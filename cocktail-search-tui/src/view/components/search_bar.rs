//! 搜索框与其下方的消息行

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, HitMap, HitTarget};
use crate::view::theme::Styles;

/// 渲染搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    let texts = &t().search;
    let focused = app.focus.is_search();

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);

    let content = if app.search.input.is_empty() {
        Line::from(Span::styled(texts.placeholder, Styles::muted()))
    } else {
        Line::from(app.search.input.as_str())
    };

    // 输入过长时只显示尾部
    let input_width = u16::try_from(app.search.input.width()).unwrap_or(u16::MAX);
    let scroll = input_width.saturating_sub(inner.width.saturating_sub(1));

    frame.render_widget(Paragraph::new(content).block(block).scroll((0, scroll)), area);
    hits.push(area, HitTarget::SearchInput);

    if focused && inner.width > 0 && inner.height > 0 {
        let x = inner.x + (input_width - scroll).min(inner.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// 渲染单槽消息行：错误优先，其次是加载指示
pub fn render_message(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().search;

    let line = if let Some(error) = &app.search.error {
        Line::from(Span::styled(format!(" ✗ {error}"), Styles::error()))
    } else if app.search.loading {
        Line::from(Span::styled(format!(" ⋯ {}", texts.loading), Styles::warning()))
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}
