//! 详情面板
//!
//! 面板画在所属卡片之后，只在 `Visible` 阶段占据空间。

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::domain::DetailView;
use crate::model::{HitMap, HitTarget};
use crate::view::text::wrap;
use crate::view::theme::Styles;

/// 面板正文（已折行）
fn body(view: &DetailView, width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let mut lines: Vec<Line<'static>> = wrap(&view.instructions, width)
        .into_iter()
        .map(Line::from)
        .collect();

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(view.ingredients_heading, Styles::title())));

    for ingredient in &view.ingredients {
        for (i, part) in wrap(ingredient, width.saturating_sub(2)).into_iter().enumerate() {
            let bullet = if i == 0 { "• " } else { "  " };
            lines.push(Line::from(format!("{bullet}{part}")));
        }
    }

    lines
}

/// 面板在给定宽度下所需的高度（含边框）
pub fn height(view: &DetailView, width: u16) -> u16 {
    let inner_width = width.saturating_sub(2);
    u16::try_from(body(view, inner_width).len())
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// 渲染面板，并登记面板与关闭按钮的点击区域
pub fn render(view: &DetailView, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    let close = format!("[{}]", view.close_label);
    let block = Block::default()
        .title(Span::styled(format!(" {} ", view.title), Styles::title()))
        .title_top(Line::from(Span::styled(close.clone(), Styles::button())).right_aligned())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(area);

    frame.render_widget(Paragraph::new(body(view, inner.width)).block(block), area);

    hits.push(area, HitTarget::Panel);
    let close_width = u16::try_from(close.width()).unwrap_or(u16::MAX);
    if area.width > close_width + 2 {
        hits.push(
            Rect::new(area.right() - 1 - close_width, area.y, close_width, 1),
            HitTarget::PanelClose,
        );
    }
}
