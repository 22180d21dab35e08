//! 结果区视图
//!
//! 卡片纵向排列，可见的详情面板插在所属卡片之后。
//! 不保存滚动状态：每帧根据选中的卡片（及其面板）计算偏移。

use std::ops::Range;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, DetailPanel, HitMap, ResultNode};
use crate::view::components::card::{self, CARD_HEIGHT};
use crate::view::components::detail_panel;
use crate::view::theme::Styles;

/// 渲染结果区
pub fn render(app: &App, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    let texts = t();
    let title = if app.results.is_empty() {
        format!(" {} ", texts.search.results_title)
    } else {
        format!(" {} ({}) ", texts.search.results_title, app.results.len())
    };

    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_results()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.results.is_empty() {
        render_empty(app, frame, inner);
    } else {
        render_cards(app, frame, inner, hits);
    }
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().search;
    let line = if app.search.no_results {
        Line::from(Span::styled(format!("  {}", texts.no_results), Styles::warning()))
    } else if app.search.loading {
        Line::default()
    } else {
        Line::from(Span::styled(format!("  {}", texts.idle_hint), Styles::muted()))
    };

    frame.render_widget(Paragraph::new(vec![Line::default(), line]), area);
}

/// 当前可见（占据空间）的面板
fn visible_panel(app: &App) -> Option<&DetailPanel> {
    app.panel.active.as_ref().filter(|p| p.is_visible())
}

fn render_cards(app: &App, frame: &mut Frame, area: Rect, hits: &mut HitMap) {
    let panel = visible_panel(app);
    let nodes = app.results.nodes(panel.map(|p| p.anchor));
    let heights: Vec<u16> = nodes
        .iter()
        .map(|node| match node {
            ResultNode::Card(_) => CARD_HEIGHT,
            ResultNode::Panel => panel.map_or(0, |p| detail_panel::height(&p.view, area.width)),
        })
        .collect();

    // 选中的卡片与紧随其后的面板要尽量完整可见
    let selected = app.results.selected;
    let start = nodes
        .iter()
        .position(|n| *n == ResultNode::Card(selected))
        .unwrap_or(0);
    let mut end = start + 1;
    if nodes.get(end) == Some(&ResultNode::Panel) {
        end += 1;
    }
    let offset = scroll_offset(&heights, start..end, area.height);

    let cards = app.results.cards();
    let mut top: u16 = 0;
    for (node, &height) in nodes.iter().zip(&heights) {
        let node_top = top;
        top = top.saturating_add(height);
        if node_top < offset {
            continue;
        }

        let rel = node_top - offset;
        if rel >= area.height {
            break;
        }
        let rect = Rect::new(area.x, area.y + rel, area.width, height.min(area.height - rel));

        match *node {
            ResultNode::Card(i) => {
                if let Some(view) = cards.get(i) {
                    card::render(view, i, i == selected, frame, rect, hits);
                }
            }
            ResultNode::Panel => {
                if let Some(panel) = panel {
                    detail_panel::render(&panel.view, frame, rect, hits);
                }
            }
        }
    }
}

/// 让 `focus` 范围内的节点落在视口中的最小偏移
///
/// 范围比视口高时，优先保证其顶部可见。
fn scroll_offset(heights: &[u16], focus: Range<usize>, viewport: u16) -> u16 {
    let sum = |range: &[u16]| range.iter().fold(0u16, |acc, h| acc.saturating_add(*h));
    let top = sum(&heights[..focus.start]);
    let bottom = top.saturating_add(sum(&heights[focus]));

    if bottom <= viewport {
        0
    } else {
        (bottom - viewport).min(top)
    }
}
