//! 饮品卡片

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::domain::CardView;
use crate::model::{HitMap, HitTarget};
use crate::view::text::truncate;
use crate::view::theme::Styles;

/// 卡片高度（含边框）：分类、图片、按钮各一行
pub const CARD_HEIGHT: u16 = 5;

/// 渲染一张卡片，并登记卡片与详情按钮的点击区域
pub fn render(
    card: &CardView,
    index: usize,
    selected: bool,
    frame: &mut Frame,
    area: Rect,
    hits: &mut HitMap,
) {
    let texts = &t().cards;
    let title_style = if selected {
        Styles::title().add_modifier(Modifier::REVERSED)
    } else {
        Styles::title()
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", card.title), title_style))
        .borders(Borders::ALL)
        .border_style(Styles::border(selected));
    let inner = block.inner(area);
    let width = usize::from(inner.width);

    // 终端里无法显示图片，用替代文本和地址代替
    let image = if card.image.is_fallback {
        format!("{}: {}", texts.image_label, texts.image_unavailable)
    } else {
        format!("{}: {} <{}>", texts.image_label, card.image.alt, card.image.url)
    };
    let button = format!("[ {} ]", card.details.label);

    let lines = vec![
        Line::from(truncate(&card.category_line, width)),
        Line::from(Span::styled(truncate(&image, width), Styles::muted())),
        Line::from(Span::styled(truncate(&button, width), Styles::button())),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);

    hits.push(area, HitTarget::Card(index));
    if inner.height >= 3 {
        let button_width = u16::try_from(button.width()).unwrap_or(u16::MAX).min(inner.width);
        hits.push(
            Rect::new(inner.x, inner.y + 2, button_width, 1),
            HitTarget::DetailsButton(index),
        );
    }
}
