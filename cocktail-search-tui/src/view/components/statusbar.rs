//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let mut hints = vec![("Tab", texts.hints.switch_focus)];

    match app.focus {
        FocusPanel::Search => hints.push(("Enter", texts.hints.search)),
        FocusPanel::Results => {
            hints.push(("↑↓", texts.hints.select));
            hints.push(("Enter", texts.hints.details));
        }
    }

    if app.panel.attached_to().is_some() {
        hints.push(("Esc", texts.hints.close_panel));
    }

    hints.push(("Alt+q", texts.common.quit));
    hints
}
