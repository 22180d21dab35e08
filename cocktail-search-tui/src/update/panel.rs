//! 详情面板开关与点击分发

use std::time::Instant;

use crate::i18n::t;
use crate::message::PanelMessage;
use crate::model::domain::build_detail;
use crate::model::{App, FocusPanel, HitTarget};

pub fn update(app: &mut App, msg: PanelMessage) {
    match msg {
        PanelMessage::Open(id) => match app.results.position_of(&id) {
            Some(index) => open_details(app, index),
            None => log::warn!("details requested for unknown drink {id:?}"),
        },
        PanelMessage::Close => {
            app.panel.close(Instant::now());
        }
    }
}

/// 打开第 `index` 张卡片的详情面板，并选中该卡片
pub fn open_details(app: &mut App, index: usize) {
    let Some(drink) = app.results.drink_at(index) else {
        log::warn!("details requested for missing card #{index}");
        return;
    };

    let view = build_detail(drink, &t().panel);
    if app.panel.is_open_for(&view.drink_id) {
        log::debug!("details for {} already open, rebuilding panel", view.drink_id);
    }

    app.panel.open(view, index, Instant::now());
    app.results.select(index);
}

/// 分发一次鼠标点击
///
/// 先交给被点击的目标处理，再交给外部点击监听器（若已登记）。
/// 点击面板内部或任何详情按钮都不算外部点击。
pub fn click(app: &mut App, target: Option<HitTarget>) {
    let outside = !matches!(&target, Some(t) if t.suppresses_outside_close());

    match target {
        Some(HitTarget::SearchInput) => app.focus = FocusPanel::Search,
        Some(HitTarget::Card(index)) => {
            app.focus = FocusPanel::Results;
            app.results.select(index);
        }
        Some(HitTarget::DetailsButton(index)) => {
            app.focus = FocusPanel::Results;
            open_details(app, index);
        }
        Some(HitTarget::PanelClose) => {
            app.panel.close(Instant::now());
        }
        Some(HitTarget::Panel) | None => {}
    }

    if outside && app.panel.listens_for_outside_clicks() {
        log::debug!("outside click closes the detail panel");
        app.panel.close(Instant::now());
    }
}
