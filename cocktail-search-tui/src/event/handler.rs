//! 事件处理

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, PanelMessage, ResultsMessage, SearchMessage};
use crate::model::App;

/// 轮询终端事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 把终端事件翻译为消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Mouse(mouse_event) => handle_mouse_event(mouse_event, app),
        // 终端窗口大小改变，下一帧自动重绘
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if DefaultKeymap::CLOSE_PANEL.matches(&key) {
        return AppMessage::Panel(PanelMessage::Close);
    }

    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_results_keys(key)
    }
}

fn handle_search_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Search(SearchMessage::Submit);
    }
    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        // ↓: 进入结果区
        KeyCode::Down => AppMessage::ToggleFocus,
        KeyCode::Char(c)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Search(SearchMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_results_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::OPEN_DETAILS.matches(&key) {
        return AppMessage::Results(ResultsMessage::OpenSelected);
    }

    match key.code {
        // ↑ 或 k: 上一张
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Results(ResultsMessage::SelectPrevious),
        // ↓ 或 j: 下一张
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Results(ResultsMessage::SelectNext),
        KeyCode::Home => AppMessage::Results(ResultsMessage::SelectFirst),
        KeyCode::End => AppMessage::Results(ResultsMessage::SelectLast),
        // /: 回到搜索框
        KeyCode::Char('/') => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

fn handle_mouse_event(mouse: MouseEvent, app: &App) -> AppMessage {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            AppMessage::Click(app.hit_map.hit(mouse.column, mouse.row).cloned())
        }
        MouseEventKind::ScrollUp => AppMessage::Results(ResultsMessage::SelectPrevious),
        MouseEventKind::ScrollDown => AppMessage::Results(ResultsMessage::SelectNext),
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;

    use super::*;
    use crate::model::{FocusPanel, HitTarget};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn click_at(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn typing_goes_to_search_input() {
        let app = App::default();
        let msg = handle_event(press(KeyCode::Char('M'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Search(SearchMessage::Input('M'))));

        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Search(SearchMessage::Submit)));
    }

    #[test]
    fn enter_in_results_opens_details() {
        let mut app = App::default();
        app.focus = FocusPanel::Results;
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Results(ResultsMessage::OpenSelected)));

        let msg = handle_event(press(KeyCode::Char('j'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Results(ResultsMessage::SelectNext)));
    }

    #[test]
    fn global_keys() {
        let app = App::default();
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Panel(PanelMessage::Close)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = App::default();
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event, &app), AppMessage::Noop));
    }

    #[test]
    fn clicks_resolve_through_hit_map() {
        let mut app = App::default();
        app.hit_map
            .push(Rect::new(0, 5, 30, 1), HitTarget::DetailsButton(2));

        match handle_event(click_at(3, 5), &app) {
            AppMessage::Click(Some(HitTarget::DetailsButton(index))) => assert_eq!(index, 2),
            other => panic!("unexpected message: {other:?}"),
        }
        assert!(matches!(handle_event(click_at(3, 20), &app), AppMessage::Click(None)));
    }
}
