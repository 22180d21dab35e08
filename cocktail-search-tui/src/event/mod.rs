//!
//! src/event/mod.rs
//! Event 层：把终端原始事件翻译为消息
//!
//!     poll_event()     // 在给定超时内等待一个终端事件
//!     handle_event()   // 键盘 / 鼠标事件 → AppMessage
//!
//! 鼠标点击通过上一帧的 `HitMap` 查出目标，翻译为 `AppMessage::Click`。
//! 只处理 Press 事件，避免部分终端上的按键重复。

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
