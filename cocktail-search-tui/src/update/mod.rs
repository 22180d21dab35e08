//!
//! src/update/mod.rs
//! Update 层：消费消息，修改 Model
//!
//! `update()` 是唯一修改 `App` 的入口。需要副作用（网络查询）时，
//! 它不直接执行，而是返回一个 `Command` 交给主循环转发给 Backend 层。
//! 这样 Update 层本身保持同步、可测试。
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod search;     // 提交、启动加载、应用查询结果
//!         mod results;    // 卡片选择
//!         mod panel;      // 详情面板开关与点击分发

mod panel;
mod results;
mod search;

use crate::message::AppMessage;
use crate::model::{App, LookupRequest};

/// Update 层要求主循环执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 无副作用
    None,
    /// 发起一次查询
    Lookup(LookupRequest),
}

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Command::None
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
            Command::None
        }

        AppMessage::Search(search_msg) => search::update(app, search_msg),

        AppMessage::Results(results_msg) => {
            results::update(app, results_msg);
            Command::None
        }

        AppMessage::Panel(panel_msg) => {
            panel::update(app, panel_msg);
            Command::None
        }

        AppMessage::Click(target) => {
            panel::click(app, target);
            Command::None
        }

        AppMessage::LookupFinished(completion) => {
            search::apply_completion(app, completion);
            Command::None
        }

        AppMessage::LoadDefault => search::load_default(app, &mut rand::rng()),

        AppMessage::Tick(now) => {
            app.panel.tick(now);
            Command::None
        }

        AppMessage::Noop => Command::None,
    }
}
