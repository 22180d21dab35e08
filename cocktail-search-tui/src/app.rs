//!
//! app.rs
//! 应用主循环
//!
//! 启动时先发出一次 `LoadDefault`，随后每轮：
//!
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI，并记下点击区域
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     for c in service.drain() { update(LookupFinished(c)) }   // 应用已完成的查询
//!     update(Tick(now))                               // 推进面板的延迟步骤
//!     if let Some(event) = poll_event(app.poll_timeout(now)) {
//!         let msg = handle_event(event, &app);        // 原始事件 → 消息
//!         service.execute(update(&mut app, msg));     // 更新状态，执行副作用
//!     }
//! }
//!
//! 等待时间平时为 100ms；面板有待处理的延迟步骤时缩短到截止时刻。

use std::time::Instant;

use anyhow::Result;

use crate::backend::SearchService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, service: &mut SearchService) -> Result<()> {
    service.execute(update::update(app, AppMessage::LoadDefault));

    loop {
        // 1. 渲染 UI
        let mut hit_map = None;
        terminal.draw(|frame| {
            hit_map = Some(view::render(app, frame));
        })?;
        if let Some(hit_map) = hit_map {
            app.hit_map = hit_map;
        }

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的查询
        for completion in service.drain() {
            let cmd = update::update(app, AppMessage::LookupFinished(completion));
            service.execute(cmd);
        }

        // 4. 推进延迟步骤
        let now = Instant::now();
        update::update(app, AppMessage::Tick(now));

        // 5. 轮询输入事件
        if let Some(event) = event::poll_event(app.poll_timeout(now))? {
            let msg = event::handle_event(event, app);
            let cmd = update::update(app, msg);
            service.execute(cmd);
        }
    }

    Ok(())
}
