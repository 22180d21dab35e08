//!┌─────────────────────────────────────────────────────────────────────────────┐
//!│                              主循环 (app.rs)                                │
//!│                                                                             │
//!│   ┌─────────┐          ┌──────────────┐          ┌──────────┐               │
//!│   │  Event  │ ───────▶ │   Message    │ ───────▶ │  Update  │ ── Command ─┐ │
//!│   │   层    │   翻译    │     层       │   消费    │    层    │             │ │
//!│   └─────────┘          │ AppMessage   │          └────┬─────┘             │ │
//!│        ▲               │ SearchMsg    │               │ 修改              │ │
//!│        │               │ ResultsMsg   │               ▼                   ▼ │
//!│   ┌─────────┐          │ PanelMsg     │          ┌──────────┐    ┌────────┐ │
//!│   │  View   │ ◀─ 读取 ─┤              │          │  Model   │    │Backend │ │
//!│   │   层    │          └──────▲───────┘          │    层    │    │   层   │ │
//!│   └─────────┘                 │                  └──────────┘    └───┬────┘ │
//!│                               └──── LookupFinished（channel 回传）──┘      │
//!└─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/message/mod.rs
//! Message 层：描述“发生了什么”
//!
//! 消息来自三处：
//!     - Event 层翻译键盘 / 鼠标输入
//!     - 主循环从后台 channel 取出的查询结果（LookupFinished）
//!     - 主循环自身的定时推进（Tick）与启动加载（LoadDefault）

mod app;
mod panel;
mod results;
mod search;

pub use app::AppMessage;
pub use panel::PanelMessage;
pub use results::ResultsMessage;
pub use search::SearchMessage;
