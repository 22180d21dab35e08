//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Results）
//!         mod hit_map;        // 上一帧的鼠标可点击区域
//!
//!         pub mod domain;     // 由 Drink 构建的卡片 / 详情视图模型（纯函数）
//!         pub mod state;      // 搜索、结果、详情面板、点击监听器
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             pub should_quit: bool,          // 退出标志
//!             pub focus: FocusPanel,          // 当前焦点
//!             pub search: SearchState,        // 输入框、加载指示、单槽错误、序号
//!             pub results: ResultsState,      // 结果集 + 卡片（一一对应）
//!             pub panel: PanelState,          // 至多一个详情面板
//!             pub hit_map: HitMap,            // 供鼠标点击查询
//!             pub popular: Vec<String>,       // 启动时的候选搜索词
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、一次搜索的数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         用户在输入框按 Enter
//!             ↓
//!         update/search.rs 校验输入，分配序号，返回 Command::Lookup
//!             ↓
//!         backend/search_service.rs 在 tokio 上执行查询，完成后经 channel 回传
//!             ↓
//!         app.rs 主循环取出 LookupCompletion，交给 update 层
//!             ↓
//!         SearchState::accepts() 按策略决定应用或丢弃
//!             ↓
//!         ResultsState::replace() 重建卡片
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、详情面板
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     PanelState 持有唯一的 DetailPanel：
//!         - open()：先移除旧面板，登记外部点击监听器，进入 Pending
//!         - tick()：Pending → Visible；Closing → 移除
//!         - close()：立即隐藏，注销监听器，进入 Closing
//!
//!     View 层把面板画在所属卡片之后（ResultsState::nodes）。
//!

mod app;
mod focus;
mod hit_map;
pub mod state;

pub mod domain;

pub use app::App;
pub use focus::FocusPanel;
pub use hit_map::{HitMap, HitTarget};
pub use state::{
    DetailPanel, LookupCompletion, LookupOrigin, LookupRequest, PanelState, PanelTimings,
    ResultNode, ResultsState, SearchState, StaleResponsePolicy,
};
