//! 页面状态模块
//!
//! 定义搜索、结果与详情面板的状态数据结构

mod listeners;
mod panel;
mod results;
mod search;

pub use panel::{DetailPanel, PanelState, PanelTimings};
pub use results::{ResultNode, ResultsState};
pub use search::{
    LookupCompletion, LookupOrigin, LookupRequest, SearchState, StaleResponsePolicy,
};
