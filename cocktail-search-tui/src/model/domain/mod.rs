//! 领域视图模型
//!
//! 把 API 返回的 `Drink` 映射为可绘制的结构化描述。
//! 这里只有纯函数，不接触终端，绘制在 `view/` 中完成。

mod card;
mod detail;

pub use card::{build_card, CardView};
pub use detail::{build_detail, DetailView};
