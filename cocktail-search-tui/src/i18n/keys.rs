//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **卡片内容归 `cards.*`，详情面板内容归 `panel.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 搜索栏与结果区状态文本
    pub search: SearchTexts,
    /// 饮品卡片文本
    pub cards: CardTexts,
    /// 详情面板文本
    pub panel: PanelTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 状态栏的 (按键, 动作) 提示
pub struct HintTexts {
    pub search: &'static str,
    pub switch_focus: &'static str,
    pub select: &'static str,
    pub details: &'static str,
    pub close_panel: &'static str,
}

// ============================================================================
// 搜索
// ============================================================================

pub struct SearchTexts {
    /// 搜索框标题
    pub title: &'static str,
    /// 空输入时的占位提示
    pub placeholder: &'static str,
    /// 校验错误：空查询
    pub empty_query: &'static str,
    /// 加载失败（网络、HTTP 状态、响应格式）
    pub load_failed: &'static str,
    /// 无结果状态
    pub no_results: &'static str,
    /// 加载指示
    pub loading: &'static str,
    /// 结果区标题
    pub results_title: &'static str,
    /// 尚无结果时结果区的提示
    pub idle_hint: &'static str,
}

// ============================================================================
// 卡片
// ============================================================================

pub struct CardTexts {
    /// 分类后的注释，`strAlcoholic == "Alcoholic"` 时使用
    pub alcoholic: &'static str,
    /// 其余情况
    pub non_alcoholic: &'static str,
    /// 详情按钮
    pub details_button: &'static str,
    /// 图片行前缀
    pub image_label: &'static str,
    /// 使用占位图时的说明
    pub image_unavailable: &'static str,
}

// ============================================================================
// 详情面板
// ============================================================================

pub struct PanelTexts {
    /// 标题后缀，如 " - Preparación"
    pub title_suffix: &'static str,
    /// 首选的本地化说明字段后缀（`strInstructions{suffix}`）；`None` 表示直接用默认语言字段
    pub instructions_suffix: Option<&'static str>,
    /// 没有任何说明时的占位
    pub no_instructions: &'static str,
    /// 配料标题
    pub ingredients_heading: &'static str,
    /// 关闭按钮
    pub close: &'static str,
}
