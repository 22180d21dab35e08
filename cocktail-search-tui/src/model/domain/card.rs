//! 饮品卡片

use cocktail_lookup::Drink;

use crate::i18n::CardTexts;

/// 图片不可用时的占位图
pub const FALLBACK_IMAGE_URL: &str =
    "https://via.placeholder.com/300x250/cccccc/969696?text=Imagen+no+disponible";

/// 卡片图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource {
    pub url: String,
    pub alt: String,
    /// 是否使用了占位图
    pub is_fallback: bool,
}

/// 详情按钮，携带饮品 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsControl {
    pub drink_id: String,
    pub label: &'static str,
}

/// 一张饮品卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub image: ImageSource,
    pub title: String,
    /// 分类 + 是否含酒精的注释
    pub category_line: String,
    pub details: DetailsControl,
}

impl CardView {
    pub fn drink_id(&self) -> &str {
        &self.details.drink_id
    }
}

/// 由一条记录构建卡片
pub fn build_card(drink: &Drink, texts: &CardTexts) -> CardView {
    let title = drink.name().unwrap_or_default().to_string();

    let image = match drink.thumbnail().map(str::trim) {
        Some(url) if is_http_url(url) => ImageSource {
            url: url.to_string(),
            alt: title.clone(),
            is_fallback: false,
        },
        _ => ImageSource {
            url: FALLBACK_IMAGE_URL.to_string(),
            alt: title.clone(),
            is_fallback: true,
        },
    };

    let annotation = if drink.is_alcoholic() {
        texts.alcoholic
    } else {
        texts.non_alcoholic
    };

    CardView {
        image,
        category_line: format!("{}{annotation}", drink.category().unwrap_or_default()),
        details: DetailsControl {
            drink_id: drink.id().unwrap_or_default().to_string(),
            label: texts.details_button,
        },
        title,
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
