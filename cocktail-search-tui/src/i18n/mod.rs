//! 国际化（i18n）模块
//!
//! 使用纯 Rust 结构体方案，编译期类型检查，零运行时开销。
//! 默认语言为西班牙语，与公开 API 的本地化说明字段 `strInstructionsES` 对应。

use std::sync::atomic::{AtomicUsize, Ordering};

mod en_us;
mod es_es;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 西班牙语（西班牙）
    #[default]
    EsEs,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言代码（BCP 47 标准）
    pub fn code(self) -> &'static str {
        match self {
            Language::EsEs => "es-ES",
            Language::EnUs => "en-US",
        }
    }

    /// 从语言代码解析
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "es-ES" | "es" => Some(Language::EsEs),
            "en-US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::EsEs => 0,
            Language::EnUs => 1,
        }
    }
}

/// 当前语言索引（原子操作，线程安全）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0); // 0 = EsEs

/// 获取指定语言的翻译
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::EsEs => &es_es::TRANSLATIONS,
        Language::EnUs => &en_us::TRANSLATIONS,
    }
}

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    translations(current_language())
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}

/// 获取当前语言
pub fn current_language() -> Language {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => Language::EnUs,
        _ => Language::EsEs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::EsEs, Language::EnUs] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("es"), Some(Language::EsEs));
        assert_eq!(Language::from_code("fr-FR"), None);
    }

    #[test]
    fn spanish_prefers_localized_instructions() {
        assert_eq!(
            translations(Language::EsEs).panel.instructions_suffix,
            Some("ES")
        );
        assert_eq!(translations(Language::EnUs).panel.instructions_suffix, None);
    }
}
