//! 详情面板内容

use cocktail_lookup::Drink;

use crate::i18n::PanelTexts;

/// 详情面板的结构化内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub drink_id: String,
    pub title: String,
    pub instructions: String,
    pub ingredients_heading: &'static str,
    /// 每行形如 "<measure> <ingredient>"，无 measure 时只有配料名
    pub ingredients: Vec<String>,
    pub close_label: &'static str,
}

/// 由一条记录构建详情面板内容
///
/// 说明文本优先级：本地化字段 > 默认语言字段 > 固定占位。
pub fn build_detail(drink: &Drink, texts: &PanelTexts) -> DetailView {
    let instructions = texts
        .instructions_suffix
        .and_then(|suffix| drink.localized_instructions(suffix))
        .or_else(|| drink.instructions())
        .unwrap_or(texts.no_instructions)
        .to_string();

    let ingredients = drink
        .ingredient_pairs()
        .map(|pair| match pair.measure {
            Some(measure) => format!("{measure} {}", pair.ingredient),
            None => pair.ingredient.to_string(),
        })
        .collect();

    DetailView {
        drink_id: drink.id().unwrap_or_default().to_string(),
        title: format!(
            "{}{}",
            drink.name().unwrap_or_default(),
            texts.title_suffix
        ),
        instructions,
        ingredients_heading: texts.ingredients_heading,
        ingredients,
        close_label: texts.close,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{translations, Language};

    fn es() -> &'static PanelTexts {
        &translations(Language::EsEs).panel
    }

    #[test]
    fn ingredients_from_sparse_slots_keep_index_order() {
        let drink = Drink::from_fields([
            ("idDrink", "1"),
            ("strDrink", "Sparse"),
            ("strIngredient1", "Vodka"),
            ("strMeasure1", "2 oz"),
            ("strIngredient2", ""),
            ("strMeasure2", "1 oz"),
            ("strIngredient3", "Lime juice"),
            ("strIngredient5", "   "),
            ("strIngredient7", "Soda water"),
            ("strMeasure7", " Top "),
        ]);

        let view = build_detail(&drink, es());

        assert_eq!(
            view.ingredients,
            vec!["2 oz Vodka", "Lime juice", "Top Soda water"]
        );
    }

    #[test]
    fn localized_instructions_preferred() {
        let drink = Drink::from_fields([
            ("idDrink", "11000"),
            ("strDrink", "Mojito"),
            ("strInstructions", "Muddle mint leaves with sugar and lime juice."),
            ("strInstructionsES", "Machacar las hojas de menta con el azúcar."),
        ]);

        let view = build_detail(&drink, es());

        assert_eq!(view.title, "Mojito - Preparación");
        assert_eq!(view.instructions, "Machacar las hojas de menta con el azúcar.");
        assert_eq!(view.ingredients_heading, "Ingredientes:");
    }

    #[test]
    fn falls_back_to_default_language_then_placeholder() {
        let english_only = Drink::from_fields([
            ("strDrink", "Martini"),
            ("strInstructions", "Stir and strain."),
        ]);
        assert_eq!(build_detail(&english_only, es()).instructions, "Stir and strain.");

        let none = Drink::from_fields([("strDrink", "Mystery")]);
        assert_eq!(
            build_detail(&none, es()).instructions,
            "No hay instrucciones disponibles."
        );
    }

    #[test]
    fn english_table_ignores_spanish_field() {
        let drink = Drink::from_fields([
            ("strDrink", "Mojito"),
            ("strInstructions", "Muddle."),
            ("strInstructionsES", "Machacar."),
        ]);
        let view = build_detail(&drink, &translations(Language::EnUs).panel);
        assert_eq!(view.instructions, "Muddle.");
        assert_eq!(view.title, "Mojito - Preparation");
    }
}
