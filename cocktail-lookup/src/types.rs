//! Shared lookup types

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default API root of the public TheCocktailDB v1 endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";

/// Number of indexed ingredient/measure slots a drink record may carry.
pub const MAX_INGREDIENTS: usize = 15;

/// One cocktail record, kept exactly as the API returned it.
///
/// The API describes drinks as a flat object of `strXxx` fields, most of
/// which may be `null`. The record is stored as an opaque field map and only
/// interpreted through the accessors below; it is never mutated after
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Drink {
    fields: BTreeMap<String, Value>,
}

/// One populated ingredient slot of a [`Drink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngredientPair<'a> {
    /// Slot index, `1..=MAX_INGREDIENTS`.
    pub index: usize,
    /// Ingredient name, trimmed and non-empty.
    pub ingredient: &'a str,
    /// Measure, trimmed; `None` when absent or blank.
    pub measure: Option<&'a str>,
}

impl Drink {
    /// Build a record from `(field, value)` pairs.
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw string value of a field; `None` for missing, `null` or non-string values.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// `idDrink`
    pub fn id(&self) -> Option<&str> {
        self.field("idDrink")
    }

    /// `strDrink`
    pub fn name(&self) -> Option<&str> {
        self.field("strDrink")
    }

    /// `strCategory`
    pub fn category(&self) -> Option<&str> {
        self.field("strCategory")
    }

    /// `strAlcoholic`, e.g. "Alcoholic", "Non alcoholic", "Optional alcohol"
    pub fn alcoholic(&self) -> Option<&str> {
        self.field("strAlcoholic")
    }

    /// Only the exact value "Alcoholic" counts; every other value is treated as non-alcoholic.
    pub fn is_alcoholic(&self) -> bool {
        self.alcoholic() == Some("Alcoholic")
    }

    /// `strDrinkThumb`
    pub fn thumbnail(&self) -> Option<&str> {
        self.field("strDrinkThumb")
    }

    /// Default-language instructions (`strInstructions`), blank treated as absent.
    pub fn instructions(&self) -> Option<&str> {
        non_blank(self.field("strInstructions"))
    }

    /// Localized instructions, e.g. `suffix = "ES"` reads `strInstructionsES`.
    pub fn localized_instructions(&self, suffix: &str) -> Option<&str> {
        non_blank(self.field(&format!("strInstructions{suffix}")))
    }

    /// `strIngredientN`
    pub fn ingredient(&self, index: usize) -> Option<&str> {
        self.field(&format!("strIngredient{index}"))
    }

    /// `strMeasureN`
    pub fn measure(&self, index: usize) -> Option<&str> {
        self.field(&format!("strMeasure{index}"))
    }

    /// Populated ingredient slots in index order.
    ///
    /// A slot is included only when its ingredient is present and non-blank;
    /// a blank measure is reported as `None`.
    pub fn ingredient_pairs(&self) -> impl Iterator<Item = IngredientPair<'_>> + '_ {
        (1..=MAX_INGREDIENTS).filter_map(move |index| {
            let ingredient = non_blank(self.ingredient(index))?;
            Some(IngredientPair {
                index,
                ingredient,
                measure: non_blank(self.measure(index)),
            })
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Connection settings for a lookup client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// API root, without trailing slash.
    pub base_url: String,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
    /// Whole-request timeout.
    pub request_timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}
