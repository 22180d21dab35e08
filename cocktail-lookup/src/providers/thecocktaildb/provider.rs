//! TheCocktailDB `CocktailLookup` trait 实现

use async_trait::async_trait;

use crate::error::{LookupError, Result};
use crate::traits::CocktailLookup;
use crate::types::Drink;

use super::{SEARCH_PATH, SOURCE_NAME, SearchEnvelope, TheCocktailDbLookup};

#[async_trait]
impl CocktailLookup for TheCocktailDbLookup {
    fn id(&self) -> &'static str {
        SOURCE_NAME
    }

    async fn search_by_name(&self, term: &str) -> Result<Vec<Drink>> {
        let term = term.trim();
        if term.is_empty() {
            return Err(LookupError::InvalidParameter {
                source: SOURCE_NAME.to_string(),
                param: "term".to_string(),
                detail: "search term must not be empty".to_string(),
            });
        }

        let envelope: SearchEnvelope = self.get(SEARCH_PATH, &[("s", term)]).await?;
        let drinks = envelope.drinks.unwrap_or_default();
        log::debug!("[{SOURCE_NAME}] search '{term}' -> {} drinks", drinks.len());
        Ok(drinks)
    }
}
