//! Lookup factory functions.

use std::sync::Arc;

use crate::error::Result;
use crate::providers::TheCocktailDbLookup;
use crate::traits::CocktailLookup;
use crate::types::LookupConfig;

/// Creates a [`CocktailLookup`] instance from the given connection settings.
///
/// The returned client is wrapped in `Arc<dyn CocktailLookup>` so it can be
/// shared with the async tasks that run individual lookups.
///
/// # Examples
///
/// ```rust,no_run
/// use cocktail_lookup::{create_lookup, LookupConfig};
///
/// let lookup = create_lookup(&LookupConfig::default()).unwrap();
/// ```
pub fn create_lookup(config: &LookupConfig) -> Result<Arc<dyn CocktailLookup>> {
    Ok(Arc::new(TheCocktailDbLookup::new(config)?))
}
