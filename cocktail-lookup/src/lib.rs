//! # cocktail-lookup
//!
//! A small client for the public [TheCocktailDB](https://www.thecocktaildb.com/)
//! search API.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cocktail_lookup::{create_lookup, CocktailLookup, LookupConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let lookup = create_lookup(&LookupConfig::default())?;
//!
//!     for drink in lookup.search_by_name("margarita").await? {
//!         println!("{} ({:?})", drink.name().unwrap_or("?"), drink.category());
//!         for pair in drink.ingredient_pairs() {
//!             println!("  {} {}", pair.measure.unwrap_or(""), pair.ingredient);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All lookup operations return [`Result<T, LookupError>`](LookupError):
//!
//! - [`LookupError::NetworkError`] / [`LookupError::Timeout`]: transport failure
//! - [`LookupError::HttpStatus`] / [`LookupError::RateLimited`]: non-success status
//! - [`LookupError::ParseError`]: body is not the expected JSON shape
//!
//! An empty result (`{"drinks": null}`) is not an error: it yields an empty list.
//! Nothing is retried automatically.

mod error;
mod factory;
mod http_client;
mod providers;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{LookupError, Result};

// Re-export factory functions
pub use factory::create_lookup;

// Re-export core trait
pub use traits::CocktailLookup;

// Re-export types
pub use types::{DEFAULT_BASE_URL, Drink, IngredientPair, LookupConfig, MAX_INGREDIENTS};

// Re-export concrete backends
pub use providers::TheCocktailDbLookup;
