//! Lookup backend implementations

/// Shared utilities used by backend implementations.
pub mod common;

mod thecocktaildb;

pub use thecocktaildb::TheCocktailDbLookup;
