//! Ingredient store: key normalization, quantity rules, and the four session operations.
//!
//! Every path into the store goes through [`IngredientKey::from_name`], so names that
//! differ only by case or surrounding whitespace always address the same record.

pub mod domain;
pub mod listing;
pub mod normalizer;
pub mod quantity;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{IngredientDraft, IngredientKey, IngredientRecord};
pub use listing::{InventoryListing, ListingRow};
pub use normalizer::{normalize, title_case};
pub use quantity::{parse_quantity, Quantity, QuantityError};
pub use repository::{InMemoryIngredientRepository, IngredientRepository};
pub use service::{InventoryError, InventoryService, Overwrite, UpsertOutcome};
