use std::fmt;

use serde::{Deserialize, Serialize};

use super::normalizer::{normalize, title_case};
use super::quantity::Quantity;
use super::service::InventoryError;

/// Normalized ingredient name used as the unique store index.
///
/// Only constructible through normalization, so two keys are equal exactly when
/// their source names differ at most by case and surrounding whitespace. Ordering
/// is lexicographic on the normalized text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct IngredientKey(String);

impl IngredientKey {
    pub fn from_name(name: &str) -> Self {
        Self(normalize(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IngredientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored state for one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub display_name: String,
    pub unit: String,
    pub quantity: Quantity,
}

/// Raw operator input for an add, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientDraft {
    pub name: String,
    pub unit: String,
    pub quantity: Quantity,
}

impl IngredientDraft {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, quantity: Quantity) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            quantity,
        }
    }

    /// Trimmed name, or [`InventoryError::EmptyName`] when nothing is left.
    pub fn check_name(raw: &str) -> Result<&str, InventoryError> {
        match raw.trim() {
            "" => Err(InventoryError::EmptyName),
            name => Ok(name),
        }
    }

    /// Trimmed unit, or [`InventoryError::EmptyUnit`] when nothing is left.
    pub fn check_unit(raw: &str) -> Result<&str, InventoryError> {
        match raw.trim() {
            "" => Err(InventoryError::EmptyUnit),
            unit => Ok(unit),
        }
    }

    pub fn key(&self) -> IngredientKey {
        IngredientKey::from_name(&self.name)
    }

    /// Validates both text fields and builds the record this draft would store.
    pub fn into_record(self) -> Result<(IngredientKey, IngredientRecord), InventoryError> {
        let name = Self::check_name(&self.name)?;
        let unit = Self::check_unit(&self.unit)?;

        let record = IngredientRecord {
            display_name: title_case(name),
            unit: unit.to_string(),
            quantity: self.quantity,
        };
        Ok((IngredientKey::from_name(name), record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn qty(value: f64) -> Quantity {
        Quantity::new(value).expect("valid quantity")
    }

    #[test]
    fn keys_ignore_case_and_padding() {
        assert_eq!(
            IngredientKey::from_name("Flour"),
            IngredientKey::from_name(" flour ")
        );
        assert_eq!(
            IngredientKey::from_name("FLOUR"),
            IngredientKey::from_name("flour")
        );
        assert_eq!(IngredientKey::from_name("  Rye Flour ").as_str(), "rye flour");
    }

    #[test]
    fn draft_builds_title_cased_record_with_trimmed_unit() {
        let (key, record) = IngredientDraft::new("  brown SUGAR ", " kg ", qty(4.0))
            .into_record()
            .expect("valid draft");

        assert_eq!(key.as_str(), "brown sugar");
        assert_eq!(record.display_name, "Brown Sugar");
        assert_eq!(record.unit, "kg");
        assert_eq!(record.quantity, qty(4.0));
    }

    #[test]
    fn draft_rejects_blank_fields() {
        assert_eq!(
            IngredientDraft::new("   ", "kg", qty(1.0)).into_record(),
            Err(InventoryError::EmptyName)
        );
        assert_eq!(
            IngredientDraft::new("Butter", "\t", qty(1.0)).into_record(),
            Err(InventoryError::EmptyUnit)
        );
    }

    #[test]
    fn check_helpers_return_trimmed_text() {
        assert_eq!(IngredientDraft::check_name(" Yeast "), Ok("Yeast"));
        assert_eq!(IngredientDraft::check_unit(" g"), Ok("g"));
    }
}
