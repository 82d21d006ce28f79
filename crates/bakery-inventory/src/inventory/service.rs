use tracing::{debug, info, warn};

use super::domain::{IngredientDraft, IngredientKey, IngredientRecord};
use super::listing::InventoryListing;
use super::quantity::Quantity;
use super::repository::{InMemoryIngredientRepository, IngredientRepository};

/// Whether an add may replace a record that already exists at the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    Deny,
    Allow,
}

/// Result of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub enum UpsertOutcome {
    Created(IngredientRecord),
    Replaced {
        previous: IngredientRecord,
        current: IngredientRecord,
    },
}

impl UpsertOutcome {
    pub fn record(&self) -> &IngredientRecord {
        match self {
            UpsertOutcome::Created(record) => record,
            UpsertOutcome::Replaced { current, .. } => current,
        }
    }
}

/// Failures surfaced to the operator. None of them leave the store modified.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InventoryError {
    #[error("Name cannot be empty.")]
    EmptyName,
    #[error("Unit cannot be empty.")]
    EmptyUnit,
    #[error("Ingredient not found.")]
    NotFound { name: String },
    #[error("'{}' already exists", existing.display_name)]
    Conflict { existing: IngredientRecord },
}

/// Owns the session inventory and applies the add/list/use/search rules to it.
#[derive(Debug, Clone)]
pub struct InventoryService<R = InMemoryIngredientRepository> {
    repository: R,
}

impl Default for InventoryService<InMemoryIngredientRepository> {
    fn default() -> Self {
        Self::new(InMemoryIngredientRepository::default())
    }
}

impl<R> InventoryService<R>
where
    R: IngredientRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Adds an ingredient, or replaces the one at the same key when `overwrite` allows it.
    ///
    /// With [`Overwrite::Deny`] an existing key yields [`InventoryError::Conflict`]
    /// carrying the stored record so the caller can ask before retrying with
    /// [`Overwrite::Allow`]. A replacement discards the previous quantity.
    pub fn upsert(
        &mut self,
        draft: IngredientDraft,
        overwrite: Overwrite,
    ) -> Result<UpsertOutcome, InventoryError> {
        let (key, record) = draft.into_record().map_err(|err| {
            warn!(%err, "rejected ingredient");
            err
        })?;

        if overwrite == Overwrite::Deny {
            if let Some(existing) = self.repository.fetch(&key) {
                debug!(%key, "ingredient exists; replacement needs confirmation");
                return Err(InventoryError::Conflict {
                    existing: existing.clone(),
                });
            }
        }

        let outcome = match self.repository.store(key.clone(), record.clone()) {
            Some(previous) => UpsertOutcome::Replaced {
                previous,
                current: record,
            },
            None => UpsertOutcome::Created(record),
        };

        info!(
            %key,
            quantity = outcome.record().quantity.value(),
            replaced = matches!(outcome, UpsertOutcome::Replaced { .. }),
            "ingredient saved"
        );
        Ok(outcome)
    }

    /// Snapshot of every record in ascending key order.
    pub fn listing(&self) -> InventoryListing {
        let listing = InventoryListing::from_entries(self.repository.entries());
        debug!(rows = listing.rows().len(), "inventory listed");
        listing
    }

    /// Subtracts `used` from the named ingredient, flooring the stock at zero.
    pub fn deduct(
        &mut self,
        name: &str,
        used: Quantity,
    ) -> Result<IngredientRecord, InventoryError> {
        let key = IngredientKey::from_name(name);
        let Some(record) = self.repository.fetch_mut(&key) else {
            warn!(%key, "cannot use unknown ingredient");
            return Err(InventoryError::NotFound {
                name: name.trim().to_string(),
            });
        };

        let before = record.quantity;
        record.quantity = before.saturating_sub(used);
        info!(
            %key,
            before = before.value(),
            used = used.value(),
            after = record.quantity.value(),
            "ingredient used"
        );
        Ok(record.clone())
    }

    /// Finds the record stored under the normalized form of `name`.
    pub fn lookup(&self, name: &str) -> Result<&IngredientRecord, InventoryError> {
        let key = IngredientKey::from_name(name);
        match self.repository.fetch(&key) {
            Some(record) => {
                debug!(%key, "ingredient found");
                Ok(record)
            }
            None => {
                debug!(%key, "ingredient not found");
                Err(InventoryError::NotFound {
                    name: name.trim().to_string(),
                })
            }
        }
    }
}
