use std::collections::BTreeMap;

use super::domain::{IngredientKey, IngredientRecord};

/// Storage abstraction so the service rules can be exercised against any backing map.
pub trait IngredientRepository {
    fn fetch(&self, key: &IngredientKey) -> Option<&IngredientRecord>;
    fn fetch_mut(&mut self, key: &IngredientKey) -> Option<&mut IngredientRecord>;
    /// Stores `record` at `key`, returning whatever it replaced.
    fn store(&mut self, key: IngredientKey, record: IngredientRecord) -> Option<IngredientRecord>;
    /// Every record in ascending key order.
    fn entries(&self) -> Vec<(&IngredientKey, &IngredientRecord)>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Session-lifetime store backed by an ordered map.
#[derive(Debug, Default, Clone)]
pub struct InMemoryIngredientRepository {
    records: BTreeMap<IngredientKey, IngredientRecord>,
}

impl IngredientRepository for InMemoryIngredientRepository {
    fn fetch(&self, key: &IngredientKey) -> Option<&IngredientRecord> {
        self.records.get(key)
    }

    fn fetch_mut(&mut self, key: &IngredientKey) -> Option<&mut IngredientRecord> {
        self.records.get_mut(key)
    }

    fn store(&mut self, key: IngredientKey, record: IngredientRecord) -> Option<IngredientRecord> {
        self.records.insert(key, record)
    }

    fn entries(&self) -> Vec<(&IngredientKey, &IngredientRecord)> {
        self.records.iter().collect()
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
