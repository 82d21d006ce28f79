use crate::inventory::{IngredientDraft, InventoryService, Overwrite, Quantity};

pub(super) fn qty(value: f64) -> Quantity {
    Quantity::new(value).expect("valid quantity")
}

pub(super) fn draft(name: &str, unit: &str, quantity: f64) -> IngredientDraft {
    IngredientDraft::new(name, unit, qty(quantity))
}

/// Service seeded with a handful of pantry staples, added in non-alphabetical order.
pub(super) fn stocked_service() -> InventoryService {
    let mut service = InventoryService::default();
    for (name, unit, quantity) in [
        ("Sugar", "kg", 5.0),
        ("butter", "blocks", 12.0),
        ("  Flour ", "kg", 2.5),
        ("EGGS", "pieces", 30.0),
    ] {
        service
            .upsert(draft(name, unit, quantity), Overwrite::Deny)
            .expect("seed ingredient");
    }
    service
}
