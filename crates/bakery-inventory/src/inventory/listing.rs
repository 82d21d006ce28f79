use std::fmt;

use serde::Serialize;

use super::domain::{IngredientKey, IngredientRecord};
use super::quantity::Quantity;

const RULE_WIDTH: usize = 52;

/// One line of the stock table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingRow {
    pub key: IngredientKey,
    pub display_name: String,
    pub quantity: Quantity,
    pub unit: String,
}

/// Read-only view of the whole inventory, ordered by normalized key.
///
/// `Display` renders the operator table, or the "No ingredients yet." notice
/// when there is nothing to show.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryListing {
    rows: Vec<ListingRow>,
}

impl InventoryListing {
    pub(crate) fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a IngredientKey, &'a IngredientRecord)>,
    {
        let mut rows: Vec<ListingRow> = entries
            .into_iter()
            .map(|(key, record)| ListingRow {
                key: key.clone(),
                display_name: record.display_name.clone(),
                quantity: record.quantity,
                unit: record.unit.clone(),
            })
            .collect();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        Self { rows }
    }

    pub fn rows(&self) -> &[ListingRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for InventoryListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return f.write_str("No ingredients yet.");
        }

        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "Current Ingredients")?;
        writeln!(f, "{rule}")?;
        writeln!(f, "{:<20} {:>12} {:>12}", "Name", "Quantity", "Unit")?;
        writeln!(f, "{rule}")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<20} {:>12.2} {:>12}",
                row.display_name,
                row.quantity.value(),
                row.unit
            )?;
        }
        write!(f, "{rule}")
    }
}
