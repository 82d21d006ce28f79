use bakery_inventory::inventory::{normalize, IngredientKey, Quantity};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 512,
        ..ProptestConfig::default()
    })]

    /// Property: normalizing twice is the same as normalizing once.
    #[test]
    fn normalize_is_idempotent(name in "[ \\tA-Za-z0-9éÉ'-]{0,40}") {
        let once = normalize(&name);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: case changes and surrounding whitespace never produce a new key.
    #[test]
    fn case_and_padding_share_a_key(
        name in "[A-Za-z][A-Za-z ]{0,20}",
        left in "[ \\t]{0,3}",
        right in "[ \\t]{0,3}",
    ) {
        let padded = format!("{left}{}{right}", name.to_uppercase());
        prop_assert_eq!(
            IngredientKey::from_name(&padded),
            IngredientKey::from_name(&name.to_lowercase())
        );
    }

    /// Property: deductions never drive stock below zero.
    #[test]
    fn deduction_never_goes_negative(stock in 0.0f64..1e6, used in 0.0f64..2e6) {
        let stock = Quantity::new(stock).expect("finite, non-negative");
        let used = Quantity::new(used).expect("finite, non-negative");
        let remaining = stock.saturating_sub(used);
        prop_assert!(remaining.value() >= 0.0);
        prop_assert!(remaining <= stock);
    }
}
