//! Set-based comparison between two product records.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use pagesmith_shared::ProductRecord;

/// Ingredient set comparison. Duplicates collapse and the lists are emitted
/// in sorted order; callers must not rely on any particular ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientComparison {
    /// Ingredients present in both records.
    pub common: Vec<String>,
    /// Ingredients only in record `a`.
    pub unique_a: Vec<String>,
    /// Ingredients only in record `b`.
    pub unique_b: Vec<String>,
}

/// Full comparison output for a pair of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonFragment {
    pub ingredients: IngredientComparison,
    /// Count of benefits shared by both records.
    pub benefits_overlap: usize,
    /// Absolute price difference.
    pub price_difference: u32,
    /// Name of the strictly cheaper record. Ties report `b` — the source
    /// system only branched toward `a` on a strict `a < b`, and that behavior
    /// is kept deliberately.
    pub cheaper_product: String,
}

/// Compare two records across the ingredient, benefit, and price axes.
pub fn compare(a: &ProductRecord, b: &ProductRecord) -> ComparisonFragment {
    let ingredients_a: BTreeSet<&str> = a.ingredients.iter().map(String::as_str).collect();
    let ingredients_b: BTreeSet<&str> = b.ingredients.iter().map(String::as_str).collect();

    let common = ingredients_a
        .intersection(&ingredients_b)
        .map(|s| s.to_string())
        .collect();
    let unique_a = ingredients_a
        .difference(&ingredients_b)
        .map(|s| s.to_string())
        .collect();
    let unique_b = ingredients_b
        .difference(&ingredients_a)
        .map(|s| s.to_string())
        .collect();

    let benefits_a: BTreeSet<&str> = a.benefits.iter().map(String::as_str).collect();
    let benefits_b: BTreeSet<&str> = b.benefits.iter().map(String::as_str).collect();
    let benefits_overlap = benefits_a.intersection(&benefits_b).count();

    let cheaper_product = if a.price < b.price {
        a.name.clone()
    } else {
        b.name.clone()
    };

    debug!(
        product_a = %a.name,
        product_b = %b.name,
        benefits_overlap,
        "compared records"
    );

    ComparisonFragment {
        ingredients: IngredientComparison {
            common,
            unique_a,
            unique_b,
        },
        benefits_overlap,
        price_difference: a.price.abs_diff(b.price),
        cheaper_product,
    }
}
