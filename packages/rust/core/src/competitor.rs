//! Deterministic competitor synthesis.

use pagesmith_shared::ProductRecord;

/// Produce the fixed fictional competitor record.
///
/// Constant function: no dependency on the input product, no randomness.
/// Exists so the comparison page has a second party without external data
/// sourcing.
pub fn fictional_competitor() -> ProductRecord {
    ProductRecord {
        name: "RadiantGlow Vitamin C Complex".into(),
        concentration: "15% Vitamin C".into(),
        skin_types: vec!["All Skin Types".into(), "Sensitive".into()],
        ingredients: vec![
            "Sodium Ascorbyl Phosphate".into(),
            "Vitamin E".into(),
            "Ferulic Acid".into(),
        ],
        benefits: vec![
            "Anti-aging".into(),
            "Brightening".into(),
            "Antioxidant protection".into(),
        ],
        usage: "Apply 3-4 drops in the evening after cleansing".into(),
        side_effects: "May cause slight redness initially".into(),
        price: 899,
    }
}
