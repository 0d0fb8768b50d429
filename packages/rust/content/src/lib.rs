//! Content blocks — pure functions mapping a product record to typed page
//! fragments, plus the two-record comparison algorithm.
//!
//! Blocks share no state and have no side effects; every fragment is a
//! deterministic function of its record(s).

mod compare;

use serde::Serialize;

use pagesmith_shared::ProductRecord;

pub use compare::{ComparisonFragment, IngredientComparison, compare};

/// Fixed currency for all price fragments; not derived from the record.
pub const CURRENCY: &str = "INR";

// ---------------------------------------------------------------------------
// Fragments
// ---------------------------------------------------------------------------

/// Benefits list fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitsFragment {
    pub section_type: &'static str,
    pub items: Vec<BenefitItem>,
}

/// One entry in a benefits fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenefitItem {
    pub benefit: String,
}

/// Usage instructions fragment — verbatim passthrough of the free-text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageFragment {
    pub section_type: &'static str,
    pub instructions: String,
}

/// Ingredient list fragment. `primary` is the first ingredient by insertion
/// order, or `None` for an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientsFragment {
    pub section_type: &'static str,
    pub primary: Option<String>,
    pub ingredients: Vec<String>,
    pub concentration: String,
}

/// Safety fragment — verbatim passthrough of the side-effects field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyFragment {
    pub section_type: &'static str,
    pub side_effects: String,
}

/// Price fragment with the fixed currency constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceFragment {
    pub section_type: &'static str,
    pub amount: u32,
    pub currency: &'static str,
}

/// Any single-record fragment, serialized transparently as its inner shape.
/// The `section_type` field inside each variant is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SectionFragment {
    Benefits(BenefitsFragment),
    Ingredients(IngredientsFragment),
    Usage(UsageFragment),
    Price(PriceFragment),
    Safety(SafetyFragment),
}

// ---------------------------------------------------------------------------
// SectionKind
// ---------------------------------------------------------------------------

/// Names of the single-record content blocks. Strategy tables list these to
/// declare which sections a page includes and in what order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Benefits,
    Ingredients,
    Usage,
    Price,
    Safety,
}

impl SectionKind {
    /// Stable name matching the fragment's `section_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Benefits => "benefits",
            SectionKind::Ingredients => "ingredients",
            SectionKind::Usage => "usage",
            SectionKind::Price => "price",
            SectionKind::Safety => "safety",
        }
    }
}

/// Invoke the content block for one section kind.
pub fn section(kind: SectionKind, record: &ProductRecord) -> SectionFragment {
    match kind {
        SectionKind::Benefits => SectionFragment::Benefits(extract_benefits(record)),
        SectionKind::Ingredients => SectionFragment::Ingredients(format_ingredients(record)),
        SectionKind::Usage => SectionFragment::Usage(generate_usage(record)),
        SectionKind::Price => SectionFragment::Price(price_block(record)),
        SectionKind::Safety => SectionFragment::Safety(safety_block(record)),
    }
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// Transform the benefits list into a structured fragment.
/// Empty benefits produce an empty items list, not an error.
pub fn extract_benefits(record: &ProductRecord) -> BenefitsFragment {
    BenefitsFragment {
        section_type: "benefits",
        items: record
            .benefits
            .iter()
            .map(|benefit| BenefitItem {
                benefit: benefit.clone(),
            })
            .collect(),
    }
}

/// Wrap the free-text usage field. No parsing.
pub fn generate_usage(record: &ProductRecord) -> UsageFragment {
    UsageFragment {
        section_type: "usage",
        instructions: record.usage.clone(),
    }
}

/// Structure the ingredient information with the primary ingredient up front.
pub fn format_ingredients(record: &ProductRecord) -> IngredientsFragment {
    IngredientsFragment {
        section_type: "ingredients",
        primary: record.primary_ingredient().map(str::to_owned),
        ingredients: record.ingredients.clone(),
        concentration: record.concentration.clone(),
    }
}

/// Wrap the free-text side-effects field.
pub fn safety_block(record: &ProductRecord) -> SafetyFragment {
    SafetyFragment {
        section_type: "safety",
        side_effects: record.side_effects.clone(),
    }
}

/// Price with the fixed currency.
pub fn price_block(record: &ProductRecord) -> PriceFragment {
    PriceFragment {
        section_type: "price",
        amount: record.price,
        currency: CURRENCY,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            name: "GlowBoost Vitamin C Serum".into(),
            concentration: "10% Vitamin C".into(),
            skin_types: vec!["Oily".into(), "Combination".into()],
            ingredients: vec!["Vitamin C".into(), "Hyaluronic Acid".into()],
            benefits: vec!["Brightening".into(), "Fades dark spots".into()],
            usage: "Apply 2–3 drops in the morning before sunscreen".into(),
            side_effects: "Mild tingling for sensitive skin".into(),
            price: 699,
        }
    }

    #[test]
    fn benefits_fragment_shape() {
        let fragment = extract_benefits(&record());
        assert_eq!(fragment.section_type, "benefits");
        assert_eq!(fragment.items.len(), 2);
        assert_eq!(fragment.items[0].benefit, "Brightening");
    }

    #[test]
    fn empty_benefits_degrade_to_empty_items() {
        let mut r = record();
        r.benefits.clear();

        let fragment = extract_benefits(&r);
        assert!(fragment.items.is_empty());
    }

    #[test]
    fn usage_is_verbatim() {
        let fragment = generate_usage(&record());
        assert_eq!(
            fragment.instructions,
            "Apply 2–3 drops in the morning before sunscreen"
        );
    }

    #[test]
    fn ingredients_carry_primary_and_concentration() {
        let fragment = format_ingredients(&record());
        assert_eq!(fragment.primary.as_deref(), Some("Vitamin C"));
        assert_eq!(fragment.ingredients.len(), 2);
        assert_eq!(fragment.concentration, "10% Vitamin C");
    }

    #[test]
    fn empty_ingredients_have_no_primary() {
        let mut r = record();
        r.ingredients.clear();

        let fragment = format_ingredients(&r);
        assert_eq!(fragment.primary, None);
        assert!(fragment.ingredients.is_empty());
    }

    #[test]
    fn price_uses_fixed_currency() {
        let fragment = price_block(&record());
        assert_eq!(fragment.amount, 699);
        assert_eq!(fragment.currency, "INR");
    }

    #[test]
    fn section_dispatch_matches_kind() {
        let r = record();
        for kind in [
            SectionKind::Benefits,
            SectionKind::Ingredients,
            SectionKind::Usage,
            SectionKind::Price,
            SectionKind::Safety,
        ] {
            let fragment = section(kind, &r);
            let json = serde_json::to_value(&fragment).unwrap();
            assert_eq!(json["section_type"], kind.as_str());
        }
    }
}
