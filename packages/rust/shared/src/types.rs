//! Core domain types for pagesmith content generation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{PipelineError, Result};

// ---------------------------------------------------------------------------
// ProductRecord
// ---------------------------------------------------------------------------

/// Structured representation of one product.
///
/// Constructed once from raw untyped input at pipeline start and never
/// mutated; content blocks take it by shared reference. The competitor record
/// has the same shape and is produced synthetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product display name.
    pub name: String,
    /// Active-ingredient concentration (e.g. "10% Vitamin C").
    pub concentration: String,
    /// Skin types the product targets.
    pub skin_types: Vec<String>,
    /// Ingredient list; insertion order is significant — the first entry is
    /// the primary ingredient.
    pub ingredients: Vec<String>,
    /// Claimed benefits.
    pub benefits: Vec<String>,
    /// Free-text usage instructions, passed through verbatim.
    pub usage: String,
    /// Free-text side-effect notes, passed through verbatim.
    pub side_effects: String,
    /// Price in whole rupees.
    pub price: u32,
}

impl ProductRecord {
    /// Parse a raw untyped mapping into a [`ProductRecord`].
    ///
    /// Fails with [`PipelineError::MissingField`] naming the absent key, or
    /// [`PipelineError::TypeMismatch`] when a field has the wrong shape.
    /// No side effects; the input is only read.
    pub fn from_raw(raw: &Value) -> Result<Self> {
        let obj = raw
            .as_object()
            .ok_or_else(|| PipelineError::validation("product record must be a JSON object"))?;

        Ok(Self {
            name: string_field(obj, "name")?,
            concentration: string_field(obj, "concentration")?,
            skin_types: string_list_field(obj, "skin_types")?,
            ingredients: string_list_field(obj, "ingredients")?,
            benefits: string_list_field(obj, "benefits")?,
            usage: string_field(obj, "usage")?,
            side_effects: string_field(obj, "side_effects")?,
            price: price_field(obj, "price")?,
        })
    }

    /// The primary ingredient, when the ingredient list is non-empty.
    pub fn primary_ingredient(&self) -> Option<&str> {
        self.ingredients.first().map(String::as_str)
    }
}

fn require<'a>(
    obj: &'a serde_json::Map<String, Value>,
    field: &str,
) -> Result<&'a Value> {
    obj.get(field)
        .ok_or_else(|| PipelineError::missing_field(field))
}

fn string_field(obj: &serde_json::Map<String, Value>, field: &str) -> Result<String> {
    require(obj, field)?
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| PipelineError::type_mismatch(field, "string"))
}

fn string_list_field(obj: &serde_json::Map<String, Value>, field: &str) -> Result<Vec<String>> {
    let items = require(obj, field)?
        .as_array()
        .ok_or_else(|| PipelineError::type_mismatch(field, "array of strings"))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or_else(|| PipelineError::type_mismatch(field, "array of strings"))
        })
        .collect()
}

fn price_field(obj: &serde_json::Map<String, Value>, field: &str) -> Result<u32> {
    let value = require(obj, field)?;
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| PipelineError::type_mismatch(field, "non-negative integer"))
}

// ---------------------------------------------------------------------------
// QuestionCategory
// ---------------------------------------------------------------------------

/// Closed set of question categories.
///
/// The category determines both the question templates and the answer
/// derivation rule, so both live as exhaustive matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    #[serde(rename = "Skin Type")]
    SkinType,
    Benefits,
    Purchase,
    Comparison,
}

impl QuestionCategory {
    /// All categories, in catalog order. Question generation iterates this
    /// order and FAQ selection depends on it for its tie-break.
    pub const ALL: [QuestionCategory; 7] = [
        QuestionCategory::Informational,
        QuestionCategory::Usage,
        QuestionCategory::Safety,
        QuestionCategory::SkinType,
        QuestionCategory::Benefits,
        QuestionCategory::Purchase,
        QuestionCategory::Comparison,
    ];

    /// Human-readable label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionCategory::Informational => "Informational",
            QuestionCategory::Usage => "Usage",
            QuestionCategory::Safety => "Safety",
            QuestionCategory::SkinType => "Skin Type",
            QuestionCategory::Benefits => "Benefits",
            QuestionCategory::Purchase => "Purchase",
            QuestionCategory::Comparison => "Comparison",
        }
    }
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// A categorized question/answer pair derived from one product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Category the question belongs to.
    pub category: QuestionCategory,
    /// Templated question text with the product name substituted.
    pub question: String,
    /// Answer derived from the record by the category's rule.
    pub answer: String,
}

// ---------------------------------------------------------------------------
// PageKind
// ---------------------------------------------------------------------------

/// The three page kinds the pipeline produces. Closed set — dispatch is
/// exhaustive, no plugin extensibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Faq,
    Product,
    Comparison,
}

impl PageKind {
    /// Stable string form used in page discriminators and file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Faq => "faq",
            PageKind::Product => "product",
            PageKind::Comparison => "comparison",
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PageKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "faq" => Ok(PageKind::Faq),
            "product" => Ok(PageKind::Product),
            "comparison" => Ok(PageKind::Comparison),
            other => Err(PipelineError::UnknownPageKind { kind: other.into() }),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw_record() -> Value {
        json!({
            "name": "GlowBoost Vitamin C Serum",
            "concentration": "10% Vitamin C",
            "skin_types": ["Oily", "Combination"],
            "ingredients": ["Vitamin C", "Hyaluronic Acid"],
            "benefits": ["Brightening", "Fades dark spots"],
            "usage": "Apply 2–3 drops in the morning before sunscreen",
            "side_effects": "Mild tingling for sensitive skin",
            "price": 699
        })
    }

    #[test]
    fn parse_valid_record() {
        let record = ProductRecord::from_raw(&raw_record()).unwrap();
        assert_eq!(record.name, "GlowBoost Vitamin C Serum");
        assert_eq!(record.price, 699);
        assert_eq!(record.ingredients.len(), 2);
        assert_eq!(record.primary_ingredient(), Some("Vitamin C"));
    }

    #[test]
    fn missing_field_names_the_key() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap().remove("price");

        let err = ProductRecord::from_raw(&raw).unwrap_err();
        match err {
            PipelineError::MissingField { field } => assert_eq!(field, "price"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn non_integer_price_is_type_mismatch() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap()["price"] = json!("699");

        let err = ProductRecord::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PipelineError::TypeMismatch { ref field, .. } if field == "price"));
    }

    #[test]
    fn negative_price_is_type_mismatch() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap()["price"] = json!(-1);

        let err = ProductRecord::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PipelineError::TypeMismatch { ref field, .. } if field == "price"));
    }

    #[test]
    fn mixed_list_is_type_mismatch() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap()["benefits"] = json!(["Brightening", 42]);

        let err = ProductRecord::from_raw(&raw).unwrap_err();
        assert!(matches!(err, PipelineError::TypeMismatch { ref field, .. } if field == "benefits"));
    }

    #[test]
    fn non_object_input_rejected() {
        let err = ProductRecord::from_raw(&json!(["not", "a", "record"])).unwrap_err();
        assert!(matches!(err, PipelineError::Validation { .. }));
    }

    #[test]
    fn empty_lists_parse_fine() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap()["ingredients"] = json!([]);

        let record = ProductRecord::from_raw(&raw).unwrap();
        assert!(record.ingredients.is_empty());
        assert_eq!(record.primary_ingredient(), None);
    }

    #[test]
    fn category_serializes_with_label() {
        let json = serde_json::to_string(&QuestionCategory::SkinType).unwrap();
        assert_eq!(json, "\"Skin Type\"");
        let json = serde_json::to_string(&QuestionCategory::Purchase).unwrap();
        assert_eq!(json, "\"Purchase\"");
    }

    #[test]
    fn page_kind_roundtrip() {
        for kind in [PageKind::Faq, PageKind::Product, PageKind::Comparison] {
            let parsed: PageKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }

        let err = "landing".parse::<PageKind>().unwrap_err();
        assert!(matches!(err, PipelineError::UnknownPageKind { ref kind } if kind == "landing"));
    }
}
