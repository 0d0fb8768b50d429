//! Question catalog and generator.
//!
//! A fixed catalog maps each category to an ordered list of question
//! templates. Generation walks the catalog in declared category order, then
//! template order within a category — FAQ selection depends on this ordering
//! for its tie-break. Output is a deterministic function of the record only.

use tracing::debug;

use pagesmith_shared::{ProductRecord, Question, QuestionCategory};

/// Placeholder substituted with the product name in every template.
const NAME_PLACEHOLDER: &str = "{product_name}";

/// Question templates per category, in catalog order.
///
/// Keeping templates and the answer rule both keyed off [`QuestionCategory`]
/// (exhaustive matches) guarantees every category has exactly one of each.
fn templates(category: QuestionCategory) -> &'static [&'static str] {
    match category {
        QuestionCategory::Informational => &[
            "What is {product_name}?",
            "What makes {product_name} effective?",
            "What is the concentration of active ingredients in {product_name}?",
        ],
        QuestionCategory::Usage => &[
            "How do I use {product_name}?",
            "When should I apply {product_name}?",
            "Can I use {product_name} with other products?",
            "How many drops of {product_name} should I use?",
        ],
        QuestionCategory::Safety => &[
            "Are there any side effects of {product_name}?",
            "Is {product_name} safe for sensitive skin?",
            "What precautions should I take when using {product_name}?",
        ],
        QuestionCategory::SkinType => &[
            "Is {product_name} suitable for my skin type?",
            "Can oily skin use {product_name}?",
            "Is {product_name} good for combination skin?",
        ],
        QuestionCategory::Benefits => &[
            "What are the main benefits of {product_name}?",
            "How long until I see results from {product_name}?",
            "Does {product_name} help with dark spots?",
        ],
        QuestionCategory::Purchase => &[
            "How much does {product_name} cost?",
            "Where can I buy {product_name}?",
            "Is {product_name} worth the price?",
        ],
        QuestionCategory::Comparison => &[
            "How does {product_name} compare to other vitamin C serums?",
            "What makes {product_name} different?",
            "Should I choose {product_name} or another serum?",
        ],
    }
}

/// Derive the answer for a category from the record.
fn answer(category: QuestionCategory, record: &ProductRecord) -> String {
    match category {
        QuestionCategory::Informational => format!(
            "{} contains {} Vitamin C.",
            record.name, record.concentration
        ),
        QuestionCategory::Usage => record.usage.clone(),
        QuestionCategory::Safety => record.side_effects.clone(),
        QuestionCategory::SkinType => format!(
            "Suitable for {} skin types.",
            record.skin_types.join(", ")
        ),
        QuestionCategory::Benefits => record.benefits.join(", "),
        QuestionCategory::Purchase => format!("The price is ₹{}.", record.price),
        QuestionCategory::Comparison => format!(
            "{} focuses on {}.",
            record.name,
            record.benefits.join(", ")
        ),
    }
}

/// Total number of questions the catalog produces.
pub fn catalog_size() -> usize {
    QuestionCategory::ALL
        .iter()
        .map(|c| templates(*c).len())
        .sum()
}

/// Generate the full question catalog for one record.
///
/// The count is fixed by the catalog — nothing is padded or truncated.
pub fn generate(record: &ProductRecord) -> Vec<Question> {
    let mut questions = Vec::with_capacity(catalog_size());

    for category in QuestionCategory::ALL {
        for template in templates(category) {
            questions.push(Question {
                category,
                question: template.replace(NAME_PLACEHOLDER, &record.name),
                answer: answer(category, record),
            });
        }
    }

    debug!(count = questions.len(), product = %record.name, "generated questions");
    questions
}
