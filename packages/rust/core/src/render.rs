//! Page renderer — composes fragments and questions into final page
//! structures, dispatching on the page kind.

use serde::Serialize;
use tracing::debug;

use pagesmith_content::{ComparisonFragment, SectionFragment, section};
use pagesmith_shared::{PageKind, PipelineError, ProductRecord, Question, QuestionCategory, Result};

use crate::strategy::{SelectionRule, Strategy};

// ---------------------------------------------------------------------------
// Page structures
// ---------------------------------------------------------------------------

/// FAQ page: a diverse selection from the generated question catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqPage {
    pub page_type: &'static str,
    pub product_name: String,
    /// Full catalog size, before selection.
    pub total_questions_generated: usize,
    /// Size of the displayed selection.
    pub total_questions_displayed: usize,
    /// Selected questions, in selection order.
    pub questions: Vec<Question>,
    pub metadata: FaqMetadata,
}

/// FAQ page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqMetadata {
    pub generated_from: &'static str,
    /// Categories of the selected questions, in selection order.
    pub categories: Vec<QuestionCategory>,
}

/// Product detail page: hero plus one fragment per configured section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductPage {
    pub page_type: &'static str,
    pub hero: ProductHero,
    pub sections: Vec<SectionFragment>,
}

/// Product page hero block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductHero {
    pub product_name: String,
    pub tagline: String,
}

/// Comparison page: both records in full plus the precomputed comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonPage {
    pub page_type: &'static str,
    pub product_a: ProductRecord,
    pub product_b: ProductRecord,
    pub comparison: ComparisonFragment,
}

/// A rendered page of any kind. Serializes as the inner page shape; the
/// `page_type` field is the discriminator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Page {
    Faq(FaqPage),
    Product(ProductPage),
    Comparison(ComparisonPage),
}

impl Page {
    /// The kind this page was rendered as.
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Faq(_) => PageKind::Faq,
            Page::Product(_) => PageKind::Product,
            Page::Comparison(_) => PageKind::Comparison,
        }
    }
}

// ---------------------------------------------------------------------------
// Render inputs
// ---------------------------------------------------------------------------

/// Inputs for one render call. Each kind needs different data; handing the
/// renderer a variant that does not match the requested kind is a coordinator
/// bug and fails with [`PipelineError::UnsupportedPageKind`].
#[derive(Debug)]
pub enum RenderInputs<'a> {
    Faq {
        product: &'a ProductRecord,
        questions: &'a [Question],
    },
    Product {
        product: &'a ProductRecord,
    },
    Comparison {
        product_a: &'a ProductRecord,
        product_b: &'a ProductRecord,
        comparison: &'a ComparisonFragment,
    },
}

/// Render one page. The strategy must have been resolved for the same kind.
pub fn render(kind: PageKind, inputs: &RenderInputs<'_>, strategy: &Strategy) -> Result<Page> {
    if strategy.kind() != kind {
        return Err(PipelineError::UnsupportedPageKind {
            kind: kind.as_str(),
        });
    }

    let page = match (kind, inputs, strategy) {
        (
            PageKind::Faq,
            RenderInputs::Faq { product, questions },
            Strategy::Faq {
                max_questions,
                selection_rule,
            },
        ) => Page::Faq(render_faq(
            product,
            questions,
            *max_questions,
            *selection_rule,
        )),
        (PageKind::Product, RenderInputs::Product { product }, Strategy::Product { sections }) => {
            Page::Product(render_product(product, sections))
        }
        (
            PageKind::Comparison,
            RenderInputs::Comparison {
                product_a,
                product_b,
                comparison,
            },
            Strategy::Comparison { .. },
        ) => Page::Comparison(render_comparison(product_a, product_b, comparison)),
        _ => {
            return Err(PipelineError::UnsupportedPageKind {
                kind: kind.as_str(),
            });
        }
    };

    debug!(kind = %kind, "rendered page");
    Ok(page)
}

// ---------------------------------------------------------------------------
// Per-kind renderers
// ---------------------------------------------------------------------------

fn render_faq(
    product: &ProductRecord,
    questions: &[Question],
    max_questions: usize,
    selection_rule: SelectionRule,
) -> FaqPage {
    let selected = match selection_rule {
        SelectionRule::OnePerCategory => select_one_per_category(questions, max_questions),
    };

    let categories = selected.iter().map(|q| q.category).collect();

    FaqPage {
        page_type: "faq",
        product_name: product.name.clone(),
        total_questions_generated: questions.len(),
        total_questions_displayed: selected.len(),
        questions: selected,
        metadata: FaqMetadata {
            generated_from: "product_data",
            categories,
        },
    }
}

/// Walk the question sequence in generator order, accepting a question only
/// if its category has not been used yet, until `max_questions` are selected
/// or the sequence is exhausted.
fn select_one_per_category(questions: &[Question], max_questions: usize) -> Vec<Question> {
    let mut selected: Vec<Question> = Vec::new();
    let mut used: Vec<QuestionCategory> = Vec::new();

    for question in questions {
        if selected.len() >= max_questions {
            break;
        }
        if !used.contains(&question.category) {
            used.push(question.category);
            selected.push(question.clone());
        }
    }

    selected
}

fn render_product(
    product: &ProductRecord,
    sections: &[pagesmith_content::SectionKind],
) -> ProductPage {
    ProductPage {
        page_type: "product",
        hero: ProductHero {
            product_name: product.name.clone(),
            tagline: format!(
                "Professional {} serum for visible results",
                product.concentration
            ),
        },
        sections: sections.iter().map(|k| section(*k, product)).collect(),
    }
}

fn render_comparison(
    product_a: &ProductRecord,
    product_b: &ProductRecord,
    comparison: &ComparisonFragment,
) -> ComparisonPage {
    // All comparison computation happened upstream; this is pure composition.
    ComparisonPage {
        page_type: "comparison",
        product_a: product_a.clone(),
        product_b: product_b.clone(),
        comparison: comparison.clone(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
