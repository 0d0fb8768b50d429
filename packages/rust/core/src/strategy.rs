//! Per-page-kind selection and composition rules.
//!
//! The strategy tables are process-wide read-only configuration: module-level
//! constants resolved by an exhaustive match, never mutable state.

use pagesmith_content::SectionKind;
use pagesmith_shared::PageKind;

/// How many questions the FAQ page displays at most.
pub const FAQ_MAX_QUESTIONS: usize = 5;

/// Product page sections, in composition order.
pub const PRODUCT_SECTIONS: [SectionKind; 5] = [
    SectionKind::Benefits,
    SectionKind::Ingredients,
    SectionKind::Usage,
    SectionKind::Price,
    SectionKind::Safety,
];

/// Comparison axes, in composition order.
pub const COMPARISON_AXES: [ComparisonAxis; 3] = [
    ComparisonAxis::Ingredients,
    ComparisonAxis::Benefits,
    ComparisonAxis::Price,
];

/// Axes the comparison page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonAxis {
    Ingredients,
    Benefits,
    Price,
}

/// How FAQ questions are picked from the generated catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRule {
    /// At most one question per category, in generator order.
    OnePerCategory,
}

/// Resolved configuration for one page kind. Plain values, no identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Faq {
        max_questions: usize,
        selection_rule: SelectionRule,
    },
    Product {
        sections: &'static [SectionKind],
    },
    Comparison {
        axes: &'static [ComparisonAxis],
    },
}

impl Strategy {
    /// Static lookup from page kind to strategy. No computation.
    pub fn resolve(kind: PageKind) -> Strategy {
        match kind {
            PageKind::Faq => Strategy::Faq {
                max_questions: FAQ_MAX_QUESTIONS,
                selection_rule: SelectionRule::OnePerCategory,
            },
            PageKind::Product => Strategy::Product {
                sections: &PRODUCT_SECTIONS,
            },
            PageKind::Comparison => Strategy::Comparison {
                axes: &COMPARISON_AXES,
            },
        }
    }

    /// The page kind this strategy belongs to.
    pub fn kind(&self) -> PageKind {
        match self {
            Strategy::Faq { .. } => PageKind::Faq,
            Strategy::Product { .. } => PageKind::Product,
            Strategy::Comparison { .. } => PageKind::Comparison,
        }
    }
}
