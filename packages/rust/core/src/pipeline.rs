//! End-to-end pipeline: raw record → parse → questions → pages.
//!
//! Single-threaded and synchronous; every stage is a pure function of its
//! declared inputs. The only non-pure operation (writing files) lives in the
//! writer and runs after all three pages are fully constructed.

use serde_json::Value;
use tracing::{info, instrument};

use pagesmith_content::compare;
use pagesmith_shared::{PageKind, ProductRecord, Result};

use crate::competitor::fictional_competitor;
use crate::render::{Page, RenderInputs, render};
use crate::strategy::Strategy;

/// The three pages produced by one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutput {
    pub faq: Page,
    pub product_page: Page,
    pub comparison_page: Page,
}

/// Stage-progress callback. The core emits completion events structurally and
/// never prints; the caller decides display.
pub trait ProgressReporter {
    /// Called when entering a new stage.
    fn stage(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, output: &PipelineOutput);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn stage(&self, _name: &str) {}
    fn done(&self, _output: &PipelineOutput) {}
}

/// Run the full pipeline over one raw product record.
///
/// 1. Parse the record (fatal on malformed input — no page is built)
/// 2. Generate the question catalog
/// 3. Render the FAQ page
/// 4. Render the product page
/// 5. Synthesize the competitor and compare
/// 6. Render the comparison page
#[instrument(skip_all)]
pub fn run_pipeline(raw: &Value, progress: &dyn ProgressReporter) -> Result<PipelineOutput> {
    progress.stage("Parsing product record");
    let product = ProductRecord::from_raw(raw)?;
    info!(product = %product.name, "record parsed");

    progress.stage("Generating questions");
    let questions = pagesmith_questions::generate(&product);

    progress.stage("Rendering FAQ page");
    let faq = render(
        PageKind::Faq,
        &RenderInputs::Faq {
            product: &product,
            questions: &questions,
        },
        &Strategy::resolve(PageKind::Faq),
    )?;

    progress.stage("Rendering product page");
    let product_page = render(
        PageKind::Product,
        &RenderInputs::Product { product: &product },
        &Strategy::resolve(PageKind::Product),
    )?;

    progress.stage("Synthesizing competitor");
    let competitor = fictional_competitor();
    let comparison = compare(&product, &competitor);

    progress.stage("Rendering comparison page");
    let comparison_page = render(
        PageKind::Comparison,
        &RenderInputs::Comparison {
            product_a: &product,
            product_b: &competitor,
            comparison: &comparison,
        },
        &Strategy::resolve(PageKind::Comparison),
    )?;

    let output = PipelineOutput {
        faq,
        product_page,
        comparison_page,
    };

    progress.done(&output);
    info!(product = %product.name, "pipeline complete");

    Ok(output)
}

impl PipelineOutput {
    /// The page for a given kind.
    pub fn page(&self, kind: PageKind) -> &Page {
        match kind {
            PageKind::Faq => &self.faq,
            PageKind::Product => &self.product_page,
            PageKind::Comparison => &self.comparison_page,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pagesmith_shared::PipelineError;
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
    fn pipeline_produces_three_pages() {
        let output = run_pipeline(&raw_record(), &SilentProgress).unwrap();
        assert_eq!(output.faq.kind(), PageKind::Faq);
        assert_eq!(output.product_page.kind(), PageKind::Product);
        assert_eq!(output.comparison_page.kind(), PageKind::Comparison);
    }

    #[test]
    fn comparison_scenario_matches_known_values() {
        let output = run_pipeline(&raw_record(), &SilentProgress).unwrap();
        let json = serde_json::to_value(&output.comparison_page).unwrap();

        assert_eq!(json["product_b"]["name"], "RadiantGlow Vitamin C Complex");
        assert_eq!(json["comparison"]["price_difference"], 200);
        assert_eq!(
            json["comparison"]["cheaper_product"],
            "GlowBoost Vitamin C Serum"
        );
        // The two fixed ingredient lists share no exact strings.
        assert_eq!(
            json["comparison"]["ingredients"]["common"],
            serde_json::json!([])
        );
    }

    #[test]
    fn pipeline_is_idempotent() {
        let raw = raw_record();
        let first = run_pipeline(&raw, &SilentProgress).unwrap();
        let second = run_pipeline(&raw, &SilentProgress).unwrap();

        assert_eq!(first, second);

        // Byte-identical serialized pages.
        for kind in [PageKind::Faq, PageKind::Product, PageKind::Comparison] {
            let a = serde_json::to_string_pretty(first.page(kind)).unwrap();
            let b = serde_json::to_string_pretty(second.page(kind)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn malformed_input_aborts_before_any_page() {
        let mut raw = raw_record();
        raw.as_object_mut().unwrap().remove("price");

        let err = run_pipeline(&raw, &SilentProgress).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField { ref field } if field == "price"));
    }

    #[test]
    fn stages_are_reported_in_order() {
        use std::cell::RefCell;

        struct Recorder(RefCell<Vec<String>>);
        impl ProgressReporter for Recorder {
            fn stage(&self, name: &str) {
                self.0.borrow_mut().push(name.to_string());
            }
            fn done(&self, _output: &PipelineOutput) {
                self.0.borrow_mut().push("done".into());
            }
        }

        let recorder = Recorder(RefCell::new(Vec::new()));
        run_pipeline(&raw_record(), &recorder).unwrap();

        let stages = recorder.0.into_inner();
        assert_eq!(
            stages,
            [
                "Parsing product record",
                "Generating questions",
                "Rendering FAQ page",
                "Rendering product page",
                "Synthesizing competitor",
                "Rendering comparison page",
                "done",
            ]
        );
    }
}
