//! Core pipeline orchestration for pagesmith.
//!
//! Ties record parsing, question generation, comparison, and page rendering
//! into the end-to-end `run_pipeline` workflow, plus the output writer that
//! persists the result.

pub mod competitor;
pub mod pipeline;
pub mod render;
pub mod strategy;
pub mod writer;

pub use competitor::fictional_competitor;
pub use pipeline::{PipelineOutput, ProgressReporter, SilentProgress, run_pipeline};
pub use render::{Page, RenderInputs, render};
pub use strategy::Strategy;
pub use writer::{WriteConfig, WriteResult, page_filename, write_pages};
