//! Shared types, error model, and configuration for pagesmith.
//!
//! This crate is the foundation depended on by all other pagesmith crates.
//! It provides:
//! - [`PipelineError`] — the unified error type
//! - Domain types ([`ProductRecord`], [`Question`], [`QuestionCategory`], [`PageKind`])
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, config_dir, config_file_path, init_config, load_config,
    load_config_from,
};
pub use error::{PipelineError, Result};
pub use types::{PageKind, ProductRecord, Question, QuestionCategory};
