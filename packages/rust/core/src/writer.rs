//! Output writer.
//!
//! Takes fully constructed pages and writes them to the output directory as
//! pretty-printed JSON, one file per page, plus a `manifest.json` describing
//! the run. The pipeline itself never touches the filesystem; this is the
//! persistence collaborator invoked once, after all pages exist.

use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument};

use pagesmith_shared::{PageKind, PipelineError, Result};

use crate::pipeline::PipelineOutput;
use crate::render::Page;

/// File name for each page kind.
pub fn page_filename(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Faq => "faq.json",
        PageKind::Product => "product_page.json",
        PageKind::Comparison => "comparison_page.json",
    }
}

/// Configuration for one write run.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Directory the page files land in; created if absent.
    pub output_dir: PathBuf,
    /// Tool version recorded in the manifest.
    pub tool_version: String,
    /// Page kinds to emit.
    pub emit: Vec<PageKind>,
}

/// Metadata for a single written artifact.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ArtifactMeta {
    pub filename: String,
    pub sha256: String,
    pub size_bytes: usize,
}

/// The `manifest.json` structure written alongside the pages.
#[derive(Debug, Clone, serde::Serialize)]
pub struct OutputManifest {
    pub tool_version: String,
    pub product_name: String,
    pub generated_at: String,
    pub artifacts: Vec<ArtifactMeta>,
}

/// Result of a successful write run.
#[derive(Debug, Clone)]
pub struct WriteResult {
    /// Absolute or caller-relative output directory.
    pub output_dir: PathBuf,
    /// Metadata for each written page file (manifest excluded).
    pub artifacts: Vec<ArtifactMeta>,
}

/// Write the requested pages and the manifest.
///
/// Each file is written atomically (temp file, then rename). Page JSON uses
/// 2-space indentation with non-ASCII preserved; the pages carry no
/// timestamps, so repeated runs produce byte-identical page files.
#[instrument(skip_all, fields(output_dir = %config.output_dir.display(), pages = config.emit.len()))]
pub fn write_pages(config: &WriteConfig, output: &PipelineOutput) -> Result<WriteResult> {
    std::fs::create_dir_all(&config.output_dir)
        .map_err(|e| PipelineError::io(&config.output_dir, e))?;

    let mut artifacts = Vec::with_capacity(config.emit.len());

    for kind in &config.emit {
        let page = output.page(*kind);
        let meta = write_page(&config.output_dir, *kind, page)?;
        artifacts.push(meta);
    }

    let manifest = OutputManifest {
        tool_version: config.tool_version.clone(),
        product_name: product_name(output),
        generated_at: Utc::now().to_rfc3339(),
        artifacts: artifacts.clone(),
    };
    let manifest_json = serde_json::to_string_pretty(&manifest)?;
    write_atomic(&config.output_dir, "manifest.json", &manifest_json)?;

    info!(
        count = artifacts.len(),
        path = %config.output_dir.display(),
        "output written"
    );

    Ok(WriteResult {
        output_dir: config.output_dir.clone(),
        artifacts,
    })
}

/// Serialize and write one page file, returning its artifact metadata.
fn write_page(output_dir: &Path, kind: PageKind, page: &Page) -> Result<ArtifactMeta> {
    let filename = page_filename(kind);
    let json = serde_json::to_string_pretty(page)?;

    write_atomic(output_dir, filename, &json)?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let hash = format!("{:x}", hasher.finalize());

    debug!(file = %filename, size = json.len(), "wrote page");

    Ok(ArtifactMeta {
        filename: filename.to_string(),
        sha256: hash,
        size_bytes: json.len(),
    })
}

/// Write to a temp file in the target directory, then rename into place.
fn write_atomic(dir: &Path, filename: &str, content: &str) -> Result<()> {
    let target = dir.join(filename);
    let temp = dir.join(format!(".{filename}.tmp"));

    std::fs::write(&temp, content).map_err(|e| PipelineError::io(&temp, e))?;
    std::fs::rename(&temp, &target).map_err(|e| PipelineError::io(&target, e))?;

    Ok(())
}

/// Pull the product name out of whichever page carries it.
fn product_name(output: &PipelineOutput) -> String {
    match &output.faq {
        Page::Faq(page) => page.product_name.clone(),
        _ => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
