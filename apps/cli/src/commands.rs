//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use pagesmith_core::pipeline::{PipelineOutput, ProgressReporter};
use pagesmith_core::writer::WriteConfig;
use pagesmith_shared::{AppConfig, PageKind, ProductRecord, init_config, load_config};

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// pagesmith — turn one product record into content pages.
#[derive(Parser)]
#[command(
    name = "pagesmith",
    version,
    about = "Turn a structured product record into FAQ, product, and comparison pages.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Generate all content pages from a product record JSON file.
    Generate {
        /// Path to the product record JSON file.
        input: String,

        /// Output directory (defaults to the configured output_dir).
        #[arg(short, long)]
        out: Option<String>,

        /// Pages to emit (comma-separated: faq,product,comparison). Defaults to all.
        #[arg(long)]
        emit: Option<String>,
    },

    /// Parse a product record and report problems without generating pages.
    Validate {
        /// Path to the product record JSON file.
        input: String,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "pagesmith=info",
        1 => "pagesmith=debug",
        _ => "pagesmith=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate { input, out, emit } => {
            cmd_generate(&input, out.as_deref(), emit.as_deref())
        }
        Command::Validate { input } => cmd_validate(&input),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_generate(input: &str, out: Option<&str>, emit: Option<&str>) -> Result<()> {
    let start = Instant::now();
    let config = load_config()?;

    let raw = read_record(input)?;

    // CLI flags override config values.
    let output_dir = match out {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(&config.defaults.output_dir),
    };
    let emit_kinds = resolve_emit(emit, &config)?;

    info!(input, output_dir = %output_dir.display(), "generating pages");

    let reporter = CliProgress::new();
    let output = pagesmith_core::run_pipeline(&raw, &reporter)?;

    let write_config = WriteConfig {
        output_dir,
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        emit: emit_kinds,
    };
    let result = pagesmith_core::write_pages(&write_config, &output)?;

    println!();
    println!("  Pages generated successfully!");
    for meta in &result.artifacts {
        println!("    {} ({} bytes)", meta.filename, meta.size_bytes);
    }
    println!("  Path:  {}", result.output_dir.display());
    println!("  Time:  {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    println!();

    Ok(())
}

fn cmd_validate(input: &str) -> Result<()> {
    let raw = read_record(input)?;
    let record = ProductRecord::from_raw(&raw)?;

    println!("  Record is valid.");
    println!("  Name:        {}", record.name);
    println!("  Price:       ₹{}", record.price);
    println!("  Ingredients: {}", record.ingredients.join(", "));
    println!("  Benefits:    {}", record.benefits.join(", "));

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Read and parse the raw record file into untyped JSON.
fn read_record(input: &str) -> Result<serde_json::Value> {
    let content = std::fs::read_to_string(input)
        .map_err(|e| eyre!("cannot read '{input}': {e}"))?;
    serde_json::from_str(&content).map_err(|e| eyre!("'{input}' is not valid JSON: {e}"))
}

/// Resolve which page kinds to emit: `--emit` flag first, then config.
fn resolve_emit(flag: Option<&str>, config: &AppConfig) -> Result<Vec<PageKind>> {
    let names: Vec<String> = match flag {
        Some(list) => list.split(',').map(|s| s.trim().to_string()).collect(),
        None => config.defaults.emit.clone(),
    };

    let mut kinds = Vec::with_capacity(names.len());
    for name in &names {
        let kind: PageKind = name.parse()?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }

    if kinds.is_empty() {
        return Err(eyre!("no pages selected to emit"));
    }

    Ok(kinds)
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap()
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Self { spinner }
    }
}

impl ProgressReporter for CliProgress {
    fn stage(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _output: &PipelineOutput) {
        self.spinner.finish_and_clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_flag_overrides_config() {
        let config = AppConfig::default();
        let kinds = resolve_emit(Some("faq,comparison"), &config).unwrap();
        assert_eq!(kinds, vec![PageKind::Faq, PageKind::Comparison]);
    }

    #[test]
    fn emit_defaults_to_all_configured_pages() {
        let config = AppConfig::default();
        let kinds = resolve_emit(None, &config).unwrap();
        assert_eq!(
            kinds,
            vec![PageKind::Faq, PageKind::Product, PageKind::Comparison]
        );
    }

    #[test]
    fn emit_rejects_unknown_kind() {
        let config = AppConfig::default();
        let err = resolve_emit(Some("faq,landing"), &config).unwrap_err();
        assert!(err.to_string().contains("landing"));
    }

    #[test]
    fn emit_deduplicates() {
        let config = AppConfig::default();
        let kinds = resolve_emit(Some("faq, faq, product"), &config).unwrap();
        assert_eq!(kinds, vec![PageKind::Faq, PageKind::Product]);
    }
}
