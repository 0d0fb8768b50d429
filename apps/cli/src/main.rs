//! pagesmith CLI — structured product records in, content pages out.
//!
//! Turns one product record into an FAQ page, a product detail page, and a
//! competitor comparison page, written as JSON artifacts.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
