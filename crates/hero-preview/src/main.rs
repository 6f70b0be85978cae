//! Hero content preview
//!
//! Loads a hero section content file, runs it through the resolver and prints
//! the render model the web page would use.

use anyhow::{Context, Result};
use clap::Parser;
use hero_core::{ContentFormat, ResolvedHeroModel, load_descriptor, resolve};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hero-preview")]
#[command(about = "Resolve a hero section content file and print the render model")]
struct Args {
    /// Content file (.toml or .json)
    file: PathBuf,

    /// Content format, overrides the file extension (toml, json)
    #[arg(long)]
    format: Option<ContentFormat>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Render the model as JSON
fn to_json(model: &ResolvedHeroModel, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(model)
    } else {
        serde_json::to_string_pretty(model)
    };
    json.context("Failed to serialize resolved model")
}

/// Load the content file or exit with a helpful message
fn load(path: &Path, format: Option<ContentFormat>) -> Result<Option<ResolvedHeroModel>> {
    if !path.exists() {
        anyhow::bail!(
            "Content file '{}' not found.\n\n\
            Pass the path to a hero section file, e.g. crates/hero-web/content/hero.toml",
            path.display()
        );
    }

    let descriptor = load_descriptor(path, format)?;
    Ok(resolve(Some(&descriptor)))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match load(&args.file, args.format)? {
        Some(model) => {
            tracing::debug!(title = %model.title, buttons = model.buttons.len(), "Resolved hero section");
            println!("{}", to_json(&model, args.compact)?);
        }
        None => eprintln!("section disabled: nothing to render"),
    }

    Ok(())
}
