//! Command-line front end for the listing pack generator.
//!
//! Runs the same sanitize → generate pipeline as the HTTP API against a
//! brief stored in a JSON file.
//!
//! # Usage
//!
//! ```bash
//! # Generate a full pack
//! cargo run --bin listing-pack -- generate --brief brief.json
//!
//! # Generate only the preview, forcing UK spelling
//! cargo run --bin listing-pack -- generate --brief brief.json --preview --uk
//!
//! # Split delimited keywords or materials
//! cargo run --bin listing-pack -- keywords "wedding gift, bridesmaid gift"
//! cargo run --bin listing-pack -- keywords --materials "oak, walnut"
//!
//! # Show the score breakdown
//! cargo run --bin listing-pack -- score --brief brief.json
//! ```
//!
//! # Environment Variables
//!
//! - `PHRASE_MAX_LENGTH`, `PREVIEW_TAG_COUNT` - same as the server
//! - `RUST_LOG` - log filter for stderr output (default: `warn`)

use listing_pack::application::services::{ListKind, ListingService};
use listing_pack::config::Config;
use listing_pack::domain::entities::{ListingInput, RawListingInput};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// CLI tool for generating listing packs.
#[derive(Parser)]
#[command(name = "listing-pack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a listing pack from a JSON brief
    Generate {
        /// Path to the brief JSON file
        #[arg(short, long)]
        brief: PathBuf,

        /// Print only the pre-payment preview
        #[arg(long)]
        preview: bool,

        /// Force UK spelling regardless of the brief
        #[arg(long)]
        uk: bool,
    },

    /// Split comma or newline delimited text into a normalized list
    Keywords {
        /// Text to split
        text: String,

        /// Parse as materials instead of keywords
        #[arg(long)]
        materials: bool,
    },

    /// Show the score of the pack a brief would produce
    Score {
        /// Path to the brief JSON file
        #[arg(short, long)]
        brief: PathBuf,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let config = Config::from_env();
    config.validate()?;
    let service = ListingService::new(config.sanitize_limits(), config.preview_tag_count);

    match cli.command {
        Commands::Generate { brief, preview, uk } => handle_generate(&service, &brief, preview, uk)?,
        Commands::Keywords { text, materials } => handle_keywords(&service, &text, materials)?,
        Commands::Score { brief } => handle_score(&service, &brief)?,
    }

    Ok(())
}

/// Reads and sanitizes a brief file.
fn load_brief(service: &ListingService, path: &Path) -> Result<ListingInput> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read brief {}", path.display()))?;

    let raw: RawListingInput = serde_json::from_str(&content)
        .with_context(|| format!("Brief {} is not a JSON object", path.display()))?;

    service.sanitize(&raw).map_err(|e| {
        eprintln!("{} {}", "✗".red().bold(), e.code().red());
        anyhow::anyhow!("{} ({})", e.code(), e.reason)
    })
}

fn handle_generate(service: &ListingService, path: &Path, preview: bool, uk: bool) -> Result<()> {
    let mut input = load_brief(service, path)?;
    if uk {
        input.include_uk_spelling = true;
    }

    let pack = service.build_pack(&input);

    let json = if preview {
        serde_json::to_string_pretty(&service.preview(&pack))?
    } else {
        serde_json::to_string_pretty(&pack)?
    };
    println!("{json}");

    Ok(())
}

fn handle_keywords(service: &ListingService, text: &str, materials: bool) -> Result<()> {
    let kind = if materials {
        ListKind::Materials
    } else {
        ListKind::Keywords
    };

    let items = service
        .parse_list(text, kind)
        .map_err(|e| anyhow::anyhow!("{} ({})", e.code(), e.reason))?;

    if items.is_empty() {
        println!("{}", "No items".yellow());
        return Ok(());
    }

    for (i, item) in items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.cyan());
    }

    Ok(())
}

fn handle_score(service: &ListingService, path: &Path) -> Result<()> {
    let input = load_brief(service, path)?;
    let pack = service.build_pack(&input);

    let score = pack.score.to_string();
    let colored_score = match pack.score {
        85.. => score.green().bold(),
        70..=84 => score.yellow().bold(),
        _ => score.red().bold(),
    };

    println!("\n{}", "📊 Listing Score".bold());
    println!("{}", "═".repeat(40).bright_black());
    println!("Score:               {}", colored_score);
    println!("Tags:                {}", pack.tags.len());
    println!("Supporting keywords: {}", input.supporting_keywords.len());
    println!("Materials:           {}", input.materials.len());
    println!(
        "Personalization:     {}",
        if input.personalization { "yes".green() } else { "no".yellow() }
    );
    println!("Processing days:     {}", input.processing_time_days);
    println!("Title:               {}", pack.title.cyan());

    Ok(())
}
