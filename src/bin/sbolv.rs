//! Command-line front end: turns shorthand notation into a JSON render
//! request for an external renderer. Thin glue only; all the logic
//! lives in the library.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sbolv_shorthand::catalog::GlyphCatalog;
use sbolv_shorthand::request::{build_request, DEFAULT_GAP_SIZE};

/// Generates a render request for a genetic construct given in
/// shorthand notation, e.g. `25 1,3 3,43 6`.
#[derive(Parser)]
#[command(name = "sbolv", version, about)]
struct Cli {
    /// The shorthand string defining the construct to draw.
    #[arg(long)]
    string: String,

    /// Path to a JSON glyph catalog (an ordered list of glyph
    /// definitions with their sub-paths and default styles).
    #[arg(long)]
    catalog: PathBuf,

    /// Rotation of the construct, as an arithmetic expression.
    #[arg(short, long, default_value = "")]
    rotation: String,

    /// Size of the distance between the parts.
    #[arg(short, long, default_value_t = DEFAULT_GAP_SIZE)]
    gapsize: f64,

    /// An interaction "source,target,kind,color"; several can be
    /// separated by a double forward slash //.
    #[arg(short, long, default_value = "")]
    interaction: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = fs::read_to_string(&cli.catalog)
        .with_context(|| format!("reading glyph catalog {}", cli.catalog.display()))?;
    let catalog: GlyphCatalog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing glyph catalog {}", cli.catalog.display()))?;

    let request = build_request(
        &catalog,
        &cli.string,
        Some(&cli.interaction),
        Some(&cli.rotation),
        cli.gapsize,
    )?;

    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}
