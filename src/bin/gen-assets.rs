//! Generate PNG favicons and the social preview image from their SVG sources.

use anyhow::{Context, Result};
use clap::Parser;
use docs_assets::cli::{IconsCli, icons};
use docs_assets::log;

fn main() -> Result<()> {
    let cli = IconsCli::parse();
    let root = cli.common.init();

    let outputs = icons::generate_icons(&root).context("asset generation failed")?;
    log!("assets"; "{}", icons::summary(&outputs, &root));
    Ok(())
}
