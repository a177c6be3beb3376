//! Minify the documentation stylesheet.

use anyhow::{Context, Result};
use clap::Parser;
use docs_assets::cli::{CssCli, css};
use docs_assets::log;

fn main() -> Result<()> {
    let cli = CssCli::parse();
    let root = cli.common.init();

    let report = css::minify_stylesheet(&root).context("CSS minification failed")?;
    log!("css"; "{}", report.summary());
    Ok(())
}
