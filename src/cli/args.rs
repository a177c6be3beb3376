//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

use crate::logger;
use crate::utils::normalize_path;

/// Rasterize docs/favicon.svg and docs/og-image.svg into PNG favicons and the social preview image
#[derive(Parser, Debug, Clone)]
#[command(name = "gen-assets", version, long_about = None)]
pub struct IconsCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Minify docs/styles.css into docs/styles.min.css
#[derive(Parser, Debug, Clone)]
#[command(name = "minify-css", version, long_about = None)]
pub struct CssCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Arguments shared by both binaries. All optional.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Project root that docs/ paths are resolved against
    #[arg(short, long, default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Apply color and verbosity settings, returning the absolute project root.
    pub fn init(&self) -> PathBuf {
        match self.color {
            ColorChoice::Always => owo_colors::set_override(true),
            ColorChoice::Never => owo_colors::set_override(false),
            ColorChoice::Auto => {} // owo-colors auto-detects TTY
        }
        logger::set_verbose(self.verbose);
        normalize_path(&self.root)
    }
}
