//! Build-time asset generation for the documentation site.
//!
//! Two independent pipelines, each shipped as its own binary:
//!
//! - `gen-assets`: rasterize `docs/favicon.svg` and `docs/og-image.svg` into
//!   PNG favicons and the social preview image ([`cli::icons`])
//! - `minify-css`: minify `docs/styles.css` into `docs/styles.min.css` ([`cli::css`])

pub mod asset;
pub mod cli;
pub mod error;
pub mod image;
pub mod logger;
pub mod utils;

pub use error::{AssetError, Result};
