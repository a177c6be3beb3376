//! Generated asset definitions and output writing.
//!
//! - [`target`]: fixed source/output table for both pipelines
//! - [`minify`]: CSS minification with lightningcss

pub mod minify;
pub mod target;

pub use target::{RASTER_TARGETS, RasterTarget, STYLESHEET_OUTPUT, STYLESHEET_SOURCE};

use std::fs;
use std::path::Path;

use crate::error::{AssetError, Result};

/// Write a generated asset, creating missing parent directories first.
///
/// Existing content is overwritten.
pub fn write_output(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| AssetError::CreateDir(parent.to_path_buf(), e))?;
    }
    fs::write(path, content).map_err(|e| AssetError::Write(path.to_path_buf(), e))
}

/// Fail with [`AssetError::MissingSource`] unless `path` is an existing file.
pub fn require_source(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(AssetError::MissingSource(path.to_path_buf()))
    }
}
