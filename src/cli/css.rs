//! Stylesheet minification.

use std::fs;
use std::path::{Path, PathBuf};

use crate::asset::{
    STYLESHEET_OUTPUT, STYLESHEET_SOURCE, minify::minify_css, require_source, write_output,
};
use crate::debug;
use crate::error::{AssetError, Result};
use crate::utils::format_kb;

/// Outcome of a minification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinifyReport {
    pub output: PathBuf,
    /// Source length in bytes.
    pub original_len: usize,
    /// Output length in bytes.
    pub minified_len: usize,
}

impl MinifyReport {
    /// One-line summary with both sizes in kilobytes.
    pub fn summary(&self) -> String {
        format!(
            "minified CSS written to {} (original {} → min {})",
            self.output.display(),
            format_kb(self.original_len),
            format_kb(self.minified_len)
        )
    }
}

/// Minify `docs/styles.css` under `root` into `docs/styles.min.css`.
///
/// Nothing is written unless the source exists and minifies cleanly.
pub fn minify_stylesheet(root: &Path) -> Result<MinifyReport> {
    let source = root.join(STYLESHEET_SOURCE);
    let output = root.join(STYLESHEET_OUTPUT);

    require_source(&source)?;
    let css = fs::read_to_string(&source).map_err(|e| AssetError::Read(source.clone(), e))?;
    debug!("css"; "read {} ({} bytes)", source.display(), css.len());

    let minified = minify_css(&css, &source)?;
    write_output(&output, minified.as_bytes())?;

    Ok(MinifyReport {
        output,
        original_len: css.len(),
        minified_len: minified.len(),
    })
}
