//! Asset generation error types.

use std::io;
use std::path::PathBuf;

use resvg::usvg;
use thiserror::Error;

/// Errors raised while producing a generated asset.
///
/// None of them are recoverable: the pipeline stops and the binary exits
/// with a non-zero status.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("source file not found: `{0}`")]
    MissingSource(PathBuf),

    #[error("failed to read `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("failed to create directory `{0}`")]
    CreateDir(PathBuf, #[source] io::Error),

    #[error("failed to parse SVG `{0}`")]
    Svg(PathBuf, #[source] usvg::Error),

    #[error("failed to render `{path}` at {width}x{height}")]
    Render {
        path: PathBuf,
        width: u32,
        height: u32,
    },

    #[error("failed to encode PNG `{0}`")]
    Encode(PathBuf, #[source] image::ImageError),

    #[error("failed to minify CSS `{0}`: {1}")]
    Css(PathBuf, String),

    #[error("failed to write `{0}`")]
    Write(PathBuf, #[source] io::Error),
}

pub type Result<T> = std::result::Result<T, AssetError>;
