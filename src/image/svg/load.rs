//! SVG parsing.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use resvg::usvg::{self, fontdb};

use crate::debug;
use crate::error::{AssetError, Result};

/// Parses SVG files, sharing one font database across sources.
pub struct SvgLoader {
    fontdb: Arc<fontdb::Database>,
}

impl SvgLoader {
    /// Loader without any fonts. `<text>` elements render as nothing.
    pub fn new() -> Self {
        Self {
            fontdb: Arc::new(fontdb::Database::new()),
        }
    }

    /// Loader with the system fonts, so text in the social preview renders.
    pub fn with_system_fonts() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        debug!("svg"; "loaded {} font faces", db.len());
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Read and parse the SVG at `path`.
    ///
    /// Relative `href`s inside the document resolve against its directory.
    pub fn load(&self, path: &Path) -> Result<usvg::Tree> {
        let data = fs::read(path).map_err(|e| AssetError::Read(path.to_path_buf(), e))?;

        let options = usvg::Options {
            resources_dir: fs::canonicalize(path)
                .ok()
                .and_then(|p| p.parent().map(Path::to_path_buf)),
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };

        let tree = usvg::Tree::from_data(&data, &options)
            .map_err(|e| AssetError::Svg(path.to_path_buf(), e))?;

        let size = tree.size();
        debug!("svg"; "parsed {} ({}x{})", path.display(), size.width(), size.height());
        Ok(tree)
    }
}

impl Default for SvgLoader {
    fn default() -> Self {
        Self::new()
    }
}
