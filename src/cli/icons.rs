//! Favicon and social preview image generation.
//!
//! All sources are checked and parsed, and all PNGs are rendered in memory,
//! before anything is written. A missing or malformed source therefore
//! leaves the output directory untouched.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::asset::{RASTER_TARGETS, require_source, target::raster_sources, write_output};
use crate::debug;
use crate::error::Result;
use crate::image::svg::{SvgLoader, render_png};
use crate::utils::display_relative;

/// Generate every raster target under `root`.
///
/// Returns the written output paths in table order.
pub fn generate_icons(root: &Path) -> Result<Vec<PathBuf>> {
    generate_icons_with(root, &SvgLoader::with_system_fonts())
}

/// Same as [`generate_icons`] with an explicit SVG loader.
pub fn generate_icons_with(root: &Path, loader: &SvgLoader) -> Result<Vec<PathBuf>> {
    let sources: Vec<PathBuf> = raster_sources()
        .into_iter()
        .map(|source| root.join(source))
        .collect();

    // Existence first, so a missing second source is reported before parsing the first
    for source in &sources {
        require_source(source)?;
    }

    let mut trees = HashMap::with_capacity(sources.len());
    for source in sources {
        let tree = loader.load(&source)?;
        trees.insert(source, tree);
    }

    // Targets are independent: each reads an immutable tree and owns its output
    let rendered = RASTER_TARGETS
        .par_iter()
        .map(|target| {
            let output = target.output_path(root);
            let tree = &trees[&target.source_path(root)];
            render_png(tree, target, &output).map(|png| (output, png))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (output, png) in rendered {
        write_output(&output, &png)?;
        debug!("assets"; "wrote {} ({} bytes)", display_relative(&output, root), png.len());
        written.push(output);
    }
    Ok(written)
}

/// One-line summary of generated files, relative to `root`.
pub fn summary(outputs: &[PathBuf], root: &Path) -> String {
    let paths: Vec<String> = outputs
        .iter()
        .map(|path| display_relative(path, root))
        .collect();
    format!("generated: {}", paths.join(", "))
}
