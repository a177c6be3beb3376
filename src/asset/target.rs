//! Fixed sources and outputs, relative to the project root.

use std::path::{Path, PathBuf};

/// Render density for the small icons.
///
/// Sampling the vector well above the target size keeps 16px and 32px
/// icons sharp after downscaling.
pub const ICON_DENSITY: f32 = 512.0;

/// Render density for the social preview image.
pub const OG_DENSITY: f32 = 144.0;

pub const FAVICON_SOURCE: &str = "docs/favicon.svg";
pub const OG_SOURCE: &str = "docs/og-image.svg";

pub const STYLESHEET_SOURCE: &str = "docs/styles.css";
pub const STYLESHEET_OUTPUT: &str = "docs/styles.min.css";

/// One PNG produced from an SVG source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RasterTarget {
    /// Short name used in log output.
    pub name: &'static str,
    /// SVG source, relative to the project root.
    pub source: &'static str,
    /// PNG output, relative to the project root.
    pub output: &'static str,
    pub width: u32,
    pub height: u32,
    /// Dots per inch the source is sampled at before resizing.
    pub density: f32,
}

impl RasterTarget {
    const fn icon(name: &'static str, output: &'static str, side: u32) -> Self {
        Self {
            name,
            source: FAVICON_SOURCE,
            output,
            width: side,
            height: side,
            density: ICON_DENSITY,
        }
    }

    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(self.source)
    }

    pub fn output_path(&self, root: &Path) -> PathBuf {
        root.join(self.output)
    }
}

/// Every raster output, in the order they are reported.
pub const RASTER_TARGETS: &[RasterTarget] = &[
    RasterTarget::icon("favicon-16", "docs/favicon-16.png", 16),
    RasterTarget::icon("favicon-32", "docs/favicon-32.png", 32),
    RasterTarget::icon("icon-180", "docs/icon-180.png", 180),
    RasterTarget {
        name: "og-image",
        source: OG_SOURCE,
        output: "docs/og-image.png",
        width: 1200,
        height: 630,
        density: OG_DENSITY,
    },
];

/// Distinct SVG sources referenced by [`RASTER_TARGETS`], in first-use order.
pub fn raster_sources() -> Vec<&'static str> {
    let mut sources: Vec<&'static str> = Vec::new();
    for target in RASTER_TARGETS {
        if !sources.contains(&target.source) {
            sources.push(target.source);
        }
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_table() {
        let dims: Vec<_> = RASTER_TARGETS
            .iter()
            .map(|t| (t.output, t.width, t.height))
            .collect();
        assert_eq!(
            dims,
            [
                ("docs/favicon-16.png", 16, 16),
                ("docs/favicon-32.png", 32, 32),
                ("docs/icon-180.png", 180, 180),
                ("docs/og-image.png", 1200, 630),
            ]
        );
    }

    #[test]
    fn test_densities() {
        for target in &RASTER_TARGETS[..3] {
            assert_eq!(target.source, FAVICON_SOURCE);
            assert_eq!(target.density, 512.0);
        }
        assert_eq!(RASTER_TARGETS[3].source, OG_SOURCE);
        assert_eq!(RASTER_TARGETS[3].density, 144.0);
    }

    #[test]
    fn test_raster_sources_deduplicated() {
        assert_eq!(raster_sources(), [FAVICON_SOURCE, OG_SOURCE]);
    }

    #[test]
    fn test_paths_join_root() {
        let root = Path::new("/site");
        let target = &RASTER_TARGETS[0];
        assert_eq!(target.source_path(root), Path::new("/site/docs/favicon.svg"));
        assert_eq!(target.output_path(root), Path::new("/site/docs/favicon-16.png"));
    }
}
