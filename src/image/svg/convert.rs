//! SVG to PNG conversion.
//!
//! The source is rendered at its render density, then resized to the exact
//! target size and encoded with the strongest PNG compression.

use std::path::Path;

use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};
use resvg::{tiny_skia, usvg};

use crate::asset::RasterTarget;
use crate::debug;
use crate::error::{AssetError, Result};

/// Density at which one SVG user unit maps to one pixel.
pub const BASE_DENSITY: f32 = 72.0;

/// Longest side of the intermediate render, in pixels.
pub const MAX_RENDER_SIDE: f32 = 8192.0;

/// Render `tree` for `target` and return the encoded PNG.
///
/// `output` is only used for error reporting.
pub fn render_png(tree: &usvg::Tree, target: &RasterTarget, output: &Path) -> Result<Vec<u8>> {
    let rendered = rasterize(tree, target.density, output)?;
    debug!("render"; "{}: rendered {}x{} at {}dpi",
        target.name, rendered.width(), rendered.height(), target.density);

    let resized = resize_cover(rendered, target.width, target.height);
    let png = encode_png(&resized, output)?;
    debug!("render"; "{}: {}x{} png, {} bytes",
        target.name, target.width, target.height, png.len());
    Ok(png)
}

/// Scale factor from SVG user units to rendered pixels.
///
/// Clamped so the longest rendered side stays within [`MAX_RENDER_SIDE`].
pub fn render_scale(width: f32, height: f32, density: f32) -> f32 {
    let scale = density / BASE_DENSITY;
    let longest = width.max(height);
    if longest * scale > MAX_RENDER_SIDE {
        MAX_RENDER_SIDE / longest
    } else {
        scale
    }
}

/// Render `tree` at `density` into straight (non-premultiplied) RGBA.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rasterize(tree: &usvg::Tree, density: f32, output: &Path) -> Result<RgbaImage> {
    let size = tree.size();
    let scale = render_scale(size.width(), size.height(), density);
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let render_error = || AssetError::Render {
        path: output.to_path_buf(),
        width,
        height,
    };

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(render_error)?;
    resvg::render(
        tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    // tiny-skia stores premultiplied alpha, PNG wants straight alpha
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(width, height, data).ok_or_else(render_error)
}

/// Resize to exactly `width`x`height`, scaling to fill and cropping the
/// overflow equally from both sides.
pub fn resize_cover(image: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image;
    }
    DynamicImage::ImageRgba8(image)
        .resize_to_fill(width, height, FilterType::Lanczos3)
        .to_rgba8()
}

/// Encode as PNG with maximum compression.
pub fn encode_png(image: &RgbaImage, output: &Path) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilter::Adaptive)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| AssetError::Encode(output.to_path_buf(), e))?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba};

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32" viewBox="0 0 32 32">
        <rect width="32" height="32" fill="#ff0000"/>
    </svg>"##;

    const WIDE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="120" height="63">
        <rect width="120" height="63" fill="#0000ff"/>
    </svg>"##;

    fn parse(svg: &str) -> usvg::Tree {
        usvg::Tree::from_str(svg, &usvg::Options::default()).unwrap()
    }

    fn target(width: u32, height: u32, density: f32) -> RasterTarget {
        RasterTarget {
            name: "test",
            source: "test.svg",
            output: "test.png",
            width,
            height,
            density,
        }
    }

    #[test]
    fn test_render_scale() {
        assert_eq!(render_scale(100.0, 100.0, 72.0), 1.0);
        assert_eq!(render_scale(100.0, 50.0, 144.0), 2.0);
    }

    #[test]
    fn test_render_scale_is_clamped() {
        let scale = render_scale(4096.0, 1024.0, 512.0);
        assert_eq!(scale * 4096.0, MAX_RENDER_SIDE);
    }

    #[test]
    fn test_rasterize_uses_density() {
        let tree = parse(WIDE);
        let image = rasterize(&tree, 144.0, Path::new("wide.png")).unwrap();
        assert_eq!(image.dimensions(), (240, 126));
    }

    #[test]
    fn test_rasterize_keeps_straight_alpha() {
        let tree = parse(SQUARE);
        let image = rasterize(&tree, 72.0, Path::new("square.png")).unwrap();
        assert_eq!(*image.get_pixel(16, 16), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_resize_cover_exact_size() {
        let image = RgbaImage::from_pixel(300, 100, Rgba([0, 0, 0, 255]));
        let resized = resize_cover(image, 50, 50);
        assert_eq!(resized.dimensions(), (50, 50));

        let image = RgbaImage::from_pixel(100, 300, Rgba([0, 0, 0, 255]));
        let resized = resize_cover(image, 1200, 630);
        assert_eq!(resized.dimensions(), (1200, 630));
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let image = RgbaImage::from_pixel(16, 16, Rgba([10, 20, 30, 255]));
        let png = encode_png(&image, Path::new("x.png")).unwrap();
        assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (16, 16));
        assert_eq!(decoded.to_rgba8().get_pixel(3, 3), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_render_png_target_sizes() {
        let tree = parse(SQUARE);
        for side in [16, 32, 180] {
            let png = render_png(&tree, &target(side, side, 512.0), Path::new("i.png")).unwrap();
            let decoded = image::load_from_memory(&png).unwrap();
            assert_eq!(decoded.dimensions(), (side, side));
        }

        let tree = parse(WIDE);
        let png = render_png(&tree, &target(1200, 630, 144.0), Path::new("og.png")).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (1200, 630));
        // Solid fill survives the resize
        assert_eq!(decoded.to_rgba8().get_pixel(600, 315), &Rgba([0, 0, 255, 255]));
    }
}
