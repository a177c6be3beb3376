//! Image processing utilities.
//!
//! # Modules
//!
//! - [`svg`]: SVG loading and rasterization to PNG

pub mod svg;
