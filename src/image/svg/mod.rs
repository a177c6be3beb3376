//! SVG rasterization.
//!
//! # Modules
//!
//! - [`load`]: parse SVG files with usvg (system fonts, relative resources)
//! - [`convert`]: render, resize and encode to PNG
//!
//! # Architecture
//!
//! ```text
//! docs/*.svg
//!     │
//!     ▼
//! ┌──────┐
//! │ load │ ──► usvg::Tree (parsed once per source)
//! └──┬───┘
//!    │
//!    ▼
//! ┌─────────┐
//! │ convert │ ──► render at density ► cover resize ► PNG (level 9)
//! └─────────┘
//! ```

mod convert;
mod load;

pub use convert::{
    BASE_DENSITY, MAX_RENDER_SIDE, encode_png, rasterize, render_png, render_scale, resize_cover,
};
pub use load::SvgLoader;
