//! Command-line interface module.

mod args;
pub mod css;
pub mod icons;

pub use args::{CommonArgs, CssCli, IconsCli};
