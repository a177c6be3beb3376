//! Small helpers shared by both pipelines.

pub mod path;
pub mod size;

pub use path::{display_relative, normalize_path};
pub use size::format_kb;
