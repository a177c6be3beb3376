//! Human-readable sizes.

/// Format a byte count as kilobytes with two decimals, e.g. `1.50KB`.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn format_kb(bytes: usize) -> String {
    format!("{:.2}KB", bytes as f64 / 1024.0)
}
