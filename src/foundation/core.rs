pub use kurbo::{Affine, Size, Vec2};

/// Replace a non-finite value with `0.0`.
///
/// Geometry outputs feed straight into style properties, where `NaN` or `inf` would poison layout.
pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Pixel size of an image, viewport, or document.
pub(crate) fn size_of(width: f64, height: f64) -> Size {
    Size::new(finite_or_zero(width), finite_or_zero(height))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
