//! Radial gradient rendering.
//!
//! The icon's glow is a single radial gradient composited over the
//! background. The renderer walks every pixel of the canvas (no spatial
//! culling; the canvas is small and fixed-size), interpolates the spec's
//! two colors by eased normalized distance, and pushes the result through
//! [`Canvas::composite`]. Output is fully deterministic.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::IconError;

// ============================================================================
// GradientSpec
// ============================================================================

/// Describes one radial gradient pass.
///
/// A value type consumed once by [`fill_radial`]; nothing holds on to it
/// after the pass.
#[derive(Debug, Clone, Copy)]
pub struct GradientSpec {
    /// Gradient center in canvas coordinates.
    pub center: (f32, f32),
    /// Distance at which the gradient fades to nothing. Must be positive.
    pub radius: f32,
    /// Color at the center.
    pub inner: Color,
    /// Color approached at the edge.
    pub outer: Color,
    /// Alpha at the exact center; falls off quadratically to 0 at `radius`.
    pub peak_alpha: u8,
}

/// Composites a radial gradient over the whole canvas.
///
/// For each pixel: `t = min(dist / radius, 1)` then `t = t * t` (ease-out,
/// biasing coverage toward the center color), color `lerp(inner, outer, t)`,
/// alpha `round(peak_alpha * (1 - t))`. Pixels at or beyond `radius` get
/// alpha 0 and are untouched.
pub fn fill_radial(canvas: &mut Canvas, spec: &GradientSpec) -> Result<(), IconError> {
    if spec.radius <= 0.0 {
        return Err(IconError::geometry(format!(
            "radial gradient radius must be positive, got {}",
            spec.radius
        )));
    }

    let (cx, cy) = spec.center;
    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let dx = x as f32 - cx;
            let dy = y as f32 - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            let t = (dist / spec.radius).min(1.0);
            let t = t * t;
            let color = spec.inner.lerp(spec.outer, t);
            let alpha = (spec.peak_alpha as f32 * (1.0 - t)).round() as u8;
            canvas.composite(x, y, color, alpha);
        }
    }
    Ok(())
}
