//! Color and pixel value types.
//!
//! Everything the renderer draws is expressed as a [`Color`] (an opaque RGB
//! triple) paired with an 8-bit coverage alpha at the call site. A [`Pixel`]
//! is what the canvas actually stores: a color plus its accumulated alpha.

use image::Rgba;

// ============================================================================
// Color
// ============================================================================

/// An 8-bit RGB color with no alpha channel.
///
/// Colors are plain values; alpha is supplied separately wherever a color is
/// painted, because the same brand color is reused at many coverage levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolates between `self` (t = 0) and `other` (t = 1).
    ///
    /// Each channel is computed as `a + (b - a) * t` and truncated toward
    /// zero. The truncation matters: downstream blending is integer math,
    /// and rounding here would shift gradient bands by one level.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Color::new(ch(self.r, other.r), ch(self.g, other.g), ch(self.b, other.b))
    }

    /// Pairs this color with an alpha, producing a storable pixel.
    pub const fn with_alpha(self, alpha: u8) -> Pixel {
        Pixel { color: self, alpha }
    }
}

// ============================================================================
// Pixel
// ============================================================================

/// A color plus an 8-bit alpha: the unit stored in a [`Canvas`](crate::Canvas).
///
/// Alpha 0 is fully transparent, 255 fully opaque. Alpha here is straight
/// (non-premultiplied); the compositor in `canvas.rs` depends on that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub color: Color,
    pub alpha: u8,
}

impl Pixel {
    pub const fn new(color: Color, alpha: u8) -> Self {
        Self { color, alpha }
    }

    /// Fully transparent black, the identity pixel for compositing.
    pub const TRANSPARENT: Pixel = Pixel::new(Color::new(0, 0, 0), 0);
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Self {
        Rgba([p.color.r, p.color.g, p.color.b, p.alpha])
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Pixel::new(Color::new(r, g, b), a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_are_exact() {
        let teal = Color::new(20, 184, 166);
        let indigo = Color::new(99, 102, 241);
        assert_eq!(teal.lerp(indigo, 0.0), teal);
        assert_eq!(teal.lerp(indigo, 1.0), indigo);
    }

    #[test]
    fn lerp_stays_within_channel_bounds() {
        let c1 = Color::new(20, 184, 166);
        let c2 = Color::new(99, 102, 241);
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let mid = c1.lerp(c2, t);
            assert!(mid.r >= c1.r.min(c2.r) && mid.r <= c1.r.max(c2.r));
            assert!(mid.g >= c1.g.min(c2.g) && mid.g <= c1.g.max(c2.g));
            assert!(mid.b >= c1.b.min(c2.b) && mid.b <= c1.b.max(c2.b));
        }
    }

    #[test]
    fn lerp_truncates_toward_zero() {
        // 0 + (255 - 0) * 0.5 = 127.5 -> 127, not 128
        let mid = Color::new(0, 0, 0).lerp(Color::new(255, 255, 255), 0.5);
        assert_eq!(mid, Color::new(127, 127, 127));
    }

    #[test]
    fn pixel_rgba_round_trip() {
        let p = Pixel::new(Color::new(1, 2, 3), 4);
        let rgba: Rgba<u8> = p.into();
        assert_eq!(rgba.0, [1, 2, 3, 4]);
        assert_eq!(Pixel::from(rgba), p);
    }
}
