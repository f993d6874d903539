//! The canvas: a fixed-size RGBA pixel grid plus the compositing operator.
//!
//! This module owns the one piece of blending math everything else reuses:
//! [`Canvas::composite`], an integer straight-alpha "over" operator. Every
//! gradient, shape, and dot in the icon ends up as a sequence of composite
//! calls, so its exact truncation behavior defines the rendered output.

use image::RgbaImage;

use crate::color::{Color, Pixel};

// ============================================================================
// Canvas
// ============================================================================

/// A mutable width×height grid of RGBA pixels, origin top-left, row-major.
///
/// Backed by an [`image::RgbaImage`] so a finished canvas can be handed to
/// the `image` encoders without copying. A canvas is created with an initial
/// fill, mutated in place by draw calls, and read out once at export time;
/// it is never resized.
///
/// # Bounds
///
/// All accessors are bounds-checked and panic on out-of-range coordinates.
/// Call sites derive coordinates arithmetically from the fixed canvas size,
/// so an out-of-range access is a bug in the caller, not a recoverable
/// condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a canvas filled with the given pixel.
    pub fn new(width: u32, height: u32, fill: Pixel) -> Self {
        Self {
            data: RgbaImage::from_pixel(width, height, fill.into()),
        }
    }

    /// Creates a fully transparent canvas.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Pixel::TRANSPARENT)
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    /// Reads the pixel at (x, y). Panics if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        (*self.data.get_pixel(x, y)).into()
    }

    /// Writes the pixel at (x, y), replacing it entirely. Panics if out of
    /// bounds. Most drawing should go through [`composite`](Self::composite);
    /// `set` is for opaque fills where blending is a waste.
    pub fn set(&mut self, x: u32, y: u32, pixel: Pixel) {
        self.data.put_pixel(x, y, pixel.into());
    }

    /// Blends `color` at `alpha` coverage over the existing pixel at (x, y).
    ///
    /// This is a straight-alpha "over" done entirely in integer arithmetic:
    ///
    /// ```text
    /// outA = a + ea * (255 - a) / 255                      (floor)
    /// outC = (c * a + ec * ea * (255 - a) / 255) / outA    (floor)
    /// ```
    ///
    /// where `(ec, ea)` is the existing pixel and `(c, a)` the paint. If
    /// `outA` is zero the pixel becomes transparent black.
    ///
    /// The formula is deliberately not the premultiplied Porter-Duff "over":
    /// the channel weights are recomputed rather than reusing `outA`, and
    /// every division floors. Rendered edge colors at gradient boundaries
    /// depend on this exact order of operations, so it must not be
    /// "corrected" to float or premultiplied math.
    pub fn composite(&mut self, x: u32, y: u32, color: Color, alpha: u8) {
        let existing = self.get(x, y);
        let a = alpha as u32;
        let ea = existing.alpha as u32;

        let out_a = a + ea * (255 - a) / 255;
        if out_a == 0 {
            self.set(x, y, Pixel::TRANSPARENT);
            return;
        }

        let ch = |c: u8, ec: u8| -> u8 {
            ((c as u32 * a + ec as u32 * ea * (255 - a) / 255) / out_a) as u8
        };
        let blended = Pixel::new(
            Color::new(
                ch(color.r, existing.color.r),
                ch(color.g, existing.color.g),
                ch(color.b, existing.color.b),
            ),
            out_a as u8,
        );
        self.set(x, y, blended);
    }

    /// Fills one horizontal row with an opaque color.
    ///
    /// Used by the background gradients, which build a vertical two-tone
    /// ramp out of successive row fills.
    pub fn fill_row(&mut self, y: u32, color: Color) {
        for x in 0..self.width() {
            self.set(x, y, color.with_alpha(255));
        }
    }

    /// Borrows the underlying RGBA buffer, e.g. for encoding.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the canvas, yielding the underlying RGBA buffer.
    pub fn into_rgba(self) -> RgbaImage {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::new(8, 20, 30);

    #[test]
    fn new_canvas_is_uniformly_filled() {
        let canvas = Canvas::new(4, 3, BG.with_alpha(255));
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.get(x, y), BG.with_alpha(255));
            }
        }
    }

    #[test]
    fn composite_alpha_zero_is_a_no_op_on_opaque_pixels() {
        let mut canvas = Canvas::new(2, 2, BG.with_alpha(255));
        canvas.composite(1, 1, Color::new(255, 255, 255), 0);
        assert_eq!(canvas.get(1, 1), BG.with_alpha(255));
    }

    #[test]
    fn composite_opaque_over_opaque_replaces() {
        let mut canvas = Canvas::new(2, 2, BG.with_alpha(255));
        let teal = Color::new(20, 184, 166);
        canvas.composite(0, 0, teal, 255);
        assert_eq!(canvas.get(0, 0), teal.with_alpha(255));
    }

    #[test]
    fn composite_onto_transparent_keeps_paint_color() {
        let mut canvas = Canvas::transparent(2, 2);
        let teal = Color::new(20, 184, 166);
        canvas.composite(0, 0, teal, 128);
        let px = canvas.get(0, 0);
        assert_eq!(px.color, teal);
        assert_eq!(px.alpha, 128);
    }

    #[test]
    fn composite_matches_integer_reference() {
        // Hand-computed from the formula: paint (200, 100, 50) @ 100 over
        // opaque (8, 20, 30).
        let mut canvas = Canvas::new(1, 1, BG.with_alpha(255));
        canvas.composite(0, 0, Color::new(200, 100, 50), 100);
        let px = canvas.get(0, 0);
        // outA = 100 + 255*155/255 = 255
        assert_eq!(px.alpha, 255);
        // r: (200*100 + 8*255*155/255) / 255 = (20000 + 1240) / 255 = 83
        assert_eq!(px.color.r, 83);
        // g: (100*100 + 20*255*155/255) / 255 = (10000 + 3100) / 255 = 51
        assert_eq!(px.color.g, 51);
        // b: (50*100 + 30*255*155/255) / 255 = (5000 + 4650) / 255 = 37
        assert_eq!(px.color.b, 37);
    }

    #[test]
    fn composite_zero_over_transparent_yields_transparent_black() {
        let mut canvas = Canvas::new(1, 1, Pixel::new(Color::new(9, 9, 9), 0));
        canvas.composite(0, 0, Color::new(255, 0, 0), 0);
        assert_eq!(canvas.get(0, 0), Pixel::TRANSPARENT);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_get_panics() {
        let canvas = Canvas::new(2, 2, Pixel::TRANSPARENT);
        let _ = canvas.get(2, 0);
    }

    #[test]
    fn fill_row_is_opaque() {
        let mut canvas = Canvas::transparent(3, 2);
        canvas.fill_row(1, BG);
        assert_eq!(canvas.get(0, 1), BG.with_alpha(255));
        assert_eq!(canvas.get(2, 1), BG.with_alpha(255));
        assert_eq!(canvas.get(0, 0), Pixel::TRANSPARENT);
    }
}
