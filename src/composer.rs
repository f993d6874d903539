//! Icon composition: the fixed back-to-front draw order.
//!
//! The composer turns a [`Palette`] and a canvas size into a finished icon.
//! Layers, back to front: background, glow, alignment guides, decorative
//! rings, the figure silhouette, the spine motif, accent dots. All geometry
//! is authored in a 1024×1024 reference space and scaled uniformly to the
//! requested size, so the same tables serve any output resolution.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::draw;
use crate::error::IconError;
use crate::gradient::{GradientSpec, fill_radial};
use crate::palette::{Background, Palette, WHITE};

/// Reference canvas size all geometry tables are authored against.
const REFERENCE_SIZE: f32 = 1024.0;

/// Number of capsules in the spine motif.
const SPINE_COUNT: usize = 7;
/// Capsule widths, top to bottom: shrink toward the neck, regrow, taper at
/// the tail.
const SPINE_WIDTHS: [f32; SPINE_COUNT] = [42.0, 46.0, 50.0, 50.0, 46.0, 42.0, 34.0];

// Per-part coverage alphas for the figure silhouette. Fixed constants, not
// computed; tuned so overlapping parts read as one body.
const HEAD_ALPHA: u8 = 220;
const NECK_ALPHA: u8 = 200;
const TORSO_ALPHA: u8 = 180;
const ARM_ALPHA: u8 = 160;
const LEG_ALPHA: u8 = 170;
const RING_ALPHA: u8 = 180;
const SPINE_ALPHA: u8 = 200;
const SPINE_DOT_ALPHA: u8 = 120;

// ============================================================================
// IconComposer
// ============================================================================

/// Renders one icon from a palette at a fixed size.
///
/// The composer is stateless between renders; [`compose`](Self::compose)
/// always starts from a fresh canvas.
pub struct IconComposer<'a> {
    palette: &'a Palette,
    size: u32,
}

impl<'a> IconComposer<'a> {
    /// Creates a composer for the given palette and square canvas size.
    pub fn new(palette: &'a Palette, size: u32) -> Result<Self, IconError> {
        if size == 0 {
            return Err(IconError::geometry("canvas size must be positive"));
        }
        Ok(Self { palette, size })
    }

    /// Renders the full icon into a new canvas.
    pub fn compose(&self) -> Result<Canvas> {
        let mut canvas = self.background()?;
        self.glow(&mut canvas)?;
        self.guide_lines(&mut canvas)?;
        self.rings(&mut canvas)?;
        self.figure(&mut canvas)?;
        self.spine(&mut canvas)?;
        self.accent_dots(&mut canvas)?;
        Ok(canvas)
    }

    /// Uniform scale from reference coordinates to this canvas.
    fn s(&self) -> f32 {
        self.size as f32 / REFERENCE_SIZE
    }

    fn center(&self) -> (f32, f32) {
        let half = (self.size / 2) as f32;
        (half, half)
    }

    // ---- Layer 1: background ----

    fn background(&self) -> Result<Canvas> {
        match self.palette.background {
            Background::VerticalGradient { top, bottom } => {
                let mut canvas = Canvas::new(self.size, self.size, top.with_alpha(255));
                for y in 0..self.size {
                    let t = y as f32 / self.size as f32;
                    canvas.fill_row(y, top.lerp(bottom, t));
                }
                Ok(canvas)
            }
            Background::CirclePlate { plate, radius } => {
                let mut canvas = Canvas::transparent(self.size, self.size);
                let (cx, cy) = self.center();
                draw::fill_circle(&mut canvas, cx, cy, radius * self.s(), plate, 255)?;
                Ok(canvas)
            }
        }
    }

    // ---- Layer 2: glow ----

    fn glow(&self, canvas: &mut Canvas) -> Result<()> {
        let Some(glow) = self.palette.glow else {
            return Ok(());
        };
        let spec = GradientSpec {
            center: self.center(),
            radius: (self.size / 3) as f32,
            inner: glow.inner,
            outer: glow.outer,
            peak_alpha: glow.peak_alpha,
        };
        fill_radial(canvas, &spec)
    }

    // ---- Layer 3: alignment guides ----

    /// Faint posture guide lines: one vertical axis and four horizontal
    /// ticks. Purely decorative.
    fn guide_lines(&self, canvas: &mut Canvas) -> Result<()> {
        let (cx, cy) = self.center();
        let gs = 1.4 * self.s();
        let guide = self.palette.guide;

        draw::draw_line(
            canvas,
            (cx, cy - 200.0 * gs),
            (cx, cy + 200.0 * gs),
            (2.0 * self.s()).max(1.0),
            guide,
            self.palette.guide_line_alpha,
        )?;

        for offset in [-120.0, -40.0, 40.0, 120.0] {
            let y = cy + offset * gs;
            let half_w = 30.0 * gs;
            draw::draw_line(
                canvas,
                (cx - half_w, y),
                (cx + half_w, y),
                (self.s()).max(1.0),
                guide,
                self.palette.guide_tick_alpha,
            )?;
        }
        Ok(())
    }

    // ---- Layer 4: decorative rings ----

    fn rings(&self, canvas: &mut Canvas) -> Result<()> {
        let (cx, cy) = self.center();
        let s = self.s();
        let [outer_w, secondary_w, inner_w] = self.palette.ring_widths;
        let ring_r = 380.0 * s;

        draw::draw_arc(
            canvas,
            cx,
            cy,
            ring_r,
            (outer_w * s).max(1.0),
            -30.0,
            210.0,
            self.palette.ring_primary,
            RING_ALPHA,
        )?;

        if let Some(secondary) = self.palette.ring_secondary {
            draw::draw_arc(
                canvas,
                cx,
                cy,
                ring_r - 2.0 * s,
                (secondary_w * s).max(1.0),
                180.0,
                330.0,
                secondary,
                RING_ALPHA,
            )?;
        }

        draw::draw_arc(
            canvas,
            cx,
            cy,
            340.0 * s,
            (inner_w * s).max(1.0),
            45.0,
            315.0,
            self.palette.ring_primary,
            RING_ALPHA,
        )?;
        Ok(())
    }

    // ---- Layer 5: figure silhouette ----

    /// A minimalist standing figure: head, neck, trapezoid torso, two arms,
    /// two legs, one base color at the fixed per-part alpha schedule.
    fn figure(&self, canvas: &mut Canvas) -> Result<()> {
        let (cx, cy) = self.center();
        let cy = cy + 10.0 * self.s();
        let f = 1.5 * self.s();
        let color = self.palette.figure;

        // Head
        let head_r = 28.0 * f;
        let head_cy = cy - 160.0 * f;
        draw::fill_circle(canvas, cx, head_cy, head_r, color, HEAD_ALPHA)?;

        // Neck
        let neck_w = 8.0 * f;
        draw::fill_rounded_rect(
            canvas,
            cx - neck_w,
            head_cy + head_r - 4.0 * f,
            cx + neck_w,
            head_cy + head_r + 20.0 * f,
            neck_w,
            color,
            NECK_ALPHA,
        )?;

        // Torso, slightly narrower at the hips
        let torso_top = head_cy + head_r + 16.0 * f;
        let torso_bottom = cy + 40.0 * f;
        let torso_w_top = 36.0 * f;
        let torso_w_bot = 28.0 * f;
        draw::fill_polygon(
            canvas,
            &[
                (cx - torso_w_top, torso_top),
                (cx + torso_w_top, torso_top),
                (cx + torso_w_bot, torso_bottom),
                (cx - torso_w_bot, torso_bottom),
            ],
            color,
            TORSO_ALPHA,
        )?;

        // Arms. The right arm flares outward by 12 units; the left one is
        // pulled in by the same offset, narrowing it.
        let arm_w = 8.0 * f;
        let arm_len = 100.0 * f;
        let arm_y = torso_top + 10.0 * f;
        for side in [-1.0, 1.0] {
            let arm_x = cx + side * torso_w_top;
            draw::fill_rounded_rect(
                canvas,
                arm_x - arm_w,
                arm_y,
                arm_x + arm_w + side * 12.0 * f,
                arm_y + arm_len,
                arm_w,
                color,
                ARM_ALPHA,
            )?;
        }

        // Legs
        let leg_w = 10.0 * f;
        let leg_len = 120.0 * f;
        let leg_gap = 14.0 * f;
        for side in [-1.0, 1.0] {
            let leg_x = cx + side * leg_gap;
            draw::fill_rounded_rect(
                canvas,
                leg_x - leg_w,
                torso_bottom - 4.0 * f,
                leg_x + leg_w,
                torso_bottom + leg_len,
                leg_w,
                color,
                LEG_ALPHA,
            )?;
        }
        Ok(())
    }

    // ---- Layer 6: spine motif ----

    /// Seven capsules stacked over the torso, color-ramped top to bottom,
    /// each with a small bright center dot.
    fn spine(&self, canvas: &mut Canvas) -> Result<()> {
        let (cx, cy) = self.center();
        let cy = cy + 10.0 * self.s();
        let sp = 1.2 * self.s();

        let total_height = 280.0 * sp;
        let spacing = total_height / (SPINE_COUNT - 1) as f32;
        let start_y = cy - total_height / 2.0;
        let h = 14.0 * sp;

        for (i, width) in SPINE_WIDTHS.iter().enumerate() {
            let y = start_y + i as f32 * spacing;
            let w = width * sp;
            let color = spine_capsule_color(self.palette, i);

            draw::fill_rounded_rect(
                canvas,
                cx - w / 2.0,
                y - h / 2.0,
                cx + w / 2.0,
                y + h / 2.0,
                h / 2.0,
                color,
                SPINE_ALPHA,
            )?;

            draw::fill_circle(canvas, cx, y, 3.0 * sp, WHITE, SPINE_DOT_ALPHA)?;
        }
        Ok(())
    }

    // ---- Layer 7: accent dots ----

    /// Four dots at the cardinal angles of the outer ring, color-ramped
    /// around the circle.
    fn accent_dots(&self, canvas: &mut Canvas) -> Result<()> {
        let (cx, cy) = self.center();
        let s = self.s();
        let ring_r = 380.0 * s;
        let dot_r = 6.0 * s;
        let (from, to) = self.palette.dot_gradient();

        for angle_deg in [0.0f32, 90.0, 180.0, 270.0] {
            let angle = angle_deg.to_radians();
            let dx = cx + ring_r * angle.cos();
            let dy = cy + ring_r * angle.sin();
            let color = from.lerp(to, angle_deg / 360.0);
            draw::fill_circle(canvas, dx, dy, dot_r, color, self.palette.dot_alpha)?;
        }
        Ok(())
    }
}

type Result<T, E = IconError> = std::result::Result<T, E>;

/// Color of spine capsule `index`, interpolated top to bottom by
/// `index / (count - 1)`.
fn spine_capsule_color(palette: &Palette, index: usize) -> Color {
    let t = index as f32 / (SPINE_COUNT - 1) as f32;
    palette.spine_top.lerp(palette.spine_bottom, t)
}
