//! Shape primitive rasterization.
//!
//! Ellipses, rounded rectangles, polygons, thick lines, and partial arcs,
//! all scan-converted over their bounding box and painted through
//! [`Canvas::composite`] with a single color + alpha. Coverage is hard-edged
//! (a pixel is in or out based on its center); the icon design leans on low
//! alphas rather than anti-aliasing for softness.
//!
//! Coordinates are f32 canvas coordinates. Pixels falling outside the canvas
//! are clipped, not an error. Angles are degrees, measured clockwise from
//! the +x axis (y grows downward, so the standard atan2 sign already matches).

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::IconError;

/// Iterates over the pixels of a bounding box clipped to the canvas,
/// yielding (x, y, center_x, center_y).
fn clipped_bbox(
    canvas: &Canvas,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
) -> impl Iterator<Item = (u32, u32, f32, f32)> {
    let min_x = x0.floor().max(0.0) as u32;
    let min_y = y0.floor().max(0.0) as u32;
    let max_x = (x1.ceil() as i64).clamp(0, canvas.width() as i64) as u32;
    let max_y = (y1.ceil() as i64).clamp(0, canvas.height() as i64) as u32;
    (min_y..max_y).flat_map(move |y| {
        (min_x..max_x).map(move |x| (x, y, x as f32 + 0.5, y as f32 + 0.5))
    })
}

/// Fills an axis-aligned ellipse centered at (cx, cy).
pub fn fill_ellipse(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    if rx <= 0.0 || ry <= 0.0 {
        return Err(IconError::geometry(format!(
            "ellipse radii must be positive, got {rx}x{ry}"
        )));
    }
    let pixels: Vec<_> = clipped_bbox(canvas, cx - rx, cy - ry, cx + rx, cy + ry)
        .filter(|&(_, _, px, py)| {
            let nx = (px - cx) / rx;
            let ny = (py - cy) / ry;
            nx * nx + ny * ny <= 1.0
        })
        .map(|(x, y, _, _)| (x, y))
        .collect();
    for (x, y) in pixels {
        canvas.composite(x, y, color, alpha);
    }
    Ok(())
}

/// Fills a circle; shorthand for an ellipse with equal radii.
pub fn fill_circle(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    r: f32,
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    fill_ellipse(canvas, cx, cy, r, r, color, alpha)
}

/// Fills a rectangle spanning (x0, y0)..(x1, y1) with rounded corners.
///
/// `radius` is clamped to half the shorter side, so a capsule is simply a
/// rounded rect with `radius = height / 2`.
pub fn fill_rounded_rect(
    canvas: &mut Canvas,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    if x1 <= x0 || y1 <= y0 {
        return Err(IconError::geometry(format!(
            "rounded rect must have positive extent, got ({x0},{y0})..({x1},{y1})"
        )));
    }
    if radius < 0.0 {
        return Err(IconError::geometry(format!(
            "rounded rect radius must be non-negative, got {radius}"
        )));
    }
    let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);

    let pixels: Vec<_> = clipped_bbox(canvas, x0, y0, x1, y1)
        .filter(|&(_, _, px, py)| {
            // Distance from the rect inset by r; within r means inside the
            // rounded outline.
            let qx = px.clamp(x0 + r, x1 - r);
            let qy = py.clamp(y0 + r, y1 - r);
            let dx = px - qx;
            let dy = py - qy;
            dx * dx + dy * dy <= r * r
        })
        .map(|(x, y, _, _)| (x, y))
        .collect();
    for (x, y) in pixels {
        canvas.composite(x, y, color, alpha);
    }
    Ok(())
}

/// Fills a simple polygon using even-odd winding.
pub fn fill_polygon(
    canvas: &mut Canvas,
    points: &[(f32, f32)],
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    if points.len() < 3 {
        return Err(IconError::geometry(format!(
            "polygon needs at least 3 vertices, got {}",
            points.len()
        )));
    }
    let min_x = points.iter().map(|p| p.0).fold(f32::INFINITY, f32::min);
    let min_y = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
    let max_x = points.iter().map(|p| p.0).fold(f32::NEG_INFINITY, f32::max);
    let max_y = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);

    let inside = |px: f32, py: f32| -> bool {
        let mut odd = false;
        let n = points.len();
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = points[i];
            let (xj, yj) = points[j];
            if (yi > py) != (yj > py) {
                let x_cross = xi + (py - yi) / (yj - yi) * (xj - xi);
                if px < x_cross {
                    odd = !odd;
                }
            }
            j = i;
        }
        odd
    };

    let pixels: Vec<_> = clipped_bbox(canvas, min_x, min_y, max_x, max_y)
        .filter(|&(_, _, px, py)| inside(px, py))
        .map(|(x, y, _, _)| (x, y))
        .collect();
    for (x, y) in pixels {
        canvas.composite(x, y, color, alpha);
    }
    Ok(())
}

/// Draws a straight line segment with the given stroke width.
pub fn draw_line(
    canvas: &mut Canvas,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    if width <= 0.0 {
        return Err(IconError::geometry(format!(
            "line width must be positive, got {width}"
        )));
    }
    let (x0, y0) = from;
    let (x1, y1) = to;
    let half = width / 2.0;

    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;

    let pixels: Vec<_> = clipped_bbox(
        canvas,
        x0.min(x1) - half,
        y0.min(y1) - half,
        x0.max(x1) + half,
        y0.max(y1) + half,
    )
    .filter(|&(_, _, px, py)| {
        // Distance from the pixel center to the segment.
        let t = if len_sq == 0.0 {
            0.0
        } else {
            (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
        };
        let nx = px - (x0 + t * dx);
        let ny = py - (y0 + t * dy);
        nx * nx + ny * ny <= half * half
    })
    .map(|(x, y, _, _)| (x, y))
    .collect();
    for (x, y) in pixels {
        canvas.composite(x, y, color, alpha);
    }
    Ok(())
}

/// Strokes a partial circular arc.
///
/// `radius` is the outer edge; the stroke extends `width` inward. The arc
/// spans clockwise from `start_deg` to `end_deg`; spans that cross the 0°
/// axis (e.g. −30°…210°) work as expected.
pub fn draw_arc(
    canvas: &mut Canvas,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    start_deg: f32,
    end_deg: f32,
    color: Color,
    alpha: u8,
) -> Result<(), IconError> {
    if radius <= 0.0 || width <= 0.0 {
        return Err(IconError::geometry(format!(
            "arc radius and width must be positive, got r={radius} w={width}"
        )));
    }
    let inner = (radius - width).max(0.0);
    let mut sweep = (end_deg - start_deg).rem_euclid(360.0);
    if sweep == 0.0 && end_deg != start_deg {
        sweep = 360.0;
    }

    let pixels: Vec<_> = clipped_bbox(canvas, cx - radius, cy - radius, cx + radius, cy + radius)
        .filter(|&(_, _, px, py)| {
            let dx = px - cx;
            let dy = py - cy;
            let dist = (dx * dx + dy * dy).sqrt();
            if dist < inner || dist > radius {
                return false;
            }
            // y grows downward, so atan2 already increases clockwise.
            let theta = dy.atan2(dx).to_degrees();
            (theta - start_deg).rem_euclid(360.0) <= sweep
        })
        .map(|(x, y, _, _)| (x, y))
        .collect();
    for (x, y) in pixels {
        canvas.composite(x, y, color, alpha);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Pixel;

    const BG: Color = Color::new(8, 20, 30);
    const TEAL: Color = Color::new(20, 184, 166);

    fn canvas() -> Canvas {
        Canvas::new(64, 64, BG.with_alpha(255))
    }

    #[test]
    fn ellipse_fills_center_and_skips_corners() {
        let mut c = canvas();
        fill_ellipse(&mut c, 32.0, 32.0, 10.0, 6.0, TEAL, 255).unwrap();
        assert_eq!(c.get(32, 32).color, TEAL);
        assert_eq!(c.get(0, 0), BG.with_alpha(255));
        // Just inside the horizontal extreme, outside the vertical one.
        assert_eq!(c.get(38, 32).color, TEAL);
        assert_eq!(c.get(38, 38), BG.with_alpha(255));
    }

    #[test]
    fn ellipse_clips_at_canvas_edge() {
        let mut c = canvas();
        fill_ellipse(&mut c, 0.0, 0.0, 8.0, 8.0, TEAL, 255).unwrap();
        assert_eq!(c.get(0, 0).color, TEAL);
    }

    #[test]
    fn rounded_rect_capsule_has_round_ends() {
        let mut c = canvas();
        // A horizontal capsule: radius = half height.
        fill_rounded_rect(&mut c, 10.0, 28.0, 54.0, 36.0, 4.0, TEAL, 255).unwrap();
        assert_eq!(c.get(32, 32).color, TEAL);
        // Sharp corner would include (10, 28); the rounding excludes it.
        assert_eq!(c.get(10, 28), BG.with_alpha(255));
        assert_eq!(c.get(12, 32).color, TEAL);
    }

    #[test]
    fn polygon_fills_a_trapezoid() {
        let mut c = canvas();
        let pts = [(20.0, 20.0), (44.0, 20.0), (38.0, 44.0), (26.0, 44.0)];
        fill_polygon(&mut c, &pts, TEAL, 255).unwrap();
        assert_eq!(c.get(32, 30).color, TEAL);
        assert_eq!(c.get(21, 43), BG.with_alpha(255));
    }

    #[test]
    fn line_covers_its_span_at_given_width() {
        let mut c = canvas();
        draw_line(&mut c, (32.0, 10.0), (32.0, 54.0), 2.0, TEAL, 255).unwrap();
        assert_eq!(c.get(31, 32).color, TEAL);
        assert_eq!(c.get(32, 32).color, TEAL);
        assert_eq!(c.get(34, 32), BG.with_alpha(255));
    }

    #[test]
    fn arc_respects_angular_span() {
        let mut c = canvas();
        // Right half of a ring: -90..90 degrees, clockwise from +x.
        draw_arc(&mut c, 32.0, 32.0, 20.0, 4.0, -90.0, 90.0, TEAL, 255).unwrap();
        // 0 degrees = +x: painted.
        assert_eq!(c.get(50, 32).color, TEAL);
        // 180 degrees = -x: outside the span.
        assert_eq!(c.get(14, 32), BG.with_alpha(255));
    }

    #[test]
    fn arc_span_crossing_zero_wraps() {
        let mut c = canvas();
        // The outer brand ring spans -30..210.
        draw_arc(&mut c, 32.0, 32.0, 20.0, 4.0, -30.0, 210.0, TEAL, 255).unwrap();
        // 90 degrees (+y, bottom) is inside the span.
        assert_eq!(c.get(32, 50).color, TEAL);
        // 270 degrees (top) is not.
        assert_eq!(c.get(32, 14), BG.with_alpha(255));
    }

    #[test]
    fn degenerate_geometry_is_rejected() {
        let mut c = canvas();
        assert!(fill_ellipse(&mut c, 0.0, 0.0, 0.0, 5.0, TEAL, 255).is_err());
        assert!(fill_rounded_rect(&mut c, 10.0, 10.0, 10.0, 20.0, 2.0, TEAL, 255).is_err());
        assert!(fill_polygon(&mut c, &[(0.0, 0.0), (1.0, 1.0)], TEAL, 255).is_err());
        assert!(draw_line(&mut c, (0.0, 0.0), (5.0, 5.0), 0.0, TEAL, 255).is_err());
        assert!(draw_arc(&mut c, 0.0, 0.0, -1.0, 2.0, 0.0, 90.0, TEAL, 255).is_err());
    }

    #[test]
    fn primitives_leave_untouched_pixels_intact() {
        let mut c = Canvas::transparent(32, 32);
        fill_circle(&mut c, 8.0, 8.0, 4.0, TEAL, 200).unwrap();
        assert_eq!(c.get(31, 31), Pixel::TRANSPARENT);
    }
}
