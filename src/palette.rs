//! Brand palette constants and per-variant styling.
//!
//! The brand colors are process-wide immutable constants; each [`Variant`]
//! bundles them into a [`Palette`], the single value the composer consumes.
//! All variant-specific divergence lives here (background rule, color set,
//! mono vs. two-tone rings, glow strength) so the drawing code itself is
//! shared by all three appearances.

use std::fmt;

use crate::color::Color;

/// Brand teal, the primary accent.
pub const TEAL: Color = Color::new(20, 184, 166);
/// Brand indigo, the secondary accent.
pub const INDIGO: Color = Color::new(99, 102, 241);
/// Background top tone for the light appearance.
pub const DARK_BG: Color = Color::new(8, 20, 30);
/// Background bottom tone for the light appearance.
pub const DARK_BG2: Color = Color::new(10, 30, 42);
pub const WHITE: Color = Color::new(255, 255, 255);

// Dark-appearance equivalents: deeper background, brightened accents.
const DEEP_BG: Color = Color::new(4, 10, 16);
const DEEP_BG2: Color = Color::new(6, 16, 24);
const BRIGHT_TEAL: Color = Color::new(40, 220, 200);
const BRIGHT_INDIGO: Color = Color::new(130, 130, 255);

// ============================================================================
// Variant
// ============================================================================

/// One appearance of the icon in the platform asset catalog.
///
/// A variant is rendered into exactly one canvas, exported, and discarded;
/// variants never share mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The default appearance.
    Light,
    /// Deeper background with brightened accents.
    Dark,
    /// Monochrome white-on-black; the platform applies its own tint.
    Tinted,
}

impl Variant {
    /// All variants, in catalog order.
    pub const ALL: [Variant; 3] = [Variant::Light, Variant::Dark, Variant::Tinted];

    /// The output filename this variant exports to.
    pub fn filename(self) -> &'static str {
        match self {
            Variant::Light => "AppIcon-Light.png",
            Variant::Dark => "AppIcon-Dark.png",
            Variant::Tinted => "AppIcon-Tinted.png",
        }
    }

    /// The catalog `luminosity` appearance value, if any. The light variant
    /// is the default and carries no appearance trait.
    pub fn appearance(self) -> Option<&'static str> {
        match self {
            Variant::Light => None,
            Variant::Dark => Some("dark"),
            Variant::Tinted => Some("tinted"),
        }
    }

    /// The palette the composer should use for this variant.
    pub fn palette(self) -> Palette {
        match self {
            Variant::Light => Palette {
                background: Background::VerticalGradient {
                    top: DARK_BG,
                    bottom: DARK_BG2,
                },
                glow: Some(Glow {
                    inner: TEAL,
                    outer: DARK_BG,
                    peak_alpha: 80,
                }),
                figure: TEAL,
                spine_top: TEAL,
                spine_bottom: INDIGO,
                ring_primary: TEAL,
                ring_secondary: Some(INDIGO),
                ring_widths: [4.0, 3.0, 2.0],
                guide: TEAL,
                guide_line_alpha: 60,
                guide_tick_alpha: 40,
                dot_alpha: 200,
            },
            Variant::Dark => Palette {
                background: Background::VerticalGradient {
                    top: DEEP_BG,
                    bottom: DEEP_BG2,
                },
                glow: Some(Glow {
                    inner: TEAL,
                    outer: DEEP_BG,
                    peak_alpha: 100,
                }),
                figure: BRIGHT_TEAL,
                spine_top: BRIGHT_TEAL,
                spine_bottom: BRIGHT_INDIGO,
                ring_primary: BRIGHT_TEAL,
                ring_secondary: Some(BRIGHT_INDIGO),
                ring_widths: [5.0, 3.0, 2.0],
                guide: TEAL,
                guide_line_alpha: 60,
                guide_tick_alpha: 40,
                dot_alpha: 220,
            },
            Variant::Tinted => Palette {
                background: Background::CirclePlate {
                    plate: Color::new(0, 0, 0),
                    radius: 460.0,
                },
                glow: None,
                figure: WHITE,
                spine_top: WHITE,
                spine_bottom: WHITE,
                ring_primary: WHITE,
                ring_secondary: None,
                ring_widths: [4.0, 3.0, 2.0],
                guide: WHITE,
                guide_line_alpha: 40,
                guide_tick_alpha: 30,
                dot_alpha: 200,
            },
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Variant::Light => "light",
            Variant::Dark => "dark",
            Variant::Tinted => "tinted",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Palette
// ============================================================================

/// How the base layer of the canvas is constructed.
#[derive(Debug, Clone, Copy)]
pub enum Background {
    /// Opaque vertical ramp built from per-row lerp fills.
    VerticalGradient { top: Color, bottom: Color },
    /// Transparent canvas with an opaque filled circle. The radius is in
    /// reference (1024) coordinates and scales with the canvas.
    CirclePlate { plate: Color, radius: f32 },
}

/// The centered radial glow behind the figure.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub inner: Color,
    pub outer: Color,
    pub peak_alpha: u8,
}

/// Everything variant-specific the composer needs.
///
/// Immutable once built; the composer only reads it, so rendering one
/// variant can never leak state into the next.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Background,
    /// `None` disables the glow pass (tinted appearance).
    pub glow: Option<Glow>,
    /// Base color of the figure silhouette.
    pub figure: Color,
    pub spine_top: Color,
    pub spine_bottom: Color,
    pub ring_primary: Color,
    /// Second ring color; `None` collapses the ring set to monochrome and
    /// skips the secondary arc.
    pub ring_secondary: Option<Color>,
    /// Stroke widths of the outer, secondary, and inner arcs, in reference
    /// coordinates.
    pub ring_widths: [f32; 3],
    pub guide: Color,
    pub guide_line_alpha: u8,
    pub guide_tick_alpha: u8,
    pub dot_alpha: u8,
}

impl Palette {
    /// The color pair accent dots interpolate across: primary to secondary
    /// ring color, degenerating to flat primary for monochrome palettes.
    pub fn dot_gradient(&self) -> (Color, Color) {
        (self.ring_primary, self.ring_secondary.unwrap_or(self.ring_primary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_and_appearances_match_catalog_scheme() {
        assert_eq!(Variant::Light.filename(), "AppIcon-Light.png");
        assert_eq!(Variant::Light.appearance(), None);
        assert_eq!(Variant::Dark.appearance(), Some("dark"));
        assert_eq!(Variant::Tinted.appearance(), Some("tinted"));
    }

    #[test]
    fn tinted_palette_is_monochrome() {
        let p = Variant::Tinted.palette();
        assert!(p.ring_secondary.is_none());
        assert!(p.glow.is_none());
        assert_eq!(p.figure, WHITE);
        assert_eq!(p.dot_gradient(), (WHITE, WHITE));
    }

    #[test]
    fn dark_palette_brightens_accents() {
        let p = Variant::Dark.palette();
        assert_eq!(p.figure, BRIGHT_TEAL);
        assert_eq!(p.ring_secondary, Some(BRIGHT_INDIGO));
        assert!(p.glow.unwrap().peak_alpha > Variant::Light.palette().glow.unwrap().peak_alpha);
    }
}
