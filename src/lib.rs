//! posture-icons: procedural synthesis of the Posture brand app icon.
//!
//! This crate renders a layered 1024×1024 raster icon (background gradient,
//! radial glow, alignment guides, decorative rings, a stylized figure with a
//! spine motif, accent dots) in the three appearance variants a platform
//! asset catalog expects (light, dark, tinted), then exports each as a
//! lossless PNG and writes the catalog `Contents.json`.
//!
//! Rendering is fully deterministic: the same inputs always produce
//! byte-identical pixel buffers, down to the integer truncation behavior of
//! the alpha compositor.
//!
//! # Example
//!
//! ```no_run
//! use posture_icons::{PngExporter, VariantPipeline, catalog};
//!
//! # fn main() -> Result<(), posture_icons::IconError> {
//! let pipeline = VariantPipeline::new(1024, "AppIcon.appiconset");
//! let rendered = pipeline.run(&PngExporter)?;
//! catalog::write_contents_json("AppIcon.appiconset".as_ref(), 1024, &rendered)?;
//! # Ok(())
//! # }
//! ```
//!
//! Rendering a single variant without touching the filesystem:
//!
//! ```
//! use posture_icons::{Variant, VariantPipeline};
//!
//! let canvas = VariantPipeline::new(64, "unused").render(Variant::Dark).unwrap();
//! assert_eq!(canvas.width(), 64);
//! ```

mod canvas;
pub mod catalog;
mod color;
mod composer;
pub mod draw;
mod error;
mod gradient;
mod palette;
mod pipeline;

pub use canvas::Canvas;
pub use color::{Color, Pixel};
pub use composer::IconComposer;
pub use error::IconError;
pub use gradient::{GradientSpec, fill_radial};
pub use palette::{Background, Glow, Palette, Variant, DARK_BG, DARK_BG2, INDIGO, TEAL, WHITE};
pub use pipeline::{PngExporter, RasterExport, RenderedVariant, VariantPipeline};
