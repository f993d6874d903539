//! The variant pipeline: render each appearance, hand it to the exporter.
//!
//! Rendering is strictly per-variant: a fresh canvas each time, palettes are
//! read-only, and nothing carries over between variants, so rendering order
//! cannot affect output. Export failures abort only the failing variant's
//! run and report which variant it was; there are no partial exports and no
//! retries.

use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::composer::IconComposer;
use crate::error::IconError;
use crate::palette::Variant;

// ============================================================================
// Export seam
// ============================================================================

/// Raster export collaborator: consumes a finished canvas and writes it as a
/// lossless raster. The pipeline does not care about the on-disk encoding.
pub trait RasterExport {
    fn export(&self, canvas: &Canvas, path: &Path) -> Result<(), image::ImageError>;
}

/// Default exporter: lossless RGBA PNG via the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngExporter;

impl RasterExport for PngExporter {
    fn export(&self, canvas: &Canvas, path: &Path) -> Result<(), image::ImageError> {
        canvas.as_rgba().save_with_format(path, ImageFormat::Png)
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// One successfully exported variant, for catalog-metadata generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVariant {
    pub variant: Variant,
    pub filename: String,
}

/// Renders and exports all three appearance variants of the icon.
pub struct VariantPipeline {
    size: u32,
    out_dir: PathBuf,
}

impl VariantPipeline {
    /// Creates a pipeline targeting `out_dir` with square icons of `size`
    /// pixels (the platform reference is 1024).
    pub fn new(size: u32, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            size,
            out_dir: out_dir.into(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Renders one variant into a fresh canvas without exporting it.
    pub fn render(&self, variant: Variant) -> Result<Canvas, IconError> {
        let palette = variant.palette();
        let canvas = IconComposer::new(&palette, self.size)?.compose()?;
        log::debug!("rendered {variant} variant at {0}x{0}", self.size);
        Ok(canvas)
    }

    /// Renders and exports every variant, in catalog order.
    ///
    /// Returns the exported variants for the catalog manifest writer. Fails
    /// on the first variant whose render or export fails, naming it.
    pub fn run(&self, exporter: &dyn RasterExport) -> Result<Vec<RenderedVariant>, IconError> {
        fs::create_dir_all(&self.out_dir).map_err(|source| IconError::Io {
            path: self.out_dir.clone(),
            source,
        })?;

        let mut rendered = Vec::with_capacity(Variant::ALL.len());
        for variant in Variant::ALL {
            log::info!("rendering {variant} icon");
            let canvas = self.render(variant)?;
            let path = self.out_dir.join(variant.filename());
            exporter
                .export(&canvas, &path)
                .map_err(|source| IconError::Export {
                    variant,
                    path: path.clone(),
                    source,
                })?;
            log::info!("exported {}", path.display());
            rendered.push(RenderedVariant {
                variant,
                filename: variant.filename().to_string(),
            });
        }
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_is_deterministic() {
        let pipeline = VariantPipeline::new(64, "unused");
        let a = pipeline.render(Variant::Light).unwrap();
        let b = pipeline.render(Variant::Light).unwrap();
        assert_eq!(a.as_rgba().as_raw(), b.as_rgba().as_raw());
    }

    #[test]
    fn variants_are_independent() {
        let pipeline = VariantPipeline::new(64, "unused");
        // Light rendered alone...
        let light_alone = pipeline.render(Variant::Light).unwrap();
        // ...equals light rendered after dark and tinted.
        let _ = pipeline.render(Variant::Dark).unwrap();
        let _ = pipeline.render(Variant::Tinted).unwrap();
        let light_after = pipeline.render(Variant::Light).unwrap();
        assert_eq!(
            light_alone.as_rgba().as_raw(),
            light_after.as_rgba().as_raw()
        );
    }

    #[test]
    fn variants_render_distinct_output() {
        let pipeline = VariantPipeline::new(64, "unused");
        let light = pipeline.render(Variant::Light).unwrap();
        let dark = pipeline.render(Variant::Dark).unwrap();
        let tinted = pipeline.render(Variant::Tinted).unwrap();
        assert_ne!(light.as_rgba().as_raw(), dark.as_rgba().as_raw());
        assert_ne!(light.as_rgba().as_raw(), tinted.as_rgba().as_raw());
    }
}
