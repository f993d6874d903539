//! Error types for the rendering and export pipeline.

use std::path::PathBuf;

use crate::palette::Variant;

/// Errors produced while rendering or exporting icon variants.
///
/// Out-of-bounds pixel access is deliberately not represented here: it is a
/// caller bug and panics (see [`Canvas`](crate::Canvas)). Nothing in this
/// enum is transient or retryable.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    /// A zero or negative radius/size/width reached a draw routine.
    /// Geometry is derived from fixed tables, so this signals a caller bug.
    #[error("invalid geometry: {what}")]
    InvalidGeometry { what: String },

    /// The raster export collaborator failed for one variant. The pipeline
    /// aborts that variant; it never writes a partial export.
    #[error("failed to export {variant} icon to {path}")]
    Export {
        variant: Variant,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem failure while preparing the output directory or writing
    /// the asset catalog manifest.
    #[error("i/o failure at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize catalog manifest")]
    Json(#[from] serde_json::Error),
}

impl IconError {
    pub(crate) fn geometry(what: impl Into<String>) -> Self {
        IconError::InvalidGeometry { what: what.into() }
    }
}
