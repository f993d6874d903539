//! Asset-catalog manifest generation (`Contents.json`).
//!
//! The platform asset catalog associates each exported file with an
//! appearance trait: the light icon is the default, the dark and tinted
//! icons carry a `luminosity` appearance. The types here mirror the catalog
//! schema so `serde_json` produces exactly the structure Xcode expects.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::IconError;
use crate::pipeline::RenderedVariant;

/// Filename of the manifest inside the icon set directory.
pub const CONTENTS_FILENAME: &str = "Contents.json";

// ============================================================================
// Manifest schema
// ============================================================================

/// Top-level `Contents.json` document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogContents {
    pub images: Vec<CatalogImage>,
    pub info: CatalogInfo,
}

/// One image entry in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogImage {
    /// Appearance traits; absent for the default (light) image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<CatalogAppearance>>,
    pub filename: String,
    pub idiom: String,
    pub platform: String,
    pub size: String,
}

/// A single appearance trait, e.g. `luminosity = dark`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogAppearance {
    pub appearance: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogInfo {
    pub author: String,
    pub version: u32,
}

impl CatalogContents {
    /// Builds the manifest for the given exported variants at `size` pixels.
    pub fn new(size: u32, rendered: &[RenderedVariant]) -> Self {
        let images = rendered
            .iter()
            .map(|r| CatalogImage {
                appearances: r.variant.appearance().map(|value| {
                    vec![CatalogAppearance {
                        appearance: "luminosity".to_string(),
                        value: value.to_string(),
                    }]
                }),
                filename: r.filename.clone(),
                idiom: "universal".to_string(),
                platform: "ios".to_string(),
                size: format!("{size}x{size}"),
            })
            .collect();
        Self {
            images,
            info: CatalogInfo {
                author: "xcode".to_string(),
                version: 1,
            },
        }
    }
}

/// Writes `Contents.json` into `dir`, returning the path written.
pub fn write_contents_json(
    dir: &Path,
    size: u32,
    rendered: &[RenderedVariant],
) -> Result<PathBuf, IconError> {
    let contents = CatalogContents::new(size, rendered);
    let json = serde_json::to_string_pretty(&contents)?;
    let path = dir.join(CONTENTS_FILENAME);
    fs::write(&path, json).map_err(|source| IconError::Io {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote catalog manifest {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Variant;

    fn rendered_all() -> Vec<RenderedVariant> {
        Variant::ALL
            .iter()
            .map(|&variant| RenderedVariant {
                variant,
                filename: variant.filename().to_string(),
            })
            .collect()
    }

    #[test]
    fn light_entry_has_no_appearances() {
        let contents = CatalogContents::new(1024, &rendered_all());
        assert_eq!(contents.images.len(), 3);
        assert!(contents.images[0].appearances.is_none());
        assert_eq!(contents.images[0].filename, "AppIcon-Light.png");
        assert_eq!(contents.images[0].size, "1024x1024");
    }

    #[test]
    fn dark_and_tinted_carry_luminosity() {
        let contents = CatalogContents::new(1024, &rendered_all());
        let dark = &contents.images[1].appearances.as_ref().unwrap()[0];
        assert_eq!(dark.appearance, "luminosity");
        assert_eq!(dark.value, "dark");
        let tinted = &contents.images[2].appearances.as_ref().unwrap()[0];
        assert_eq!(tinted.value, "tinted");
    }

    #[test]
    fn manifest_serializes_without_null_appearances() {
        let contents = CatalogContents::new(1024, &rendered_all());
        let json = serde_json::to_string_pretty(&contents).unwrap();
        assert!(!json.contains("null"));
        assert!(json.contains("\"author\": \"xcode\""));
        let restored: CatalogContents = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, contents);
    }
}
