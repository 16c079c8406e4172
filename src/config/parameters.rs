//! Parameter structures for the blob field.
//!
//! All tunables ship with defaults matching the original card design; a
//! JSON file under `data/parameters/` can override them.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level parameters container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameters {
    /// Blob field tunables
    pub field: FieldParameters,
}

impl Parameters {
    /// Load parameters from JSON files, or use defaults if files don't exist
    pub fn load_or_default() -> Self {
        let field = FieldParameters::load_or_default("data/parameters/field.json");
        Self { field }
    }

    /// Load parameters from specific directory
    pub fn load_from_dir<P: AsRef<Path>>(dir: P) -> Self {
        let field = FieldParameters::load_or_default(dir.as_ref().join("field.json"));
        Self { field }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            field: FieldParameters::default(),
        }
    }
}

/// Blob field tunables
///
/// Sizes and positions are in physical pixels, velocities in pixels per
/// frame. Hue is in degrees; saturation, brightness and alpha in [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldParameters {
    /// Number of blobs spawned at field creation
    pub blob_count: usize,

    /// Minimum blob diameter (px)
    pub size_min: f32,
    /// Maximum blob diameter (px)
    pub size_max: f32,

    /// Magnitude bound for initial velocity components (px/frame).
    /// Components are drawn uniformly from [-speed_limit, speed_limit].
    pub speed_limit: f32,

    /// Minimum hue (degrees); the default range stays in the blues
    pub hue_min: f32,
    /// Maximum hue (degrees)
    pub hue_max: f32,
    /// Fixed saturation shared by every blob
    pub saturation: f32,
    /// Fixed brightness shared by every blob
    pub brightness: f32,
    /// Fill translucency shared by every blob
    pub blob_alpha: f32,

    /// Alpha of the per-frame background fill; low values leave long trails
    pub trail_fade_alpha: f32,

    /// Fraction of the blob-to-pointer vector added to velocity per frame
    pub pointer_attraction: f32,

    /// Peak per-axis position offset from the noise field (px/frame)
    pub jitter_amplitude: f32,
    /// Spatial frequency of the noise lattice (per px)
    pub noise_scale: f32,
    /// Temporal frequency of the noise lattice (per frame)
    pub noise_time_scale: f32,
}

impl FieldParameters {
    /// Load from JSON file or return defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded field parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse field parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Field parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            blob_count: 5,

            size_min: 200.0,
            size_max: 400.0,

            speed_limit: 0.3,

            hue_min: 180.0,
            hue_max: 240.0,
            saturation: 0.75,
            brightness: 0.9,
            blob_alpha: 0.25,

            trail_fade_alpha: 0.08,

            pointer_attraction: 0.0005,

            jitter_amplitude: 1.0,
            noise_scale: 0.004,
            noise_time_scale: 0.01,
        }
    }
}
