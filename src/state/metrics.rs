//! Per-frame metrics for the status overlay.

use glam::Vec2;

use crate::sim::BlobField;

/// Aggregate of the displayable per-frame numbers.
///
/// Sampled once per redraw by the host loop and handed to the HUD.
#[derive(Debug, Clone)]
pub struct FrameMetrics {
    /// Frames per second (rendering performance)
    pub fps: f32,
    /// Simulation frame index
    pub frame: u64,
    /// Number of live blobs
    pub blob_count: usize,
    /// Mean blob speed (px/frame)
    pub mean_speed: f32,
    /// Fastest blob speed (px/frame)
    pub max_speed: f32,
    /// Last known pointer position (px)
    pub pointer: Vec2,
    /// Whether the simulation is paused
    pub paused: bool,
}

impl FrameMetrics {
    /// Sample the current field state
    pub fn sample(field: &BlobField, fps: f32, pointer: Vec2, paused: bool) -> Self {
        Self {
            fps,
            frame: field.frame,
            blob_count: field.blobs.len(),
            mean_speed: field.mean_speed(),
            max_speed: field.max_speed(),
            pointer,
            paused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldParameters;

    #[test]
    fn test_sample_reflects_field() {
        let field = BlobField::seeded(Vec2::new(800.0, 600.0), FieldParameters::default(), 3);
        let metrics = FrameMetrics::sample(&field, 60.0, Vec2::new(10.0, 20.0), false);

        assert_eq!(metrics.blob_count, 5);
        assert_eq!(metrics.frame, 0);
        assert!(metrics.mean_speed <= metrics.max_speed);
        assert!(!metrics.paused);
    }
}
