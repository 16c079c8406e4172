//! Blob state data structures.

use glam::Vec2;
use rand::Rng;

use crate::config::FieldParameters;

/// A single simulated particle of the backdrop animation.
///
/// Size and hue are fixed at spawn; saturation, brightness and alpha are
/// field-wide constants in [`FieldParameters`].
#[derive(Debug, Clone)]
pub struct Blob {
    /// Position in pixel space, wrapped into the viewport after every step
    pub position: Vec2,
    /// Velocity in px/frame; unbounded
    pub velocity: Vec2,
    /// Diameter (px)
    pub size: f32,
    /// Hue (degrees)
    pub hue: f32,
}

impl Blob {
    /// Spawn a blob with randomized position, velocity, size and hue
    pub fn spawn<R: Rng>(rng: &mut R, viewport: Vec2, params: &FieldParameters) -> Self {
        let limit = params.speed_limit;
        Self {
            position: Vec2::new(
                rng.gen_range(0.0..viewport.x),
                rng.gen_range(0.0..viewport.y),
            ),
            velocity: Vec2::new(rng.gen_range(-limit..=limit), rng.gen_range(-limit..=limit)),
            size: rng.gen_range(params.size_min..=params.size_max),
            hue: rng.gen_range(params.hue_min..=params.hue_max),
        }
    }

    /// Radius (px)
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    /// Speed (px/frame)
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = FieldParameters::default();
        let viewport = Vec2::new(1280.0, 720.0);

        for _ in 0..100 {
            let blob = Blob::spawn(&mut rng, viewport, &params);
            assert!(blob.position.x >= 0.0 && blob.position.x < viewport.x);
            assert!(blob.position.y >= 0.0 && blob.position.y < viewport.y);
            assert!(blob.velocity.x.abs() <= params.speed_limit);
            assert!(blob.velocity.y.abs() <= params.speed_limit);
            assert!(blob.size >= params.size_min && blob.size <= params.size_max);
            assert!(blob.hue >= params.hue_min && blob.hue <= params.hue_max);
        }
    }

    #[test]
    fn test_radius_is_half_size() {
        let blob = Blob {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            size: 300.0,
            hue: 200.0,
        };
        assert!((blob.radius() - 150.0).abs() < f32::EPSILON);
    }
}
