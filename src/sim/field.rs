//! The blob field simulator.
//!
//! Owns the fixed set of blobs and advances them once per animation frame.
//! The host loop holds exactly one field at a time; dropping it tears the
//! simulation down, so a second concurrent frame subscription cannot exist.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::noise::ValueNoise;
use crate::config::FieldParameters;
use crate::state::Blob;

/// Decorrelates the x and y jitter channels of the shared noise lattice
const JITTER_CHANNEL_OFFSET: f32 = 1000.0;

/// Simulation handle for the animated backdrop
pub struct BlobField {
    /// The particle set; fixed census after creation
    pub blobs: Vec<Blob>,
    /// Frame counter, incremented once per step
    pub frame: u64,
    /// Field tunables captured at creation
    pub params: FieldParameters,
    viewport: Vec2,
    noise: ValueNoise,
}

impl BlobField {
    /// Create a field with entropy-seeded randomness
    pub fn new(viewport: Vec2, params: FieldParameters) -> Self {
        Self::from_rng(viewport, params, StdRng::from_entropy())
    }

    /// Create a field with a fixed seed (tests, headless diagnostics)
    pub fn seeded(viewport: Vec2, params: FieldParameters, seed: u64) -> Self {
        Self::from_rng(viewport, params, StdRng::seed_from_u64(seed))
    }

    fn from_rng(viewport: Vec2, params: FieldParameters, mut rng: StdRng) -> Self {
        let blobs = (0..params.blob_count)
            .map(|_| Blob::spawn(&mut rng, viewport, &params))
            .collect();
        let noise = ValueNoise::new(&mut rng);

        log::debug!(
            "Blob field created: {} blobs, viewport {}x{}",
            params.blob_count,
            viewport.x,
            viewport.y
        );

        Self {
            blobs,
            frame: 0,
            params,
            viewport,
            noise,
        }
    }

    /// Advance every blob by one frame.
    ///
    /// Per blob: advance by velocity, wrap toroidally, pull velocity toward
    /// the pointer, jitter the position from the noise lattice, and re-wrap
    /// so the position ends the step inside [0, w) x [0, h). Velocity is
    /// never clamped.
    pub fn step(&mut self, pointer: Vec2) {
        self.frame += 1;

        let t = self.frame as f32 * self.params.noise_time_scale;
        let ns = self.params.noise_scale;
        let viewport = self.viewport;

        for blob in &mut self.blobs {
            blob.position = wrap(blob.position + blob.velocity, viewport);

            blob.velocity += (pointer - blob.position) * self.params.pointer_attraction;

            let jitter = Vec2::new(
                self.noise.sample_signed(blob.position.x * ns, blob.position.y * ns, t),
                self.noise.sample_signed(
                    blob.position.x * ns + JITTER_CHANNEL_OFFSET,
                    blob.position.y * ns + JITTER_CHANNEL_OFFSET,
                    t,
                ),
            ) * self.params.jitter_amplitude;

            blob.position = wrap(blob.position + jitter, viewport);
        }
    }

    /// Replace the viewport without touching blob state. Blobs left outside
    /// the new bounds re-enter via wraparound on the next step.
    pub fn resize(&mut self, viewport: Vec2) {
        if viewport.x > 0.0 && viewport.y > 0.0 {
            self.viewport = viewport;
        }
    }

    /// Current viewport (px)
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Mean blob speed (px/frame)
    pub fn mean_speed(&self) -> f32 {
        if self.blobs.is_empty() {
            return 0.0;
        }
        self.blobs.iter().map(Blob::speed).sum::<f32>() / self.blobs.len() as f32
    }

    /// Fastest blob speed (px/frame)
    pub fn max_speed(&self) -> f32 {
        self.blobs.iter().map(Blob::speed).fold(0.0, f32::max)
    }
}

/// Toroidal wraparound into [0, w) x [0, h); exact bounds map to zero
fn wrap(p: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(p.x.rem_euclid(viewport.x), p.y.rem_euclid(viewport.y))
}
