//! Seeded value-noise lattice for organic blob jitter.
//!
//! A permutation table is shuffled once at field creation; sampling is a
//! pure function of (x, y, t) afterwards, so the same seed always produces
//! the same motion. Output is smooth in all three arguments and confined
//! to [0, 1].

use rand::seq::SliceRandom;
use rand::Rng;

const TABLE_SIZE: usize = 256;

/// Three-dimensional value noise over a shuffled integer lattice
#[derive(Debug, Clone)]
pub struct ValueNoise {
    /// Doubled permutation table; the second half mirrors the first so
    /// hashing never needs a modulo
    perm: Vec<u8>,
}

impl ValueNoise {
    /// Build a lattice from an already-seeded RNG
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut table: Vec<u8> = (0..TABLE_SIZE as u16).map(|i| i as u8).collect();
        table.shuffle(rng);
        let mut perm = Vec::with_capacity(TABLE_SIZE * 2);
        perm.extend_from_slice(&table);
        perm.extend_from_slice(&table);
        Self { perm }
    }

    /// Lattice value at an integer corner, in [0, 1)
    fn corner(&self, xi: usize, yi: usize, zi: usize) -> f32 {
        let h = self.perm[self.perm[self.perm[xi & 255] as usize + (yi & 255)] as usize + (zi & 255)];
        h as f32 / TABLE_SIZE as f32
    }

    /// Sample the lattice at (x, y, t). Returns a value in [0, 1].
    pub fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        let xf = x.floor();
        let yf = y.floor();
        let tf = t.floor();

        // rem_euclid keeps negative coordinates on the lattice
        let xi = xf.rem_euclid(TABLE_SIZE as f32) as usize;
        let yi = yf.rem_euclid(TABLE_SIZE as f32) as usize;
        let ti = tf.rem_euclid(TABLE_SIZE as f32) as usize;

        let fx = fade(x - xf);
        let fy = fade(y - yf);
        let ft = fade(t - tf);

        let c000 = self.corner(xi, yi, ti);
        let c100 = self.corner(xi + 1, yi, ti);
        let c010 = self.corner(xi, yi + 1, ti);
        let c110 = self.corner(xi + 1, yi + 1, ti);
        let c001 = self.corner(xi, yi, ti + 1);
        let c101 = self.corner(xi + 1, yi, ti + 1);
        let c011 = self.corner(xi, yi + 1, ti + 1);
        let c111 = self.corner(xi + 1, yi + 1, ti + 1);

        let x00 = lerp(c000, c100, fx);
        let x10 = lerp(c010, c110, fx);
        let x01 = lerp(c001, c101, fx);
        let x11 = lerp(c011, c111, fx);

        let y0 = lerp(x00, x10, fy);
        let y1 = lerp(x01, x11, fy);

        lerp(y0, y1, ft)
    }

    /// Sample mapped to [-1, 1]
    pub fn sample_signed(&self, x: f32, y: f32, t: f32) -> f32 {
        self.sample(x, y, t) * 2.0 - 1.0
    }
}

/// Smoothstep fade, zero first derivative at the lattice corners
fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noise_from_seed(seed: u64) -> ValueNoise {
        let mut rng = StdRng::seed_from_u64(seed);
        ValueNoise::new(&mut rng)
    }

    #[test]
    fn test_output_range() {
        let noise = noise_from_seed(1);
        for i in 0..500 {
            let v = noise.sample(i as f32 * 0.37, i as f32 * 0.53, i as f32 * 0.11);
            assert!((0.0..=1.0).contains(&v), "sample out of range: {}", v);

            let s = noise.sample_signed(i as f32 * 0.37, i as f32 * 0.53, i as f32 * 0.11);
            assert!((-1.0..=1.0).contains(&s), "signed sample out of range: {}", s);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = noise_from_seed(42);
        let b = noise_from_seed(42);
        for i in 0..100 {
            let x = i as f32 * 0.7;
            assert_eq!(a.sample(x, x * 0.5, 3.0), b.sample(x, x * 0.5, 3.0));
        }
    }

    #[test]
    fn test_seed_sensitivity() {
        let a = noise_from_seed(1);
        let b = noise_from_seed(2);
        let differing = (0..100)
            .filter(|i| {
                let x = *i as f32 * 0.7;
                (a.sample(x, 0.0, 0.0) - b.sample(x, 0.0, 0.0)).abs() > 1e-6
            })
            .count();
        assert!(differing > 50, "seeds should diverge, only {} differ", differing);
    }

    #[test]
    fn test_spatial_smoothness() {
        let noise = noise_from_seed(5);
        // Adjacent samples at a small step should never jump by more than
        // the step's share of the corner-to-corner range.
        let step = 0.01;
        let mut prev = noise.sample(0.0, 4.2, 1.5);
        for i in 1..1000 {
            let v = noise.sample(i as f32 * step, 4.2, 1.5);
            assert!(
                (v - prev).abs() < 0.1,
                "discontinuity at i={}: {} -> {}",
                i,
                prev,
                v
            );
            prev = v;
        }
    }

    #[test]
    fn test_negative_coordinates() {
        let noise = noise_from_seed(9);
        let v = noise.sample(-13.7, -220.1, -0.4);
        assert!((0.0..=1.0).contains(&v));
    }
}
