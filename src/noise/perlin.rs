//! Lattice-gradient (Perlin) noise over a fixed permutation table.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::HeightSource;

/// Reference Perlin permutation table.
///
/// Indexing always reduces modulo 256, so any integer input maps to a valid
/// entry. Values may repeat across hash outputs; it is a lookup table, not a
/// strict mathematical permutation.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Configuration for the lattice-gradient noise sampler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerlinNoiseConfig {
    /// Coordinate scale controlling feature size (0.01 typical).
    pub frequency: f32,
    /// Random seed for reproducible generation.
    ///
    /// The seed is folded into the permutation lookup modulo 256, so seeds
    /// that differ by a multiple of 256 produce identical fields. This is a
    /// documented limitation of the hashing scheme, not an error.
    pub seed: i32,
}

impl Default for PerlinNoiseConfig {
    fn default() -> Self {
        Self {
            frequency: 0.01,
            seed: 42,
        }
    }
}

impl PerlinNoiseConfig {
    /// Creates a configuration with the given seed and default frequency.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }
}

/// Permutation lookup with floor-modulo reduction.
///
/// `rem_euclid` keeps negative inputs non-negative, unlike truncated `%`.
fn permute(i: i32) -> i32 {
    PERMUTATION[i.rem_euclid(256) as usize] as i32
}

/// Degree-5 smoothstep polynomial `6t^5 - 15t^4 + 10t^3`.
///
/// Zero first and second derivative at t = 0 and t = 1, which removes
/// grid-aligned seams in the interpolated field.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Dot product of a pseudo-random gradient direction with the offset (x, y).
///
/// The low 2 bits of `hash` select one of exactly 4 directions (axis swap
/// and sign flips). The 4-direction set is deliberate; the output range is
/// calibrated against the reference permutation table.
fn gradient(hash: i32, x: f32, y: f32) -> f32 {
    let h = hash & 3;
    let u = if h < 2 { x } else { y };
    let v = if h < 2 { y } else { x };
    let a = if h & 1 != 0 { -u } else { u };
    let b = if h & 2 != 0 { -v } else { v };
    a + b
}

/// Samples lattice-gradient noise at a 2D position.
///
/// Returns a value in approximately [-1, 1], fully determined by the
/// coordinates and the configuration. Lattice corner indices wrap modulo
/// 256 for table addressing only; the field itself is not periodic in
/// world space.
pub fn sample_perlin_noise(x: f32, y: f32, config: &PerlinNoiseConfig) -> f32 {
    let x = x * config.frequency;
    let y = y * config.frequency;

    let x0 = (x.floor() as i32) & 255;
    let y0 = (y.floor() as i32) & 255;
    let x1 = (x0 + 1) & 255;
    let y1 = (y0 + 1) & 255;

    let dx = x - x.floor();
    let dy = y - y.floor();

    let seed = config.seed.rem_euclid(256);
    let aa = permute(permute(x0) + y0 + seed);
    let ab = permute(permute(x0) + y1 + seed);
    let ba = permute(permute(x1) + y0 + seed);
    let bb = permute(permute(x1) + y1 + seed);

    let grad_aa = gradient(aa, dx, dy);
    let grad_ba = gradient(ba, dx - 1.0, dy);
    let grad_ab = gradient(ab, dx, dy - 1.0);
    let grad_bb = gradient(bb, dx - 1.0, dy - 1.0);

    let u = fade(dx);
    let v = fade(dy);

    let lerp_x1 = lerp(u, grad_aa, grad_ba);
    let lerp_x2 = lerp(u, grad_ab, grad_bb);

    lerp(v, lerp_x1, lerp_x2)
}

impl HeightSource for PerlinNoiseConfig {
    fn fill(&self, width: u32, _height: u32, out: &mut [f32]) {
        // Each pixel depends only on its own coordinates, the seed, and the
        // immutable table, so the grid can be sampled in parallel.
        out.par_iter_mut().enumerate().for_each(|(i, value)| {
            let x = (i as u32) % width;
            let y = (i as u32) / width;
            let noise = sample_perlin_noise(x as f32, y as f32, self);
            *value = (noise + 1.0) / 2.0;
        });
    }
}
