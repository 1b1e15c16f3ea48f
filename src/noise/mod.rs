//! Noise synthesis module for height map generation.
//!
//! Both noise strategies plug into the shared height map builder through
//! the [`HeightSource`] trait.

mod perlin;
mod smoothed;

pub use perlin::{sample_perlin_noise, PerlinNoiseConfig};
pub use smoothed::SmoothedRandomConfig;

/// A noise strategy that fills a 2D grid with normalized values.
///
/// Implementations write one value in [0, 1] per cell into `out`, which has
/// `width * height` entries in row-major order.
pub trait HeightSource: Send + Sync {
    /// Fills `out` with normalized noise values for a `width` x `height` grid.
    fn fill(&self, width: u32, height: u32, out: &mut [f32]);
}
