//! Seed-reproducible 2D noise height map generator.
//!
//! This crate computes deterministic scalar noise fields and quantizes them
//! into fixed-depth height maps suitable for 16-bit grayscale image export.
//! Two noise strategies are provided: lattice-gradient (Perlin) noise built
//! on a fixed permutation table, and a simpler seeded-random field smoothed
//! with a sine transform.

pub mod export;
pub mod noise;
pub mod terrain;

pub use noise::{HeightSource, PerlinNoiseConfig, SmoothedRandomConfig};
pub use terrain::{HeightMap, HeightMapError};
