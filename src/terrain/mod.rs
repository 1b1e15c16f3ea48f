//! Terrain grid assembly.
//!
//! Provides the quantized HeightMap grid and the builder that drives a
//! noise source over it.

mod heightmap;

pub use heightmap::{HeightMap, HeightMapError};
