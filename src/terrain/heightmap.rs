//! Height map assembly from a noise source.

use thiserror::Error;

use crate::noise::HeightSource;

/// Largest accepted depth; `max_depth - 1` must fit in 16 bits.
const DEPTH_LIMIT: u32 = 65536;

/// Errors that can occur during height map generation.
#[derive(Error, Debug)]
pub enum HeightMapError {
    #[error("invalid dimensions: {0}x{1} (width and height must be non-zero)")]
    InvalidDimensions(u32, u32),
    #[error("invalid max depth: {0} (must be in 1..={DEPTH_LIMIT})")]
    InvalidDepth(u32),
}

/// A quantized 2D height grid with 16 bits per cell.
///
/// Cells are stored in row-major order and always lie in
/// `[0, max_depth - 1]`. The grid is created fresh per generation call and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightMap {
    width: u32,
    height: u32,
    max_depth: u32,
    values: Vec<u16>,
}

impl HeightMap {
    /// Generates a height map by sampling `source` over a `width` x `height`
    /// grid in row-major order.
    ///
    /// The source's normalized [0, 1] values are clamped, scaled by
    /// `max_depth - 1`, and truncated to `u16`.
    ///
    /// # Errors
    /// Returns [`HeightMapError::InvalidDimensions`] when either dimension is
    /// zero, and [`HeightMapError::InvalidDepth`] when `max_depth` is zero or
    /// exceeds 65536.
    pub fn generate(
        source: &dyn HeightSource,
        width: u32,
        height: u32,
        max_depth: u32,
    ) -> Result<Self, HeightMapError> {
        if width == 0 || height == 0 {
            return Err(HeightMapError::InvalidDimensions(width, height));
        }
        if max_depth == 0 || max_depth > DEPTH_LIMIT {
            return Err(HeightMapError::InvalidDepth(max_depth));
        }

        let mut field = vec![0.0f32; (width as usize) * (height as usize)];
        source.fill(width, height, &mut field);

        let scale = (max_depth - 1) as f32;
        let values = field
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * scale) as u16)
            .collect();

        Ok(Self {
            width,
            height,
            max_depth,
            values,
        })
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the depth the grid was quantized to.
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Returns the cell at (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> u16 {
        assert!(x < self.width && y < self.height, "cell ({}, {}) out of bounds", x, y);
        self.values[(y * self.width + x) as usize]
    }

    /// Returns all cells in row-major order.
    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Serializes the grid as big-endian 16-bit samples, high byte first.
    ///
    /// This matches the on-the-wire sample layout of a 16-bit grayscale
    /// PNG; the buffer is `width * height * 2` bytes long.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.values.len() * 2);
        for &value in &self.values {
            bytes.extend_from_slice(&value.to_be_bytes());
        }
        bytes
    }

    /// Serializes the grid as native-endian 16-bit samples.
    ///
    /// `image`'s encoders take 16-bit input in native byte order and
    /// perform the PNG big-endian conversion themselves.
    pub fn to_ne_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.values.len() * 2);
        for &value in &self.values {
            bytes.extend_from_slice(&value.to_ne_bytes());
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{PerlinNoiseConfig, SmoothedRandomConfig};

    #[test]
    fn test_generate_golden_grid() {
        // Recorded reference for the lattice-gradient path: seed 42, 4x4,
        // max depth 256, computed with the same f32 formulas.
        let config = PerlinNoiseConfig::with_seed(42);
        let map = HeightMap::generate(&config, 4, 4, 256).unwrap();

        let expected: [u16; 16] = [
            127, 126, 124, 123, //
            128, 127, 126, 124, //
            130, 128, 127, 126, //
            131, 130, 128, 127,
        ];
        assert_eq!(map.values(), &expected);
    }

    #[test]
    fn test_generate_deterministic() {
        let config = PerlinNoiseConfig::with_seed(1234);
        let a = HeightMap::generate(&config, 33, 17, 1000).unwrap();
        let b = HeightMap::generate(&config, 33, 17, 1000).unwrap();
        assert_eq!(a, b, "identical inputs must produce byte-identical grids");

        let config = SmoothedRandomConfig::with_seed(1234);
        let a = HeightMap::generate(&config, 33, 17, 1000).unwrap();
        let b = HeightMap::generate(&config, 33, 17, 1000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_range_invariant() {
        let max_depth = 1000;
        let config = PerlinNoiseConfig::with_seed(555);
        let map = HeightMap::generate(&config, 32, 32, max_depth).unwrap();
        for &v in map.values() {
            assert!((v as u32) < max_depth, "cell {} exceeds max depth", v);
        }

        let config = SmoothedRandomConfig::with_seed(555);
        let map = HeightMap::generate(&config, 32, 32, max_depth).unwrap();
        for &v in map.values() {
            assert!((v as u32) < max_depth, "cell {} exceeds max depth", v);
        }
    }

    #[test]
    fn test_full_depth_fits_u16() {
        let config = SmoothedRandomConfig::with_seed(99);
        let map = HeightMap::generate(&config, 16, 16, 65536).unwrap();
        assert_eq!(map.max_depth(), 65536);
        // All values representable; nothing to assert beyond type safety,
        // but the maximum cell must stay below the depth.
        assert!(map.values().iter().all(|&v| (v as u32) < 65536));
    }

    #[test]
    fn test_depth_one_is_all_zero() {
        let config = PerlinNoiseConfig::with_seed(3);
        let map = HeightMap::generate(&config, 4, 4, 1).unwrap();
        assert!(map.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = PerlinNoiseConfig::with_seed(1);
        assert!(matches!(
            HeightMap::generate(&config, 0, 10, 256),
            Err(HeightMapError::InvalidDimensions(0, 10))
        ));
        assert!(matches!(
            HeightMap::generate(&config, 10, 0, 256),
            Err(HeightMapError::InvalidDimensions(10, 0))
        ));
    }

    #[test]
    fn test_invalid_depth_rejected() {
        let config = PerlinNoiseConfig::with_seed(1);
        assert!(matches!(
            HeightMap::generate(&config, 4, 4, 0),
            Err(HeightMapError::InvalidDepth(0))
        ));
        assert!(matches!(
            HeightMap::generate(&config, 4, 4, 65537),
            Err(HeightMapError::InvalidDepth(65537))
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let config = PerlinNoiseConfig::with_seed(42);
        let map = HeightMap::generate(&config, 5, 3, 4096).unwrap();
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(map.get(x, y), map.values()[(y * 5 + x) as usize]);
            }
        }
    }

    #[test]
    fn test_be_byte_packing() {
        let config = PerlinNoiseConfig::with_seed(42);
        let map = HeightMap::generate(&config, 4, 4, 65536).unwrap();
        let bytes = map.to_be_bytes();
        assert_eq!(bytes.len(), 4 * 4 * 2);
        for (i, &value) in map.values().iter().enumerate() {
            assert_eq!(bytes[2 * i], (value >> 8) as u8, "high byte first");
            assert_eq!(bytes[2 * i + 1], (value & 0xFF) as u8);
        }
    }

    #[test]
    fn test_ne_byte_packing() {
        let config = PerlinNoiseConfig::with_seed(42);
        let map = HeightMap::generate(&config, 4, 4, 65536).unwrap();
        let bytes = map.to_ne_bytes();
        assert_eq!(bytes.len(), 4 * 4 * 2);
        for (i, &value) in map.values().iter().enumerate() {
            assert_eq!([bytes[2 * i], bytes[2 * i + 1]], value.to_ne_bytes());
        }
    }
}
