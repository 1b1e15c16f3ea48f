//! 16-bit grayscale PNG export.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;

use crate::terrain::HeightMap;

/// Errors that can occur during PNG export.
#[derive(Error, Debug)]
pub enum PngExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Options for PNG export.
#[derive(Debug, Clone)]
pub struct PngExportOptions {
    /// PNG compression type.
    pub compression: CompressionType,
    /// PNG filter type.
    pub filter: FilterType,
}

impl Default for PngExportOptions {
    fn default() -> Self {
        Self {
            compression: CompressionType::Default,
            filter: FilterType::Adaptive,
        }
    }
}

/// Exports a height map as a single-channel 16-bit PNG.
///
/// The encoder is handed the grid as native-endian 16-bit samples; it
/// performs the PNG big-endian conversion itself, so decoded pixels match
/// the grid exactly.
///
/// # Errors
/// Propagates file creation failures and encoder diagnostics; the write is
/// single-shot with no retry.
pub fn export_png(
    map: &HeightMap,
    path: &Path,
    options: &PngExportOptions,
) -> Result<(), PngExportError> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new_with_quality(writer, options.compression, options.filter);

    encoder.write_image(
        &map.to_ne_bytes(),
        map.width(),
        map.height(),
        ExtendedColorType::L16,
    )?;

    Ok(())
}
