//! Export module for saving height maps to image files.

mod png;

pub use png::{export_png, PngExportError, PngExportOptions};
