//! PNG encoding at maximum lossless compression

use crate::error::{IconError, Result};
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::DynamicImage;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Encode `image` as PNG into `path`, returning the size on disk in bytes.
///
/// The size is read back from the filesystem after the file is closed, so
/// it reflects what actually landed on disk.
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<u64> {
    let file = File::create(path).map_err(|e| IconError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let encoder =
        PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilter::Adaptive);
    image
        .write_with_encoder(encoder)
        .map_err(|source| IconError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|e| IconError::io(path, e))?;
    drop(writer);

    let bytes = std::fs::metadata(path)
        .map_err(|e| IconError::io(path, e))?
        .len();
    debug!(path = %path.display(), bytes, "png written");
    Ok(bytes)
}

/// Size in kilobytes, two decimals
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}
