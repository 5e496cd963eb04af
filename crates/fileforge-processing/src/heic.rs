//! HEIC decoding into PNG.

use std::io::Cursor;

use image::RgbImage;
use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

use crate::error::ConvertError;

/// Decode the primary image of a HEIC container and re-encode it as PNG,
/// preserving pixel dimensions.
pub fn heic_to_png(data: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let lib_heif = LibHeif::new();

    let context = HeifContext::read_from_bytes(data)
        .map_err(|e| ConvertError::Decode(format!("failed to read HEIC container: {e}")))?;
    let handle = context
        .primary_image_handle()
        .map_err(|e| ConvertError::Decode(format!("no primary image in HEIC container: {e}")))?;

    let decoded = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| ConvertError::Decode(format!("failed to decode HEIC image: {e}")))?;

    let planes = decoded.planes();
    let plane = planes
        .interleaved
        .ok_or_else(|| ConvertError::Decode("decoder returned no interleaved RGB plane".to_string()))?;

    let width = plane.width;
    let height = plane.height;
    let row_bytes = width as usize * 3;

    // The decoder may pad rows; copy row by row to drop the stride.
    let mut pixels = Vec::with_capacity(row_bytes * height as usize);
    for row in 0..height as usize {
        let start = row * plane.stride;
        pixels.extend_from_slice(&plane.data[start..start + row_bytes]);
    }

    let rgb = RgbImage::from_raw(width, height, pixels).ok_or_else(|| {
        ConvertError::Decode("decoded HEIC dimensions do not match pixel data".to_string())
    })?;

    tracing::debug!(width, height, "Decoded HEIC image");

    let mut encoded = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(rgb)
        .write_to(&mut encoded, image::ImageFormat::Png)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;

    Ok(encoded.into_inner())
}
