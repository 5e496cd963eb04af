//! PDF page rasterization into a ZIP archive of images.

use std::io::{Cursor, Write};

use pdfium_render::prelude::*;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::ConvertError;
use crate::pdfium;
use crate::ImageFormat;

/// Rendering resolution for PDF pages.
const RENDER_DPI: f32 = 200.0;

/// Rasterize every page of `data` and package the images as a ZIP archive
/// with entries `page_1.<ext>` … `page_N.<ext>` in page order.
pub fn pdf_to_image_archive(data: &[u8], format: ImageFormat) -> Result<Vec<u8>, ConvertError> {
    let _guard = pdfium::lock();
    let pdfium = pdfium::bind()?;

    let document = pdfium
        .load_pdf_from_byte_slice(data, None)
        .map_err(|e| ConvertError::Pdf(format!("failed to open PDF: {e:?}")))?;

    let mut archive = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let page_count = document.pages().len();
    tracing::debug!(page_count, ?format, "Rasterizing PDF pages");

    for (index, page) in document.pages().iter().enumerate() {
        let page_number = index + 1;

        let target_width = (page.width().value * RENDER_DPI / 72.0).round().max(1.0) as i32;
        let config = PdfRenderConfig::new().set_target_width(target_width);

        let rendered = page
            .render_with_config(&config)
            .map_err(|e| ConvertError::Pdf(format!("failed to render page {page_number}: {e:?}")))?
            .as_image();

        let mut encoded = Cursor::new(Vec::new());
        match format {
            // JPEG has no alpha channel; flatten first.
            ImageFormat::Jpg => image::DynamicImage::ImageRgb8(rendered.to_rgb8())
                .write_to(&mut encoded, image::ImageFormat::Jpeg)
                .map_err(|e| ConvertError::Encode(e.to_string()))?,
            ImageFormat::Png => rendered
                .write_to(&mut encoded, image::ImageFormat::Png)
                .map_err(|e| ConvertError::Encode(e.to_string()))?,
        }

        archive
            .start_file(
                format!("page_{page_number}.{}", format.extension()),
                options,
            )
            .map_err(|e| ConvertError::Archive(e.to_string()))?;
        archive.write_all(encoded.get_ref())?;
    }

    let cursor = archive
        .finish()
        .map_err(|e| ConvertError::Archive(e.to_string()))?;

    Ok(cursor.into_inner())
}
