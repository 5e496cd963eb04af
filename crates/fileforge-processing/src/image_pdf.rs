//! Raster image to multi-page PDF composition.
//!
//! Built on printpdf's data-oriented API: one `PdfPage` per input image,
//! serialized in one pass at the end.

use std::io::Cursor;

use image::GenericImageView;
use printpdf::{
    Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, PdfWarnMsg, RawImage, RawImageData,
    RawImageFormat, XObjectTransform,
};

use crate::error::ConvertError;

const PT_PER_INCH: f32 = 72.0;
const MM_PER_INCH: f32 = 25.4;

/// Compose the given images into a single PDF, one page per image, in slice
/// order. Every image is flattened to RGB (alpha dropped) and placed 1:1 on
/// a page sized to its pixel dimensions at 72 DPI.
pub fn images_to_pdf(images: &[Vec<u8>]) -> Result<Vec<u8>, ConvertError> {
    if images.is_empty() {
        return Err(ConvertError::Document(
            "no images to compose into a PDF".to_string(),
        ));
    }

    let mut doc = PdfDocument::new("Converted Images");
    let mut pages = Vec::with_capacity(images.len());

    for (index, bytes) in images.iter().enumerate() {
        let decoded = image::ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| ConvertError::Decode(format!("image {}: {e}", index + 1)))?
            .decode()
            .map_err(|e| ConvertError::Decode(format!("image {}: {e}", index + 1)))?;

        let (width, height) = decoded.dimensions();
        let rgb = decoded.to_rgb8();

        let raw = RawImage {
            pixels: RawImageData::U8(rgb.into_raw()),
            width: width as usize,
            height: height as usize,
            data_format: RawImageFormat::RGB8,
            tag: Vec::new(),
        };
        let image_id = doc.add_image(&raw);

        let page_w = Mm(width as f32 * MM_PER_INCH / PT_PER_INCH);
        let page_h = Mm(height as f32 * MM_PER_INCH / PT_PER_INCH);

        let ops = vec![Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: None,
                translate_y: None,
                scale_x: None,
                scale_y: None,
                dpi: Some(PT_PER_INCH),
                rotate: None,
            },
        }];

        pages.push(PdfPage::new(page_w, page_h, ops));
    }

    doc.with_pages(pages);

    let mut warnings: Vec<PdfWarnMsg> = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded_image(format: image::ImageFormat, width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 128]));
        let mut buffer = Cursor::new(Vec::new());
        let dynamic = match format {
            // JPEG cannot carry alpha.
            image::ImageFormat::Jpeg => {
                image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(img).to_rgb8())
            }
            _ => image::DynamicImage::ImageRgba8(img),
        };
        dynamic.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    fn page_count(pdf: &[u8]) -> usize {
        lopdf::Document::load_mem(pdf).unwrap().get_pages().len()
    }

    #[test]
    fn one_page_per_image_in_order() {
        let inputs = vec![
            encoded_image(image::ImageFormat::Png, 60, 40),
            encoded_image(image::ImageFormat::Jpeg, 30, 30),
            encoded_image(image::ImageFormat::Png, 10, 80),
        ];

        let pdf = images_to_pdf(&inputs).unwrap();
        assert_eq!(page_count(&pdf), 3);
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn single_image_yields_single_page() {
        let pdf = images_to_pdf(&[encoded_image(image::ImageFormat::Png, 5, 5)]).unwrap();
        assert_eq!(page_count(&pdf), 1);
    }

    #[test]
    fn transparency_is_flattened() {
        // RGBA input must not fail; the page is composed from the RGB data.
        let pdf = images_to_pdf(&[encoded_image(image::ImageFormat::Png, 16, 16)]).unwrap();
        assert_eq!(page_count(&pdf), 1);
    }

    #[test]
    fn undecodable_image_is_a_decode_error() {
        let result = images_to_pdf(&[b"not an image".to_vec()]);
        assert!(matches!(result, Err(ConvertError::Decode(_))));
    }

    #[test]
    fn one_bad_image_fails_the_whole_conversion() {
        let inputs = vec![
            encoded_image(image::ImageFormat::Png, 8, 8),
            b"broken".to_vec(),
        ];
        assert!(matches!(
            images_to_pdf(&inputs),
            Err(ConvertError::Decode(_))
        ));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            images_to_pdf(&[]),
            Err(ConvertError::Document(_))
        ));
    }
}
