//! Conversion operations.
//!
//! Each conversion is a pure function over bytes returning an explicit
//! `Result<Vec<u8>, ConvertError>`; the actual format work is delegated to
//! external codecs (libheif, pdfium, printpdf, pdf-extract, docx-rs). Nothing
//! here touches the network or the request lifecycle.

mod docx;
mod error;
#[cfg(feature = "heic")]
mod heic;
mod image_pdf;
mod pdf_raster;
mod pdfium;

pub use docx::pdf_to_docx;
pub use error::ConvertError;
#[cfg(feature = "heic")]
pub use heic::heic_to_png;
pub use image_pdf::images_to_pdf;
pub use pdf_raster::pdf_to_image_archive;

/// Target raster format for PDF page rendering, as selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageFormat {
    #[default]
    Jpg,
    Png,
}

impl ImageFormat {
    /// Parse the form value; anything other than `PNG` falls back to JPG.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("png") {
            ImageFormat::Png
        } else {
            ImageFormat::Jpg
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parsing_defaults_to_jpg() {
        assert_eq!(ImageFormat::parse("JPG"), ImageFormat::Jpg);
        assert_eq!(ImageFormat::parse("PNG"), ImageFormat::Png);
        assert_eq!(ImageFormat::parse("png"), ImageFormat::Png);
        assert_eq!(ImageFormat::parse("webp"), ImageFormat::Jpg);
        assert_eq!(ImageFormat::parse(""), ImageFormat::Jpg);
    }
}
