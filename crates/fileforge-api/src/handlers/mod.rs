//! Request handlers, one module per conversion route.

#[cfg(feature = "heic")]
pub mod heic_upload;
pub mod images_upload;
pub mod index;
pub mod pdf_docx_upload;
pub mod pdf_upload;

#[cfg(feature = "heic")]
pub use heic_upload::upload_heic;
pub use images_upload::upload_images;
pub use index::index;
pub use pdf_docx_upload::upload_pdf_to_docx;
pub use pdf_upload::upload_pdf;

use fileforge_core::AppError;

/// Prefix a conversion failure with the message shape clients see, leaving
/// every other error kind untouched.
pub(crate) fn processing_failure(err: AppError, context: &'static str) -> AppError {
    match err {
        AppError::Conversion(message) => AppError::Conversion(format!("{context}: {message}")),
        other => other,
    }
}
