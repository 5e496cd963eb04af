//! Attachment response construction.
//!
//! Purely a transport-metadata concern: bytes pass through untouched.

use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use fileforge_core::AppError;

pub const PNG: &str = "image/png";
pub const ZIP: &str = "application/zip";
pub const PDF: &str = "application/pdf";
pub const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Wrap conversion output as a file download.
pub fn attachment(
    bytes: Vec<u8>,
    filename: &str,
    content_type: &str,
) -> Result<Response<Body>, AppError> {
    let content_disposition = format!("attachment; filename=\"{filename}\"");

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))
}
