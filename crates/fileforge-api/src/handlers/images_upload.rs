use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::Response;
use fileforge_processing::images_to_pdf;

use super::processing_failure;
use crate::error::HttpAppError;
use crate::multipart::read_file_list;
use crate::response::{attachment, PDF};
use crate::state::AppState;

/// Compose one or more uploaded raster images into a single PDF, one page
/// per image, in submission order.
///
/// The images are converted straight from the request body; nothing is
/// staged on disk for this route.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_images"))]
pub async fn upload_images(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response<Body>, HttpAppError> {
    let files = read_file_list(multipart, "images").await?;
    let images: Vec<Vec<u8>> = files.into_iter().map(|f| f.data).collect();

    let pdf = state
        .run_conversion(move || images_to_pdf(&images))
        .await
        .map_err(|e| processing_failure(e, "Error processing images"))?;

    Ok(attachment(pdf, "converted_images.pdf", PDF)?)
}
