use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::Response;
use fileforge_processing::pdf_to_image_archive;

use super::processing_failure;
use crate::error::HttpAppError;
use crate::multipart::read_pdf_form;
use crate::response::{attachment, ZIP};
use crate::state::AppState;

/// Rasterize every page of an uploaded PDF and return a ZIP archive of the
/// page images in the selected format.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_pdf"))]
pub async fn upload_pdf(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response<Body>, HttpAppError> {
    let (upload, format) = read_pdf_form(multipart, "pdf").await?;

    let staged = state
        .scratch
        .stage_upload(&upload.filename, &upload.data)
        .await?;

    let input = staged.read().await?;
    let archive = state
        .run_conversion(move || pdf_to_image_archive(&input, format))
        .await
        .map_err(|e| processing_failure(e, "Error processing file"))?;

    staged.remove().await;

    Ok(attachment(archive, "converted_images.zip", ZIP)?)
}
