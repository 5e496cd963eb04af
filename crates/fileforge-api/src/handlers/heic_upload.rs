use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::Response;
use fileforge_processing::heic_to_png;
use fileforge_storage::sanitize_filename;

use super::processing_failure;
use crate::error::HttpAppError;
use crate::multipart::read_file_field;
use crate::response::{attachment, PNG};
use crate::state::AppState;

/// Convert an uploaded HEIC image to a PNG download.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_heic"))]
pub async fn upload_heic(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response<Body>, HttpAppError> {
    let upload = read_file_field(multipart, "heic").await?;
    let output_filename = output_name(&upload.filename);

    let staged = state
        .scratch
        .stage_upload(&upload.filename, &upload.data)
        .await?;

    let input = staged.read().await?;
    let png = state
        .run_conversion(move || heic_to_png(&input))
        .await
        .map_err(|e| processing_failure(e, "Error processing file"))?;

    // The converted image transits the output scratch directory on its way
    // out: written, read back for the response body, removed.
    let output = state.scratch.stage_output(&output_filename, &png).await?;
    let body = output.read().await?;
    output.remove().await;
    staged.remove().await;

    Ok(attachment(body, &output_filename, PNG)?)
}

fn output_name(filename: &str) -> String {
    let sanitized = sanitize_filename(filename);
    let stem = Path::new(&sanitized)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("converted");
    format!("{stem}.png")
}
