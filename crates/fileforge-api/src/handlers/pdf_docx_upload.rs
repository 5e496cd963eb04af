use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Multipart, State};
use axum::http::Response;
use fileforge_processing::pdf_to_docx;

use super::processing_failure;
use crate::error::HttpAppError;
use crate::multipart::read_file_field;
use crate::response::{attachment, DOCX};
use crate::state::AppState;

/// Extract the text of an uploaded PDF into a DOCX document, one paragraph
/// per line.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_pdf_to_docx"))]
pub async fn upload_pdf_to_docx(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Response<Body>, HttpAppError> {
    let upload = read_file_field(multipart, "pdf_to_docx").await?;

    let staged = state
        .scratch
        .stage_upload(&upload.filename, &upload.data)
        .await?;

    let input = staged.read().await?;
    let document = state
        .run_conversion(move || pdf_to_docx(&input))
        .await
        .map_err(|e| processing_failure(e, "Error processing file"))?;

    staged.remove().await;

    Ok(attachment(document, "converted_document.docx", DOCX)?)
}
