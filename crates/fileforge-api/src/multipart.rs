//! Multipart form parsing helpers shared by the upload handlers.

use axum::extract::Multipart;
use fileforge_core::AppError;
use fileforge_processing::ImageFormat;

pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Read the single file field `field_name` from the form.
///
/// A form without the field is `No file part`; a field without a filename is
/// `No selected file`.
pub async fn read_file_field(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<UploadedFile, AppError> {
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {e}")))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if name != field_name || upload.is_some() {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {e}")))?;

        upload = Some(UploadedFile {
            filename,
            data: data.to_vec(),
        });
    }

    let upload = upload.ok_or_else(|| AppError::InvalidInput("No file part".to_string()))?;
    if upload.filename.is_empty() {
        return Err(AppError::InvalidInput("No selected file".to_string()));
    }

    Ok(upload)
}

/// Read a PDF upload plus the optional `format` selector (`JPG`/`PNG`).
pub async fn read_pdf_form(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<(UploadedFile, ImageFormat), AppError> {
    let mut upload: Option<UploadedFile> = None;
    let mut format = ImageFormat::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {e}")))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if name == field_name && upload.is_none() {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {e}")))?;
            upload = Some(UploadedFile {
                filename,
                data: data.to_vec(),
            });
        } else if name == "format" {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read form field: {e}")))?;
            format = ImageFormat::parse(&value);
        }
    }

    let upload = upload.ok_or_else(|| AppError::InvalidInput("No file part".to_string()))?;
    if upload.filename.is_empty() {
        return Err(AppError::InvalidInput("No selected file".to_string()));
    }

    Ok((upload, format))
}

/// Read every file under the repeated field `field_name`.
///
/// Browsers submit one empty part when no file is picked; those are skipped,
/// and a form that ends up with zero usable files is `No selected files`.
pub async fn read_file_list(
    mut multipart: Multipart,
    field_name: &str,
) -> Result<Vec<UploadedFile>, AppError> {
    let mut files = Vec::new();
    let mut saw_field = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart form: {e}")))?
    {
        let name = field.name().map(|s| s.to_string()).unwrap_or_default();
        if name != field_name {
            continue;
        }
        saw_field = true;

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {e}")))?;

        if filename.is_empty() && data.is_empty() {
            continue;
        }

        files.push(UploadedFile {
            filename,
            data: data.to_vec(),
        });
    }

    if !saw_field {
        return Err(AppError::InvalidInput("No file part".to_string()));
    }
    if files.is_empty() {
        return Err(AppError::InvalidInput("No selected files".to_string()));
    }

    Ok(files)
}
