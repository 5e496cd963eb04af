use std::io;

/// Failure kinds for conversion operations.
///
/// The transport layer maps these to HTTP responses; the messages carry the
/// underlying codec error text.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("PDF error: {0}")]
    Pdf(String),

    #[error("text extraction failed: {0}")]
    TextExtraction(String),

    #[error("document assembly failed: {0}")]
    Document(String),

    #[error("archive error: {0}")]
    Archive(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
