//! PDF text extraction into a DOCX document.
//!
//! Layout, images, and tables are not preserved: every extracted line becomes
//! one paragraph, blank lines included, in original order.

use std::io::Cursor;

use docx_rs::{Docx, Paragraph, Run};

use crate::error::ConvertError;

pub fn pdf_to_docx(data: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let text = pdf_extract::extract_text_from_mem(data)
        .map_err(|e| ConvertError::TextExtraction(e.to_string()))?;

    docx_from_text(&text)
}

fn docx_from_text(text: &str) -> Result<Vec<u8>, ConvertError> {
    let mut docx = Docx::new();
    for line in text.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| ConvertError::Document(e.to_string()))?;

    Ok(buffer.into_inner())
}
