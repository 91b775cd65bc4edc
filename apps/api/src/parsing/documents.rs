//! Document text extraction. Byte-level decoding is delegated to `pdf-extract`; this module only
//! picks the decoder and rejects formats it cannot read.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Unsupported file type '{0}'. Only PDF and plain-text files are accepted")]
    Unsupported(String),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Document contains no extractable text")]
    Empty,
}

impl DocumentKind {
    /// Detects the kind from the file extension, falling back to the declared content type.
    pub fn detect(filename: Option<&str>, content_type: Option<&str>) -> Result<Self, DocumentError> {
        let extension = filename
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("pdf") => return Ok(DocumentKind::Pdf),
            Some("txt") | Some("text") => return Ok(DocumentKind::PlainText),
            _ => {}
        }

        let mime = content_type.map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or("")
                .trim()
                .to_ascii_lowercase()
        });
        match mime.as_deref() {
            Some("application/pdf") => Ok(DocumentKind::Pdf),
            Some("text/plain") => Ok(DocumentKind::PlainText),
            _ => Err(DocumentError::Unsupported(
                extension
                    .or(mime)
                    .unwrap_or_else(|| "unknown".to_string()),
            )),
        }
    }
}

/// Decodes document bytes to text. CPU-bound for PDFs; run it on the blocking pool.
pub fn extract_text(bytes: &[u8], kind: DocumentKind) -> Result<String, DocumentError> {
    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| DocumentError::Pdf(format!("{e:?}")))?,
        DocumentKind::PlainText => String::from_utf8_lossy(bytes).into_owned(),
    };

    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }
    Ok(text)
}
