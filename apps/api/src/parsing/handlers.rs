//! Axum route handlers for the Parse API.

use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::parsing::parse_resume;
use crate::parsing::documents::{extract_text, DocumentKind};

/// Multipart field carrying the uploaded document.
const UPLOAD_FIELD: &str = "resume";

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub resume: ResumeRecord,
}

#[derive(Debug, Serialize)]
pub struct UploadSource {
    pub filename: Option<String>,
    pub kind: DocumentKind,
    pub bytes: usize,
}

#[derive(Debug, Serialize)]
pub struct UploadParseResponse {
    pub resume: ResumeRecord,
    pub source: UploadSource,
}

/// POST /api/parse
///
/// Parses resume text that was already extracted by the caller.
pub async fn handle_parse_text(
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<ParseResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let resume = parse_resume(&request.text);
    info!(
        "Parsed resume text ({} chars): {} experience entries",
        request.text.len(),
        resume.experience.len()
    );

    Ok(Json(ParseResponse { resume }))
}

/// POST /api/parse/upload
///
/// Accepts a multipart upload (field `resume`), extracts its text and parses it.
pub async fn handle_parse_upload(
    mut multipart: Multipart,
) -> Result<Json<UploadParseResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let kind = DocumentKind::detect(filename.as_deref(), field.content_type())?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        let bytes = data.len();

        let text = tokio::task::spawn_blocking(move || extract_text(&data, kind))
            .await
            .map_err(|e| AppError::Extraction(format!("Text extraction aborted: {e}")))??;

        let resume = parse_resume(&text);
        info!(
            "Parsed uploaded {:?} ({} bytes, file={:?})",
            kind, bytes, filename
        );

        return Ok(Json(UploadParseResponse {
            resume,
            source: UploadSource {
                filename,
                kind,
                bytes,
            },
        }));
    }

    Err(AppError::Validation(format!(
        "No file uploaded (expected multipart field '{UPLOAD_FIELD}')"
    )))
}

/// POST /api/parse/manual
///
/// Accepts a record entered by hand. Its raw text becomes the record's own JSON so the
/// scorer can consume it like any other resume.
pub async fn handle_parse_manual(
    Json(mut record): Json<ResumeRecord>,
) -> Result<Json<ParseResponse>, AppError> {
    if record.personal_info.name.trim().is_empty() {
        return Err(AppError::Validation(
            "Personal information with name is required".to_string(),
        ));
    }

    record.raw_text.clear();
    record.raw_text = record.to_scoring_text();

    Ok(Json(ParseResponse { resume: record }))
}
