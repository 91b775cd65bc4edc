//! Axum route handlers for the ATS scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::aggregator::{ScoreComparison, ScoreReport};
use crate::ats::scorer::ScorerBackend;
use crate::errors::AppError;
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    #[serde(default, alias = "resumeText")]
    pub resume_text: Option<String>,
    #[serde(default, alias = "resumeData")]
    pub resume_data: Option<ResumeRecord>,
}

#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub ats_score: ScoreReport,
    pub scorer_backend: ScorerBackend,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    #[serde(default, alias = "originalText")]
    pub original_text: String,
    #[serde(default, alias = "enhancedText")]
    pub enhanced_text: String,
}

/// POST /api/ats-score
///
/// Scores raw text when given, otherwise the serialized structured record.
pub async fn handle_ats_score(
    State(state): State<AppState>,
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    let text = match (request.resume_text, request.resume_data) {
        (Some(text), _) if !text.trim().is_empty() => text,
        (_, Some(record)) => record.to_scoring_text(),
        _ => {
            return Err(AppError::Validation(
                "Resume text or data is required".to_string(),
            ))
        }
    };

    let scored = state.ats_scorer.score(&text).await;
    info!(
        "ATS score computed: overall={} backend={:?}",
        scored.report.overall_score, scored.backend
    );

    Ok(Json(AtsScoreResponse {
        ats_score: scored.report,
        scorer_backend: scored.backend,
    }))
}

/// POST /api/ats-score/compare
///
/// Scores an original and an enhanced version and reports per-field deltas.
pub async fn handle_compare_scores(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<ScoreComparison>, AppError> {
    if request.original_text.trim().is_empty() || request.enhanced_text.trim().is_empty() {
        return Err(AppError::Validation(
            "Both original and enhanced text are required".to_string(),
        ));
    }

    let original = state.ats_scorer.score(&request.original_text).await;
    let enhanced = state.ats_scorer.score(&request.enhanced_text).await;
    let comparison = ScoreComparison::between(original.report, enhanced.report);

    info!(
        "ATS comparison: {} -> {} ({:+})",
        comparison.original.overall_score,
        comparison.enhanced.overall_score,
        comparison.improvement.overall_score
    );

    Ok(Json(comparison))
}
