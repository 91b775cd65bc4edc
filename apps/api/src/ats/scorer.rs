//! ATS scorer backends.
//!
//! Default: `InternalAtsScorer` (pure-Rust, deterministic).
//! Optional: `ExternalAtsScorer` posts the text to a remote ATS API and falls back to the
//! internal scorer on any failure, so callers always get a report.
//!
//! `AppState` holds an `Arc<dyn AtsScorer>`, chosen at startup from config.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::ats::aggregator::{score_resume_with, ScoreReport};
use crate::ats::config::ScoringConfig;

const EXTERNAL_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerBackend {
    Internal,
    External,
}

/// A report plus the backend that actually produced it.
#[derive(Debug, Clone)]
pub struct ScoredResume {
    pub report: ScoreReport,
    pub backend: ScorerBackend,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap scoring backends without touching handlers.
#[async_trait]
pub trait AtsScorer: Send + Sync {
    /// Scoring never fails; remote backends degrade to the internal one.
    async fn score(&self, text: &str) -> ScoredResume;

    /// The backend this scorer was configured with.
    fn backend(&self) -> ScorerBackend;
}

// ────────────────────────────────────────────────────────────────────────────
// InternalAtsScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct InternalAtsScorer {
    config: ScoringConfig,
}

impl InternalAtsScorer {
    pub fn score_text(&self, text: &str) -> ScoreReport {
        score_resume_with(text, &self.config)
    }
}

#[async_trait]
impl AtsScorer for InternalAtsScorer {
    async fn score(&self, text: &str) -> ScoredResume {
        ScoredResume {
            report: self.score_text(text),
            backend: ScorerBackend::Internal,
        }
    }

    fn backend(&self) -> ScorerBackend {
        ScorerBackend::Internal
    }
}

// ────────────────────────────────────────────────────────────────────────────
// ExternalAtsScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ExternalScorerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Report field '{field}' out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

#[derive(Debug, Serialize)]
struct ExternalScoreRequest<'a> {
    resume_text: &'a str,
}

pub struct ExternalAtsScorer {
    client: Client,
    api_url: String,
    api_key: String,
    fallback: InternalAtsScorer,
}

impl ExternalAtsScorer {
    pub fn new(api_url: &str, api_key: &str, fallback: InternalAtsScorer) -> Result<Self> {
        let client = Client::builder()
            .timeout(EXTERNAL_TIMEOUT)
            .build()
            .context("Failed to build HTTP client for external ATS API")?;
        Ok(Self {
            client,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            fallback,
        })
    }

    async fn call_remote(&self, text: &str) -> Result<ScoreReport, ExternalScorerError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&ExternalScoreRequest { resume_text: text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ExternalScorerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let report = response.json::<ScoreReport>().await?;
        check_score_bounds(&report)?;
        Ok(report)
    }
}

/// Remote reports must respect the same [0, 100] bounds as internal ones.
fn check_score_bounds(report: &ScoreReport) -> Result<(), ExternalScorerError> {
    let fields = [
        ("overall_score", report.overall_score),
        ("keyword_match", report.keyword_match),
        ("format_compliance", report.format_compliance),
        ("content_quality", report.content_quality),
        ("readability", report.readability),
    ];
    match fields.into_iter().find(|(_, value)| *value > 100) {
        Some((field, value)) => Err(ExternalScorerError::OutOfRange { field, value }),
        None => Ok(()),
    }
}

#[async_trait]
impl AtsScorer for ExternalAtsScorer {
    async fn score(&self, text: &str) -> ScoredResume {
        match self.call_remote(text).await {
            Ok(report) => {
                debug!("External ATS API scored resume: overall={}", report.overall_score);
                ScoredResume {
                    report,
                    backend: ScorerBackend::External,
                }
            }
            Err(e) => {
                warn!("External ATS API failed, falling back to internal scorer: {e}");
                self.fallback.score(text).await
            }
        }
    }

    fn backend(&self) -> ScorerBackend {
        ScorerBackend::External
    }
}
