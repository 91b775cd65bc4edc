use std::sync::Arc;

use crate::ats::AtsScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable ATS scorer. Internal by default; external when ATS_API_URL and ATS_API_KEY are set.
    pub ats_scorer: Arc<dyn AtsScorer>,
}
