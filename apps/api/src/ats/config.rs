//! Scoring vocabulary, weights and thresholds. `ScoringConfig::default()` is the tuning the
//! service runs with; tests and callers may inject their own.

use serde::{Deserialize, Serialize};

/// Strong verbs and traits counted by the keyword-match score.
pub const IMPACT_KEYWORDS: &[&str] = &[
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "led",
    "improved",
    "increased",
    "reduced",
    "achieved",
    "analyzed",
    "coordinated",
    "executed",
    "optimized",
    "strategic",
    "leadership",
    "collaboration",
    "innovation",
    "results-driven",
];

/// Phrase-level competencies reported as missing when absent.
pub const COMPETENCY_KEYWORDS: &[&str] = &[
    "leadership",
    "team collaboration",
    "project management",
    "data analysis",
    "problem-solving",
    "communication",
    "strategic planning",
    "results-driven",
    "innovation",
];

/// Verbs that earn the content-quality bonus.
pub const ACTION_VERBS: &[&str] = &["achieved", "improved", "increased", "developed", "led"];

/// Section names every ATS-friendly resume is expected to contain.
pub const REQUIRED_SECTIONS: &[&str] = &["experience", "education", "skills"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub keyword_match: f64,
    pub format_compliance: f64,
    pub content_quality: f64,
    pub readability: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword_match: 0.35,
            format_compliance: 0.25,
            content_quality: 0.25,
            readability: 0.15,
        }
    }
}

/// Cutoffs for one component score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ComponentThresholds {
    /// Suggestions are emitted when the score is below this.
    pub suggest_below: u32,
    /// A strength is reported at or above this.
    pub strength_at: u32,
    /// A weakness is reported below this.
    pub weakness_below: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreThresholds {
    pub keyword_match: ComponentThresholds,
    pub format_compliance: ComponentThresholds,
    pub content_quality: ComponentThresholds,
    pub readability: ComponentThresholds,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            keyword_match: ComponentThresholds {
                suggest_below: 60,
                strength_at: 80,
                weakness_below: 60,
            },
            format_compliance: ComponentThresholds {
                suggest_below: 70,
                strength_at: 85,
                weakness_below: 70,
            },
            content_quality: ComponentThresholds {
                suggest_below: 70,
                strength_at: 80,
                weakness_below: 60,
            },
            readability: ComponentThresholds {
                suggest_below: 70,
                strength_at: 85,
                weakness_below: 70,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub impact_keywords: Vec<&'static str>,
    pub competency_keywords: Vec<&'static str>,
    pub action_verbs: Vec<&'static str>,
    pub required_sections: Vec<&'static str>,
    pub weights: ScoringWeights,
    pub thresholds: ScoreThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            impact_keywords: IMPACT_KEYWORDS.to_vec(),
            competency_keywords: COMPETENCY_KEYWORDS.to_vec(),
            action_verbs: ACTION_VERBS.to_vec(),
            required_sections: REQUIRED_SECTIONS.to_vec(),
            weights: ScoringWeights::default(),
            thresholds: ScoreThresholds::default(),
        }
    }
}
