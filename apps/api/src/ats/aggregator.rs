//! Combines the four component scores into a `ScoreReport` with advice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ats::calculators::{
    content_quality_score, format_compliance_score, keyword_match_score, readability_score,
};
use crate::ats::config::{ScoringConfig, ScoringWeights};

/// Presence of this term suppresses the projects suggestion.
const PROJECT_MARKER: &str = "project";

const KEYWORD_SUGGESTIONS: [&str; 2] = [
    "Add more action verbs like \"managed\", \"developed\", \"implemented\"",
    "Include industry-specific keywords relevant to your field",
];
const FORMAT_SUGGESTIONS: [&str; 2] = [
    "Ensure all essential sections are present (Experience, Education, Skills)",
    "Add contact information (email and phone number)",
];
const CONTENT_SUGGESTIONS: [&str; 2] = [
    "Include quantifiable achievements (e.g., \"Increased sales by 30%\")",
    "Use more specific metrics and numbers to demonstrate impact",
];
const READABILITY_SUGGESTIONS: [&str; 2] = [
    "Use bullet points to improve readability",
    "Keep sentences concise (15-20 words per sentence)",
];
const PROJECTS_SUGGESTION: &str = "Consider adding a Projects section to showcase your work";

// ────────────────────────────────────────────────────────────────────────────
// Report models
// ────────────────────────────────────────────────────────────────────────────

/// Every field is required on the wire; remote reports missing one are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub overall_score: u32,
    pub keyword_match: u32,
    pub format_compliance: u32,
    pub content_quality: u32,
    pub readability: u32,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentScores {
    pub keyword_match: u32,
    pub format_compliance: u32,
    pub content_quality: u32,
    pub readability: u32,
}

impl ComponentScores {
    pub fn compute(text: &str, config: &ScoringConfig) -> Self {
        Self {
            keyword_match: keyword_match_score(text, &config.impact_keywords),
            format_compliance: format_compliance_score(text, &config.required_sections),
            content_quality: content_quality_score(text, &config.action_verbs),
            readability: readability_score(text),
        }
    }

    /// Weighted sum, rounded and clamped to [0, 100].
    pub fn overall_score(&self, weights: &ScoringWeights) -> u32 {
        let weighted = self.keyword_match as f64 * weights.keyword_match
            + self.format_compliance as f64 * weights.format_compliance
            + self.content_quality as f64 * weights.content_quality
            + self.readability as f64 * weights.readability;
        weighted.round().clamp(0.0, 100.0) as u32
    }
}

/// Signed change per score field between two reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDelta {
    pub overall_score: i32,
    pub keyword_match: i32,
    pub format_compliance: i32,
    pub content_quality: i32,
    pub readability: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreComparison {
    pub original: ScoreReport,
    pub enhanced: ScoreReport,
    pub improvement: ScoreDelta,
}

impl ScoreComparison {
    pub fn between(original: ScoreReport, enhanced: ScoreReport) -> Self {
        let diff = |after: u32, before: u32| after as i32 - before as i32;
        let improvement = ScoreDelta {
            overall_score: diff(enhanced.overall_score, original.overall_score),
            keyword_match: diff(enhanced.keyword_match, original.keyword_match),
            format_compliance: diff(enhanced.format_compliance, original.format_compliance),
            content_quality: diff(enhanced.content_quality, original.content_quality),
            readability: diff(enhanced.readability, original.readability),
        };
        Self {
            original,
            enhanced,
            improvement,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Aggregation
// ────────────────────────────────────────────────────────────────────────────

/// Scores with the default vocabulary and weights.
#[allow(dead_code)]
pub fn score_resume(text: &str) -> ScoreReport {
    score_resume_with(text, &ScoringConfig::default())
}

pub fn score_resume_with(text: &str, config: &ScoringConfig) -> ScoreReport {
    let scores = ComponentScores::compute(text, config);
    let overall_score = scores.overall_score(&config.weights);
    let lower = text.to_lowercase();

    let report = ScoreReport {
        overall_score,
        keyword_match: scores.keyword_match,
        format_compliance: scores.format_compliance,
        content_quality: scores.content_quality,
        readability: scores.readability,
        missing_keywords: missing_keywords(&lower, &config.competency_keywords),
        suggestions: suggestions(&scores, &lower, config),
        strengths: strengths(&scores, config),
        weaknesses: weaknesses(&scores, config),
    };

    debug!(
        "Scored resume ({} chars): overall={} k={} f={} c={} r={}",
        text.len(),
        report.overall_score,
        report.keyword_match,
        report.format_compliance,
        report.content_quality,
        report.readability
    );

    report
}

fn missing_keywords(lower_text: &str, competencies: &[&str]) -> Vec<String> {
    competencies
        .iter()
        .filter(|term| !lower_text.contains(&term.to_lowercase()))
        .map(|term| term.to_string())
        .collect()
}

fn suggestions(scores: &ComponentScores, lower_text: &str, config: &ScoringConfig) -> Vec<String> {
    let t = &config.thresholds;
    let mut out: Vec<String> = Vec::new();

    let groups = [
        (scores.keyword_match, t.keyword_match.suggest_below, KEYWORD_SUGGESTIONS),
        (scores.format_compliance, t.format_compliance.suggest_below, FORMAT_SUGGESTIONS),
        (scores.content_quality, t.content_quality.suggest_below, CONTENT_SUGGESTIONS),
        (scores.readability, t.readability.suggest_below, READABILITY_SUGGESTIONS),
    ];
    for (score, below, advice) in groups {
        if score < below {
            out.extend(advice.iter().map(|s| s.to_string()));
        }
    }

    if !lower_text.contains(PROJECT_MARKER) {
        out.push(PROJECTS_SUGGESTION.to_string());
    }
    out
}

fn strengths(scores: &ComponentScores, config: &ScoringConfig) -> Vec<String> {
    let t = &config.thresholds;
    [
        (scores.keyword_match >= t.keyword_match.strength_at, "Strong use of industry keywords"),
        (scores.format_compliance >= t.format_compliance.strength_at, "Well-structured format"),
        (scores.content_quality >= t.content_quality.strength_at, "Quantifiable achievements present"),
        (scores.readability >= t.readability.strength_at, "Excellent readability"),
    ]
    .into_iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, label)| label.to_string())
    .collect()
}

fn weaknesses(scores: &ComponentScores, config: &ScoringConfig) -> Vec<String> {
    let t = &config.thresholds;
    [
        (scores.keyword_match < t.keyword_match.weakness_below, "Lacks important keywords"),
        (scores.format_compliance < t.format_compliance.weakness_below, "Missing essential sections"),
        (scores.content_quality < t.content_quality.weakness_below, "Few quantifiable achievements"),
        (scores.readability < t.readability.weakness_below, "Could improve readability"),
    ]
    .into_iter()
    .filter(|(hit, _)| *hit)
    .map(|(_, label)| label.to_string())
    .collect()
}
