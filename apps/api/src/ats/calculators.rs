//! The four component scores. Each is a pure function of the text (and a vocabulary where it
//! needs one) returning an integer in [0, 100]. Matching is case-insensitive.

use std::sync::LazyLock;

use regex::Regex;

use crate::parsing::fields::{has_email, has_phone};
use crate::parsing::rules::BULLET_GLYPHS;

static METRIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[0-9]+%|[0-9]+\+|increased by [0-9]+|reduced by [0-9]+").unwrap()
});

const MISSING_SECTION_PENALTY: i32 = 15;
const MISSING_EMAIL_PENALTY: i32 = 10;
const MISSING_PHONE_PENALTY: i32 = 5;
const MIN_WORDS: usize = 300;
const TOO_SHORT_PENALTY: i32 = 15;
const MAX_WORDS: usize = 1500;
const TOO_LONG_PENALTY: i32 = 10;

const CONTENT_BASE: u32 = 70;
const MANY_METRICS: usize = 3;
const MANY_METRICS_BONUS: u32 = 20;
const SOME_METRICS_BONUS: u32 = 10;
const VERB_BONUS: u32 = 2;
const MAX_VERB_BONUS: u32 = 10;

const NEUTRAL_READABILITY: u32 = 50;
const LONG_SENTENCE_WORDS: f64 = 25.0;
const LONG_SENTENCE_PENALTY: i32 = 20;
const SHORT_SENTENCE_WORDS: f64 = 10.0;
const SHORT_SENTENCE_PENALTY: i32 = 10;
const MIN_BULLETS: usize = 5;
const BULLET_BONUS: i32 = 10;

/// Share of `vocabulary` terms present in the text, as a percentage. Repeats count once.
pub fn keyword_match_score(text: &str, vocabulary: &[&str]) -> u32 {
    if vocabulary.is_empty() {
        return 0;
    }
    let lower = text.to_lowercase();
    let present = count_present(&lower, vocabulary);
    ((present as f64 / vocabulary.len() as f64) * 100.0).round() as u32
}

/// Structural checks: required sections, contact details and overall length.
pub fn format_compliance_score(text: &str, required_sections: &[&str]) -> u32 {
    let lower = text.to_lowercase();
    let mut score: i32 = 100;

    let missing_sections = required_sections.len() - count_present(&lower, required_sections);
    score -= MISSING_SECTION_PENALTY * missing_sections as i32;

    if !has_email(text) {
        score -= MISSING_EMAIL_PENALTY;
    }
    if !has_phone(text) {
        score -= MISSING_PHONE_PENALTY;
    }

    let words = text.split_whitespace().count();
    if words < MIN_WORDS {
        score -= TOO_SHORT_PENALTY;
    } else if words > MAX_WORDS {
        score -= TOO_LONG_PENALTY;
    }

    score.max(0) as u32
}

/// Rewards quantified achievements and action verbs. Never drops below the base.
pub fn content_quality_score(text: &str, action_verbs: &[&str]) -> u32 {
    let lower = text.to_lowercase();
    let mut score = CONTENT_BASE;

    let metrics = METRIC_RE.find_iter(&lower).count();
    if metrics > MANY_METRICS {
        score += MANY_METRICS_BONUS;
    } else if metrics > 0 {
        score += SOME_METRICS_BONUS;
    }

    let verbs = count_present(&lower, action_verbs) as u32;
    score += (verbs * VERB_BONUS).min(MAX_VERB_BONUS);

    score.min(100)
}

/// Sentence length and bullet usage.
pub fn readability_score(text: &str) -> u32 {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    if sentences == 0 {
        return NEUTRAL_READABILITY;
    }

    let words = text.split_whitespace().count();
    let avg_words = words as f64 / sentences as f64;

    let mut score: i32 = 100;
    if avg_words > LONG_SENTENCE_WORDS {
        score -= LONG_SENTENCE_PENALTY;
    } else if avg_words < SHORT_SENTENCE_WORDS {
        score -= SHORT_SENTENCE_PENALTY;
    }

    let bullets = text.chars().filter(|c| BULLET_GLYPHS.contains(c)).count();
    if bullets > MIN_BULLETS {
        score = (score + BULLET_BONUS).min(100);
    }

    score.max(0) as u32
}

fn count_present(lower_text: &str, terms: &[&str]) -> usize {
    terms
        .iter()
        .filter(|term| lower_text.contains(&term.to_lowercase()))
        .count()
}
