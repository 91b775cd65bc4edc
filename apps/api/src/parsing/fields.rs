//! Contact field extractors. Each one scans the whole document and returns the first match,
//! or an empty string. Contact details usually sit in the header but may appear anywhere.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}").unwrap()
});

static LINKEDIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:linkedin\.com/in/)[A-Za-z0-9_-]+").unwrap());

static GITHUB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i:github\.com/)[A-Za-z0-9_-]+").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactFields {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

pub fn extract_contact_fields(raw_text: &str) -> ContactFields {
    ContactFields {
        email: extract_email(raw_text),
        phone: extract_phone(raw_text),
        linkedin: extract_linkedin(raw_text),
        github: extract_github(raw_text),
    }
}

pub fn extract_email(text: &str) -> String {
    first_match(&EMAIL_RE, text)
}

/// Optional country code, then a 3-3-4 digit grouping. Separators may be a space, dot or
/// hyphen; the area code may be parenthesised.
pub fn extract_phone(text: &str) -> String {
    first_match(&PHONE_RE, text)
}

pub fn extract_linkedin(text: &str) -> String {
    first_match(&LINKEDIN_RE, text)
}

pub fn extract_github(text: &str) -> String {
    first_match(&GITHUB_RE, text)
}

pub fn has_email(text: &str) -> bool {
    EMAIL_RE.is_match(text)
}

pub fn has_phone(text: &str) -> bool {
    PHONE_RE.is_match(text)
}

fn first_match(re: &Regex, text: &str) -> String {
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
