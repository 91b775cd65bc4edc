//! Record builder: turns segmented regions plus contact fields into a `ResumeRecord`.
//!
//! Education and experience extraction are small explicit state machines driven one line at a
//! time. Every function here is total; malformed input degrades to empty fields.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeRecord, SkillSet,
};
use crate::parsing::fields::extract_contact_fields;
use crate::parsing::rules::{content_lines, split_blocks, ParseRules};
use crate::parsing::sections::{normalize_line_endings, segment_sections, SectionName};

/// Name used when the text has no non-empty line.
pub const UNKNOWN_NAME: &str = "Unknown";

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{4}").unwrap());

static DATE_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[0-9]{4}|present|current").unwrap());

pub fn parse_resume(raw_text: &str) -> ResumeRecord {
    parse_resume_with(raw_text, &ParseRules::default())
}

pub fn parse_resume_with(raw_text: &str, rules: &ParseRules) -> ResumeRecord {
    let text = normalize_line_endings(raw_text);
    let sections = segment_sections(&text);
    let contact = extract_contact_fields(&text);

    let personal_info = PersonalInfo {
        name: content_lines(&text)
            .first()
            .copied()
            .unwrap_or(UNKNOWN_NAME)
            .to_string(),
        email: contact.email,
        phone: contact.phone,
        linkedin: contact.linkedin,
        github: contact.github,
        summary: sections.get(SectionName::Summary).trim().to_string(),
    };

    let record = ResumeRecord {
        personal_info,
        education: build_education(sections.get(SectionName::Education), rules),
        experience: build_experience(sections.get(SectionName::Experience), rules),
        skills: build_skills(sections.get(SectionName::Skills), rules),
        projects: build_projects(sections.get(SectionName::Projects), rules),
        raw_text: raw_text.to_string(),
    };

    debug!(
        "Parsed resume: education={}, experience={}, skills={}, projects={}",
        record.education.len(),
        record.experience.len(),
        record.skills.len(),
        record.projects.len()
    );

    record
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

enum EducationState {
    NoEntry,
    /// A degree line opened an entry; the next line names the school.
    AwaitingSchool(EducationEntry),
    /// School known; lines with a 4-digit run set the year.
    Filling(EducationEntry),
}

impl EducationState {
    fn step(self, line: &str, rules: &ParseRules, done: &mut Vec<EducationEntry>) -> Self {
        if rules.is_degree_line(line) {
            self.close(done);
            return EducationState::AwaitingSchool(EducationEntry {
                degree: line.to_string(),
                ..Default::default()
            });
        }

        match self {
            EducationState::NoEntry => EducationState::NoEntry,
            EducationState::AwaitingSchool(mut entry) => {
                entry.school = line.to_string();
                EducationState::Filling(entry)
            }
            EducationState::Filling(mut entry) => {
                if let Some(year) = YEAR_RE.find(line) {
                    entry.year = year.as_str().to_string();
                }
                EducationState::Filling(entry)
            }
        }
    }

    fn close(self, done: &mut Vec<EducationEntry>) {
        match self {
            EducationState::NoEntry => {}
            EducationState::AwaitingSchool(entry) | EducationState::Filling(entry) => {
                done.push(entry)
            }
        }
    }
}

fn build_education(region: &str, rules: &ParseRules) -> Vec<EducationEntry> {
    let mut entries = Vec::new();
    let mut state = EducationState::NoEntry;
    for line in content_lines(region) {
        state = state.step(line, rules, &mut entries);
    }
    state.close(&mut entries);
    entries
}

// ────────────────────────────────────────────────────────────────────────────
// Experience
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExperienceState {
    Title,
    /// The line right after the title: company unless it looks like a date.
    SecondLine,
    Body,
}

fn build_experience(region: &str, rules: &ParseRules) -> Vec<ExperienceEntry> {
    split_blocks(region)
        .iter()
        .map(|block| build_experience_entry(block, rules))
        .filter(|entry| !entry.title.is_empty() && !entry.company.is_empty())
        .collect()
}

fn build_experience_entry(lines: &[&str], rules: &ParseRules) -> ExperienceEntry {
    let mut entry = ExperienceEntry::default();
    let mut state = ExperienceState::Title;

    for &line in lines {
        state = match state {
            ExperienceState::Title => {
                entry.title = line.to_string();
                ExperienceState::SecondLine
            }
            ExperienceState::SecondLine => {
                if !assign_duration(&mut entry, line) {
                    entry.company = line.to_string();
                }
                ExperienceState::Body
            }
            ExperienceState::Body => {
                if !assign_duration(&mut entry, line) {
                    let bullet = rules.strip_bullet(line).unwrap_or(line);
                    entry.bullets.push(bullet.to_string());
                }
                ExperienceState::Body
            }
        };
    }

    entry.description = entry.bullets.join(" ");
    entry
}

/// Sets `duration` from the first date-like line. Returns whether the line was consumed.
fn assign_duration(entry: &mut ExperienceEntry, line: &str) -> bool {
    if entry.duration.is_empty() && DATE_LIKE_RE.is_match(line) {
        entry.duration = line.to_string();
        return true;
    }
    false
}

// ────────────────────────────────────────────────────────────────────────────
// Skills and projects
// ────────────────────────────────────────────────────────────────────────────

fn build_skills(region: &str, rules: &ParseRules) -> SkillSet {
    let mut skills = SkillSet::new();
    for token in region.split(|c: char| matches!(c, '\n' | ',' | '|' | '•')) {
        let token = strip_list_marker(token.trim(), rules);
        if rules.skill_len_ok(token) {
            skills.insert(token);
        }
    }
    skills
}

/// Drops a leading "- " or "* " list marker. A glyph glued to the word ("*nix") stays.
fn strip_list_marker<'a>(token: &'a str, rules: &ParseRules) -> &'a str {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), Some(next)) if rules.bullet_glyphs.contains(&glyph) && next.is_whitespace() => {
            token[glyph.len_utf8()..].trim()
        }
        _ => token,
    }
}

fn build_projects(region: &str, rules: &ParseRules) -> Vec<ProjectEntry> {
    split_blocks(region)
        .iter()
        .filter_map(|block| {
            let (name, rest) = block.split_first()?;
            let mut project = ProjectEntry {
                name: name.to_string(),
                ..Default::default()
            };
            let mut description = Vec::new();
            for &line in rest {
                match rules.strip_bullet(line) {
                    Some(highlight) => project.highlights.push(highlight.to_string()),
                    None => description.push(line),
                }
            }
            project.description = description.join(" ");
            Some(project)
        })
        .collect()
}
