//! Section segmentation.
//!
//! A section starts after the first occurrence of one of its heading keywords (ASCII
//! case-insensitive, matched anywhere in the text) followed by at least one `:` or whitespace
//! character. It ends at the earliest position where one of the section's boundary predicates
//! holds, or at end of text for sections that allow it. Headings that appear in prose produce
//! false sections; that is accepted.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::parsing::rules::{find_ignore_ascii_case, starts_with_ignore_ascii_case};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Summary,
    Education,
    Experience,
    Skills,
    Projects,
}

impl SectionName {
    pub const ALL: [SectionName; 5] = [
        SectionName::Summary,
        SectionName::Education,
        SectionName::Experience,
        SectionName::Skills,
        SectionName::Projects,
    ];

    fn rule(self) -> &'static SectionRule {
        match self {
            SectionName::Summary => &SUMMARY,
            SectionName::Education => &EDUCATION,
            SectionName::Experience => &EXPERIENCE,
            SectionName::Skills => &SKILLS,
            SectionName::Projects => &PROJECTS,
        }
    }
}

/// Named predicates evaluated at a byte offset of the text.
#[derive(Debug, Clone, Copy)]
enum Boundary {
    /// `\n\n`
    BlankLine,
    /// `\n\n` followed by an uppercase letter.
    BlankLineThenCapital,
    /// `\n` followed by the keyword.
    LineStartingWith(&'static str),
    /// The keyword anywhere, even mid-line.
    Keyword(&'static str),
}

impl Boundary {
    fn holds(self, text: &str, at: usize) -> bool {
        match self {
            Boundary::BlankLine => text[at..].starts_with("\n\n"),
            Boundary::BlankLineThenCapital => {
                text[at..].starts_with("\n\n")
                    && text[at + 2..].chars().next().is_some_and(char::is_uppercase)
            }
            Boundary::LineStartingWith(keyword) => {
                text[at..].starts_with('\n')
                    && starts_with_ignore_ascii_case(text, at + 1, keyword)
            }
            Boundary::Keyword(keyword) => starts_with_ignore_ascii_case(text, at, keyword),
        }
    }
}

struct SectionRule {
    headings: &'static [&'static str],
    boundaries: &'static [Boundary],
    /// Whether a section with no boundary after it extends to end of text.
    runs_to_end: bool,
}

static SUMMARY: SectionRule = SectionRule {
    headings: &["summary", "objective", "profile", "about"],
    boundaries: &[
        Boundary::BlankLine,
        Boundary::LineStartingWith("education"),
        Boundary::LineStartingWith("experience"),
    ],
    runs_to_end: false,
};

static EDUCATION: SectionRule = SectionRule {
    headings: &["education"],
    boundaries: &[
        Boundary::BlankLineThenCapital,
        Boundary::LineStartingWith("experience"),
        Boundary::LineStartingWith("skills"),
    ],
    runs_to_end: true,
};

static EXPERIENCE: SectionRule = SectionRule {
    headings: &["work experience", "experience", "employment"],
    boundaries: &[
        Boundary::BlankLineThenCapital,
        Boundary::Keyword("education"),
        Boundary::Keyword("skills"),
    ],
    runs_to_end: true,
};

static SKILLS: SectionRule = SectionRule {
    headings: &["skills"],
    boundaries: &[Boundary::BlankLineThenCapital],
    runs_to_end: true,
};

static PROJECTS: SectionRule = SectionRule {
    headings: &["projects"],
    boundaries: &[Boundary::BlankLineThenCapital],
    runs_to_end: true,
};

/// Region text per section. Sections whose heading was not found map to `""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sections(BTreeMap<SectionName, String>);

impl Sections {
    pub fn get(&self, name: SectionName) -> &str {
        self.0.get(&name).map(String::as_str).unwrap_or("")
    }
}

/// Splits raw text into labeled regions. Total over all inputs.
pub fn segment_sections(raw_text: &str) -> Sections {
    let text = normalize_line_endings(raw_text);
    let regions = SectionName::ALL
        .into_iter()
        .map(|name| {
            let region = locate(&text, name.rule()).unwrap_or("");
            (name, region.to_string())
        })
        .collect();
    Sections(regions)
}

pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

fn locate<'a>(text: &'a str, rule: &SectionRule) -> Option<&'a str> {
    let mut search_from = 0;
    loop {
        let (start, heading) = rule
            .headings
            .iter()
            .filter_map(|h| find_ignore_ascii_case(text, h, search_from).map(|at| (at, *h)))
            .min_by_key(|(at, _)| *at)?;

        let after = start + heading.len();
        let body_start = skip_separators(text, after);
        if body_start == after {
            search_from = start + 1;
            continue;
        }

        // A boundary missed from here cannot exist past any later heading either.
        return match find_boundary(text, body_start, rule.boundaries) {
            Some(end) => Some(&text[body_start..end]),
            None if rule.runs_to_end => Some(&text[body_start..]),
            None => None,
        };
    }
}

fn skip_separators(text: &str, from: usize) -> usize {
    let skipped: usize = text[from..]
        .chars()
        .take_while(|c| *c == ':' || c.is_whitespace())
        .map(char::len_utf8)
        .sum();
    from + skipped
}

fn find_boundary(text: &str, from: usize, boundaries: &[Boundary]) -> Option<usize> {
    text[from..]
        .char_indices()
        .map(|(offset, _)| from + offset)
        .find(|&at| boundaries.iter().any(|b| b.holds(text, at)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = "John Doe\njohn@x.com\n\nEducation\nBachelor of Science\nMIT\n2020\n\nExperience\nEngineer\nAcme Corp\n2020-Present\n• Built things\n\nSkills\nPython, Go, Rust";

    #[test]
    fn test_fixture_sections() {
        let sections = segment_sections(FIXTURE);
        assert_eq!(
            sections.get(SectionName::Education),
            "Bachelor of Science\nMIT\n2020"
        );
        assert_eq!(
            sections.get(SectionName::Experience),
            "Engineer\nAcme Corp\n2020-Present\n• Built things"
        );
        assert_eq!(sections.get(SectionName::Skills), "Python, Go, Rust");
        assert_eq!(sections.get(SectionName::Projects), "");
        assert_eq!(sections.get(SectionName::Summary), "");
    }

    #[test]
    fn test_empty_input_has_all_sections_empty() {
        let sections = segment_sections("");
        for name in SectionName::ALL {
            assert_eq!(sections.get(name), "");
        }
    }

    #[test]
    fn test_heading_match_is_case_insensitive() {
        let sections = segment_sections("SKILLS: Rust | Go");
        assert_eq!(sections.get(SectionName::Skills), "Rust | Go");
    }

    #[test]
    fn test_heading_without_separator_is_skipped() {
        let sections = segment_sections("Skillset overview\nSkills: Rust");
        assert_eq!(sections.get(SectionName::Skills), "Rust");
    }

    #[test]
    fn test_summary_stops_at_blank_line() {
        let text = "Jane\nSummary: Backend engineer with ten years.\nLoves Rust.\n\nEducation\nB.S.";
        let sections = segment_sections(text);
        assert_eq!(
            sections.get(SectionName::Summary),
            "Backend engineer with ten years.\nLoves Rust."
        );
    }

    #[test]
    fn test_summary_stops_at_experience_line() {
        let text = "Objective: find a role\nExperience\nDev";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Summary), "find a role");
    }

    #[test]
    fn test_summary_needs_a_boundary() {
        let sections = segment_sections("Profile: trailing text with no end");
        assert_eq!(sections.get(SectionName::Summary), "");
    }

    #[test]
    fn test_work_experience_heading() {
        let text = "Work Experience:\nSRE\nGlobex\n\nSkills\nLinux";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Experience), "SRE\nGlobex");
    }

    #[test]
    fn test_employment_heading() {
        let sections = segment_sections("Employment\nCook\nDiner");
        assert_eq!(sections.get(SectionName::Experience), "Cook\nDiner");
    }

    #[test]
    fn test_experience_stops_at_inline_keyword() {
        let text = "Experience\nTrainer\nGym\nTaught skills to members";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Experience), "Trainer\nGym\nTaught ");
    }

    #[test]
    fn test_blank_line_before_lowercase_does_not_end_section() {
        let text = "Projects\nParser\n\n- fast\n\nNext Heading";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Projects), "Parser\n\n- fast");
    }

    #[test]
    fn test_prose_keyword_captures_wrong_region() {
        // Known limitation: the first "experience" wins even inside a sentence.
        let text = "Summary: I have experience in Go.\n\nExperience\nDev\nCo";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Experience), "in Go.");
    }

    #[test]
    fn test_crlf_is_normalized() {
        let text = "Skills\r\nRust\r\n\r\nProjects\r\nCLI";
        let sections = segment_sections(text);
        assert_eq!(sections.get(SectionName::Skills), "Rust");
        assert_eq!(sections.get(SectionName::Projects), "CLI");
    }

    #[test]
    fn test_degenerate_inputs_do_not_panic() {
        for text in [
            "education",
            "Education:",
            "   \n\t  ",
            "!!!???...",
            "教育 Education: 東京大学\n\nÉcole",
            "skills\u{00A0}日本語",
            "Experience\n\n",
        ] {
            let _ = segment_sections(text);
        }
    }

    #[test]
    fn test_heading_at_end_of_text_is_empty() {
        let sections = segment_sections("Skills:   ");
        assert_eq!(sections.get(SectionName::Skills), "");
    }
}
