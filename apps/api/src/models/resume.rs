use serde::{Deserialize, Serialize};

/// Identity and contact details pulled from the document header.
/// Unmatched fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub duration: String,
    /// Always `bullets.join(" ")` for parsed entries.
    pub description: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub highlights: Vec<String>,
}

/// Ordered, duplicate-free list of skills. Comparison is exact (case-preserving).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `skill` unless an identical entry is already present.
    /// Returns whether the skill was added.
    pub fn insert(&mut self, skill: &str) -> bool {
        if self.contains(skill) {
            return false;
        }
        self.0.push(skill.to_string());
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.0.iter().any(|s| s == skill)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<'a> FromIterator<&'a str> for SkillSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.insert(skill);
        }
        set
    }
}

/// A parsed (or manually entered) resume. Produced once per parse call and never mutated
/// by downstream components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: SkillSet,
    pub projects: Vec<ProjectEntry>,
    /// Source text, kept verbatim so the record can be re-scored.
    #[serde(rename = "rawText", alias = "raw_text")]
    pub raw_text: String,
}

impl ResumeRecord {
    /// Text handed to the scorer when a structured record is scored instead of raw prose.
    pub fn to_scoring_text(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_dedups_exact_matches_only() {
        let mut skills = SkillSet::new();
        assert!(skills.insert("Rust"));
        assert!(!skills.insert("Rust"));
        assert!(skills.insert("rust"));
        assert_eq!(skills.len(), 2);
    }

    #[test]
    fn test_skill_set_preserves_first_seen_order() {
        let skills: SkillSet = ["Go", "Python", "Go", "Rust"].into_iter().collect();
        assert_eq!(
            serde_json::to_value(&skills).unwrap(),
            serde_json::json!(["Go", "Python", "Rust"])
        );
    }

    #[test]
    fn test_skill_set_serializes_as_plain_array() {
        let skills: SkillSet = ["Python", "Rust"].into_iter().collect();
        let json = serde_json::to_string(&skills).unwrap();
        assert_eq!(json, r#"["Python","Rust"]"#);
    }

    #[test]
    fn test_record_uses_raw_text_wire_name() {
        let record = ResumeRecord {
            raw_text: "hello".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["rawText"], "hello");
        assert!(value.get("raw_text").is_none());
    }

    #[test]
    fn test_partial_manual_record_deserializes() {
        let json = r#"{
            "personal_info": {"name": "Ada Lovelace", "email": "ada@example.com"},
            "skills": ["Mathematics", "Analytical Engines"]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.personal_info.name, "Ada Lovelace");
        assert_eq!(record.personal_info.phone, "");
        assert!(record.education.is_empty());
        assert_eq!(record.skills.len(), 2);
        assert_eq!(record.raw_text, "");
    }

    #[test]
    fn test_scoring_text_contains_record_fields() {
        let mut record = ResumeRecord::default();
        record.personal_info.name = "Grace Hopper".to_string();
        record.experience.push(ExperienceEntry {
            title: "Rear Admiral".to_string(),
            company: "US Navy".to_string(),
            ..Default::default()
        });
        let text = record.to_scoring_text();
        assert!(text.contains("\"personal_info\""));
        assert!(text.contains("Grace Hopper"));
        assert!(text.contains("\"experience\""));
    }
}
