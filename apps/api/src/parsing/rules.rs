/// Substrings that mark a line as the start of an education entry.
pub const DEGREE_MARKERS: &[&str] = &[
    "Bachelor",
    "Master",
    "PhD",
    "B.S.",
    "M.S.",
    "B.A.",
    "M.A.",
    "Associate",
];

/// Glyphs that turn a line into a bullet when they lead it.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '*'];

/// Inclusive character-count bounds for a skill token.
pub const MIN_SKILL_LEN: usize = 2;
pub const MAX_SKILL_LEN: usize = 49;

/// Vocabulary the record builder runs with. `Default` yields the constants above.
#[derive(Debug, Clone)]
pub struct ParseRules {
    pub degree_markers: Vec<&'static str>,
    pub bullet_glyphs: Vec<char>,
    pub min_skill_len: usize,
    pub max_skill_len: usize,
}

impl Default for ParseRules {
    fn default() -> Self {
        Self {
            degree_markers: DEGREE_MARKERS.to_vec(),
            bullet_glyphs: BULLET_GLYPHS.to_vec(),
            min_skill_len: MIN_SKILL_LEN,
            max_skill_len: MAX_SKILL_LEN,
        }
    }
}

impl ParseRules {
    pub fn is_degree_line(&self, line: &str) -> bool {
        self.degree_markers
            .iter()
            .any(|marker| contains_ignore_ascii_case(line, marker))
    }

    /// Returns the line's text with its leading bullet glyph and following whitespace
    /// removed, or `None` if the line does not start with a glyph.
    pub fn strip_bullet<'a>(&self, line: &'a str) -> Option<&'a str> {
        let first = line.chars().next()?;
        if !self.bullet_glyphs.contains(&first) {
            return None;
        }
        Some(line[first.len_utf8()..].trim_start())
    }

    pub fn skill_len_ok(&self, token: &str) -> bool {
        let len = token.chars().count();
        len >= self.min_skill_len && len <= self.max_skill_len
    }
}

/// ASCII case-insensitive substring test. Byte offsets are preserved, unlike `to_lowercase`.
pub fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle, 0).is_some()
}

/// Byte offset of the first ASCII case-insensitive occurrence of `needle` at or after `from`.
pub fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() {
        return Some(from.min(hay.len()));
    }
    if from >= hay.len() || pat.len() > hay.len() - from {
        return None;
    }
    (from..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Whether `text[at..]` starts with `needle`, ignoring ASCII case.
pub fn starts_with_ignore_ascii_case(text: &str, at: usize, needle: &str) -> bool {
    let hay = text.as_bytes();
    let pat = needle.as_bytes();
    at <= hay.len() && hay.len() - at >= pat.len() && hay[at..at + pat.len()].eq_ignore_ascii_case(pat)
}

/// Splits text into blocks separated by one or more blank lines. Each block is returned as
/// its trimmed, non-empty lines; blocks with no such lines are skipped.
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for raw in text.split('\n') {
        // Only a literal "\n\n" ends a block; a whitespace-only line does not.
        if raw.is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            continue;
        }
        let line = raw.trim();
        if !line.is_empty() {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// Trimmed, non-empty lines of a region.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}
