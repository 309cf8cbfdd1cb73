//! Text Matcher: case-insensitive substring matching of skills against free text.
//!
//! Matching is plain containment on lowercased strings: no tokenization, no stemming,
//! no word boundaries. "Java" therefore matches inside "JavaScript".

/// Returns the candidates whose lowercase form occurs in `haystack_lower`,
/// in candidate order, keeping the candidate's display case.
///
/// `haystack_lower` must already be lowercased.
pub fn find_skills<'a>(haystack_lower: &str, candidates: &[&'a str]) -> Vec<&'a str> {
    candidates
        .iter()
        .copied()
        .filter(|skill| haystack_lower.contains(&skill.to_lowercase()))
        .collect()
}

/// Returns the lowercase patterns found in `haystack_lower`, title-cased for display.
pub fn find_patterns(haystack_lower: &str, patterns: &[&str]) -> Vec<String> {
    patterns
        .iter()
        .filter(|pattern| haystack_lower.contains(*pattern))
        .map(|pattern| title_case(pattern))
        .collect()
}

/// Uppercases each letter that starts a word and lowercases the rest, where any
/// non-letter ends a word: "node.js" → "Node.Js", "rest api" → "Rest Api".
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

pub fn contains_ignore_case(skills: &[String], skill: &str) -> bool {
    let needle = skill.to_lowercase();
    skills.iter().any(|s| s.to_lowercase() == needle)
}

/// Appends `skill` unless an equal skill (ignoring case) is already present.
pub fn push_unique(skills: &mut Vec<String>, skill: impl Into<String>) {
    let skill = skill.into();
    if !contains_ignore_case(skills, &skill) {
        skills.push(skill);
    }
}
