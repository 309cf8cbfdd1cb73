//! Keyword skill analysis: the deterministic analyzer behind every request.
//!
//! Algorithm:
//! 1. required = patterns found in the JD (title-cased), then taxonomy skills found in the JD
//! 2. resume   = taxonomy skills found in the résumé, then patterns not already present
//! 3. matched  = required skills equal to, or contained in, some résumé skill
//! 4. missing  = required − matched
//! 5. sub-scores from the uncapped counts, then display caps

use crate::analysis::matcher::{find_patterns, find_skills, push_unique};
use crate::analysis::models::{difference, ATSFactors, AnalysisResult};
use crate::analysis::taxonomy::{all_skills, SKILL_PATTERNS};

const CHARS_PER_FORMAT_POINT: usize = 600;

/// Runs the keyword analysis. Total over all inputs, including empty strings.
pub fn analyze_keywords(resume_text: &str, job_description: &str) -> AnalysisResult {
    analyze_keywords_uncapped(resume_text, job_description).capped()
}

/// Steps 1 to 8 on the full lists. Sub-scores are computed here, before any cap.
pub(crate) fn analyze_keywords_uncapped(resume_text: &str, job_description: &str) -> AnalysisResult {
    let resume_lower = resume_text.to_lowercase();
    let job_lower = job_description.to_lowercase();
    let taxonomy = all_skills();

    let mut required_skills = Vec::new();
    for skill in find_patterns(&job_lower, SKILL_PATTERNS) {
        push_unique(&mut required_skills, skill);
    }
    for skill in find_skills(&job_lower, &taxonomy) {
        push_unique(&mut required_skills, skill);
    }

    let mut resume_skills = Vec::new();
    for skill in find_skills(&resume_lower, &taxonomy) {
        push_unique(&mut resume_skills, skill);
    }
    for skill in find_patterns(&resume_lower, SKILL_PATTERNS) {
        push_unique(&mut resume_skills, skill);
    }

    let matched_skills = match_required(&required_skills, &resume_skills);
    let missing_skills = difference(&required_skills, &matched_skills);

    let keyword_density = keyword_density(
        matched_skills.len(),
        required_skills.len(),
        missing_skills.len(),
    );

    AnalysisResult {
        resume_skills,
        required_skills,
        matched_skills,
        missing_skills,
        ats_factors: ATSFactors {
            keyword_density,
            format_score: format_score(resume_text),
            experience_relevance: experience_relevance(keyword_density),
        },
    }
}

/// A required skill is matched when a résumé skill equals it or contains it,
/// ignoring case ("Git" is covered by "Git", "Sql" by "MySQL").
pub(crate) fn match_required(required: &[String], resume: &[String]) -> Vec<String> {
    let resume_lower: Vec<String> = resume.iter().map(|s| s.to_lowercase()).collect();
    required
        .iter()
        .filter(|skill| {
            let needle = skill.to_lowercase();
            resume_lower.iter().any(|r| *r == needle || r.contains(&needle))
        })
        .cloned()
        .collect()
}

/// clamp(50, 90, round(ratio × 85) + 15), then a step penalty for many missing skills.
/// Halves round to even.
pub fn keyword_density(matched: usize, required: usize, missing: usize) -> u32 {
    let ratio = matched as f64 / required.max(1) as f64;
    let base = ((ratio * 85.0).round_ties_even() as u32 + 15).clamp(50, 90);

    if missing > 5 {
        base.saturating_sub(10).max(55)
    } else if missing > 3 {
        base.saturating_sub(5).max(60)
    } else {
        base
    }
}

/// 80 plus one point per 600 characters of résumé text, capped at 92.
pub fn format_score(resume_text: &str) -> u32 {
    let points = resume_text.chars().count() / CHARS_PER_FORMAT_POINT;
    (80 + points.min(12)) as u32
}

pub fn experience_relevance(keyword_density: u32) -> u32 {
    (keyword_density + 10).clamp(65, 90)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::matcher::contains_ignore_case;

    const FRESHER_JD: &str = "Job Title: Full Stack Developer (Fresher)\n\
        Required Skills: HTML, CSS, JavaScript, React, Node.js, Python, REST API, MySQL, \
        MongoDB, Git, GitHub, Flask, Django";
    const FRESHER_RESUME: &str = "I know HTML CSS JavaScript Python Git";

    fn assert_contains_all(haystack: &[String], needles: &[&str]) {
        for needle in needles {
            assert!(
                haystack.iter().any(|s| s == needle),
                "expected {needle} in {haystack:?}"
            );
        }
    }

    #[test]
    fn test_fresher_scenario_matched_and_missing() {
        let result = analyze_keywords(FRESHER_RESUME, FRESHER_JD);
        assert_contains_all(
            &result.matched_skills,
            &["Html", "Css", "Javascript", "Python", "Git"],
        );
        assert_contains_all(
            &result.missing_skills,
            &["React", "Node.Js", "Rest Api", "Mysql", "Mongodb", "Github", "Flask", "Django"],
        );
    }

    #[test]
    fn test_fresher_scenario_factors() {
        // 6 of 16 required matched, 10 missing → density floors at 55.
        let result = analyze_keywords(FRESHER_RESUME, FRESHER_JD);
        assert_eq!(result.ats_factors.keyword_density, 55);
        assert_eq!(result.ats_factors.format_score, 80);
        assert_eq!(result.ats_factors.experience_relevance, 65);
    }

    #[test]
    fn test_java_false_positive_is_kept() {
        let result = analyze_keywords("JavaScript developer", "Java backend role");
        assert!(contains_ignore_case(&result.resume_skills, "Java"));
        assert!(contains_ignore_case(&result.matched_skills, "Java"));
    }

    #[test]
    fn test_sql_requirement_matched_by_mysql_resume() {
        let result = analyze_keywords("Worked with MySQL daily", "Strong SQL skills");
        assert!(contains_ignore_case(&result.matched_skills, "Sql"));
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_empty_inputs_are_total() {
        let result = analyze_keywords("", "");
        assert!(result.required_skills.is_empty());
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.ats_factors.keyword_density, 50);
        assert_eq!(result.ats_factors.format_score, 80);
        assert_eq!(result.ats_factors.experience_relevance, 65);
    }

    #[test]
    fn test_resume_patterns_do_not_duplicate_taxonomy_hits() {
        let result = analyze_keywords("html and css", "");
        assert_eq!(result.resume_skills, vec!["HTML".to_string(), "CSS".to_string()]);
    }

    #[test]
    fn test_perfect_match_caps_density_at_90() {
        let result = analyze_keywords("python git docker", "python, git");
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.ats_factors.keyword_density, 90);
        assert_eq!(result.ats_factors.experience_relevance, 90);
    }

    #[test]
    fn test_keyword_density_step_penalties() {
        // 4/8 → 42.5 rounds to 42 → 57, four missing → max(60, 52)
        assert_eq!(keyword_density(4, 8, 4), 60);
        // six missing → max(55, base − 10)
        assert_eq!(keyword_density(0, 6, 6), 55);
        assert_eq!(keyword_density(10, 16, 6), 58);
        // three missing → no penalty
        assert_eq!(keyword_density(3, 6, 3), 57);
    }

    #[test]
    fn test_keyword_density_zero_required_does_not_divide_by_zero() {
        assert_eq!(keyword_density(0, 0, 0), 50);
    }

    #[test]
    fn test_format_score_grows_with_length_and_caps() {
        assert_eq!(format_score(""), 80);
        assert_eq!(format_score(&"a".repeat(599)), 80);
        assert_eq!(format_score(&"a".repeat(6000)), 90);
        assert_eq!(format_score(&"a".repeat(20_000)), 92);
    }

    #[test]
    fn test_format_score_counts_characters_not_bytes() {
        assert_eq!(format_score(&"é".repeat(600)), 81);
    }

    #[test]
    fn test_lists_are_capped_for_display() {
        let jd = all_skills().join(", ");
        let result = analyze_keywords("", &jd);
        assert_eq!(result.required_skills.len(), 12);
        assert_eq!(result.missing_skills.len(), 8);
    }
}
