//! Recommendation Generator: a prioritized table of guarded templates.
//!
//! Templates are evaluated in order; each one whose guard holds contributes one
//! recommendation until `MAX_RECOMMENDATIONS` are collected. Two templates are
//! unguarded, so at least two recommendations are always produced.

use crate::analysis::models::{AnalysisResult, Recommendation};

pub const MAX_RECOMMENDATIONS: usize = 4;

type Guard = fn(&AnalysisResult) -> bool;
type Render = fn(&AnalysisResult) -> Recommendation;

struct Template {
    guard: Guard,
    render: Render,
}

// A renderer may only index what its guard has proven present.
static TEMPLATES: &[Template] = &[
    Template {
        guard: |r| !r.missing_skills.is_empty(),
        render: |r| Recommendation {
            title: format!("Add {} to Your Resume", r.missing_skills[0]),
            description: format!(
                "The job description asks for {}. If you have used it, list it in your skills \
                 section and mention a project where you applied it.",
                r.missing_skills[0]
            ),
        },
    },
    Template {
        guard: |r| r.missing_skills.len() >= 2,
        render: |r| Recommendation {
            title: format!("Highlight {} Experience", r.missing_skills[1]),
            description: format!(
                "{} is listed as a requirement. Describe any coursework, internship or personal \
                 project that involved it.",
                r.missing_skills[1]
            ),
        },
    },
    Template {
        guard: |r| r.missing_skills.len() >= 3,
        render: |r| Recommendation {
            title: format!("Consider Learning {}", r.missing_skills[2]),
            description: format!(
                "Building a small project with {} would close another gap with this role.",
                r.missing_skills[2]
            ),
        },
    },
    Template {
        guard: |r| r.ats_factors.keyword_density < 70,
        render: |_| Recommendation {
            title: "Improve Keyword Optimization".to_string(),
            description: "Mirror the exact terms used in the job description so applicant \
                          tracking systems can match your skills."
                .to_string(),
        },
    },
    Template {
        guard: |r| r.ats_factors.format_score < 85,
        render: |_| Recommendation {
            title: "Expand Your Resume Content".to_string(),
            description: "Add detail to your projects and experience with clear section \
                          headings such as Skills, Projects and Education."
                .to_string(),
        },
    },
    Template {
        guard: |r| !r.matched_skills.is_empty(),
        render: |r| Recommendation {
            title: format!("Showcase Your {} Skills", r.matched_skills[0]),
            description: format!(
                "{} matches this role. Place it near the top of your resume and back it with \
                 a concrete result.",
                r.matched_skills[0]
            ),
        },
    },
    Template {
        guard: |_| true,
        render: |_| Recommendation {
            title: "Quantify Your Achievements".to_string(),
            description: "Use numbers to show impact, for example response times improved, \
                          users served or features shipped."
                .to_string(),
        },
    },
    Template {
        guard: |_| true,
        render: |_| Recommendation {
            title: "Tailor Your Summary".to_string(),
            description: "Open with a short summary that names the role and the skills this \
                          job description emphasizes."
                .to_string(),
        },
    },
];

/// Renders up to four recommendations for `result`, highest priority first.
pub fn generate_recommendations(result: &AnalysisResult) -> Vec<Recommendation> {
    TEMPLATES
        .iter()
        .filter(|t| (t.guard)(result))
        .take(MAX_RECOMMENDATIONS)
        .map(|t| (t.render)(result))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::ATSFactors;

    fn result(matched: &[&str], missing: &[&str], keyword_density: u32, format_score: u32) -> AnalysisResult {
        let to_vec = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut required = to_vec(matched);
        required.extend(to_vec(missing));
        AnalysisResult {
            resume_skills: to_vec(matched),
            required_skills: required,
            matched_skills: to_vec(matched),
            missing_skills: to_vec(missing),
            ats_factors: ATSFactors {
                keyword_density,
                format_score,
                experience_relevance: 80,
            },
        }
    }

    #[test]
    fn test_many_gaps_fill_all_four_slots_in_priority_order() {
        let recs = generate_recommendations(&result(&["Git"], &["React", "Docker", "AWS"], 55, 80));
        assert_eq!(recs.len(), 4);
        assert!(recs[0].title.contains("React"));
        assert!(recs[1].title.contains("Docker"));
        assert!(recs[2].title.contains("AWS"));
        assert_eq!(recs[3].title, "Improve Keyword Optimization");
    }

    #[test]
    fn test_strong_result_gets_unconditional_templates() {
        let recs = generate_recommendations(&result(&["Python"], &[], 90, 90));
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Showcase Your Python Skills", "Quantify Your Achievements", "Tailor Your Summary"]
        );
    }

    #[test]
    fn test_short_resume_gets_expand_content_before_showcase() {
        let recs = generate_recommendations(&result(&["Python"], &[], 90, 80));
        let titles: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Expand Your Resume Content",
                "Showcase Your Python Skills",
                "Quantify Your Achievements",
                "Tailor Your Summary",
            ]
        );
    }

    #[test]
    fn test_nothing_matched_or_missing_yields_exactly_two() {
        let recs = generate_recommendations(&result(&[], &[], 90, 90));
        assert_eq!(recs.len(), 2);
    }

    #[test]
    fn test_single_missing_skill_does_not_index_past_guard() {
        let recs = generate_recommendations(&result(&[], &["Kubernetes"], 80, 90));
        assert!(recs[0].title.contains("Kubernetes"));
        assert_eq!(recs.len(), 3);
    }

    #[test]
    fn test_count_stays_between_two_and_four() {
        for missing in 0..5 {
            for kd in [50, 69, 70, 90] {
                for fs in [80, 84, 85, 92] {
                    let names: Vec<String> = (0..missing).map(|i| format!("S{i}")).collect();
                    let names: Vec<&str> = names.iter().map(String::as_str).collect();
                    let recs = generate_recommendations(&result(&["Git"], &names, kd, fs));
                    assert!((2..=MAX_RECOMMENDATIONS).contains(&recs.len()));
                }
            }
        }
    }
}
