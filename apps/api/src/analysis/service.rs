use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::SkillAnalyzer;
use crate::analysis::models::AnalysisReport;
use crate::analysis::recommendations::generate_recommendations;
use crate::analysis::scoring::compose_ats_score;
use crate::errors::AppError;

/// Full pipeline: validate input → skill analysis → score composition → recommendations.
pub async fn analyze(
    resume_text: &str,
    job_description: &str,
    analyzer: &dyn SkillAnalyzer,
) -> Result<AnalysisReport, AppError> {
    if job_description.trim().is_empty() {
        return Err(AppError::MissingInput("Job description required".to_string()));
    }
    if resume_text.trim().is_empty() {
        return Err(AppError::MissingInput(
            "No text could be extracted from the resume".to_string(),
        ));
    }

    let analysis_id = Uuid::new_v4();
    let result = analyzer.analyze(resume_text, job_description).await?;
    let ats_score = compose_ats_score(&result);
    let recommendations = generate_recommendations(&result);

    info!(
        %analysis_id,
        backend = analyzer.backend(),
        required = result.required_skills.len(),
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        ats_score,
        "Resume analysis complete"
    );

    Ok(AnalysisReport {
        ats_score,
        keywords_match: result.ats_factors.keyword_density,
        format_score: result.ats_factors.format_score,
        experience_match: result.ats_factors.experience_relevance,
        matched_skills: result.matched_skills,
        missing_skills: result.missing_skills,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::KeywordSkillAnalyzer;
    use crate::analysis::matcher::contains_ignore_case;
    use crate::analysis::keyword_analyzer::{analyze_keywords, analyze_keywords_uncapped, keyword_density};
    use crate::analysis::models::{difference, MAX_MISSING_SKILLS};
    use crate::analysis::scoring::{MAX_ATS_SCORE, MIN_ATS_SCORE};
    use proptest::prelude::*;

    const FRESHER_JD: &str = "Job Title: Full Stack Developer (Fresher)\n\
        Required Skills: HTML, CSS, JavaScript, React, Node.js, Python, REST API, MySQL, \
        MongoDB, Git, GitHub, Flask, Django";

    #[tokio::test]
    async fn test_fresher_report() {
        let report = analyze("I know HTML CSS JavaScript Python Git", FRESHER_JD, &KeywordSkillAnalyzer)
            .await
            .unwrap();
        assert_eq!(report.ats_score, 62);
        assert_eq!(report.keywords_match, 55);
        assert_eq!(report.format_score, 80);
        assert_eq!(report.experience_match, 65);
        assert_eq!(report.recommendations.len(), 4);
        assert!(report.matched_skills.iter().any(|s| s == "Javascript"));
        assert!(report.missing_skills.iter().any(|s| s == "Rest Api"));
    }

    #[tokio::test]
    async fn test_empty_job_description_is_missing_input() {
        let err = analyze("I know Python", "   ", &KeywordSkillAnalyzer)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[tokio::test]
    async fn test_empty_resume_text_is_missing_input() {
        let err = analyze("", "Python developer", &KeywordSkillAnalyzer)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MissingInput(_)));
    }

    #[tokio::test]
    async fn test_no_recognizable_skills_uses_neutral_skill_score() {
        // skill 70 → 24.5 + 13.75 + 20 + 9.75 + 10
        let report = analyze("Friendly and punctual", "Warehouse associate, night shift", &KeywordSkillAnalyzer)
            .await
            .unwrap();
        assert!(report.missing_skills.is_empty());
        assert_eq!(report.ats_score, 78);
    }

    #[tokio::test]
    async fn test_analyze_is_deterministic() {
        let resume = "Built REST API services in Python with Flask and PostgreSQL on AWS";
        let first = analyze(resume, FRESHER_JD, &KeywordSkillAnalyzer).await.unwrap();
        let second = analyze(resume, FRESHER_JD, &KeywordSkillAnalyzer).await.unwrap();
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    fn text_strategy() -> impl Strategy<Value = String> {
        let words = prop::sample::select(vec![
            "python", "Java", "JavaScript", "rest api", "MySQL", "git", "GitHub", "docker",
            "full stack", "node.js", "react", "team", "the", "and", "ci/cd", "aws", "é",
        ]);
        prop::collection::vec(words, 0..20).prop_map(|w| w.join(" "))
    }

    proptest! {
        #[test]
        fn prop_factors_and_score_stay_in_bounds(resume in text_strategy(), jd in text_strategy()) {
            let result = analyze_keywords(&resume, &jd);
            prop_assert!(result.ats_factors.is_in_range());
            let score = compose_ats_score(&result);
            prop_assert!((MIN_ATS_SCORE..=MAX_ATS_SCORE).contains(&score));
            let recs = generate_recommendations(&result);
            prop_assert!((2..=4).contains(&recs.len()));
        }

        #[test]
        fn prop_full_lists_hold_set_invariants(resume in text_strategy(), jd in text_strategy()) {
            let full = analyze_keywords_uncapped(&resume, &jd);
            for skill in &full.matched_skills {
                prop_assert!(contains_ignore_case(&full.required_skills, skill));
            }
            let expected = difference(&full.required_skills, &full.matched_skills);
            prop_assert_eq!(&full.missing_skills, &expected);
            prop_assert_eq!(
                full.ats_factors.keyword_density,
                keyword_density(
                    full.matched_skills.len(),
                    full.required_skills.len(),
                    full.missing_skills.len()
                )
            );

            // The displayed result is the full one cut down, never recomputed.
            let displayed = analyze_keywords(&resume, &jd);
            prop_assert!(displayed.missing_skills.len() <= MAX_MISSING_SKILLS);
            prop_assert_eq!(displayed, full.capped());
        }
    }
}
