use crate::analysis::models::AnalysisResult;

/// Weights of the composed ATS score. Fixed calibration; not configurable.
struct ScoreWeights {
    skill_match: f64,
    keyword: f64,
    format: f64,
    experience: f64,
}

const WEIGHTS: ScoreWeights = ScoreWeights {
    skill_match: 0.35,
    keyword: 0.25,
    format: 0.25,
    experience: 0.15,
};

const BASE_BONUS: f64 = 10.0;
pub const MIN_ATS_SCORE: u32 = 55;
pub const MAX_ATS_SCORE: u32 = 95;

/// 70 when nothing is required, otherwise min(90, ratio × 85 + 15).
pub fn skill_match_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 70.0;
    }
    (matched as f64 / required as f64 * 85.0 + 15.0).min(90.0)
}

/// Two points per missing skill, at most 12.
pub fn missing_penalty(missing: usize) -> f64 {
    (missing.min(6) * 2) as f64
}

/// Composes the final ATS score, always in 55 – 95.
///
/// raw = 0.35·skill + 0.25·keyword + 0.25·format + 0.15·experience − penalty + 10
pub fn compose_ats_score(result: &AnalysisResult) -> u32 {
    let factors = &result.ats_factors;

    let skill = skill_match_score(result.matched_skills.len(), result.required_skills.len());
    let keyword = f64::from((factors.keyword_density + 5).min(90));
    let format = f64::from(factors.format_score.min(95));
    let experience = f64::from(factors.experience_relevance.min(90));

    let raw = skill * WEIGHTS.skill_match
        + keyword * WEIGHTS.keyword
        + format * WEIGHTS.format
        + experience * WEIGHTS.experience
        - missing_penalty(result.missing_skills.len())
        + BASE_BONUS;

    let floored = raw.floor().max(0.0) as u32;
    floored.clamp(MIN_ATS_SCORE, MAX_ATS_SCORE)
}
