use serde::{Deserialize, Serialize};

use crate::analysis::keyword_analyzer::match_required;
use crate::analysis::matcher::{contains_ignore_case, push_unique};

pub const MAX_RESUME_SKILLS: usize = 15;
pub const MAX_REQUIRED_SKILLS: usize = 12;
pub const MAX_MATCHED_SKILLS: usize = 10;
pub const MAX_MISSING_SKILLS: usize = 8;

/// Sub-scores, each in 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ATSFactors {
    pub keyword_density: u32,
    pub format_score: u32,
    pub experience_relevance: u32,
}

impl ATSFactors {
    pub fn is_in_range(&self) -> bool {
        [self.keyword_density, self.format_score, self.experience_relevance]
            .iter()
            .all(|v| *v <= 100)
    }
}

/// Skill sets and sub-scores for one résumé/job-description pair.
///
/// Produced by either skill analyzer backend. Lists are already capped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub resume_skills: Vec<String>,
    pub required_skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub ats_factors: ATSFactors,
}

impl AnalysisResult {
    /// Restores the set invariants on a result from an untrusted source:
    /// deduplicates every list, keeps only matched skills that are required and
    /// covered by some résumé skill (equal or containing, ignoring case),
    /// recomputes missing as required − matched, then applies the display caps.
    ///
    /// Returns `None` when a sub-score is out of range.
    pub fn normalized(self) -> Option<Self> {
        if !self.ats_factors.is_in_range() {
            return None;
        }

        let resume_skills = dedup(self.resume_skills);
        let required_skills = dedup(self.required_skills);
        let covered = match_required(&required_skills, &resume_skills);
        let matched_skills: Vec<String> = dedup(self.matched_skills)
            .into_iter()
            .filter(|s| contains_ignore_case(&covered, s))
            .collect();
        let missing_skills = difference(&required_skills, &matched_skills);

        Some(
            Self {
                resume_skills,
                required_skills,
                matched_skills,
                missing_skills,
                ats_factors: self.ats_factors,
            }
            .capped(),
        )
    }

    pub fn capped(mut self) -> Self {
        self.resume_skills.truncate(MAX_RESUME_SKILLS);
        self.required_skills.truncate(MAX_REQUIRED_SKILLS);
        self.matched_skills.truncate(MAX_MATCHED_SKILLS);
        self.missing_skills.truncate(MAX_MISSING_SKILLS);
        self
    }
}

/// Order-preserving, case-insensitive `required − matched`.
pub fn difference(required: &[String], matched: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|s| !contains_ignore_case(matched, s))
        .cloned()
        .collect()
}

fn dedup(skills: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(skills.len());
    for skill in skills {
        let trimmed = skill.trim();
        if !trimmed.is_empty() {
            push_unique(&mut out, trimmed);
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

/// The response body of `POST /api/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub keywords_match: u32,
    pub format_score: u32,
    pub experience_match: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
