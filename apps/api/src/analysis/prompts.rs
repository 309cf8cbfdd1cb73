// Prompts for remote skill extraction.

use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

pub const SKILL_EXTRACTION_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// Résumé text beyond this many characters is not sent to the model.
pub const MAX_PROMPT_RESUME_CHARS: usize = 4000;
/// Job description text beyond this many characters is not sent to the model.
pub const MAX_PROMPT_JOB_CHARS: usize = 2000;

pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = r#"
Compare the resume below with the job description and extract technical and professional skills.

Return a JSON object with exactly this shape:
{
  "resume_skills": ["skills the resume demonstrates"],
  "required_skills": ["skills the job description asks for"],
  "matched_skills": ["required skills the resume covers"],
  "missing_skills": ["required skills the resume does not cover"],
  "ats_factors": {
    "keyword_density": <integer 0-100, lexical overlap between resume and job description>,
    "format_score": <integer 0-100, structural quality of the resume>,
    "experience_relevance": <integer 0-100, how well the experience fits the role>
  }
}

Rules:
- Use short canonical skill names (e.g. "Node.js", "PostgreSQL", "REST API").
- Every matched skill must also appear in required_skills.
- Prefer these canonical names where they apply: {taxonomy}

RESUME:
{resume_text}

JOB DESCRIPTION:
{job_description}
"#;

/// Fills the extraction template, truncating both texts to their prompt limits.
pub fn build_skill_extraction_prompt(resume_text: &str, job_description: &str, taxonomy: &[&str]) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE
        .replace("{taxonomy}", &taxonomy.join(", "))
        .replace("{resume_text}", truncate_chars(resume_text, MAX_PROMPT_RESUME_CHARS))
        .replace("{job_description}", truncate_chars(job_description, MAX_PROMPT_JOB_CHARS))
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
