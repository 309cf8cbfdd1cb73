//! Skill analyzers: pluggable, trait-based strategies producing an `AnalysisResult`.
//!
//! Default: `KeywordSkillAnalyzer` (pure-Rust, deterministic, fully testable).
//! Optional: `LlmSkillAnalyzer`, always wrapped in `FallbackSkillAnalyzer` so any
//! remote failure degrades to the keyword analyzer.
//!
//! `AppState` holds an `Arc<dyn SkillAnalyzer>`, chosen at startup via config.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::analysis::keyword_analyzer::analyze_keywords;
use crate::analysis::models::AnalysisResult;
use crate::analysis::prompts::{build_skill_extraction_prompt, SKILL_EXTRACTION_SYSTEM};
use crate::analysis::taxonomy::all_skills;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap analysis backends without touching handlers.
#[async_trait]
pub trait SkillAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError>;

    /// Short label for logs: "keyword" | "llm" | "llm+keyword".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct KeywordSkillAnalyzer;

#[async_trait]
impl SkillAnalyzer for KeywordSkillAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        Ok(analyze_keywords(resume_text, job_description))
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Remote skill extraction via Claude. Returns the model's JSON as-is; validation
/// happens in `FallbackSkillAnalyzer`.
pub struct LlmSkillAnalyzer(pub LlmClient);

#[async_trait]
impl SkillAnalyzer for LlmSkillAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        let prompt = build_skill_extraction_prompt(resume_text, job_description, &all_skills());
        self.0
            .call_json::<AnalysisResult>(&prompt, SKILL_EXTRACTION_SYSTEM)
            .await
            .map_err(|e| AppError::Internal(anyhow::Error::new(e).context("Skill extraction failed")))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackSkillAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Tries `primary` once under a deadline and falls back to the keyword analyzer
/// on timeout, error, or a result that fails normalization. Never returns `Err`.
pub struct FallbackSkillAnalyzer {
    primary: Box<dyn SkillAnalyzer>,
    timeout: Duration,
}

impl FallbackSkillAnalyzer {
    pub fn new(primary: Box<dyn SkillAnalyzer>, timeout: Duration) -> Self {
        Self { primary, timeout }
    }

    async fn try_primary(&self, resume_text: &str, job_description: &str) -> Option<AnalysisResult> {
        let attempt = tokio::time::timeout(
            self.timeout,
            self.primary.analyze(resume_text, job_description),
        )
        .await;

        match attempt {
            Err(_) => {
                warn!(
                    "{} analyzer timed out after {:?}, using keyword analysis",
                    self.primary.backend(),
                    self.timeout
                );
                None
            }
            Ok(Err(e)) => {
                warn!("{} analyzer failed, using keyword analysis: {e}", self.primary.backend());
                None
            }
            Ok(Ok(result)) => {
                let normalized = result.normalized();
                if normalized.is_none() {
                    warn!(
                        "{} analyzer returned out-of-range factors, using keyword analysis",
                        self.primary.backend()
                    );
                }
                normalized
            }
        }
    }
}

#[async_trait]
impl SkillAnalyzer for FallbackSkillAnalyzer {
    async fn analyze(
        &self,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResult, AppError> {
        if let Some(result) = self.try_primary(resume_text, job_description).await {
            debug!("{} analyzer succeeded", self.primary.backend());
            return Ok(result);
        }
        Ok(analyze_keywords(resume_text, job_description))
    }

    fn backend(&self) -> &'static str {
        "llm+keyword"
    }
}
