use std::sync::Arc;

use crate::analysis::analyzer::SkillAnalyzer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill analyzer. Default: KeywordSkillAnalyzer. Swap via ENABLE_LLM_ANALYSIS.
    pub analyzer: Arc<dyn SkillAnalyzer>,
}
