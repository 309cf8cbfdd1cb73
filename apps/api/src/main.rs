mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{
    FallbackSkillAnalyzer, KeywordSkillAnalyzer, LlmSkillAnalyzer, SkillAnalyzer,
};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS API v{}", env!("CARGO_PKG_VERSION"));

    let analyzer = build_analyzer(&config)?;
    info!("Skill analyzer backend: {}", analyzer.backend());

    let state = AppState {
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Keyword analysis by default; the remote analyzer, wrapped in the keyword
/// fallback, when ENABLE_LLM_ANALYSIS is set and a key is configured.
fn build_analyzer(config: &Config) -> Result<Arc<dyn SkillAnalyzer>> {
    let Some(api_key) = config.llm_api_key() else {
        if config.enable_llm_analysis {
            warn!("ENABLE_LLM_ANALYSIS is set but ANTHROPIC_API_KEY is missing; using keyword analysis");
        }
        return Ok(Arc::new(KeywordSkillAnalyzer));
    };

    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let llm = LlmClient::new(api_key.to_string(), config.llm_model.clone(), timeout)?;
    info!("LLM client initialized (model: {})", llm.model());

    Ok(Arc::new(FallbackSkillAnalyzer::new(
        Box::new(LlmSkillAnalyzer(llm)),
        timeout,
    )))
}
