// Resume analysis engine.
// Implements: skill taxonomy, text matching, keyword analysis, score composition,
// recommendations, and the optional remote analyzer with keyword fallback.

pub mod analyzer;
pub mod handlers;
pub mod keyword_analyzer;
pub mod matcher;
pub mod models;
pub mod prompts;
pub mod recommendations;
pub mod scoring;
pub mod service;
pub mod taxonomy;
