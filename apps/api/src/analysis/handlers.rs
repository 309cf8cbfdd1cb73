//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::analysis::models::AnalysisReport;
use crate::analysis::service::analyze;
use crate::errors::AppError;
use crate::extraction::{extract_text, ResumeFormat};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

/// Oversized bodies keep their 413; any other multipart failure is a bad upload.
fn upload_error(context: &str, err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::MissingInput(format!("{context}: {err}"))
    }
}

/// The two parts of an analysis upload; either may be absent.
#[derive(Debug, Default)]
struct AnalyzeUpload {
    resume: Option<(String, Bytes)>,
    job_description: Option<String>,
}

async fn read_upload(mut multipart: Multipart) -> Result<AnalyzeUpload, AppError> {
    let mut upload = AnalyzeUpload::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| upload_error("Malformed multipart body", e))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| upload_error("Could not read resume upload", e))?;
                upload.resume = Some((filename, data));
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| upload_error("Could not read job description", e))?;
                upload.job_description = Some(text);
            }
            other => debug!("Ignoring unexpected multipart field {:?}", other),
        }
    }

    Ok(upload)
}

/// POST /api/analyze
///
/// Multipart form with a `resume` file and a `jobDescription` text field.
/// Returns the ATS score, sub-scores, skill lists and recommendations.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let upload = read_upload(multipart).await?;

    let (filename, data) = upload
        .resume
        .ok_or_else(|| AppError::MissingInput("Resume file required".to_string()))?;
    let job_description = upload
        .job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::MissingInput("Job description required".to_string()))?;

    let format = ResumeFormat::from_filename(&filename);
    debug!("Received {:?} resume '{}' ({} bytes)", format, filename, data.len());

    let resume_text = tokio::task::spawn_blocking(move || extract_text(&data, format))
        .await
        .map_err(|e| AppError::Internal(e.into()))??;

    let report = analyze(&resume_text, &job_description, state.analyzer.as_ref()).await?;

    Ok(Json(report))
}
