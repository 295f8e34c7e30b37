//! Axum route handlers for the Resume Analysis API.

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::analysis::feedback::{build_feedback, AtsFeedback};
use crate::analysis::{AnalysisError, AnalysisHighlights, AnalysisResult, ResumeAnalyzer};
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the PDF upload.
pub const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// `resumeText` is kept loose so a non-string value is reported as
/// `INVALID_INPUT` instead of a generic JSON rejection.
#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(rename = "resumeText", default)]
    pub resume_text: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    #[serde(flatten)]
    pub analysis: AnalysisResult,
    pub feedback: AtsFeedback,
    pub highlights: AnalysisHighlights,
}

impl AnalyzeResponse {
    fn from_analysis(analysis: AnalysisResult) -> Self {
        let feedback = build_feedback(
            analysis.scores.ats_score,
            &analysis.sections,
            &analysis.skills,
        );
        let highlights = analysis.highlights();
        Self {
            success: true,
            analysis,
            feedback,
            highlights,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resume/analyze
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut document: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(RESUME_FIELD) {
            document = Some(field.bytes().await?);
        }
    }
    let document =
        document.ok_or_else(|| AppError::Validation("No PDF file uploaded".to_string()))?;

    let upload_bytes = document.len();
    let text = state.extractor.extract(document).await?;
    let analysis = run_analysis(state.analyzer.clone(), text).await?;

    info!(
        upload_bytes,
        ats_score = analysis.scores.ats_score,
        "Analysed uploaded resume"
    );
    Ok(Json(AnalyzeResponse::from_analysis(analysis)))
}

/// POST /api/v1/resume/analyze-text
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let text = match req.resume_text {
        Some(Value::String(text)) => text,
        Some(_) => {
            return Err(AnalysisError::InvalidInput("resumeText must be a string".into()).into())
        }
        None => return Err(AnalysisError::InvalidInput("Missing resumeText".into()).into()),
    };

    let analysis = run_analysis(state.analyzer.clone(), text).await?;
    info!(
        ats_score = analysis.scores.ats_score,
        "Analysed resume text"
    );
    Ok(Json(AnalyzeResponse::from_analysis(analysis)))
}

/// Runs the engine on the blocking pool; request bodies can be megabytes of
/// text and the scan is CPU-bound.
async fn run_analysis(
    analyzer: Arc<ResumeAnalyzer>,
    text: String,
) -> Result<AnalysisResult, AppError> {
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze(&text))
        .await
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}"))
        })??;
    Ok(analysis)
}
