//! Axum route handlers for the Match API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::matching::composer::{build_summary, MatchReport, ScoreWeights};
use crate::matching::scorer::BatchEntry;
use crate::models::{CandidateProfile, JobSpecification, ValidatedJob};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub candidate: CandidateProfile,
    #[serde(default)]
    pub job: JobSpecification,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub report: MatchReport,
    pub summary: String,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct BatchScoreRequest {
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    #[serde(default)]
    pub jobs: Vec<JobSpecification>,
}

#[derive(Debug, Serialize)]
pub struct BatchScoreResponse {
    pub results: Vec<BatchEntry>,
    pub pairs_scored: usize,
    pub scorer_backend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct WeightsResponse {
    pub weights: ScoreWeights,
    pub scorer_backend: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one candidate against one job spec. A job whose experience band is
/// inverted is rejected before any matcher runs.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let job = request.job.validate()?;
    let report = state.scorer.score(&request.candidate, &job).await?;
    let summary = build_summary(&report);

    Ok(Json(ScoreResponse {
        report,
        summary,
        scorer_backend: state.scorer.backend(),
    }))
}

/// POST /api/v1/match/batch
///
/// Scores every candidate against every job. Results are not ranked; they are
/// ordered by `(job_index, candidate_index)`.
pub async fn handle_batch_score(
    State(state): State<AppState>,
    Json(request): Json<BatchScoreRequest>,
) -> Result<Json<BatchScoreResponse>, AppError> {
    let pairs = request.candidates.len().saturating_mul(request.jobs.len());
    if pairs > state.config.max_batch_pairs {
        return Err(AppError::Validation(format!(
            "batch of {pairs} pairs exceeds the limit of {}",
            state.config.max_batch_pairs
        )));
    }

    let jobs = request
        .jobs
        .into_iter()
        .enumerate()
        .map(|(index, job)| {
            job.validate()
                .map_err(|e| AppError::Validation(format!("jobs[{index}]: {e}")))
        })
        .collect::<Result<Vec<ValidatedJob>, AppError>>()?;

    debug!(
        "Batch scoring {} candidates against {} jobs",
        request.candidates.len(),
        jobs.len()
    );

    let results = state.scorer.score_batch(request.candidates, jobs).await?;

    Ok(Json(BatchScoreResponse {
        pairs_scored: results.len(),
        results,
        scorer_backend: state.scorer.backend(),
    }))
}

/// GET /api/v1/match/weights
///
/// Returns the dimension weights used for the overall score.
pub async fn handle_get_weights(State(state): State<AppState>) -> Json<WeightsResponse> {
    Json(WeightsResponse {
        weights: state.scorer.weights(),
        scorer_backend: state.scorer.backend(),
    })
}
