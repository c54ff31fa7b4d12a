//! Match Scorer: pluggable, trait-based backend that scores candidates against job specs.
//!
//! Default: `HeuristicMatchScorer` (pure-Rust keyword/containment heuristics, deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, chosen at startup.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;

use crate::errors::AppError;
use crate::matching::composer::{compute_match, MatchReport, ScoreWeights};
use crate::models::{CandidateProfile, ValidatedJob};

/// One cell of an N×M batch: candidate `candidate_index` scored against job `job_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    pub job_index: usize,
    pub candidate_index: usize,
    pub report: MatchReport,
}

/// The scorer trait. Implement this to swap backends without touching handlers.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        candidate: &CandidateProfile,
        job: &ValidatedJob,
    ) -> Result<MatchReport, AppError>;

    /// Scores every candidate against every job. Results are ordered by
    /// `(job_index, candidate_index)` regardless of execution order.
    async fn score_batch(
        &self,
        candidates: Vec<CandidateProfile>,
        jobs: Vec<ValidatedJob>,
    ) -> Result<Vec<BatchEntry>, AppError>;

    fn weights(&self) -> ScoreWeights;

    /// Backend label reported to callers, e.g. "heuristic".
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicMatchScorer: default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Containment-based scorer over the four dimensions. Stateless apart from its weights.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMatchScorer {
    weights: ScoreWeights,
}

impl HeuristicMatchScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }
}

impl Default for HeuristicMatchScorer {
    fn default() -> Self {
        Self::new(ScoreWeights::default())
    }
}

#[async_trait]
impl MatchScorer for HeuristicMatchScorer {
    async fn score(
        &self,
        candidate: &CandidateProfile,
        job: &ValidatedJob,
    ) -> Result<MatchReport, AppError> {
        Ok(compute_match(candidate, job, &self.weights))
    }

    async fn score_batch(
        &self,
        candidates: Vec<CandidateProfile>,
        jobs: Vec<ValidatedJob>,
    ) -> Result<Vec<BatchEntry>, AppError> {
        let candidates = Arc::new(candidates);
        let mut workers = JoinSet::new();

        // One CPU-bound worker per job; pairs share nothing, so no coordination is needed.
        for (job_index, job) in jobs.into_iter().enumerate() {
            let candidates = Arc::clone(&candidates);
            let weights = self.weights;
            workers.spawn_blocking(move || {
                candidates
                    .iter()
                    .enumerate()
                    .map(|(candidate_index, candidate)| BatchEntry {
                        job_index,
                        candidate_index,
                        report: compute_match(candidate, &job, &weights),
                    })
                    .collect::<Vec<_>>()
            });
        }

        let mut results = Vec::new();
        while let Some(joined) = workers.join_next().await {
            let chunk = joined.map_err(|e| {
                AppError::Internal(anyhow::anyhow!("spawn_blocking failed in batch scoring: {e}"))
            })?;
            results.extend(chunk);
        }

        results.sort_by_key(|entry| (entry.job_index, entry.candidate_index));
        Ok(results)
    }

    fn weights(&self) -> ScoreWeights {
        self.weights
    }

    fn backend(&self) -> &'static str {
        "heuristic"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
