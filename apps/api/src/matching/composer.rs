//! Score composition: folds the four dimension results into one `MatchReport`.
//!
//! overall = round(Σ weight_d × score_d / Σ weight_d), each score_d in 0–100.
//! Default weights: skills 40, experience 25, education 20, location 15.
//! The result is bounded to 0–100 and never decreases when any single
//! dimension score increases.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::education::{match_education, EducationResult};
use crate::matching::experience::{match_experience, ExperienceResult};
use crate::matching::location::{match_location, LocationResult};
use crate::matching::normalize::{ContainmentMatcher, TermMatcher};
use crate::matching::skills::{match_skills, SkillsResult};
use crate::models::{CandidateProfile, ValidatedJob};

/// Relative weight of each dimension. Only the ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: u32,
    pub experience: u32,
    pub education: u32,
    pub location: u32,
}

pub const DEFAULT_WEIGHTS: ScoreWeights = ScoreWeights {
    skills: 40,
    experience: 25,
    education: 20,
    location: 15,
};

impl Default for ScoreWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    #[error("score weights must not all be zero")]
    AllZero,
    #[error("score weights are too large (total {0})")]
    Overflow(u64),
}

/// Upper bound on the weight total so the weighted sum always fits in u64 math.
const MAX_TOTAL_WEIGHT: u64 = 1_000_000;

impl ScoreWeights {
    pub fn total(&self) -> u64 {
        [self.skills, self.experience, self.education, self.location]
            .iter()
            .map(|w| *w as u64)
            .sum()
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        match self.total() {
            0 => Err(WeightsError::AllZero),
            t if t > MAX_TOTAL_WEIGHT => Err(WeightsError::Overflow(t)),
            _ => Ok(()),
        }
    }
}

/// Per-dimension scores, each 0 – 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionScores {
    pub skills: u8,
    pub experience: u8,
    pub education: u8,
    pub location: u8,
}

/// Rounded weighted mean of the dimension scores. Zero weights yield 0.
pub fn compose_overall(scores: &DimensionScores, weights: &ScoreWeights) -> u8 {
    let total = weights.total();
    if total == 0 {
        return 0;
    }
    let weighted: u64 = [
        (scores.skills, weights.skills),
        (scores.experience, weights.experience),
        (scores.education, weights.education),
        (scores.location, weights.location),
    ]
    .iter()
    .map(|(score, weight)| (*score).min(100) as u64 * *weight as u64)
    .sum();

    ((weighted * 2 + total) / (total * 2)).min(100) as u8
}

/// Result of scoring one candidate against one job. Pure projection of the two inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub overall_score: u8, // 0 – 100
    pub skills: SkillsResult,
    pub experience: ExperienceResult,
    pub education: EducationResult,
    pub location: LocationResult,
}

/// Scores a candidate against a job with the default containment matcher.
pub fn compute_match(
    candidate: &CandidateProfile,
    job: &ValidatedJob,
    weights: &ScoreWeights,
) -> MatchReport {
    compute_match_with(&ContainmentMatcher, candidate, job, weights)
}

/// Scores a candidate against a job using `matcher` for skill and location terms.
pub fn compute_match_with<M: TermMatcher + ?Sized>(
    matcher: &M,
    candidate: &CandidateProfile,
    job: &ValidatedJob,
    weights: &ScoreWeights,
) -> MatchReport {
    let skills = match_skills(
        matcher,
        &candidate.skills,
        &job.required_skills,
        &job.preferred_skills,
    );
    let experience = match_experience(
        &candidate.experience,
        job.min_experience_years,
        job.max_experience_years,
    );
    let education = match_education(&candidate.education, job.education_requirement.as_deref());
    let location = match_location(
        matcher,
        candidate.location.as_deref(),
        job.location.as_deref(),
        job.location_type,
    );

    let scores = DimensionScores {
        skills: skills.score,
        experience: experience.score,
        education: education.score,
        location: location.score,
    };

    MatchReport {
        overall_score: compose_overall(&scores, weights),
        skills,
        experience,
        education,
        location,
    }
}

/// Builds a short human-readable summary from a report.
pub fn build_summary(report: &MatchReport) -> String {
    let score = report.overall_score;
    let top_missing: Vec<&str> = report
        .skills
        .missing_required
        .iter()
        .take(3)
        .map(String::as_str)
        .collect();

    if score >= 80 && top_missing.is_empty() {
        "Strong match. The candidate covers the key requirements of this role.".to_string()
    } else if score >= 80 {
        format!(
            "Strong match ({score}/100), but missing required skills: {}.",
            top_missing.join(", ")
        )
    } else if top_missing.is_empty() {
        format!("Partial match ({score}/100). All required skills are covered.")
    } else if score >= 60 {
        format!(
            "Moderate match ({score}/100). Missing required skills: {}.",
            top_missing.join(", ")
        )
    } else {
        format!(
            "Low match ({score}/100). Significant gaps: {}.",
            top_missing.join(", ")
        )
    }
}
