use serde::{Deserialize, Serialize};

use crate::matching::duration::infer_years;
use crate::models::ExperienceEntry;

/// Points lost per year above the band ceiling.
const OVERQUALIFIED_PENALTY_PER_YEAR: u32 = 10;
/// Lowest score an overqualified candidate can fall to.
const OVERQUALIFIED_FLOOR: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceStatus {
    MeetsRequirement,
    Underqualified,
    Overqualified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceResult {
    pub status: ExperienceStatus,
    pub total_years: u32,
    pub min_years: u32,
    /// `None` when the job sets no ceiling.
    pub max_years: Option<u32>,
    /// Distance to the nearest band edge; 0 inside the band.
    pub gap: u32,
    pub score: u8,
}

/// Sums inferred tenure across all positions and compares it to `[min, max]` (inclusive).
pub fn match_experience(
    positions: &[ExperienceEntry],
    min_years: u32,
    max_years: Option<u32>,
) -> ExperienceResult {
    let total_years = positions
        .iter()
        .map(|p| infer_years(&p.duration_text))
        .fold(0u32, u32::saturating_add);

    let (status, gap) = if total_years < min_years {
        (ExperienceStatus::Underqualified, min_years - total_years)
    } else {
        match max_years {
            Some(max) if total_years > max => (ExperienceStatus::Overqualified, total_years - max),
            _ => (ExperienceStatus::MeetsRequirement, 0),
        }
    };

    let score = match status {
        ExperienceStatus::MeetsRequirement => 100,
        // min_years > total_years >= 0 here, so the division is safe
        ExperienceStatus::Underqualified => (100 * total_years as u64 / min_years as u64) as u32,
        ExperienceStatus::Overqualified => 100u32
            .saturating_sub(gap.saturating_mul(OVERQUALIFIED_PENALTY_PER_YEAR))
            .max(OVERQUALIFIED_FLOOR),
    };

    ExperienceResult {
        status,
        total_years,
        min_years,
        max_years,
        gap,
        score: score.min(100) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(durations: &[&str]) -> Vec<ExperienceEntry> {
        durations
            .iter()
            .map(|d| ExperienceEntry {
                duration_text: d.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_sums_across_positions() {
        let result = match_experience(&positions(&["3 years", "2018 - 2020", "Intern"]), 0, None);
        assert_eq!(result.total_years, 6);
        assert_eq!(result.status, ExperienceStatus::MeetsRequirement);
    }

    #[test]
    fn test_no_positions_is_zero_years() {
        let result = match_experience(&[], 2, None);
        assert_eq!(result.total_years, 0);
        assert_eq!(result.status, ExperienceStatus::Underqualified);
        assert_eq!(result.gap, 2);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_open_band_always_satisfied() {
        let result = match_experience(&positions(&["40 years"]), 0, None);
        assert_eq!(result.status, ExperienceStatus::MeetsRequirement);
        assert_eq!(result.score, 100);

        let result = match_experience(&[], 0, None);
        assert_eq!(result.status, ExperienceStatus::MeetsRequirement);
    }

    #[test]
    fn test_band_edges_are_inclusive() {
        let at_min = match_experience(&positions(&["2 years"]), 2, Some(5));
        assert_eq!(at_min.status, ExperienceStatus::MeetsRequirement);
        assert_eq!(at_min.gap, 0);

        let at_max = match_experience(&positions(&["5 years"]), 2, Some(5));
        assert_eq!(at_max.status, ExperienceStatus::MeetsRequirement);
        assert_eq!(at_max.gap, 0);
    }

    #[test]
    fn test_underqualified_gap_and_score() {
        let result = match_experience(&positions(&["1 year"]), 4, Some(8));
        assert_eq!(result.status, ExperienceStatus::Underqualified);
        assert_eq!(result.gap, 3);
        assert_eq!(result.score, 25);
    }

    #[test]
    fn test_overqualified_gap_and_score() {
        let result = match_experience(&positions(&["9 years"]), 2, Some(5));
        assert_eq!(result.status, ExperienceStatus::Overqualified);
        assert_eq!(result.gap, 4);
        assert_eq!(result.score, 60);

        let far_over = match_experience(&positions(&["30 years"]), 2, Some(5));
        assert_eq!(far_over.score, 50);
    }

    #[test]
    fn test_huge_totals_saturate() {
        let result = match_experience(&positions(&["4294967295 years", "10 years"]), 0, None);
        assert_eq!(result.total_years, u32::MAX);
    }
}
