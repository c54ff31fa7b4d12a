use serde::{Deserialize, Serialize};

use crate::matching::normalize::{normalized_terms, TermMatcher};

/// Share of the skills dimension score driven by required skills (the rest is preferred).
const REQUIRED_SHARE: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillsStatus {
    NoRequirement,
    MeetsRequirement,
    PartialMatch,
    NoMatch,
}

/// Skills comparison. Skill lists keep the job's original spelling and order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillsResult {
    pub status: SkillsStatus,
    pub matched_required: Vec<String>,
    pub missing_required: Vec<String>,
    pub matched_preferred: Vec<String>,
    /// 0 – 100; 100 when the job lists no required skills.
    pub required_score: u8,
    /// 0 – 100; 100 when the job lists no preferred skills.
    pub preferred_score: u8,
    /// Dimension score fed into the overall composition.
    pub score: u8,
}

/// Compares a candidate's skills against the job's required and preferred lists.
pub fn match_skills<M: TermMatcher + ?Sized>(
    matcher: &M,
    candidate_skills: &[String],
    required_skills: &[String],
    preferred_skills: &[String],
) -> SkillsResult {
    let candidate_terms = normalized_terms(candidate_skills);
    let is_satisfied =
        |skill: &str| candidate_terms.iter().any(|c| matcher.matches(c, skill));

    // Blank entries in the job lists are not requirements.
    let required_skills = non_blank(required_skills);
    let preferred_skills = non_blank(preferred_skills);

    let (matched_required, missing_required): (Vec<String>, Vec<String>) = required_skills
        .iter()
        .map(|skill| skill.to_string())
        .partition(|skill| is_satisfied(skill.as_str()));

    let matched_preferred: Vec<String> = preferred_skills
        .iter()
        .copied()
        .filter(|&skill| is_satisfied(skill))
        .map(|skill| skill.to_string())
        .collect();

    let required_score = percentage(matched_required.len(), required_skills.len());
    let preferred_score = percentage(matched_preferred.len(), preferred_skills.len());

    let status = if required_skills.is_empty() {
        SkillsStatus::NoRequirement
    } else if missing_required.is_empty() {
        SkillsStatus::MeetsRequirement
    } else if matched_required.is_empty() {
        SkillsStatus::NoMatch
    } else {
        SkillsStatus::PartialMatch
    };

    let score = ((required_score as u32 * REQUIRED_SHARE
        + preferred_score as u32 * (100 - REQUIRED_SHARE)
        + 50)
        / 100) as u8;

    SkillsResult {
        status,
        matched_required,
        missing_required,
        matched_preferred,
        required_score,
        preferred_score,
        score,
    }
}

fn non_blank(skills: &[String]) -> Vec<&str> {
    skills
        .iter()
        .map(String::as_str)
        .filter(|skill| !skill.trim().is_empty())
        .collect()
}

/// Rounded `100 * matched / total`; an empty list is vacuously satisfied.
fn percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    ((200 * matched + total) / (2 * total)).min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::normalize::ContainmentMatcher;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_required_skills_is_vacuously_satisfied() {
        let result = match_skills(&ContainmentMatcher, &strings(&[]), &[], &[]);
        assert_eq!(result.required_score, 100);
        assert_eq!(result.status, SkillsStatus::NoRequirement);

        let result = match_skills(&ContainmentMatcher, &strings(&["Cobol"]), &[], &[]);
        assert_eq!(result.required_score, 100);
    }

    #[test]
    fn test_bidirectional_containment_matches_abbreviations() {
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["React.js", "Node"]),
            &strings(&["react", "Node.js"]),
            &[],
        );
        assert_eq!(result.matched_required, vec!["react", "Node.js"]);
        assert!(result.missing_required.is_empty());
        assert_eq!(result.required_score, 100);
        assert_eq!(result.status, SkillsStatus::MeetsRequirement);
    }

    #[test]
    fn test_short_skill_false_positive_is_preserved() {
        // A required "C" is satisfied by "Scala" under containment matching.
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["Scala"]),
            &strings(&["C"]),
            &[],
        );
        assert_eq!(result.matched_required, vec!["C"]);
    }

    #[test]
    fn test_partial_match_preserves_input_order() {
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["Kubernetes", "Go"]),
            &strings(&["Rust", "Go", "Kafka", "Kubernetes"]),
            &strings(&["Terraform", "go"]),
        );
        assert_eq!(result.matched_required, vec!["Go", "Kubernetes"]);
        assert_eq!(result.missing_required, vec!["Rust", "Kafka"]);
        assert_eq!(result.matched_preferred, vec!["go"]);
        assert_eq!(result.required_score, 50);
        assert_eq!(result.preferred_score, 50);
        assert_eq!(result.status, SkillsStatus::PartialMatch);
    }

    #[test]
    fn test_no_candidate_skills_is_no_match() {
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&[]),
            &strings(&["Rust"]),
            &[],
        );
        assert_eq!(result.required_score, 0);
        assert_eq!(result.missing_required, vec!["Rust"]);
        assert_eq!(result.status, SkillsStatus::NoMatch);
    }

    #[test]
    fn test_blank_candidate_skill_does_not_satisfy_everything() {
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["", "  "]),
            &strings(&["Rust", "Go"]),
            &[],
        );
        assert_eq!(result.required_score, 0);
    }

    #[test]
    fn test_blank_job_skills_are_ignored() {
        let result = match_skills(&ContainmentMatcher, &strings(&["Rust"]), &strings(&[""]), &[]);
        assert_eq!(result.status, SkillsStatus::NoRequirement);
        assert_eq!(result.required_score, 100);
        assert_eq!(result.score, 100);

        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["Rust"]),
            &strings(&["Rust", "  "]),
            &strings(&["", "\t"]),
        );
        assert_eq!(result.status, SkillsStatus::MeetsRequirement);
        assert_eq!(result.matched_required, vec!["Rust"]);
        assert!(result.missing_required.is_empty());
        assert_eq!(result.required_score, 100);
        assert_eq!(result.preferred_score, 100);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_required_score_rounds_to_nearest() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(0, 0), 100);
    }

    #[test]
    fn test_dimension_score_blends_required_and_preferred() {
        // required 100, preferred 0 -> 80
        let result = match_skills(
            &ContainmentMatcher,
            &strings(&["Rust"]),
            &strings(&["Rust"]),
            &strings(&["Haskell"]),
        );
        assert_eq!(result.score, 80);
    }

    #[test]
    fn test_adding_missing_skill_never_lowers_scores() {
        let required = strings(&["Rust", "Kafka"]);
        let preferred = strings(&["Docker"]);
        let before = match_skills(&ContainmentMatcher, &strings(&["Rust"]), &required, &preferred);
        let after = match_skills(
            &ContainmentMatcher,
            &strings(&["Rust", "Kafka"]),
            &required,
            &preferred,
        );
        assert!(after.required_score >= before.required_score);
        assert!(after.score >= before.score);
        assert!(after.missing_required.is_empty());
    }
}
