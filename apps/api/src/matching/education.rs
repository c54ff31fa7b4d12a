//! Education ranking: maps free-text qualifications onto an ordinal scale.

use serde::{Deserialize, Serialize};

use crate::matching::normalize::normalize_text;
use crate::models::EducationEntry;

/// Qualification levels, lowest first. Derived `Ord` follows declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Unrecognized,
    Certificate,
    Diploma,
    Bachelor,
    Honours,
    Master,
    Doctorate,
}

/// Keywords per level, checked from the highest level down.
const LEVEL_KEYWORDS: &[(EducationLevel, &[&str])] = &[
    (
        EducationLevel::Doctorate,
        &["phd", "ph.d", "doctorate", "doctoral", "dphil"],
    ),
    (
        EducationLevel::Master,
        &["master", "mba", "msc", "m.sc", "meng", "m.eng"],
    ),
    (EducationLevel::Honours, &["honours", "honors", "hons"]),
    (
        EducationLevel::Bachelor,
        &["bachelor", "bsc", "b.sc", "bcom", "b.com", "beng", "b.eng", "degree"],
    ),
    (EducationLevel::Diploma, &["diploma"]),
    (EducationLevel::Certificate, &["certificate", "certification"]),
];

impl EducationLevel {
    /// 0 (unrecognized) to 6 (doctorate).
    pub fn rank(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationStatus {
    NoRequirement,
    MeetsRequirement,
    BelowRequirement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationResult {
    pub status: EducationStatus,
    pub matches: bool,
    /// `None` when the job states no requirement.
    pub required_level: Option<EducationLevel>,
    pub candidate_level: EducationLevel,
    pub score: u8,
}

/// Classifies free text by keyword containment; the first (highest) hit wins.
pub fn classify_education(text: &str) -> EducationLevel {
    let text = normalize_text(text);
    if text.is_empty() {
        return EducationLevel::Unrecognized;
    }
    LEVEL_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(level, _)| *level)
        .unwrap_or(EducationLevel::Unrecognized)
}

/// Compares the candidate's highest qualification against the job requirement.
pub fn match_education(degrees: &[EducationEntry], requirement: Option<&str>) -> EducationResult {
    let candidate_level = degrees
        .iter()
        .map(|d| classify_education(&d.degree_text))
        .max()
        .unwrap_or(EducationLevel::Unrecognized);

    let requirement = requirement.map(str::trim).filter(|r| !r.is_empty());
    let Some(requirement) = requirement else {
        return EducationResult {
            status: EducationStatus::NoRequirement,
            matches: true,
            required_level: None,
            candidate_level,
            score: 100,
        };
    };

    let required_level = classify_education(requirement);
    let matches = candidate_level >= required_level;
    let (status, score) = if matches {
        (EducationStatus::MeetsRequirement, 100)
    } else {
        // required_level > candidate_level >= 0, so the rank is non-zero
        let partial = 100 * candidate_level.rank() as u32 / required_level.rank() as u32;
        (EducationStatus::BelowRequirement, partial as u8)
    };

    EducationResult {
        status,
        matches,
        required_level: Some(required_level),
        candidate_level,
        score,
    }
}
