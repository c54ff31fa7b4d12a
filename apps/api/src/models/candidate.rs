use serde::{Deserialize, Serialize};

/// One position listed on a CV. Only the free-text duration is used for scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub duration_text: String,
}

/// One qualification listed on a CV.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree_text: String,
}

/// Structured candidate data produced by the upstream CV extractor.
///
/// Every field may be absent. Absence means "no information" and is never an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub location: Option<String>,
}
