use std::ops::Deref;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether the role is tied to a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    Onsite,
    Remote,
}

/// Structured hiring requirements for one role.
///
/// `max_experience_years = None` means the band is open-ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobSpecification {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience_years: u32,
    pub max_experience_years: Option<u32>,
    pub education_requirement: Option<String>,
    pub location: Option<String>,
    pub location_type: Option<LocationType>,
}

/// Caller contract violations detected before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobSpecError {
    #[error("min_experience_years ({min}) is greater than max_experience_years ({max})")]
    InvalidExperienceBand { min: u32, max: u32 },
}

/// A job specification that passed [`JobSpecification::validate`].
///
/// Matchers only accept this type, so a malformed band is rejected once at the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedJob(JobSpecification);

impl JobSpecification {
    pub fn validate(self) -> Result<ValidatedJob, JobSpecError> {
        if let Some(max) = self.max_experience_years {
            if self.min_experience_years > max {
                return Err(JobSpecError::InvalidExperienceBand {
                    min: self.min_experience_years,
                    max,
                });
            }
        }
        Ok(ValidatedJob(self))
    }
}

impl Deref for ValidatedJob {
    type Target = JobSpecification;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
