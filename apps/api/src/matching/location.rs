use serde::{Deserialize, Serialize};

use crate::matching::normalize::TermMatcher;
use crate::models::LocationType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationStatus {
    NoRequirement,
    RemotePosition,
    LocationMatches,
    DifferentLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
    pub status: LocationStatus,
    pub matches: bool,
    pub score: u8,
}

impl LocationResult {
    fn satisfied(status: LocationStatus) -> Self {
        Self {
            status,
            matches: true,
            score: 100,
        }
    }
}

/// Remote roles and roles without a location are always satisfied; otherwise
/// the candidate and job locations are compared with `matcher`. No partial credit.
pub fn match_location<M: TermMatcher + ?Sized>(
    matcher: &M,
    candidate_location: Option<&str>,
    job_location: Option<&str>,
    location_type: Option<LocationType>,
) -> LocationResult {
    if location_type == Some(LocationType::Remote) {
        return LocationResult::satisfied(LocationStatus::RemotePosition);
    }

    let Some(job_location) = job_location.filter(|l| !l.trim().is_empty()) else {
        return LocationResult::satisfied(LocationStatus::NoRequirement);
    };

    let matches = candidate_location.is_some_and(|c| matcher.matches(c, job_location));
    if matches {
        LocationResult::satisfied(LocationStatus::LocationMatches)
    } else {
        LocationResult {
            status: LocationStatus::DifferentLocation,
            matches: false,
            score: 0,
        }
    }
}
