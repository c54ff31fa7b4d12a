pub mod candidate;
pub mod job;

pub use candidate::{CandidateProfile, EducationEntry, ExperienceEntry};
pub use job::{JobSpecError, JobSpecification, LocationType, ValidatedJob};
