// CV-to-job match scoring engine.
// Implements: normalizers, skill/experience/education/location matchers, score composition.
// Everything below `scorer` and `handlers` is pure: no I/O, no logging, no clock.

pub mod composer;
pub mod duration;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod location;
pub mod normalize;
pub mod scorer;
pub mod skills;

// Re-export the public API consumed by other modules (state, routes).
pub use composer::ScoreWeights;
pub use scorer::{HeuristicMatchScorer, MatchScorer};
