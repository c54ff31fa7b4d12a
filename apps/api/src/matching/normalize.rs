//! Text normalizers and the fuzzy term comparison shared by the skill and location matchers.

/// Trims and lower-cases free text for comparison.
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalizes a list of terms, dropping the ones that are empty after trimming.
pub fn normalized_terms<S: AsRef<str>>(terms: &[S]) -> Vec<String> {
    terms
        .iter()
        .map(|t| normalize_text(t.as_ref()))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Decides whether a candidate term satisfies a required term.
///
/// Both sides are raw user text; implementations normalize internally.
pub trait TermMatcher: Send + Sync {
    fn matches(&self, candidate: &str, required: &str) -> bool;
}

/// Bidirectional substring containment after normalization.
///
/// Tolerates abbreviation and specialization ("React" ~ "React.js") at the cost
/// of false positives on short terms ("C" ~ "Scala"). Empty terms never match.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainmentMatcher;

impl TermMatcher for ContainmentMatcher {
    fn matches(&self, candidate: &str, required: &str) -> bool {
        let candidate = normalize_text(candidate);
        let required = normalize_text(required);
        contains_either_way(&candidate, &required)
    }
}

/// Containment check on already-normalized text.
fn contains_either_way(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}
