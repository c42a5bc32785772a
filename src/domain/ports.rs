use crate::domain::model::MatchReason;

/// Decides whether two titles name the same card or offer.
pub trait SimilarityMatcher: Send + Sync {
    fn explain(&self, a: &str, b: &str) -> MatchReason;

    fn is_similar(&self, a: &str, b: &str) -> bool {
        self.explain(a, b).is_match()
    }
}
