use crate::core::levenshtein::levenshtein_distance;
use crate::domain::model::{MatchReason, Thresholds};
use crate::domain::ports::SimilarityMatcher;

/// Lowercases and trims a title before any comparison.
pub fn normalize(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Layered title comparison: exact, containment, word overlap, edit distance.
/// The first step that applies decides the verdict.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TitleMatcher {
    thresholds: Thresholds,
}

impl TitleMatcher {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        self.explain(a, b).is_match()
    }

    pub fn explain(&self, a: &str, b: &str) -> MatchReason {
        let a = normalize(a);
        let b = normalize(b);

        if a == b {
            return MatchReason::Exact;
        }

        if a.contains(b.as_str()) || b.contains(a.as_str()) {
            return MatchReason::Contained;
        }

        let words_a: Vec<&str> = a.split_whitespace().collect();
        let words_b: Vec<&str> = b.split_whitespace().collect();

        let reason = if words_a.len() >= self.thresholds.min_word_count
            && words_b.len() >= self.thresholds.min_word_count
        {
            let ratio = self.word_overlap_ratio(&words_a, &words_b);
            MatchReason::WordOverlap {
                ratio,
                matched: ratio > self.thresholds.word_overlap_ratio,
            }
        } else {
            self.edit_distance_reason(&a, &b)
        };

        tracing::trace!(a = %a, b = %b, ?reason, "title comparison");
        reason
    }

    /// Matching long words over the smaller word count. Counted from both
    /// sides and the larger count kept, so argument order never matters.
    fn word_overlap_ratio(&self, words_a: &[&str], words_b: &[&str]) -> f64 {
        let shorter = words_a.len().min(words_b.len());
        if shorter == 0 {
            return 0.0;
        }

        let forward = self.count_matching(words_a, words_b);
        let backward = self.count_matching(words_b, words_a);
        forward.max(backward) as f64 / shorter as f64
    }

    fn count_matching(&self, from: &[&str], within: &[&str]) -> usize {
        from.iter()
            .filter(|word| word.chars().count() > self.thresholds.min_word_len)
            .filter(|word| within.contains(*word))
            .count()
    }

    fn edit_distance_reason(&self, a: &str, b: &str) -> MatchReason {
        let distance = levenshtein_distance(a, b);
        let longest = a.chars().count().max(b.chars().count());

        // two empty titles have nothing to divide by; they are the same title
        let ratio = if longest == 0 {
            0.0
        } else {
            distance as f64 / longest as f64
        };

        MatchReason::EditDistance {
            distance,
            ratio,
            matched: longest == 0 || ratio < self.thresholds.edit_distance_ratio,
        }
    }
}

impl SimilarityMatcher for TitleMatcher {
    fn explain(&self, a: &str, b: &str) -> MatchReason {
        TitleMatcher::explain(self, a, b)
    }
}

/// Whether `a` and `b` name the same entity, using the default thresholds.
pub fn is_similar(a: &str, b: &str) -> bool {
    TitleMatcher::default().is_similar(a, b)
}

pub fn explain(a: &str, b: &str) -> MatchReason {
    TitleMatcher::default().explain(a, b)
}
