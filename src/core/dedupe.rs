use crate::core::matcher::TitleMatcher;
use crate::domain::model::{DedupeReport, DroppedTitle, MatchReason};
use crate::domain::ports::SimilarityMatcher;

/// Order-preserving deduplication of titles. The first title of each group of
/// similar titles is kept; later ones are recorded as dropped.
pub struct Deduplicator<M: SimilarityMatcher> {
    matcher: M,
    report: DedupeReport,
}

impl<M: SimilarityMatcher> Deduplicator<M> {
    pub fn new(matcher: M) -> Self {
        Self {
            matcher,
            report: DedupeReport::default(),
        }
    }

    /// Index of the first kept title `candidate` is similar to.
    pub fn find_similar(&self, candidate: &str) -> Option<usize> {
        self.find_duplicate(candidate).map(|(index, _)| index)
    }

    // blank titles are contained in every string, so they never act as a pivot
    fn find_duplicate(&self, candidate: &str) -> Option<(usize, MatchReason)> {
        self.report
            .kept
            .iter()
            .enumerate()
            .filter(|(_, kept)| !kept.trim().is_empty())
            .find_map(|(index, kept)| {
                let reason = self.matcher.explain(kept, candidate);
                reason.is_match().then_some((index, reason))
            })
    }

    /// Keeps `title` unless it duplicates an already kept one. Blank titles
    /// are always kept without comparison.
    /// Returns true when the title was kept.
    pub fn insert(&mut self, title: &str) -> bool {
        if title.trim().is_empty() {
            self.report.kept.push(title.to_string());
            return true;
        }

        match self.find_duplicate(title) {
            Some((index, reason)) => {
                let duplicate_of = self.report.kept[index].clone();
                tracing::debug!("Dropping '{}' as duplicate of '{}'", title, duplicate_of);
                self.report.dropped.push(DroppedTitle {
                    title: title.to_string(),
                    duplicate_of,
                    reason,
                });
                false
            }
            None => {
                self.report.kept.push(title.to_string());
                true
            }
        }
    }

    pub fn kept(&self) -> &[String] {
        &self.report.kept
    }

    pub fn into_report(self) -> DedupeReport {
        self.report
    }
}

/// Deduplicates `titles` with the default thresholds.
pub fn dedupe_titles<S: AsRef<str>>(titles: &[S]) -> Vec<String> {
    let mut deduplicator = Deduplicator::new(TitleMatcher::default());
    for title in titles {
        deduplicator.insert(title.as_ref());
    }
    deduplicator.into_report().kept
}
