use serde::{Deserialize, Serialize};

/// Overlap ratio a word-overlap comparison must strictly exceed.
pub const WORD_OVERLAP_THRESHOLD: f64 = 0.7;
/// Distance ratio an edit-distance comparison must stay strictly below.
pub const EDIT_DISTANCE_THRESHOLD: f64 = 0.3;
/// Words of this many chars or fewer never count as matching words.
pub const MIN_WORD_LEN: usize = 3;
/// Both titles need at least this many words for the word-overlap step.
pub const MIN_WORD_COUNT: usize = 3;

/// Tuning knobs of the matcher. `Default` is the named constants above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub word_overlap_ratio: f64,
    pub edit_distance_ratio: f64,
    pub min_word_len: usize,
    pub min_word_count: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            word_overlap_ratio: WORD_OVERLAP_THRESHOLD,
            edit_distance_ratio: EDIT_DISTANCE_THRESHOLD,
            min_word_len: MIN_WORD_LEN,
            min_word_count: MIN_WORD_COUNT,
        }
    }
}

/// The step that settled a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum MatchReason {
    Exact,
    Contained,
    WordOverlap {
        ratio: f64,
        matched: bool,
    },
    EditDistance {
        distance: usize,
        ratio: f64,
        matched: bool,
    },
}

impl MatchReason {
    pub fn is_match(&self) -> bool {
        match self {
            MatchReason::Exact | MatchReason::Contained => true,
            MatchReason::WordOverlap { matched, .. } | MatchReason::EditDistance { matched, .. } => {
                *matched
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroppedTitle {
    pub title: String,
    pub duplicate_of: String,
    pub reason: MatchReason,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DedupeReport {
    pub kept: Vec<String>,
    pub dropped: Vec<DroppedTitle>,
}

impl DedupeReport {
    pub fn total(&self) -> usize {
        self.kept.len() + self.dropped.len()
    }
}
