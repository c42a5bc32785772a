pub mod dedupe;
pub mod levenshtein;
pub mod matcher;

pub use crate::domain::model::{DedupeReport, MatchReason, Thresholds};
pub use crate::domain::ports::SimilarityMatcher;
pub use crate::utils::error::Result;
