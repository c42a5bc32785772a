pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::csv_titles::{dedupe_csv, write_report_json};
pub use crate::config::toml_config::MatcherConfig;
pub use crate::core::dedupe::{dedupe_titles, Deduplicator};
pub use crate::core::levenshtein::levenshtein_distance;
pub use crate::core::matcher::{explain, is_similar, normalize, TitleMatcher};
pub use crate::domain::model::{
    DedupeReport, DroppedTitle, MatchReason, Thresholds, EDIT_DISTANCE_THRESHOLD, MIN_WORD_COUNT,
    MIN_WORD_LEN, WORD_OVERLAP_THRESHOLD,
};
pub use crate::domain::ports::SimilarityMatcher;
pub use crate::utils::error::{MatchError, Result};
