use crate::core::matcher::TitleMatcher;
use crate::domain::model::Thresholds;
use crate::utils::error::{MatchError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherConfig {
    pub thresholds: Thresholds,
    pub dedupe: DedupeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DedupeConfig {
    pub column: String,
    pub report_path: Option<String>,
}

impl Default for DedupeConfig {
    fn default() -> Self {
        Self {
            column: "title".to_string(),
            report_path: None,
        }
    }
}

impl MatcherConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OVERLAP_RATIO})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MatchError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_ratio(
            "thresholds.word_overlap_ratio",
            self.thresholds.word_overlap_ratio,
        )?;
        validation::validate_ratio(
            "thresholds.edit_distance_ratio",
            self.thresholds.edit_distance_ratio,
        )?;
        validation::validate_positive_number(
            "thresholds.min_word_count",
            self.thresholds.min_word_count,
            1,
        )?;
        validation::validate_non_empty_string("dedupe.column", &self.dedupe.column)?;

        if let Some(path) = &self.dedupe.report_path {
            validation::validate_non_empty_string("dedupe.report_path", path)?;
        }

        Ok(())
    }

    pub fn matcher(&self) -> TitleMatcher {
        TitleMatcher::new(self.thresholds)
    }
}

impl Validate for MatcherConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = MatcherConfig::from_toml_str("").unwrap();
        assert_eq!(config, MatcherConfig::default());
        assert_eq!(config.thresholds.word_overlap_ratio, 0.7);
        assert_eq!(config.dedupe.column, "title");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_thresholds() {
        let toml_content = r#"
[thresholds]
word_overlap_ratio = 0.6

[dedupe]
column = "offer_title"
"#;

        let config = MatcherConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.thresholds.word_overlap_ratio, 0.6);
        assert_eq!(config.thresholds.edit_distance_ratio, 0.3);
        assert_eq!(config.thresholds.min_word_count, 3);
        assert_eq!(config.dedupe.column, "offer_title");
        assert!(config.matcher().is_similar("Amex Gold Card", "The Amex Gold"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TITLE_MATCH_TEST_EDIT_RATIO", "0.15");

        let toml_content = r#"
[thresholds]
edit_distance_ratio = ${TITLE_MATCH_TEST_EDIT_RATIO}
"#;

        let config = MatcherConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.thresholds.edit_distance_ratio, 0.15);

        std::env::remove_var("TITLE_MATCH_TEST_EDIT_RATIO");
    }

    #[test]
    fn test_invalid_toml() {
        let result = MatcherConfig::from_toml_str("[thresholds\nword_overlap_ratio = ");
        assert!(matches!(result, Err(MatchError::TomlError(_))));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let misspelled = MatcherConfig::from_toml_str("[thresholds]\nword_overlap = 0.6\n");
        assert!(matches!(misspelled, Err(MatchError::TomlError(_))));

        let unknown_table = MatcherConfig::from_toml_str("[matching]\ncolumn = \"title\"\n");
        assert!(matches!(unknown_table, Err(MatchError::TomlError(_))));

        let unknown_dedupe_key = MatcherConfig::from_toml_str("[dedupe]\nreport = \"r.json\"\n");
        assert!(unknown_dedupe_key.is_err());
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[thresholds]
word_overlap_ratio = 1.5
"#;
        let config = MatcherConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let config = MatcherConfig::from_toml_str("[thresholds]\nmin_word_count = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = MatcherConfig::from_toml_str("[dedupe]\ncolumn = \"  \"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[dedupe]\ncolumn = \"card_name\"\nreport_path = \"report.json\"\n")
            .unwrap();

        let config = MatcherConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.dedupe.column, "card_name");
        assert_eq!(config.dedupe.report_path.as_deref(), Some("report.json"));
    }
}
