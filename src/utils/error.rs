use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Column '{column}' not found in CSV header")]
    MissingColumnError { column: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MatchError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MatchError::ConfigValidationError { .. }
            | MatchError::InvalidConfigValueError { .. }
            | MatchError::TomlError(_) => ErrorSeverity::High,
            MatchError::MissingColumnError { .. } | MatchError::CsvError(_) => ErrorSeverity::High,
            MatchError::SerializationError(_) => ErrorSeverity::Medium,
            MatchError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MatchError::IoError(_) => "Check that the file exists and is readable/writable",
            MatchError::CsvError(_) => "Make sure the input is a valid CSV file with a header row",
            MatchError::SerializationError(_) => "Check the report output path and retry",
            MatchError::TomlError(_) => "Make sure the config file is valid TOML",
            MatchError::ConfigValidationError { .. } | MatchError::InvalidConfigValueError { .. } => {
                "Fix the highlighted config value; ratios must be in (0, 1]"
            }
            MatchError::MissingColumnError { .. } => {
                "Pass --column with a header name that exists in the CSV"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MatchError::IoError(e) => format!("Could not access file: {}", e),
            MatchError::MissingColumnError { column } => {
                format!("The CSV has no '{}' column", column)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;
