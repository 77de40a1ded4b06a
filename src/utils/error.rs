use thiserror::Error;

/// Message shown to the user for any failure while loading the skip list.
pub const LOAD_FAILURE_MESSAGE: &str = "Failed to load skip options. Please try again.";

#[derive(Error, Debug)]
pub enum SkipError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("HTTP error! status: {code}")]
    HttpStatusError { code: u16 },

    #[error("Response decode error: {message}")]
    DecodeError { message: String },

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Cannot {event} while the page is {state}")]
    InvalidTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("No skip with id {id} in the current list")]
    UnknownSkip { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Io,
    State,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SkipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SkipError::NetworkError(_) | SkipError::HttpStatusError { .. } => ErrorCategory::Network,
            SkipError::DecodeError { .. }
            | SkipError::CsvError(_)
            | SkipError::SerializationError(_) => ErrorCategory::Data,
            SkipError::ConfigError { .. } | SkipError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            SkipError::IoError(_) => ErrorCategory::Io,
            SkipError::InvalidTransition { .. } | SkipError::UnknownSkip { .. } => {
                ErrorCategory::State
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SkipError::UnknownSkip { .. } => ErrorSeverity::Low,
            SkipError::NetworkError(_)
            | SkipError::HttpStatusError { .. }
            | SkipError::DecodeError { .. } => ErrorSeverity::Medium,
            SkipError::ConfigError { .. }
            | SkipError::InvalidConfigValueError { .. }
            | SkipError::CsvError(_)
            | SkipError::SerializationError(_)
            | SkipError::InvalidTransition { .. } => ErrorSeverity::High,
            SkipError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    /// True for the three ways a skip list fetch can fail.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SkipError::NetworkError(_)
                | SkipError::HttpStatusError { .. }
                | SkipError::DecodeError { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        if self.is_load_failure() {
            return LOAD_FAILURE_MESSAGE.to_string();
        }
        match self {
            SkipError::ConfigError { message } => format!("Invalid configuration: {}", message),
            SkipError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            SkipError::UnknownSkip { id } => format!("Skip {} is not available here", id),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network | ErrorCategory::Data if self.is_load_failure() => {
                "Run the command again to reload the skip options"
            }
            ErrorCategory::Configuration => "Check the command-line flags and the TOML config file",
            ErrorCategory::Io => "Check that the output path is writable",
            ErrorCategory::State => "Pick one of the skip ids listed on the page",
            _ => "Re-run with --verbose for more detail",
        }
    }
}

pub type Result<T> = std::result::Result<T, SkipError>;
