use thiserror::Error;

#[derive(Error, Debug)]
pub enum TourError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown lesson: {name}")]
    UnknownLesson { name: String },

    #[error("Null reference: {what} was absent")]
    NullReference { what: String },

    #[error("Stack exhausted at depth {depth} while computing fibonacci({requested})")]
    StackExhausted { depth: usize, requested: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Runtime,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TourError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TourError::ConfigValidationError { .. } | TourError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            TourError::UnknownLesson { .. } | TourError::NullReference { .. } => {
                ErrorCategory::Input
            }
            TourError::StackExhausted { .. } => ErrorCategory::Runtime,
            TourError::IoError(_) | TourError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TourError::NullReference { .. } => ErrorSeverity::Medium,
            TourError::ConfigValidationError { .. }
            | TourError::InvalidConfigValueError { .. }
            | TourError::UnknownLesson { .. }
            | TourError::StackExhausted { .. } => ErrorSeverity::High,
            TourError::IoError(_) | TourError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TourError::IoError(_) => "Check that the file exists and is readable".to_string(),
            TourError::SerializationError(_) => {
                "Retry without --json to get plain console output".to_string()
            }
            TourError::ConfigValidationError { .. } => {
                "Make sure the config file is valid TOML".to_string()
            }
            TourError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the config file", field)
            }
            TourError::UnknownLesson { .. } => {
                "Run `fundamentals list` to see the available lessons".to_string()
            }
            TourError::NullReference { what } => {
                format!("Provide a value for {} or handle the absent case", what)
            }
            TourError::StackExhausted { .. } => {
                format!(
                "Use the iterative fibonacci, or raise recursion.frame_budget (max {})",
                crate::app::lessons::recursion::MAX_FRAME_BUDGET
            )
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TourError::IoError(e) => format!("Could not read or write a file: {}", e),
            TourError::StackExhausted { requested, .. } => format!(
                "fibonacci({}) recursed deeper than the stack allows",
                requested
            ),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TourError>;
