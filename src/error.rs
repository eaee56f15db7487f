use thiserror::Error;

/// Validation failures for a field value against its configured options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("This value is required")]
    Required,
    #[error("Value {value:?} does not match pattern {pattern:?}")]
    PatternMismatch { value: String, pattern: String },
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Failures while loading a locale's translation table.
#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid translation file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type FieldResult<T> = Result<T, FieldError>;
