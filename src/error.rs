//! Custom error types for ledgerlens
//!
//! The numeric core never fails: unparseable amounts and empty inputs degrade
//! to zero. Errors only come from the edges of the crate (configuration,
//! decoding API payloads, exporting reports).

use thiserror::Error;

/// The main error type for ledgerlens operations
#[derive(Error, Debug)]
pub enum LensError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for settings and models
    #[error("Validation error: {0}")]
    Validation(String),

    /// A failure body returned by the remote API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl LensError {
    /// Create an API error from a status code and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Check if this is an API error
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// HTTP status carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for LensError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for LensError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for ledgerlens operations
pub type LensResult<T> = Result<T, LensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LensError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_api_error() {
        let err = LensError::api(404, "User not found");
        assert_eq!(err.to_string(), "API error (404): User not found");
        assert!(err.is_api());
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let lens_err: LensError = io_err.into();
        assert!(matches!(lens_err, LensError::Io(_)));
        assert_eq!(lens_err.status(), None);
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let lens_err: LensError = json_err.into();
        assert!(matches!(lens_err, LensError::Json(_)));
    }
}
