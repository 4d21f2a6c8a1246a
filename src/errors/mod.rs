//! Error handling module for the Sharek booking core.
//!
//! Provides a centralized error type with stable error codes and localized user messages.

use serde::{Deserialize, Serialize};

use crate::models::Language;

/// Error codes as constants to avoid stringly-typed errors.
pub mod codes {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Referenced record or reference data does not exist
    NotFound(String),
    /// Input rejected by a client-side check, already in the user's language
    Validation(String),
    /// Storage backend failure
    Storage(String),
    /// Persisted collection could not be encoded or decoded
    Serialization(String),
}

impl AppError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => codes::NOT_FOUND,
            AppError::Validation(_) => codes::VALIDATION_ERROR,
            AppError::Storage(_) => codes::STORAGE_ERROR,
            AppError::Serialization(_) => codes::SERIALIZATION_ERROR,
        }
    }

    /// Get the error message.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Storage(msg) => msg.clone(),
            AppError::Serialization(msg) => msg.clone(),
        }
    }

    /// Message shown to the user in a blocking alert.
    ///
    /// Validation messages are built in the caller's language and pass through;
    /// everything else collapses into a generic "try again" text so storage
    /// details never reach the UI.
    pub fn user_message(&self, lang: Language) -> String {
        match (self, lang) {
            (AppError::Validation(msg), _) => msg.clone(),
            (_, Language::En) => "Failed to book appointment. Please try again.".to_string(),
            (_, Language::Ar) => "فشل حجز الموعد. يرجى المحاولة مرة أخرى.".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for AppError {}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Storage error: {:?}", err);
        AppError::Storage(format!("Storage error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON error: {:?}", err);
        AppError::Serialization(format!("JSON error: {}", err))
    }
}

/// Serializable error payload, e.g. for an alert dialog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl ErrorDetails {
    pub fn new(error: &AppError, lang: Language) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.user_message(lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = AppError::NotFound("Appointment apt-1 not found".to_string());
        assert_eq!(err.to_string(), "NOT_FOUND: Appointment apt-1 not found");
    }

    #[test]
    fn test_user_message_hides_storage_details() {
        let err = AppError::Storage("Storage error: disk I/O error".to_string());
        let details = ErrorDetails::new(&err, Language::En);
        assert_eq!(details.code, codes::STORAGE_ERROR);
        assert!(!details.message.contains("disk"));

        let validation = AppError::Validation("يرجى اختيار الوقت".to_string());
        assert_eq!(validation.user_message(Language::Ar), "يرجى اختيار الوقت");

        let arabic = ErrorDetails::new(&err, Language::Ar);
        assert_eq!(arabic.message, "فشل حجز الموعد. يرجى المحاولة مرة أخرى.");
    }
}
