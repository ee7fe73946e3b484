//! Centralized error handling.
//!
//! Provides a unified error type for the directory service. Business
//! failures are recoverable and can be folded into a `StatusResponse`;
//! storage failures propagate to the caller unchanged.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Registration
    #[error("A user with this email or username already exists")]
    DuplicateUser,

    #[error("Invalid profession: {0}")]
    InvalidProfession(String),

    // Credentials
    #[error("User not found")]
    UserNotFound,

    #[error("Incorrect password")]
    InvalidPassword,

    // Profiles
    #[error("Professional profile not found")]
    ProfileNotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            AppError::DuplicateUser => "DUPLICATE_USER",
            AppError::InvalidProfession(_) => "INVALID_PROFESSION",
            AppError::UserNotFound => "USER_NOT_FOUND",
            AppError::InvalidPassword => "INVALID_PASSWORD",
            AppError::ProfileNotFound => "PROFILE_NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller can act on this error (as opposed to a storage
    /// or internal fault).
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, AppError::Database(_) | AppError::Internal(_))
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn invalid_profession(name: impl Into<String>) -> Self {
        AppError::InvalidProfession(name.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_errors_are_recoverable() {
        assert!(AppError::DuplicateUser.is_recoverable());
        assert!(AppError::invalid_profession("Astronaut").is_recoverable());
        assert!(AppError::UserNotFound.is_recoverable());
        assert!(AppError::InvalidPassword.is_recoverable());
        assert!(AppError::ProfileNotFound.is_recoverable());
        assert!(AppError::validation("bad email").is_recoverable());
    }

    #[test]
    fn test_storage_errors_are_not_recoverable() {
        let db = AppError::from(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(!db.is_recoverable());
        assert_eq!(db.code(), "DATABASE_ERROR");
        assert!(!AppError::internal("boom").is_recoverable());
    }

    #[test]
    fn test_user_message_hides_details() {
        let db = AppError::from(sea_orm::DbErr::Custom("password=hunter2".into()));
        assert!(!db.user_message().contains("hunter2"));
        assert_eq!(
            AppError::invalid_profession("Astronaut").user_message(),
            "Invalid profession: Astronaut"
        );
    }
}
