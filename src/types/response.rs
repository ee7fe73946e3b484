use serde::Serialize;

use crate::errors::{AppError, AppResult};

/// Outcome of a write or credential operation: a success flag paired
/// with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    /// Fold recoverable errors into a failed status.
    ///
    /// Storage and internal faults are returned as `Err` untouched so
    /// the caller still sees them.
    pub fn settle(result: AppResult<StatusResponse>) -> AppResult<StatusResponse> {
        match result {
            Ok(status) => Ok(status),
            Err(e) if e.is_recoverable() => Ok(Self::from(e)),
            Err(e) => Err(e),
        }
    }
}

impl From<AppError> for StatusResponse {
    fn from(error: AppError) -> Self {
        Self::failure(error.user_message())
    }
}
