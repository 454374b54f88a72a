//! Success/error envelope shared by every resource call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error payload returned by the API on a non-success status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UberError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Machine-readable error code.
    #[serde(default)]
    pub code: String,
}

impl fmt::Display for UberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} ({})", self.message, self.code)
        }
    }
}

impl std::error::Error for UberError {}

/// Response envelope for a resource call: a typed payload on success, a
/// structured remote error on a non-success status. Exactly one side is
/// present.
#[derive(Debug, Clone)]
pub struct UberResponse<T> {
    /// Decoded payload when the call succeeded.
    pub data: Option<T>,
    /// Remote error when the API reported a non-success status.
    pub error: Option<UberError>,
}

impl<T> UberResponse<T> {
    pub(crate) fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub(crate) fn failure(error: UberError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// Whether the underlying call reported a success status.
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    /// Consume the envelope, yielding the payload or the remote error.
    pub fn into_result(self) -> std::result::Result<T, UberError> {
        match (self.data, self.error) {
            (Some(data), _) => Ok(data),
            (None, Some(error)) => Err(error),
            (None, None) => Err(UberError {
                message: "empty response envelope".to_string(),
                code: String::new(),
            }),
        }
    }
}
