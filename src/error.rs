//! Stable error taxonomy for registry operations.
//!
//! Every fallible operation in this crate returns [`RegistryError`]. Callers
//! branch on the machine-readable [`ErrorCode`] instead of parsing message
//! text; `details` carries the category-specific context.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Stable failure categories.
///
/// The string form of each variant never changes across versions, so callers
/// may persist and compare codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// A blockchain JSON-RPC call failed.
    #[serde(rename = "RPC_ERROR")]
    Rpc,
    /// An HTTP API call failed.
    #[serde(rename = "API_ERROR")]
    Api,
    /// Local input validation failed before any remote call was made.
    #[serde(rename = "VALIDATION_ERROR")]
    Validation,
}

impl ErrorCode {
    /// The stable string tag for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::Rpc => "RPC_ERROR",
            ErrorCode::Api => "API_ERROR",
            ErrorCode::Validation => "VALIDATION_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific context attached to a [`RegistryError`].
///
/// The shape is fixed for API and validation failures; RPC failures carry
/// whatever context the call site supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorDetails {
    /// HTTP status and raw response body of a failed API call.
    Api { status: u16, body: Value },
    /// Names of the input fields that failed validation.
    Validation { fields: Vec<String> },
    /// Caller-supplied context for a failed RPC call.
    Rpc(Value),
}

/// A failure raised by a registry SDK operation.
///
/// Construction goes through [`rpc_error`], [`api_error`], or
/// [`validation_error`]. The code is derived from the details payload, so an
/// instance can never carry a mismatched code/details pair.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct RegistryError {
    message: String,
    details: ErrorDetails,
}

impl RegistryError {
    /// The stable failure category.
    pub fn code(&self) -> ErrorCode {
        match self.details {
            ErrorDetails::Rpc(_) => ErrorCode::Rpc,
            ErrorDetails::Api { .. } => ErrorCode::Api,
            ErrorDetails::Validation { .. } => ErrorCode::Validation,
        }
    }

    /// The human-readable description.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The category-specific context payload.
    pub fn details(&self) -> &ErrorDetails {
        &self.details
    }

    /// The HTTP status of a failed API call, if this is an API error.
    pub fn status(&self) -> Option<u16> {
        match &self.details {
            ErrorDetails::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The offending field names, if this is a validation error.
    pub fn fields(&self) -> Option<&[String]> {
        match &self.details {
            ErrorDetails::Validation { fields } => Some(fields),
            _ => None,
        }
    }

    /// Whether retrying the failed operation could plausibly succeed.
    ///
    /// RPC failures are transient by assumption, validation failures never
    /// are, and API failures depend on the status class. Status 0 marks a
    /// request that got no HTTP response at all.
    pub fn is_retryable(&self) -> bool {
        match &self.details {
            ErrorDetails::Rpc(_) => true,
            ErrorDetails::Validation { .. } => false,
            ErrorDetails::Api { status, .. } => *status == 0 || *status == 429 || *status >= 500,
        }
    }
}

/// Build an [`ErrorCode::Rpc`] failure. `details` is opaque, caller-supplied
/// context and is stored as given.
pub fn rpc_error(message: impl Into<String>, details: Value) -> RegistryError {
    RegistryError {
        message: message.into(),
        details: ErrorDetails::Rpc(details),
    }
}

/// Build an [`ErrorCode::Api`] failure carrying the HTTP status and raw
/// response body.
pub fn api_error(message: impl Into<String>, status: u16, body: Value) -> RegistryError {
    RegistryError {
        message: message.into(),
        details: ErrorDetails::Api { status, body },
    }
}

/// Build an [`ErrorCode::Validation`] failure naming the offending input
/// fields.
pub fn validation_error<I, S>(message: impl Into<String>, fields: I) -> RegistryError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    RegistryError {
        message: message.into(),
        details: ErrorDetails::Validation {
            fields: fields.into_iter().map(Into::into).collect(),
        },
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
